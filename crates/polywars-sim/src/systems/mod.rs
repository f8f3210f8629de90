//! Per-frame systems, run by the engine in a fixed order.
//!
//! Systems are free functions over the entity registry plus whatever
//! engine state they need — they own no state themselves.

pub mod collision;
pub mod input;
pub mod lifespan;
pub mod movement;
pub mod snapshot;
pub mod spawner;
