//! polywars frame-loop host.
//!
//! Wires the headless simulation to its collaborators: input events
//! arrive over a channel from the windowing layer, snapshots are
//! published through a shared slot for the render layer.

pub mod game_loop;
pub mod state;

pub use polywars_core as core;
