//! State shared between the host and the game loop thread.

use std::sync::{Arc, Mutex};

use polywars_core::commands::InputEvent;
use polywars_core::state::FrameSnapshot;

/// Commands sent from the windowing collaborator to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// An input event to forward to the engine.
    Input(InputEvent),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared slot holding the most recent snapshot, updated by the game
/// loop thread after each tick and polled by the render collaborator.
pub type SharedSnapshot = Arc<Mutex<Option<FrameSnapshot>>>;
