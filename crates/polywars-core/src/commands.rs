//! Decoded input events delivered by the windowing collaborator.
//!
//! Events are queued and applied at the next frame boundary. The
//! simulation never polls the OS itself; it only sees these values.

use serde::{Deserialize, Serialize};

/// Keys the simulation reacts to. The windowing layer is responsible for
/// translating raw scancodes into these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
    Space,
    P,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
}

/// A discrete input event from the window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    KeyPressed { key: Key },
    KeyReleased { key: Key },
    MousePressed { button: MouseButton, x: f32, y: f32 },
    MouseReleased { button: MouseButton },
    /// Pointer position report. The simulation keeps only the latest.
    PointerMoved { x: f32, y: f32 },
    /// The window was closed; the frame loop exits after the current frame.
    WindowClosed,
}
