//! Input system: applies queued window events to the player's intent
//! flags and the engine's pause/running/pointer state.
//!
//! Flags reflect held state, not events: press sets, release clears.

use polywars_core::commands::{InputEvent, Key, MouseButton};
use polywars_core::entity::EntityId;
use polywars_core::types::Vec2;

use crate::manager::EntityManager;

/// Apply one frame's events in arrival order. While paused, the pause
/// toggle and window-close are the only events honored.
pub fn run(
    manager: &mut EntityManager,
    player: EntityId,
    events: &[InputEvent],
    paused: &mut bool,
    running: &mut bool,
    pointer: &mut Vec2,
) {
    for &event in events {
        match event {
            InputEvent::WindowClosed => *running = false,
            InputEvent::KeyPressed { key: Key::P } => *paused = !*paused,
            _ if *paused => {}
            InputEvent::KeyPressed { key } => set_key(manager, player, key, true),
            InputEvent::KeyReleased { key } => set_key(manager, player, key, false),
            InputEvent::MousePressed {
                button: MouseButton::Left,
                x,
                y,
            } => {
                *pointer = Vec2::new(x, y);
                set_shoot(manager, player, true);
            }
            InputEvent::MouseReleased {
                button: MouseButton::Left,
            } => set_shoot(manager, player, false),
            InputEvent::MousePressed { .. } | InputEvent::MouseReleased { .. } => {}
            InputEvent::PointerMoved { x, y } => *pointer = Vec2::new(x, y),
        }
    }
}

fn set_key(manager: &mut EntityManager, player: EntityId, key: Key, held: bool) {
    let Some(input) = manager.get_mut(player).and_then(|p| p.input.as_mut()) else {
        return;
    };
    match key {
        Key::Up | Key::W => input.up = held,
        Key::Down | Key::S => input.down = held,
        Key::Left | Key::A => input.left = held,
        Key::Right | Key::D => input.right = held,
        Key::Space => input.special = held,
        // Pause is engine state, handled by the caller arm above.
        Key::P => {}
    }
}

fn set_shoot(manager: &mut EntityManager, player: EntityId, held: bool) {
    if let Some(input) = manager.get_mut(player).and_then(|p| p.input.as_mut()) {
        input.shoot = held;
    }
}
