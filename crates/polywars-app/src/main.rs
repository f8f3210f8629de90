//! Headless demo host.
//!
//! Loads the config (path from argv, defaults on failure), runs the
//! simulation loop for a few seconds with the trigger held, and reports
//! the final score. A windowing front end would replace the scripted
//! events with real ones and draw from the shared snapshot.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use polywars_app::game_loop::spawn_game_loop;
use polywars_app::state::{GameLoopCommand, SharedSnapshot};
use polywars_core::commands::{InputEvent, MouseButton};
use polywars_core::config::GameConfig;

fn main() {
    env_logger::init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.json".to_string());
    let config = GameConfig::load_or_default(&config_path);

    let latest: SharedSnapshot = Arc::new(Mutex::new(None));
    let (commands, thread) = spawn_game_loop(config, 42, Arc::clone(&latest));

    // Hold the trigger toward a fixed point and let the game run briefly.
    let _ = commands.send(GameLoopCommand::Input(InputEvent::MousePressed {
        button: MouseButton::Left,
        x: 900.0,
        y: 200.0,
    }));
    std::thread::sleep(Duration::from_secs(5));
    let _ = commands.send(GameLoopCommand::Shutdown);
    if thread.join().is_err() {
        log::error!("game loop thread panicked");
    }

    if let Some(snapshot) = latest.lock().ok().and_then(|slot| slot.clone()) {
        println!(
            "score after {} frames: {} ({} entities live)",
            snapshot.frame,
            snapshot.score,
            snapshot.entities.len()
        );
    }
}
