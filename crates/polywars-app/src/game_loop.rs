//! Game loop thread — runs the engine at the configured frame rate and
//! publishes snapshots.
//!
//! The engine is created inside the thread because it's cleaner for
//! ownership. Input events arrive via an `mpsc` channel; the latest
//! snapshot lands in shared state for synchronous polling.

use std::sync::mpsc;
use std::sync::Mutex;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use polywars_core::config::GameConfig;
use polywars_core::constants::DEFAULT_FRAME_RATE;
use polywars_core::state::FrameSnapshot;
use polywars_sim::engine::GameEngine;

use crate::state::{GameLoopCommand, SharedSnapshot};

/// Spawn the game loop in a new thread.
///
/// Returns the command sender for the windowing layer and the thread
/// handle for a clean join at shutdown.
pub fn spawn_game_loop(
    config: GameConfig,
    seed: u64,
    latest_snapshot: SharedSnapshot,
) -> (mpsc::Sender<GameLoopCommand>, JoinHandle<()>) {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("polywars-game-loop".into())
        .spawn(move || {
            run_game_loop(config, seed, &cmd_rx, &latest_snapshot);
        })
        .expect("failed to spawn game loop thread");

    (cmd_tx, handle)
}

/// The frame loop. Runs until the window closes, a Shutdown command
/// arrives, or the channel disconnects.
fn run_game_loop(
    config: GameConfig,
    seed: u64,
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<FrameSnapshot>>,
) {
    let frame_rate = if config.window.frame_rate > 0 {
        config.window.frame_rate
    } else {
        DEFAULT_FRAME_RATE
    };
    let tick_duration = Duration::from_nanos(1_000_000_000 / u64::from(frame_rate));

    let mut engine = GameEngine::new(config, seed);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending input events
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Input(event)) => engine.queue_event(event),
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one frame (the engine handles pause semantics)
        let snapshot = engine.tick();
        let closed = !snapshot.running;

        // 3. Publish the snapshot for the render collaborator
        if let Ok(mut slot) = latest_snapshot.lock() {
            *slot = Some(snapshot);
        }

        // 4. A close event completes its frame; then the loop exits
        if closed {
            log::info!("window closed, final score {}", engine.score());
            return;
        }

        // 5. Sleep the remainder of the fixed time slice
        next_tick_time += tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick_duration * 2 {
            // Too far behind — reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use polywars_core::commands::{InputEvent, Key};

    fn fast_config() -> GameConfig {
        let mut config = GameConfig::default();
        config.window.frame_rate = 240;
        config
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Input(InputEvent::KeyPressed { key: Key::W }))
            .unwrap();
        tx.send(GameLoopCommand::Input(InputEvent::WindowClosed))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Input(InputEvent::KeyPressed { key: Key::W })
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::Input(InputEvent::WindowClosed)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_shutdown_command_stops_the_loop() {
        let latest: SharedSnapshot = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(fast_config(), 1, Arc::clone(&latest));

        tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_window_close_finishes_the_frame_then_exits() {
        let latest: SharedSnapshot = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(fast_config(), 1, Arc::clone(&latest));

        // Pause and close arrive in one batch: the pause is applied, the
        // close frame still publishes, then the thread exits.
        tx.send(GameLoopCommand::Input(InputEvent::KeyPressed { key: Key::P }))
            .unwrap();
        tx.send(GameLoopCommand::Input(InputEvent::WindowClosed))
            .unwrap();
        handle.join().unwrap();

        let snapshot = latest.lock().unwrap().clone().unwrap();
        assert!(!snapshot.running);
        assert!(snapshot.paused);
    }

    #[test]
    fn test_dropping_the_sender_stops_the_loop() {
        let latest: SharedSnapshot = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(fast_config(), 1, Arc::clone(&latest));

        drop(tx);
        handle.join().unwrap();
    }
}
