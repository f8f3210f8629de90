//! Game engine — the per-frame simulation pipeline.
//!
//! `GameEngine` owns the entity registry, processes queued input events,
//! runs the systems in a fixed order, and produces `FrameSnapshot`s.
//! Completely headless (windowing, rendering, and input polling live in
//! collaborators), enabling deterministic testing: the same seed and
//! event sequence reproduce the same snapshot stream.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use polywars_core::commands::InputEvent;
use polywars_core::config::GameConfig;
use polywars_core::entity::EntityId;
use polywars_core::state::FrameSnapshot;
use polywars_core::types::Vec2;

use crate::manager::EntityManager;
use crate::spawn;
use crate::systems;

pub struct GameEngine {
    entities: EntityManager,
    config: GameConfig,
    rng: ChaCha8Rng,
    event_queue: VecDeque<InputEvent>,
    /// Distinguished handle to the player. A convenience alias for the
    /// tagged lookup — the player entity always also lives in the registry.
    player: EntityId,
    /// Last known pointer position, fed by pointer/mouse events.
    pointer: Vec2,
    frame: u64,
    score: u32,
    paused: bool,
    running: bool,
    last_bullet_frame: Option<u64>,
}

impl GameEngine {
    /// Create an engine with the player already spawned and published.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut entities = EntityManager::new();
        let player = spawn::spawn_player(&mut entities, &config);
        entities.flush();
        log::info!(
            "engine up: {}x{} window at {} fps, seed {seed}",
            config.window.width,
            config.window.height,
            config.window.frame_rate
        );

        Self {
            entities,
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            event_queue: VecDeque::new(),
            player,
            pointer: Vec2::ZERO,
            frame: 0,
            score: 0,
            paused: false,
            running: true,
            last_bullet_frame: None,
        }
    }

    /// Queue an input event for processing at the next frame boundary.
    pub fn queue_event(&mut self, event: InputEvent) {
        self.event_queue.push_back(event);
    }

    pub fn queue_events(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        self.event_queue.extend(events);
    }

    /// Advance the simulation by one frame and return the snapshot.
    ///
    /// While paused only the input pass runs (keeping the pause toggle and
    /// window-close responsive); nothing advances. A pause toggle takes
    /// effect at the next tick — the current frame always completes.
    pub fn tick(&mut self) -> FrameSnapshot {
        let events: Vec<InputEvent> = self.event_queue.drain(..).collect();

        if self.paused {
            systems::input::run(
                &mut self.entities,
                self.player,
                &events,
                &mut self.paused,
                &mut self.running,
                &mut self.pointer,
            );
        } else {
            // 1. Publish last frame's creations, purge the destroyed.
            self.entities.flush();
            // 2. Input application.
            systems::input::run(
                &mut self.entities,
                self.player,
                &events,
                &mut self.paused,
                &mut self.running,
                &mut self.pointer,
            );
            // 3. Movement and bounds handling.
            systems::movement::run(&mut self.entities, &self.config);
            // 4. Lifespan decay.
            systems::lifespan::run(&mut self.entities);
            // 5. Collision resolution, scoring, burst spawns.
            systems::collision::run(&mut self.entities, &self.config, &mut self.score);
            // 6. Periodic and input-triggered spawns, cooldown decay.
            systems::spawner::run(
                &mut self.entities,
                &mut self.rng,
                &self.config,
                self.frame,
                self.player,
                self.pointer,
                &mut self.last_bullet_frame,
            );
            self.frame += 1;
        }

        systems::snapshot::build(
            &self.entities,
            self.frame,
            self.score,
            self.paused,
            self.running,
        )
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Simulated frame count. Frozen while paused.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// False once a window-close event has been processed.
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn player_id(&self) -> EntityId {
        self.player
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only access to the entity registry.
    pub fn entities(&self) -> &EntityManager {
        &self.entities
    }
}
