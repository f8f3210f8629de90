//! Spawn triggers: periodic enemies, held-intent bullets, and the
//! special-ability ring. Runs after the main systems each frame; the
//! spawned entities become visible at the next flush.

use rand_chacha::ChaCha8Rng;

use polywars_core::config::GameConfig;
use polywars_core::constants::{BULLET_COOLDOWN_FRAMES, SPECIAL_COOLDOWN_FRAMES};
use polywars_core::entity::EntityId;
use polywars_core::types::Vec2;

use crate::manager::EntityManager;
use crate::spawn;

#[allow(clippy::too_many_arguments)]
pub fn run(
    manager: &mut EntityManager,
    rng: &mut ChaCha8Rng,
    config: &GameConfig,
    frame: u64,
    player: EntityId,
    pointer: Vec2,
    last_bullet_frame: &mut Option<u64>,
) {
    // Cooldown ticks down before the triggers, so a fresh trigger is
    // observable as the full cooldown value after the frame.
    if let Some(special) = manager.get_mut(player).and_then(|p| p.special.as_mut()) {
        if special.cooldown > 0 {
            special.cooldown -= 1;
        }
    }

    if config.enemy.spawn_interval > 0 && frame % config.enemy.spawn_interval == 0 {
        spawn::spawn_enemy(manager, rng, config);
    }

    let Some((pos, input, cooldown)) = manager.get(player).and_then(|p| {
        let transform = p.transform?;
        let input = p.input?;
        let cooldown = p.special?.cooldown;
        Some((transform.pos, input, cooldown))
    }) else {
        return;
    };

    // Bullets fire toward the last known pointer position, rate-limited.
    if input.shoot
        && last_bullet_frame.map_or(true, |last| frame - last >= BULLET_COOLDOWN_FRAMES)
    {
        spawn::spawn_bullet(manager, config, pos, pointer);
        *last_bullet_frame = Some(frame);
    }

    // Holding the special intent while cooling down is a no-op.
    if input.special && cooldown == 0 {
        spawn::spawn_special_ability(manager, player);
        if let Some(special) = manager.get_mut(player).and_then(|p| p.special.as_mut()) {
            special.cooldown = SPECIAL_COOLDOWN_FRAMES;
        }
    }
}
