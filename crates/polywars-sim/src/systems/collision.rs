//! Collision system: pairwise circle-overlap resolution, scoring, and
//! burst spawning.
//!
//! No spatial partitioning — each pass is O(n·m) over two tag buckets,
//! acceptable at arcade entity counts.

use polywars_core::config::GameConfig;
use polywars_core::constants::{SPECIAL_HIT_ENEMY_SCORE, SPECIAL_HIT_SMALL_ENEMY_SCORE};
use polywars_core::entity::{EntityId, Tag};
use polywars_core::types::Vec2;

use crate::entity::Entity;
use crate::manager::EntityManager;
use crate::spawn;

/// Run the collision passes in fixed category order; within a category,
/// pairs follow live-list iteration order. Destruction is flag-based, so
/// an entity flagged in an earlier pass still participates in later pairs
/// until the next flush.
pub fn run(manager: &mut EntityManager, config: &GameConfig, score: &mut u32) {
    let bullets = ids(manager, Tag::Bullet);
    let enemies = ids(manager, Tag::Enemy);
    let small_enemies = ids(manager, Tag::SmallEnemy);
    let players = ids(manager, Tag::Player);
    let specials = ids(manager, Tag::SpecialBullet);

    // 1. Bullets vs enemies: score, burst into small enemies, both die.
    for &bullet in &bullets {
        for &enemy in &enemies {
            if overlaps(manager, bullet, enemy) {
                *score += score_value(manager, enemy);
                spawn::spawn_small_enemies(manager, enemy);
                manager.destroy(bullet);
                manager.destroy(enemy);
            }
        }
    }

    // 2. Bullets vs small enemies: score, both die, no further burst.
    for &bullet in &bullets {
        for &small in &small_enemies {
            if overlaps(manager, bullet, small) {
                *score += score_value(manager, small);
                manager.destroy(bullet);
                manager.destroy(small);
            }
        }
    }

    // 3. Player vs enemies: purely positional reset to the window center;
    // the enemy dies, the player survives, no score change.
    let center = Vec2::new(
        config.window.width as f32 / 2.0,
        config.window.height as f32 / 2.0,
    );
    for &player in &players {
        for &enemy in &enemies {
            if overlaps(manager, player, enemy) {
                if let Some(transform) =
                    manager.get_mut(player).and_then(|p| p.transform.as_mut())
                {
                    transform.pos = center;
                }
                manager.destroy(enemy);
            }
        }
    }

    // 4. Special bullets vs enemies: flat score, burst, the bullet
    // persists and may hit again.
    for &special in &specials {
        for &enemy in &enemies {
            if overlaps(manager, special, enemy) {
                *score += SPECIAL_HIT_ENEMY_SCORE;
                spawn::spawn_small_enemies(manager, enemy);
                manager.destroy(enemy);
            }
        }
    }

    // 5. Special bullets vs small enemies: flat score, victim dies only.
    for &special in &specials {
        for &small in &small_enemies {
            if overlaps(manager, special, small) {
                *score += SPECIAL_HIT_SMALL_ENEMY_SCORE;
                manager.destroy(small);
            }
        }
    }
}

fn ids(manager: &EntityManager, tag: Tag) -> Vec<EntityId> {
    manager.iter_tagged(tag).map(Entity::id).collect()
}

fn score_value(manager: &EntityManager, id: EntityId) -> u32 {
    manager
        .get(id)
        .and_then(|e| e.score)
        .map(|s| s.value)
        .unwrap_or(0)
}

/// Circle-overlap hit test on the authoritative hit radii.
fn overlaps(manager: &EntityManager, a: EntityId, b: EntityId) -> bool {
    let (Some(a), Some(b)) = (manager.get(a), manager.get(b)) else {
        return false;
    };
    let (Some(ta), Some(tb)) = (a.transform, b.transform) else {
        return false;
    };
    ta.pos.distance_to(tb.pos) < a.hitbox_radius() + b.hitbox_radius()
}
