//! Snapshot system: builds the renderer-facing `FrameSnapshot` from the
//! live entity set.
//!
//! Read-only — it never mutates the registry.

use polywars_core::constants::ALPHA_OPAQUE;
use polywars_core::entity::Tag;
use polywars_core::state::{EntityView, FrameSnapshot};

use crate::entity::Entity;
use crate::manager::EntityManager;

/// Build the complete visible state for one frame: every live entity with
/// a transform and a shape, in insertion order, plus score and flags.
pub fn build(
    manager: &EntityManager,
    frame: u64,
    score: u32,
    paused: bool,
    running: bool,
) -> FrameSnapshot {
    FrameSnapshot {
        frame,
        score,
        paused,
        running,
        entities: manager
            .iter()
            .filter(|e| e.is_alive())
            .filter_map(entity_view)
            .collect(),
    }
}

fn entity_view(entity: &Entity) -> Option<EntityView> {
    let transform = entity.transform?;
    let shape = entity.shape?;
    Some(EntityView {
        id: entity.id(),
        tag: entity.tag(),
        position: transform.pos,
        angle: transform.angle,
        radius: shape.radius,
        points: shape.points,
        fill: shape.fill,
        outline: shape.outline,
        outline_thickness: shape.outline_thickness,
        alpha: fade_alpha(entity),
    })
}

/// Lifespan-driven alpha: bullets, special bullets, and small enemies
/// fade out as their remaining frames run down. The player and enemies
/// stay opaque.
fn fade_alpha(entity: &Entity) -> u8 {
    if matches!(entity.tag(), Tag::Player | Tag::Enemy) {
        return ALPHA_OPAQUE;
    }
    match entity.lifespan {
        Some(lifespan) if lifespan.total > 0 && lifespan.remaining > 0 => {
            let ratio = lifespan.remaining as f32 / lifespan.total as f32;
            (f32::from(ALPHA_OPAQUE) * ratio) as u8
        }
        Some(_) => 0,
        None => ALPHA_OPAQUE,
    }
}
