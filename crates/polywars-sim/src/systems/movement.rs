//! Movement system: velocity integration and window-bounds handling.
//!
//! The player is edge-clamped by non-movement, enemies bounce, bullets
//! stop at the edge and wait for their lifespan. Every transform also
//! advances its rotation angle at a fixed rate.

use polywars_core::config::GameConfig;
use polywars_core::constants::ROTATION_DEGREES_PER_FRAME;
use polywars_core::entity::Tag;
use polywars_core::types::Vec2;

use crate::manager::EntityManager;

pub fn run(manager: &mut EntityManager, config: &GameConfig) {
    let width = config.window.width as f32;
    let height = config.window.height as f32;
    let speed = config.player.speed;

    for entity in manager.iter_mut() {
        let tag = entity.tag();
        let input = entity.input;
        let Some(shape) = entity.shape else { continue };
        let radius = shape.radius;
        let Some(transform) = entity.transform.as_mut() else {
            continue;
        };

        // Rotation is independent per-entity state.
        transform.angle += ROTATION_DEGREES_PER_FRAME;

        match tag {
            Tag::Player => {
                let Some(input) = input else { continue };
                // Velocity is rebuilt from intents every frame; a direction
                // only contributes while the step keeps the shape fully
                // inside the window.
                transform.vel = Vec2::ZERO;
                if input.left && transform.pos.x - speed - radius > 0.0 {
                    transform.vel.x -= speed;
                }
                if input.right && transform.pos.x + speed + radius < width {
                    transform.vel.x += speed;
                }
                if input.up && transform.pos.y - speed - radius > 0.0 {
                    transform.vel.y -= speed;
                }
                if input.down && transform.pos.y + speed + radius < height {
                    transform.vel.y += speed;
                }
                transform.pos += transform.vel;
            }
            Tag::Enemy | Tag::SmallEnemy => {
                // Reflect both axes when the projected step would leave the
                // window, then take the reflected step: a bounce, not a clamp.
                if !step_stays_inside(transform.pos, transform.vel, radius, width, height) {
                    transform.vel *= -1.0;
                }
                transform.pos += transform.vel;
            }
            Tag::Bullet => {
                if step_stays_inside(transform.pos, transform.vel, radius, width, height) {
                    transform.pos += transform.vel;
                }
            }
            Tag::SpecialBullet => {}
        }
    }
}

/// Whether `pos + vel` keeps a circle of `radius` fully inside the window.
fn step_stays_inside(pos: Vec2, vel: Vec2, radius: f32, width: f32, height: f32) -> bool {
    let next = pos + vel;
    next.x - radius > 0.0
        && next.x + radius < width
        && next.y - radius > 0.0
        && next.y + radius < height
}
