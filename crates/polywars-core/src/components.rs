//! Component records attached optionally to entities.
//!
//! Components are plain data bags. Each kind is owned exclusively by its
//! entity; behavior lives in the systems, not here.

use serde::{Deserialize, Serialize};

use crate::types::{Color, Vec2};

/// Position, velocity, and rotation angle (degrees).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Transform {
    pub pos: Vec2,
    pub vel: Vec2,
    pub angle: f32,
}

impl Transform {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            angle: 0.0,
        }
    }
}

/// Visual circle: radius, vertex count, and colors.
/// The radius doubles as the hit-test fallback when no `Hitbox` is attached.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Shape {
    pub radius: f32,
    pub points: u32,
    pub fill: Color,
    pub outline: Color,
    pub outline_thickness: f32,
}

/// Explicit collision radius. Authoritative for hit tests when present.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hitbox {
    pub radius: f32,
}

/// Points granted to the scorer when this entity is destroyed by damage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Score {
    pub value: u32,
}

/// Frame-counted lifetime. `remaining` drops by one per simulated frame;
/// the entity is destroyed when it reaches zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LifeSpan {
    pub remaining: i32,
    pub total: i32,
}

impl LifeSpan {
    pub fn new(total: i32) -> Self {
        Self {
            remaining: total,
            total,
        }
    }
}

/// Current held-state of the player's intents. Flags, not events.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Input {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub shoot: bool,
    pub special: bool,
}

/// Special-ability cooldown in frames. Zero means ready.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SpecialAbility {
    pub cooldown: u32,
}
