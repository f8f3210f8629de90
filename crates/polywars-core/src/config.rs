//! Game configuration, decoded from a JSON file.
//!
//! Every block has sensible defaults and `#[serde(default)]`, so a partial
//! or missing config file degrades gracefully instead of aborting startup.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Color;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Window parameters, consumed by the windowing collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    /// Target frames per second, enforced by the frame loop.
    pub frame_rate: u32,
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            frame_rate: crate::constants::DEFAULT_FRAME_RATE,
            fullscreen: false,
        }
    }
}

/// Font parameters for the score display. Pass-through for the render
/// collaborator; the simulation never touches the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub path: String,
    pub size: u32,
    pub color: Color,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            path: "fonts/arial.ttf".to_string(),
            size: 24,
            color: Color::new(255, 255, 255),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub shape_radius: f32,
    pub hitbox_radius: f32,
    pub fill: Color,
    pub outline: Color,
    pub outline_thickness: f32,
    pub points: u32,
    /// Pixels per frame added per active directional intent.
    pub speed: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            shape_radius: 32.0,
            hitbox_radius: 32.0,
            fill: Color::new(10, 10, 10),
            outline: Color::new(255, 0, 0),
            outline_thickness: 4.0,
            points: 8,
            speed: 5.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub shape_radius: f32,
    pub hitbox_radius: f32,
    pub outline: Color,
    pub outline_thickness: f32,
    pub points_min: u32,
    pub points_max: u32,
    /// Attached to spawned enemies but never decremented; enemies only die
    /// to collisions.
    pub lifespan: i32,
    /// Frames between periodic spawns. Zero disables periodic spawning.
    pub spawn_interval: u64,
    pub speed_min: f32,
    pub speed_max: f32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            shape_radius: 32.0,
            hitbox_radius: 32.0,
            outline: Color::new(255, 255, 255),
            outline_thickness: 2.0,
            points_min: 3,
            points_max: 8,
            lifespan: 90,
            spawn_interval: 120,
            speed_min: 1.0,
            speed_max: 4.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletConfig {
    pub shape_radius: f32,
    pub hitbox_radius: f32,
    pub fill: Color,
    pub outline: Color,
    pub outline_thickness: f32,
    pub points: u32,
    pub lifespan: i32,
    /// Pixels per frame along the aim direction.
    pub speed: f32,
}

impl Default for BulletConfig {
    fn default() -> Self {
        Self {
            shape_radius: 10.0,
            hitbox_radius: 10.0,
            fill: Color::new(255, 255, 255),
            outline: Color::new(255, 255, 255),
            outline_thickness: 2.0,
            points: 20,
            lifespan: 90,
            speed: 20.0,
        }
    }
}

/// Complete decoded configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub font: FontConfig,
    pub player: PlayerConfig,
    pub enemy: EnemyConfig,
    pub bullet: BulletConfig,
}

impl GameConfig {
    /// Load and parse a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Load a config file, falling back to defaults on any error.
    /// The failure is reported and the game continues.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(config) => config,
            Err(err) => {
                log::warn!(
                    "config {:?} unusable ({err}), continuing with defaults",
                    path.as_ref()
                );
                Self::default()
            }
        }
    }
}
