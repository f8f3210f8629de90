//! Tests for the core vocabulary: vector math, tags, and configuration.

use crate::config::GameConfig;
use crate::entity::Tag;
use crate::types::{Color, Vec2};

// ---- Vec2 ----

#[test]
fn test_vec2_arithmetic() {
    let a = Vec2::new(3.0, 4.0);
    let b = Vec2::new(1.0, -2.0);

    assert_eq!(a + b, Vec2::new(4.0, 2.0));
    assert_eq!(a - b, Vec2::new(2.0, 6.0));
    assert_eq!(a * 2.0, Vec2::new(6.0, 8.0));
    assert_eq!(a / 2.0, Vec2::new(1.5, 2.0));

    let mut c = a;
    c += b;
    assert_eq!(c, Vec2::new(4.0, 2.0));
    c -= b;
    assert_eq!(c, a);
    c *= 3.0;
    assert_eq!(c, Vec2::new(9.0, 12.0));
    c /= 3.0;
    assert_eq!(c, a);
}

#[test]
fn test_vec2_length_and_distance() {
    let a = Vec2::new(3.0, 4.0);
    assert_eq!(a.length(), 5.0);
    assert_eq!(Vec2::ZERO.distance_to(a), 5.0);
    assert_eq!(a.distance_to(a), 0.0);
}

#[test]
fn test_vec2_normalized() {
    let v = Vec2::new(10.0, 0.0).normalized();
    assert_eq!(v, Vec2::new(1.0, 0.0));

    let d = Vec2::new(3.0, 4.0).normalized();
    assert!((d.length() - 1.0).abs() < 1e-6);
}

#[test]
fn test_vec2_normalized_zero_length_is_zero() {
    // Must never propagate NaN.
    let v = Vec2::ZERO.normalized();
    assert_eq!(v, Vec2::ZERO);
    assert!(!v.x.is_nan() && !v.y.is_nan());
}

// ---- Tags ----

#[test]
fn test_tag_canonical_strings() {
    assert_eq!(Tag::Player.as_str(), "player");
    assert_eq!(Tag::Enemy.as_str(), "enemy");
    assert_eq!(Tag::Bullet.as_str(), "bullet");
    assert_eq!(Tag::SpecialBullet.as_str(), "specialBullet");
    assert_eq!(Tag::SmallEnemy.as_str(), "smallEnemy");
}

#[test]
fn test_tag_serde_round_trip() {
    let json = serde_json::to_string(&Tag::SpecialBullet).unwrap();
    assert_eq!(json, "\"specialBullet\"");
    let tag: Tag = serde_json::from_str(&json).unwrap();
    assert_eq!(tag, Tag::SpecialBullet);
}

// ---- Configuration ----

#[test]
fn test_config_defaults_are_sane() {
    let config = GameConfig::default();
    assert!(config.window.width > 0 && config.window.height > 0);
    assert!(config.window.frame_rate > 0);
    assert!(config.player.speed > 0.0);
    assert!(config.enemy.points_min <= config.enemy.points_max);
    assert!(config.enemy.speed_min <= config.enemy.speed_max);
    assert!(config.bullet.lifespan > 0);
}

#[test]
fn test_config_partial_json_fills_defaults() {
    let config: GameConfig = serde_json::from_str(
        r#"{
            "window": { "width": 800, "height": 600 },
            "enemy": { "spawn_interval": 45 }
        }"#,
    )
    .unwrap();

    assert_eq!(config.window.width, 800);
    assert_eq!(config.window.height, 600);
    // Unspecified fields keep their defaults.
    let defaults = GameConfig::default();
    assert_eq!(config.window.frame_rate, defaults.window.frame_rate);
    assert_eq!(config.enemy.spawn_interval, 45);
    assert_eq!(config.player.points, defaults.player.points);
}

#[test]
fn test_config_missing_file_falls_back_to_defaults() {
    let config = GameConfig::load_or_default("/nonexistent/polywars.json");
    assert_eq!(config.window.width, GameConfig::default().window.width);
}

#[test]
fn test_config_color_fields_round_trip() {
    let config = GameConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let back: GameConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.player.outline, Color::new(255, 0, 0));
    assert_eq!(back.player.fill, config.player.fill);
}
