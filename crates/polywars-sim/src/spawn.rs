//! Entity spawn factories.
//!
//! Construct player, enemy, bullet, special-bullet, and small-enemy
//! entities with config-derived and randomized parameters. Randomness
//! always comes from the injected RNG so runs are reproducible.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use polywars_core::components::{Hitbox, Input, LifeSpan, Score, Shape, SpecialAbility, Transform};
use polywars_core::config::GameConfig;
use polywars_core::constants::{
    ENEMY_SCORE_PER_POINT, SMALL_ENEMY_LIFESPAN_FRAMES, SMALL_ENEMY_RADIUS_FACTOR,
    SMALL_ENEMY_SCORE_MULTIPLIER, SPECIAL_BULLET_COUNT, SPECIAL_BULLET_LIFESPAN_FRAMES,
    SPECIAL_BULLET_RADIUS_FACTOR,
};
use polywars_core::entity::{EntityId, Tag};
use polywars_core::types::{Color, Vec2};

use crate::manager::EntityManager;

/// Spawn the player at the window center, idle and ready.
pub fn spawn_player(manager: &mut EntityManager, config: &GameConfig) -> EntityId {
    let center = Vec2::new(
        config.window.width as f32 / 2.0,
        config.window.height as f32 / 2.0,
    );
    let p = &config.player;

    let entity = manager.create(Tag::Player);
    entity.transform = Some(Transform::new(center, Vec2::ZERO));
    entity.shape = Some(Shape {
        radius: p.shape_radius,
        points: p.points,
        fill: p.fill,
        outline: p.outline,
        outline_thickness: p.outline_thickness,
    });
    entity.hitbox = Some(Hitbox {
        radius: p.hitbox_radius,
    });
    entity.input = Some(Input::default());
    entity.special = Some(SpecialAbility::default());
    entity.id()
}

/// Spawn an enemy at a random in-bounds position with a random heading,
/// speed, fill color, and vertex count. Score value scales with the
/// vertex count; the lifespan is attached but enemies are exempt from
/// lifespan decay.
pub fn spawn_enemy(manager: &mut EntityManager, rng: &mut ChaCha8Rng, config: &GameConfig) -> EntityId {
    let e = &config.enemy;
    let width = config.window.width as f32;
    let height = config.window.height as f32;

    let pos = Vec2::new(
        rng.gen_range(e.shape_radius..=width - e.shape_radius),
        rng.gen_range(e.shape_radius..=height - e.shape_radius),
    );
    let speed = rng.gen_range(e.speed_min..=e.speed_max);
    let heading = rng.gen_range(0.0..std::f32::consts::TAU);
    let vel = Vec2::new(speed * heading.cos(), speed * heading.sin());
    let fill = Color::new(
        rng.gen_range(0..=255u8),
        rng.gen_range(0..=255u8),
        rng.gen_range(0..=255u8),
    );
    let points = rng.gen_range(e.points_min..=e.points_max);

    let entity = manager.create(Tag::Enemy);
    entity.transform = Some(Transform::new(pos, vel));
    entity.shape = Some(Shape {
        radius: e.shape_radius,
        points,
        fill,
        outline: e.outline,
        outline_thickness: e.outline_thickness,
    });
    entity.hitbox = Some(Hitbox {
        radius: e.hitbox_radius,
    });
    entity.score = Some(Score {
        value: points * ENEMY_SCORE_PER_POINT,
    });
    entity.lifespan = Some(LifeSpan::new(e.lifespan));
    entity.id()
}

/// Spawn a bullet at `from`, travelling toward `target` at config speed.
/// Aiming at `from` itself yields a zero direction and a stationary
/// bullet, reaped by its lifespan.
pub fn spawn_bullet(
    manager: &mut EntityManager,
    config: &GameConfig,
    from: Vec2,
    target: Vec2,
) -> EntityId {
    let b = &config.bullet;
    let direction = (target - from).normalized();

    let entity = manager.create(Tag::Bullet);
    entity.transform = Some(Transform::new(from, direction * b.speed));
    entity.shape = Some(Shape {
        radius: b.shape_radius,
        points: b.points,
        fill: b.fill,
        outline: b.outline,
        outline_thickness: b.outline_thickness,
    });
    entity.hitbox = Some(Hitbox {
        radius: b.hitbox_radius,
    });
    entity.lifespan = Some(LifeSpan::new(b.lifespan));
    entity.id()
}

/// Emit the special-ability ring: stationary special bullets on the
/// source entity's boundary circle at evenly spaced angles, styled after
/// the source but twice its radius.
pub fn spawn_special_ability(manager: &mut EntityManager, source: EntityId) {
    let Some((pos, shape, hit_radius)) = manager.get(source).and_then(|entity| {
        let transform = entity.transform?;
        let shape = entity.shape?;
        Some((transform.pos, shape, entity.hitbox_radius()))
    }) else {
        return;
    };

    for i in 0..SPECIAL_BULLET_COUNT {
        let angle = std::f32::consts::TAU * i as f32 / SPECIAL_BULLET_COUNT as f32;
        let offset = Vec2::new(shape.radius * angle.cos(), shape.radius * angle.sin());

        let bullet = manager.create(Tag::SpecialBullet);
        bullet.transform = Some(Transform::new(pos + offset, Vec2::ZERO));
        bullet.shape = Some(Shape {
            radius: shape.radius * SPECIAL_BULLET_RADIUS_FACTOR,
            points: shape.points,
            fill: shape.fill,
            outline: shape.outline,
            outline_thickness: shape.outline_thickness,
        });
        bullet.hitbox = Some(Hitbox {
            radius: hit_radius * SPECIAL_BULLET_RADIUS_FACTOR,
        });
        bullet.lifespan = Some(LifeSpan::new(SPECIAL_BULLET_LIFESPAN_FRAMES));
    }
}

/// Burst a destroyed enemy into a ring of small enemies: one per vertex,
/// placed on the enemy's boundary circle, inheriting its velocity and
/// colors at half the radius and double the score value.
pub fn spawn_small_enemies(manager: &mut EntityManager, parent: EntityId) {
    let Some((pos, vel, shape, hit_radius, value)) = manager.get(parent).and_then(|entity| {
        let transform = entity.transform?;
        let shape = entity.shape?;
        let score = entity.score?;
        Some((
            transform.pos,
            transform.vel,
            shape,
            entity.hitbox_radius(),
            score.value,
        ))
    }) else {
        return;
    };

    for i in 0..shape.points {
        let angle = std::f32::consts::TAU * i as f32 / shape.points as f32;
        let offset = Vec2::new(shape.radius * angle.cos(), shape.radius * angle.sin());

        let small = manager.create(Tag::SmallEnemy);
        small.transform = Some(Transform::new(pos + offset, vel));
        small.shape = Some(Shape {
            radius: shape.radius * SMALL_ENEMY_RADIUS_FACTOR,
            points: shape.points,
            fill: shape.fill,
            outline: shape.outline,
            outline_thickness: shape.outline_thickness,
        });
        small.hitbox = Some(Hitbox {
            radius: hit_radius * SMALL_ENEMY_RADIUS_FACTOR,
        });
        small.score = Some(Score {
            value: value * SMALL_ENEMY_SCORE_MULTIPLIER,
        });
        small.lifespan = Some(LifeSpan::new(SMALL_ENEMY_LIFESPAN_FRAMES));
    }
}
