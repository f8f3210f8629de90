//! A live entity: identity plus optional component slots.

use polywars_core::components::{Hitbox, Input, LifeSpan, Score, Shape, SpecialAbility, Transform};
use polywars_core::entity::{EntityId, Tag};

/// Identity (id, tag, aliveness) and exclusively-owned optional components.
///
/// Entities are only constructed by the registry; everything else holds
/// `EntityId` handles and resolves them per access.
#[derive(Debug, Clone)]
pub struct Entity {
    id: EntityId,
    tag: Tag,
    alive: bool,
    pub transform: Option<Transform>,
    pub shape: Option<Shape>,
    pub hitbox: Option<Hitbox>,
    pub score: Option<Score>,
    pub lifespan: Option<LifeSpan>,
    pub input: Option<Input>,
    pub special: Option<SpecialAbility>,
}

impl Entity {
    pub(crate) fn new(id: EntityId, tag: Tag) -> Self {
        Self {
            id,
            tag,
            alive: true,
            transform: None,
            shape: None,
            hitbox: None,
            score: None,
            lifespan: None,
            input: None,
            special: None,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Flag this entity for removal at the next flush. Idempotent; a dead
    /// entity is never revived.
    pub fn destroy(&mut self) {
        self.alive = false;
    }

    /// Hit-test radius: the hitbox is authoritative when present, the
    /// shape radius is the fallback.
    pub fn hitbox_radius(&self) -> f32 {
        self.hitbox
            .map(|h| h.radius)
            .or_else(|| self.shape.map(|s| s.radius))
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destroy_is_idempotent() {
        let mut entity = Entity::new(EntityId(7), Tag::Bullet);
        assert!(entity.is_alive());
        entity.destroy();
        assert!(!entity.is_alive());
        entity.destroy();
        assert!(!entity.is_alive());
    }

    #[test]
    fn hitbox_radius_prefers_hitbox_over_shape() {
        use polywars_core::components::{Hitbox, Shape};
        use polywars_core::types::Color;

        let mut entity = Entity::new(EntityId(1), Tag::Enemy);
        assert_eq!(entity.hitbox_radius(), 0.0);

        entity.shape = Some(Shape {
            radius: 32.0,
            points: 4,
            fill: Color::new(0, 0, 0),
            outline: Color::new(255, 255, 255),
            outline_thickness: 1.0,
        });
        assert_eq!(entity.hitbox_radius(), 32.0);

        entity.hitbox = Some(Hitbox { radius: 24.0 });
        assert_eq!(entity.hitbox_radius(), 24.0);
    }
}
