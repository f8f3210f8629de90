//! The authoritative entity registry.
//!
//! Creations are buffered and destructions are flag-based; both are
//! published atomically by `flush` at the start of each frame. Systems
//! iterating the live list within one frame therefore never observe the
//! collection resizing under them.

use std::collections::{HashMap, HashSet};

use polywars_core::entity::{EntityId, Tag};

use crate::entity::Entity;

#[derive(Debug, Default)]
pub struct EntityManager {
    /// Live entities in insertion order.
    entities: Vec<Entity>,
    /// Entities created this frame, published at the next flush.
    pending: Vec<Entity>,
    /// Per-tag id lists, insertion order, flushed entities only.
    tag_index: HashMap<Tag, Vec<EntityId>>,
    /// Id to live-list slot, rebuilt at each flush.
    slots: HashMap<EntityId, usize>,
    next_id: u64,
}

impl EntityManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh entity with the next id (strictly increasing,
    /// never reused) and buffer it for the next flush. The returned
    /// reference lets the caller attach components immediately; the entity
    /// stays invisible to `iter`/`iter_tagged` until flushed.
    pub fn create(&mut self, tag: Tag) -> &mut Entity {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.pending.push(Entity::new(id, tag));
        self.pending.last_mut().expect("just pushed")
    }

    /// Publish pending entities and purge dead ones. Must run exactly once
    /// per frame, before the systems.
    ///
    /// Pending entities enter the live list and their tag bucket in
    /// insertion order; every `alive == false` entity leaves the live list
    /// and all tag buckets in the same call (stable removal — surviving
    /// order is preserved).
    pub fn flush(&mut self) {
        for entity in self.pending.drain(..) {
            self.tag_index.entry(entity.tag()).or_default().push(entity.id());
            self.entities.push(entity);
        }

        let dead: HashSet<EntityId> = self
            .entities
            .iter()
            .filter(|e| !e.is_alive())
            .map(Entity::id)
            .collect();
        if !dead.is_empty() {
            self.entities.retain(Entity::is_alive);
            for bucket in self.tag_index.values_mut() {
                bucket.retain(|id| !dead.contains(id));
            }
        }

        self.slots.clear();
        for (slot, entity) in self.entities.iter().enumerate() {
            self.slots.insert(entity.id(), slot);
        }
    }

    /// All flushed entities in insertion order. Entities flagged dead this
    /// frame remain visible until the next flush.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// Flushed entities carrying exactly this tag, insertion order. A tag
    /// with no entities yields an empty iterator.
    pub fn iter_tagged(&self, tag: Tag) -> impl Iterator<Item = &Entity> {
        self.tag_index
            .get(&tag)
            .into_iter()
            .flatten()
            .filter_map(move |id| self.slots.get(id).map(|&slot| &self.entities[slot]))
    }

    /// Resolve a handle: live entities first, then this frame's pending
    /// ones. A destroyed-and-flushed id resolves to `None`.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        if let Some(&slot) = self.slots.get(&id) {
            return self.entities.get(slot);
        }
        self.pending.iter().find(|e| e.id() == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        if let Some(&slot) = self.slots.get(&id) {
            return self.entities.get_mut(slot);
        }
        self.pending.iter_mut().find(|e| e.id() == id)
    }

    /// Flag an entity for removal at the next flush. Unknown or stale ids
    /// are a no-op, as is destroying twice.
    pub fn destroy(&mut self, id: EntityId) {
        if let Some(entity) = self.get_mut(id) {
            entity.destroy();
        }
    }

    /// Number of flushed entities (dead-but-unflushed included).
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Number of entities waiting for the next flush.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_is_invisible_until_flush() {
        let mut manager = EntityManager::new();
        let id = manager.create(Tag::Enemy).id();

        assert_eq!(manager.iter().count(), 0);
        assert_eq!(manager.iter_tagged(Tag::Enemy).count(), 0);
        // The handle itself resolves immediately.
        assert!(manager.get(id).is_some());

        manager.flush();
        assert_eq!(manager.iter().count(), 1);
        assert_eq!(manager.iter_tagged(Tag::Enemy).count(), 1);
    }

    #[test]
    fn ids_are_monotonic_and_never_reused() {
        let mut manager = EntityManager::new();
        let a = manager.create(Tag::Bullet).id();
        let b = manager.create(Tag::Bullet).id();
        manager.flush();
        manager.destroy(a);
        manager.flush();

        let c = manager.create(Tag::Bullet).id();
        assert!(a.0 < b.0 && b.0 < c.0);
        assert!(manager.get(a).is_none());
    }

    #[test]
    fn flush_purges_live_list_and_tag_buckets_together() {
        let mut manager = EntityManager::new();
        let keep = manager.create(Tag::Enemy).id();
        let kill = manager.create(Tag::Enemy).id();
        manager.flush();

        manager.destroy(kill);
        // Dead-but-unflushed entities are still visible this frame.
        assert_eq!(manager.iter().count(), 2);
        assert_eq!(manager.iter_tagged(Tag::Enemy).count(), 2);

        manager.flush();
        let live: Vec<EntityId> = manager.iter().map(Entity::id).collect();
        assert_eq!(live, vec![keep]);
        let tagged: Vec<EntityId> = manager.iter_tagged(Tag::Enemy).map(Entity::id).collect();
        assert_eq!(tagged, vec![keep]);
    }

    #[test]
    fn removal_is_stable() {
        let mut manager = EntityManager::new();
        let ids: Vec<EntityId> = (0..5).map(|_| manager.create(Tag::SmallEnemy).id()).collect();
        manager.flush();

        manager.destroy(ids[1]);
        manager.destroy(ids[3]);
        manager.flush();

        let live: Vec<EntityId> = manager.iter().map(Entity::id).collect();
        assert_eq!(live, vec![ids[0], ids[2], ids[4]]);
    }

    #[test]
    fn tag_buckets_partition_the_live_list() {
        let mut manager = EntityManager::new();
        manager.create(Tag::Player);
        manager.create(Tag::Enemy);
        manager.create(Tag::Enemy);
        manager.create(Tag::Bullet);
        manager.flush();

        let all: Vec<EntityId> = manager.iter().map(Entity::id).collect();
        let mut by_tag: Vec<EntityId> = [
            Tag::Player,
            Tag::Enemy,
            Tag::Bullet,
            Tag::SpecialBullet,
            Tag::SmallEnemy,
        ]
        .iter()
        .flat_map(|&tag| manager.iter_tagged(tag).map(Entity::id).collect::<Vec<_>>())
        .collect();
        by_tag.sort();

        let mut sorted_all = all.clone();
        sorted_all.sort();
        assert_eq!(by_tag, sorted_all);
        assert_eq!(manager.iter_tagged(Tag::SpecialBullet).count(), 0);
    }

    #[test]
    fn destroy_twice_is_a_no_op() {
        let mut manager = EntityManager::new();
        let id = manager.create(Tag::Bullet).id();
        manager.flush();

        manager.destroy(id);
        manager.destroy(id);
        manager.flush();
        assert!(manager.is_empty());

        // Destroying an id that was already purged does nothing.
        manager.destroy(id);
        manager.flush();
        assert_eq!(manager.pending_len(), 0);
    }

    #[test]
    fn components_attach_before_flush() {
        use polywars_core::components::Transform;
        use polywars_core::types::Vec2;

        let mut manager = EntityManager::new();
        let entity = manager.create(Tag::Bullet);
        entity.transform = Some(Transform::new(Vec2::new(1.0, 2.0), Vec2::ZERO));
        let id = entity.id();
        manager.flush();

        let pos = manager.get(id).and_then(|e| e.transform).map(|t| t.pos);
        assert_eq!(pos, Some(Vec2::new(1.0, 2.0)));
    }
}
