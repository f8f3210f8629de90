//! Lifespan system: ages frame-limited entities and destroys the expired.

use polywars_core::entity::Tag;

use crate::manager::EntityManager;

/// Decrement every lifespan except enemies' and flag expired entities for
/// the next flush. Enemies carry a lifespan but are exempt from decay;
/// they only die to collisions.
pub fn run(manager: &mut EntityManager) {
    for entity in manager.iter_mut() {
        if entity.tag() == Tag::Enemy || entity.transform.is_none() {
            continue;
        }
        let mut expired = false;
        if let Some(lifespan) = entity.lifespan.as_mut() {
            lifespan.remaining -= 1;
            expired = lifespan.remaining <= 0;
        }
        if expired {
            entity.destroy();
        }
    }
}
