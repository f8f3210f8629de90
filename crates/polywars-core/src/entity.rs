//! Entity identity: stable ids and category tags.

use serde::{Deserialize, Serialize};

/// Stable entity handle. Ids are assigned by the registry in strictly
/// increasing order and are never reused, so a stale id can only ever
/// resolve to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "E{}", self.0)
    }
}

/// Entity category, used for bulk tag-indexed queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    #[serde(rename = "player")]
    Player,
    #[serde(rename = "enemy")]
    Enemy,
    #[serde(rename = "bullet")]
    Bullet,
    #[serde(rename = "specialBullet")]
    SpecialBullet,
    #[serde(rename = "smallEnemy")]
    SmallEnemy,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Player => "player",
            Tag::Enemy => "enemy",
            Tag::Bullet => "bullet",
            Tag::SpecialBullet => "specialBullet",
            Tag::SmallEnemy => "smallEnemy",
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
