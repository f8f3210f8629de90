//! Frame snapshot — the complete visible state handed to the render
//! collaborator after each tick.

use serde::{Deserialize, Serialize};

use crate::entity::{EntityId, Tag};
use crate::types::{Color, Vec2};

/// Everything the renderer needs for one frame, in draw order.
/// A plain value; drawing from it cannot mutate the simulation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    /// Simulated frame count. Frozen while paused.
    pub frame: u64,
    pub score: u32,
    pub paused: bool,
    /// False once the window has been closed; the frame loop exits.
    pub running: bool,
    pub entities: Vec<EntityView>,
}

/// One drawable entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityView {
    pub id: EntityId,
    pub tag: Tag,
    pub position: Vec2,
    /// Rotation angle in degrees.
    pub angle: f32,
    pub radius: f32,
    pub points: u32,
    pub fill: Color,
    pub outline: Color,
    pub outline_thickness: f32,
    /// Applied to both fill and outline; fades with remaining lifespan for
    /// bullets and small enemies.
    pub alpha: u8,
}
