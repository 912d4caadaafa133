//! Host integration traits
//!
//! The minimap never talks to a game process or a window directly. The embedding
//! application implements these traits over its own live-state queries and its
//! immediate-mode draw list; every call is synchronous and may fail.

use crate::agents::{Allegiance, Profession};
use crate::foundation::math::Point2;
use crate::pathing::{BoundaryRect, Layer};
use crate::render::Color;
use thiserror::Error;

/// Host map identifier
pub type MapId = u32;

/// Host agent identifier
pub type AgentId = u32;

/// Failure reported by a host query or draw call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// A live-state or geometry query failed
    #[error("host query `{query}` failed: {reason}")]
    Query {
        /// Name of the failing query
        query: &'static str,
        /// Host-provided reason
        reason: String,
    },

    /// A draw primitive was rejected
    #[error("draw call `{call}` failed: {reason}")]
    Draw {
        /// Name of the failing primitive
        call: &'static str,
        /// Host-provided reason
        reason: String,
    },
}

impl HostError {
    /// Build a query failure
    pub fn query(query: &'static str, reason: impl Into<String>) -> Self {
        Self::Query { query, reason: reason.into() }
    }

    /// Build a draw failure
    pub fn draw(call: &'static str, reason: impl Into<String>) -> Self {
        Self::Draw { call, reason: reason.into() }
    }
}

/// Static navigation geometry for the currently loaded map
pub trait PathingSource {
    /// All pathing layers of the current map, in host order
    fn pathing_layers(&self) -> Result<Vec<Layer>, HostError>;

    /// World-space extent of the current map
    fn map_boundary(&self) -> Result<BoundaryRect, HostError>;
}

/// Live game-state queries
pub trait WorldState {
    /// Identifier of the active map
    fn map_id(&self) -> Result<MapId, HostError>;

    /// Whether the map is loaded and nothing (loading screen, world map) hides the minimap
    fn is_map_ready(&self) -> Result<bool, HostError>;

    /// Agent id of the local player
    fn player_agent_id(&self) -> Result<AgentId, HostError>;

    /// World position of the local player
    fn player_position(&self) -> Result<Point2, HostError>;

    /// Whether the local player is alive
    fn player_alive(&self) -> Result<bool, HostError>;

    /// Current camera yaw in radians
    fn camera_yaw(&self) -> Result<f32, HostError>;

    /// Every agent currently known to the host, the player included
    fn agent_ids(&self) -> Result<Vec<AgentId>, HostError>;

    /// World position of an agent
    fn agent_position(&self, id: AgentId) -> Result<Point2, HostError>;

    /// Whether an agent is alive
    fn agent_alive(&self, id: AgentId) -> Result<bool, HostError>;

    /// Whether an agent carries the boss glow
    fn agent_is_boss(&self, id: AgentId) -> Result<bool, HostError>;

    /// Relationship of an agent to the player
    fn agent_allegiance(&self, id: AgentId) -> Result<Allegiance, HostError>;

    /// Primary profession of an agent
    fn agent_primary_profession(&self, id: AgentId) -> Result<Profession, HostError>;
}

/// Everything the minimap needs to read from the host
pub trait GameHost: WorldState + PathingSource {}

impl<T: WorldState + PathingSource + ?Sized> GameHost for T {}

/// Immediate-mode drawing primitives, in canvas (screen) coordinates
pub trait DrawList {
    /// Filled quadrilateral; points in top-left, top-right, bottom-right, bottom-left order
    fn add_quad_filled(&mut self, points: &[Point2; 4], color: Color) -> Result<(), HostError>;

    /// Filled circle
    fn add_circle_filled(
        &mut self,
        center: Point2,
        radius: f32,
        color: Color,
        segments: u32,
    ) -> Result<(), HostError>;

    /// Circle outline
    fn add_circle(
        &mut self,
        center: Point2,
        radius: f32,
        color: Color,
        segments: u32,
        thickness: f32,
    ) -> Result<(), HostError>;
}
