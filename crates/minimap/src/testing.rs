//! In-memory host and draw list for unit tests

use crate::agents::{Allegiance, Profession};
use crate::foundation::math::Point2;
use crate::host::{AgentId, DrawList, HostError, MapId, PathingSource, WorldState};
use crate::pathing::{BoundaryRect, Layer, Quad, Trapezoid};
use crate::render::Color;
use std::cell::{Cell, RefCell};

#[derive(Debug, Clone)]
struct MockAgent {
    id: AgentId,
    position: Point2,
    alive: bool,
    boss: bool,
    allegiance: Allegiance,
    profession: Profession,
}

/// Scriptable host with call counters
#[derive(Debug)]
pub struct MockHost {
    map_id: Cell<MapId>,
    map_ready: Cell<bool>,
    camera_yaw: Cell<f32>,
    player_position: Cell<Point2>,
    player_alive: Cell<bool>,
    layers: RefCell<Vec<Layer>>,
    boundary: Cell<BoundaryRect>,
    agents: RefCell<Vec<MockAgent>>,

    fail_pathing: Cell<bool>,
    fail_agent_queries: Cell<bool>,
    fail_player_position: Cell<bool>,

    pathing_fetches: Cell<usize>,
    agent_list_queries: Cell<usize>,
}

impl MockHost {
    pub const PLAYER_ID: AgentId = 1;
    pub const MAP_ID: MapId = 3;

    /// Map 3 with one 10x10 square on plane 0, player at the origin
    pub fn with_single_square() -> Self {
        Self::with_layers(
            vec![Layer::new(0, vec![Trapezoid::rect(0, 0.0, 0.0, 10.0, 10.0)])],
            BoundaryRect::new(0.0, 100.0, 0.0, 100.0),
        )
    }

    pub fn with_layers(layers: Vec<Layer>, boundary: BoundaryRect) -> Self {
        Self {
            map_id: Cell::new(Self::MAP_ID),
            map_ready: Cell::new(true),
            camera_yaw: Cell::new(0.0),
            player_position: Cell::new(Point2::origin()),
            player_alive: Cell::new(true),
            layers: RefCell::new(layers),
            boundary: Cell::new(boundary),
            agents: RefCell::new(Vec::new()),
            fail_pathing: Cell::new(false),
            fail_agent_queries: Cell::new(false),
            fail_player_position: Cell::new(false),
            pathing_fetches: Cell::new(0),
            agent_list_queries: Cell::new(0),
        }
    }

    /// Living, non-boss enemy
    pub fn add_agent(&self, id: AgentId, position: Point2) {
        self.agents.borrow_mut().push(MockAgent {
            id,
            position,
            alive: true,
            boss: false,
            allegiance: Allegiance::Enemy,
            profession: Profession::None,
        });
    }

    fn with_agent(&self, id: AgentId, update: impl FnOnce(&mut MockAgent)) {
        if let Some(agent) = self.agents.borrow_mut().iter_mut().find(|agent| agent.id == id) {
            update(agent);
        }
    }

    pub fn move_agent(&self, id: AgentId, position: Point2) {
        self.with_agent(id, |agent| agent.position = position);
    }

    pub fn set_agent_boss(&self, id: AgentId, boss: bool) {
        self.with_agent(id, |agent| agent.boss = boss);
    }

    pub fn set_agent_alive(&self, id: AgentId, alive: bool) {
        self.with_agent(id, |agent| agent.alive = alive);
    }

    pub fn set_agent_allegiance(&self, id: AgentId, allegiance: Allegiance) {
        self.with_agent(id, |agent| agent.allegiance = allegiance);
    }

    pub fn set_agent_profession(&self, id: AgentId, profession: Profession) {
        self.with_agent(id, |agent| agent.profession = profession);
    }

    pub fn set_map_id(&self, map_id: MapId) {
        self.map_id.set(map_id);
    }

    pub fn set_map_ready(&self, ready: bool) {
        self.map_ready.set(ready);
    }

    pub fn set_camera_yaw(&self, yaw: f32) {
        self.camera_yaw.set(yaw);
    }

    pub fn set_player_position(&self, position: Point2) {
        self.player_position.set(position);
    }

    pub fn set_player_alive(&self, alive: bool) {
        self.player_alive.set(alive);
    }

    pub fn set_layers(&self, layers: Vec<Layer>) {
        *self.layers.borrow_mut() = layers;
    }

    /// Make layer and boundary fetches fail
    pub fn fail_pathing(&self, fail: bool) {
        self.fail_pathing.set(fail);
    }

    /// Make the agent list query fail
    pub fn fail_agent_queries(&self, fail: bool) {
        self.fail_agent_queries.set(fail);
    }

    pub fn fail_player_position(&self, fail: bool) {
        self.fail_player_position.set(fail);
    }

    /// Number of `pathing_layers` calls, failed ones included
    pub fn pathing_fetches(&self) -> usize {
        self.pathing_fetches.get()
    }

    /// Number of `agent_ids` calls, failed ones included
    pub fn agent_list_queries(&self) -> usize {
        self.agent_list_queries.get()
    }

    fn agent<T>(&self, id: AgentId, query: &'static str, read: impl FnOnce(&MockAgent) -> T) -> Result<T, HostError> {
        self.agents
            .borrow()
            .iter()
            .find(|agent| agent.id == id)
            .map(read)
            .ok_or_else(|| HostError::query(query, format!("no agent {id}")))
    }
}

impl PathingSource for MockHost {
    fn pathing_layers(&self) -> Result<Vec<Layer>, HostError> {
        self.pathing_fetches.set(self.pathing_fetches.get() + 1);
        if self.fail_pathing.get() {
            return Err(HostError::query("pathing_layers", "map not loaded"));
        }
        Ok(self.layers.borrow().clone())
    }

    fn map_boundary(&self) -> Result<BoundaryRect, HostError> {
        if self.fail_pathing.get() {
            return Err(HostError::query("map_boundary", "map not loaded"));
        }
        Ok(self.boundary.get())
    }
}

impl WorldState for MockHost {
    fn map_id(&self) -> Result<MapId, HostError> {
        Ok(self.map_id.get())
    }

    fn is_map_ready(&self) -> Result<bool, HostError> {
        Ok(self.map_ready.get())
    }

    fn player_agent_id(&self) -> Result<AgentId, HostError> {
        Ok(Self::PLAYER_ID)
    }

    fn player_position(&self) -> Result<Point2, HostError> {
        if self.fail_player_position.get() {
            return Err(HostError::query("player_position", "no player agent"));
        }
        Ok(self.player_position.get())
    }

    fn player_alive(&self) -> Result<bool, HostError> {
        Ok(self.player_alive.get())
    }

    fn camera_yaw(&self) -> Result<f32, HostError> {
        Ok(self.camera_yaw.get())
    }

    fn agent_ids(&self) -> Result<Vec<AgentId>, HostError> {
        self.agent_list_queries.set(self.agent_list_queries.get() + 1);
        if self.fail_agent_queries.get() {
            return Err(HostError::query("agent_ids", "agent array unavailable"));
        }

        let mut ids = vec![Self::PLAYER_ID];
        ids.extend(self.agents.borrow().iter().map(|agent| agent.id));
        Ok(ids)
    }

    fn agent_position(&self, id: AgentId) -> Result<Point2, HostError> {
        if id == Self::PLAYER_ID {
            return self.player_position();
        }
        self.agent(id, "agent_position", |agent| agent.position)
    }

    fn agent_alive(&self, id: AgentId) -> Result<bool, HostError> {
        self.agent(id, "agent_alive", |agent| agent.alive)
    }

    fn agent_is_boss(&self, id: AgentId) -> Result<bool, HostError> {
        self.agent(id, "agent_is_boss", |agent| agent.boss)
    }

    fn agent_allegiance(&self, id: AgentId) -> Result<Allegiance, HostError> {
        self.agent(id, "agent_allegiance", |agent| agent.allegiance)
    }

    fn agent_primary_profession(&self, id: AgentId) -> Result<Profession, HostError> {
        self.agent(id, "agent_primary_profession", |agent| agent.profession)
    }
}

/// One recorded draw primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Quad {
        points: Quad,
        color: Color,
    },
    CircleFilled {
        center: Point2,
        radius: f32,
        color: Color,
        segments: u32,
    },
    Circle {
        center: Point2,
        radius: f32,
        color: Color,
        segments: u32,
        thickness: f32,
    },
}

impl DrawCall {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Quad { .. } => "quad",
            Self::CircleFilled { .. } => "circle_filled",
            Self::Circle { .. } => "circle",
        }
    }
}

/// Draw list that records every call in order
#[derive(Debug, Default)]
pub struct RecordingDrawList {
    pub calls: Vec<DrawCall>,
    pub fail_quads: bool,
    pub fail_circles: bool,
}

impl RecordingDrawList {
    pub fn quads(&self) -> Vec<Quad> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Quad { points, .. } => Some(*points),
                _ => None,
            })
            .collect()
    }
}

impl DrawList for RecordingDrawList {
    fn add_quad_filled(&mut self, points: &[Point2; 4], color: Color) -> Result<(), HostError> {
        if self.fail_quads {
            return Err(HostError::draw("add_quad_filled", "draw list closed"));
        }
        self.calls.push(DrawCall::Quad { points: *points, color });
        Ok(())
    }

    fn add_circle_filled(
        &mut self,
        center: Point2,
        radius: f32,
        color: Color,
        segments: u32,
    ) -> Result<(), HostError> {
        if self.fail_circles {
            return Err(HostError::draw("add_circle_filled", "draw list closed"));
        }
        self.calls.push(DrawCall::CircleFilled { center, radius, color, segments });
        Ok(())
    }

    fn add_circle(
        &mut self,
        center: Point2,
        radius: f32,
        color: Color,
        segments: u32,
        thickness: f32,
    ) -> Result<(), HostError> {
        if self.fail_circles {
            return Err(HostError::draw("add_circle", "draw list closed"));
        }
        self.calls.push(DrawCall::Circle { center, radius, color, segments, thickness });
        Ok(())
    }
}
