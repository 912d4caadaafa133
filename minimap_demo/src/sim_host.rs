//! Simulated game client for driving the minimap without a real host

use minimap::prelude::*;
use rand::prelude::*;

/// Side length of one pathing cell in world units
const CELL_SIZE: f32 = 400.0;

/// Half extent of the simulated maps in world units
const MAP_HALF_EXTENT: f32 = 8000.0;

const PLAYER_ID: AgentId = 1;

#[derive(Clone)]
struct SimAgent {
    id: AgentId,
    position: Point2,
    velocity: Vec2,
    alive: bool,
    boss: bool,
    allegiance: Allegiance,
    profession: Profession,
}

/// World with a trapezoid grid, wandering agents and a circling player
pub struct SimHost {
    map_id: MapId,
    loading: bool,
    elapsed: f32,
    player: Point2,
    yaw: f32,
    agents: Vec<SimAgent>,
    rng: StdRng,
}

impl SimHost {
    /// Spawn `agent_count` agents on `map_id`
    pub fn new(map_id: MapId, agent_count: usize, seed: u64) -> Self {
        let mut host = Self {
            map_id,
            loading: false,
            elapsed: 0.0,
            player: Point2::origin(),
            yaw: 0.0,
            agents: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        };
        host.populate(agent_count);
        host
    }

    fn populate(&mut self, count: usize) {
        self.agents.clear();

        for index in 0..count {
            let allegiance = Allegiance::from_raw(self.rng.gen_range(1..=6));
            let boss = allegiance == Allegiance::Enemy && self.rng.gen_bool(0.1);

            self.agents.push(SimAgent {
                id: PLAYER_ID + 1 + index as AgentId,
                position: Point2::new(
                    self.rng.gen_range(-MAP_HALF_EXTENT..MAP_HALF_EXTENT),
                    self.rng.gen_range(-MAP_HALF_EXTENT..MAP_HALF_EXTENT),
                ),
                velocity: Vec2::new(self.rng.gen_range(-150.0..150.0), self.rng.gen_range(-150.0..150.0)),
                alive: self.rng.gen_bool(0.9),
                boss,
                allegiance,
                profession: Profession::from_raw(self.rng.gen_range(1..=10)),
            });
        }

        log::info!("Spawned {} agents on map {}", count, self.map_id);
    }

    /// Advance the simulation
    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt;

        // Player walks a slow circle, camera looks along the walking direction
        let angle = self.elapsed * 0.2;
        self.player = Point2::new(angle.cos(), angle.sin()) * 2500.0;
        self.yaw = angle + std::f32::consts::FRAC_PI_2;

        for agent in &mut self.agents {
            agent.position += agent.velocity * dt;
            if agent.position.x.abs() > MAP_HALF_EXTENT {
                agent.velocity.x = -agent.velocity.x;
            }
            if agent.position.y.abs() > MAP_HALF_EXTENT {
                agent.velocity.y = -agent.velocity.y;
            }
        }
    }

    /// Begin or end a loading screen
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Travel to another map and respawn agents
    pub fn travel(&mut self, map_id: MapId) {
        log::info!("Travelling {} -> {}", self.map_id, map_id);
        self.map_id = map_id;
        let count = self.agents.len();
        self.populate(count);
    }

    fn agent(&self, id: AgentId, query: &'static str) -> Result<&SimAgent, HostError> {
        self.agents
            .iter()
            .find(|agent| agent.id == id)
            .ok_or_else(|| HostError::query(query, format!("agent {id} despawned")))
    }
}

impl PathingSource for SimHost {
    fn pathing_layers(&self) -> Result<Vec<Layer>, HostError> {
        if self.loading {
            return Err(HostError::query("pathing_layers", "map is loading"));
        }

        // Checkerboard of cells; odd maps get a raised second plane in the middle
        let cells = (MAP_HALF_EXTENT / CELL_SIZE) as i32;
        let mut ground = Vec::new();
        let mut upper = Vec::new();

        for cx in -cells..cells {
            for cy in -cells..cells {
                if (cx + cy) % 2 != 0 {
                    continue;
                }
                let x = cx as f32 * CELL_SIZE;
                let y = cy as f32 * CELL_SIZE;
                let skew = CELL_SIZE * 0.25;

                if self.map_id % 2 == 1 && cx.abs() < 3 && cy.abs() < 3 {
                    upper.push(Trapezoid::rect(1, x, y, x + CELL_SIZE, y + CELL_SIZE));
                } else {
                    ground.push(Trapezoid::new(
                        0,
                        (x + skew, x + CELL_SIZE - skew, y + CELL_SIZE),
                        (x, x + CELL_SIZE, y),
                    ));
                }
            }
        }

        let mut layers = vec![Layer::new(0, ground)];
        if !upper.is_empty() {
            layers.push(Layer::new(1, upper));
        }
        Ok(layers)
    }

    fn map_boundary(&self) -> Result<BoundaryRect, HostError> {
        Ok(BoundaryRect::new(-MAP_HALF_EXTENT, MAP_HALF_EXTENT, -MAP_HALF_EXTENT, MAP_HALF_EXTENT))
    }
}

impl WorldState for SimHost {
    fn map_id(&self) -> Result<MapId, HostError> {
        Ok(self.map_id)
    }

    fn is_map_ready(&self) -> Result<bool, HostError> {
        Ok(!self.loading)
    }

    fn player_agent_id(&self) -> Result<AgentId, HostError> {
        Ok(PLAYER_ID)
    }

    fn player_position(&self) -> Result<Point2, HostError> {
        Ok(self.player)
    }

    fn player_alive(&self) -> Result<bool, HostError> {
        Ok(true)
    }

    fn camera_yaw(&self) -> Result<f32, HostError> {
        Ok(self.yaw)
    }

    fn agent_ids(&self) -> Result<Vec<AgentId>, HostError> {
        let mut ids = vec![PLAYER_ID];
        ids.extend(self.agents.iter().map(|agent| agent.id));
        Ok(ids)
    }

    fn agent_position(&self, id: AgentId) -> Result<Point2, HostError> {
        if id == PLAYER_ID {
            return Ok(self.player);
        }
        self.agent(id, "agent_position").map(|agent| agent.position)
    }

    fn agent_alive(&self, id: AgentId) -> Result<bool, HostError> {
        self.agent(id, "agent_alive").map(|agent| agent.alive)
    }

    fn agent_is_boss(&self, id: AgentId) -> Result<bool, HostError> {
        self.agent(id, "agent_is_boss").map(|agent| agent.boss)
    }

    fn agent_allegiance(&self, id: AgentId) -> Result<Allegiance, HostError> {
        self.agent(id, "agent_allegiance").map(|agent| agent.allegiance)
    }

    fn agent_primary_profession(&self, id: AgentId) -> Result<Profession, HostError> {
        self.agent(id, "agent_primary_profession").map(|agent| agent.profession)
    }
}

/// Draw list that only counts primitives
#[derive(Debug, Default)]
pub struct CountingDrawList {
    /// Filled quads
    pub quads: usize,
    /// Filled circles
    pub filled_circles: usize,
    /// Circle outlines
    pub outlines: usize,
}

impl DrawList for CountingDrawList {
    fn add_quad_filled(&mut self, _points: &[Point2; 4], _color: Color) -> Result<(), HostError> {
        self.quads += 1;
        Ok(())
    }

    fn add_circle_filled(&mut self, _center: Point2, _radius: f32, _color: Color, _segments: u32) -> Result<(), HostError> {
        self.filled_circles += 1;
        Ok(())
    }

    fn add_circle(
        &mut self,
        _center: Point2,
        _radius: f32,
        _color: Color,
        _segments: u32,
        _thickness: f32,
    ) -> Result<(), HostError> {
        self.outlines += 1;
        Ok(())
    }
}
