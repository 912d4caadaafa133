//! Per-frame orchestration
//!
//! Owns every piece of cross-frame state (pathing cache, agent snapshot, view)
//! and runs the frame in a fixed order:
//!
//! 1. rebuild pathing if the map changed
//! 2. follow the camera yaw
//! 3. static pass: pathing quads, circle-culled against the canvas
//! 4. dynamic pass: agent markers, distance-culled around the player
//! 5. auxiliary pass: range rings, then the player marker
//!
//! Host failures inside the passes end the frame's drawing; cached state is
//! never touched by a failing pass.

use super::palette::{self, RangeRing};
use super::projector::Projector;
use super::view::{Canvas, ViewState};
use super::{DrawError, RenderPass};
use crate::agents::{AgentCategory, EntitySnapshotCache, Profession};
use crate::config::MinimapConfig;
use crate::host::{DrawList, GameHost, MapId};
use crate::pathing::GeometryCache;

/// Seconds between pathing fetch attempts for a map whose fetch failed
pub const PATHING_RETRY_INTERVAL: f64 = 1.0;

/// Counters describing what one frame did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    /// Pathing was rebuilt this frame
    pub rebuilt: bool,
    /// Agent snapshot was refreshed this frame
    pub agents_refreshed: bool,
    /// Quads handed to the draw list
    pub quads_drawn: usize,
    /// Quads rejected by the visibility circle
    pub quads_culled: usize,
    /// Agent markers drawn
    pub agents_drawn: usize,
    /// Agents beyond the render distance
    pub agents_culled: usize,
    /// Range rings drawn
    pub rings_drawn: usize,
    /// Player marker drawn
    pub player_drawn: bool,
}

/// Frame driver for the minimap pipeline
#[derive(Debug, Clone)]
pub struct FrameCompositor {
    geometry: GeometryCache,
    agents: EntitySnapshotCache,
    view: ViewState,
    failed_map: Option<MapId>,
    retry_at: Option<f64>,
}

impl FrameCompositor {
    /// Create a compositor with empty caches
    pub fn new(config: &MinimapConfig) -> Self {
        Self {
            geometry: GeometryCache::new(config.layer_filter(), config.plane_filter),
            agents: EntitySnapshotCache::new(config.agent_refresh_interval),
            view: ViewState::default(),
            failed_map: None,
            retry_at: None,
        }
    }

    /// Push configuration changes into the caches
    ///
    /// Filter or plane changes invalidate the pathing cache; the next frame rebuilds.
    pub fn reconfigure(&mut self, config: &MinimapConfig) {
        self.geometry.reconfigure(config.layer_filter(), config.plane_filter);
        self.agents.set_interval(config.agent_refresh_interval);
    }

    /// Pathing cache
    pub fn geometry(&self) -> &GeometryCache {
        &self.geometry
    }

    /// Agent snapshot cache
    pub fn agents(&self) -> &EntitySnapshotCache {
        &self.agents
    }

    /// View of the last composed frame
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Drop the smoothed yaw so the next frame snaps to the camera
    pub fn reset_view(&mut self) {
        self.view.reset_smoothing();
    }

    /// Force a pathing rebuild and a fresh agent snapshot on the next frame
    pub fn invalidate(&mut self) {
        self.geometry.invalidate();
        self.agents.clear();
        self.failed_map = None;
        self.retry_at = None;
    }

    /// Compose one frame
    pub fn compose<H, D>(
        &mut self,
        host: &H,
        draw: &mut D,
        canvas: &Canvas,
        config: &MinimapConfig,
        now: f64,
    ) -> Result<FrameStats, DrawError>
    where
        H: GameHost + ?Sized,
        D: DrawList + ?Sized,
    {
        let setup = DrawError::in_pass(RenderPass::Setup);
        let mut stats = FrameStats::default();

        let map_id = host.map_id().map_err(&setup)?;
        stats.rebuilt = self.sync_geometry(host, map_id, now);

        let player = host.player_position().map_err(&setup)?;
        let yaw = host.camera_yaw().map_err(&setup)?;

        self.view.center = canvas.center();
        self.view.player = player;
        self.view.zoom = config.zoom;
        self.view.invert_y = config.invert_y;
        self.view.follow_yaw(yaw, config.rotation_mode, config.smoothing_factor);

        let projector = Projector::new(&self.view);

        if self.geometry.is_current_for(map_id) {
            self.static_pass(&projector, canvas, draw, &mut stats)?;
        }
        self.dynamic_pass(host, &projector, draw, config, now, &mut stats)?;
        self.auxiliary_pass(host, &projector, draw, &mut stats)?;

        Ok(stats)
    }

    /// Rebuild pathing when the cache belongs to another map (or to none)
    ///
    /// A map whose fetch failed is retried at most once per [`PATHING_RETRY_INTERVAL`].
    fn sync_geometry<H: GameHost + ?Sized>(&mut self, host: &H, map_id: MapId, now: f64) -> bool {
        if self.geometry.is_current_for(map_id) {
            return false;
        }
        if self.failed_map == Some(map_id) && self.retry_at.is_some_and(|at| now < at) {
            return false;
        }

        let previous = self.geometry.polygons().map_id();
        match self.geometry.rebuild(map_id, host) {
            Ok(_) => {
                if previous.is_some() && previous != Some(map_id) {
                    log::debug!("Map changed {:?} -> {}, resetting view smoothing", previous, map_id);
                    self.view.reset_smoothing();
                }
                self.failed_map = None;
                self.retry_at = None;
                true
            }
            Err(error) => {
                self.retry_at = Some(now + PATHING_RETRY_INTERVAL);
                if self.failed_map == Some(map_id) {
                    log::debug!("Pathing rebuild for map {} still failing: {}", map_id, error);
                } else {
                    log::warn!("Pathing rebuild for map {} failed, keeping previous cache: {}", map_id, error);
                    self.failed_map = Some(map_id);
                }
                false
            }
        }
    }

    fn static_pass<D: DrawList + ?Sized>(
        &self,
        projector: &Projector,
        canvas: &Canvas,
        draw: &mut D,
        stats: &mut FrameStats,
    ) -> Result<(), DrawError> {
        let fail = DrawError::in_pass(RenderPass::Static);
        let polygons = self.geometry.polygons();
        let radius_sq = canvas.visibility_radius().powi(2);
        let center = projector.center();

        for group in polygons.planes() {
            let color = palette::plane_color(group.plane == polygons.primary_plane());

            for quad in &group.quads {
                let points = projector.project_quad(quad);
                let visible = points
                    .iter()
                    .any(|point| (point - center).norm_squared() <= radius_sq);

                if !visible {
                    stats.quads_culled += 1;
                    continue;
                }

                draw.add_quad_filled(&points, color).map_err(&fail)?;
                stats.quads_drawn += 1;
            }
        }

        Ok(())
    }

    fn dynamic_pass<H, D>(
        &mut self,
        host: &H,
        projector: &Projector,
        draw: &mut D,
        config: &MinimapConfig,
        now: f64,
        stats: &mut FrameStats,
    ) -> Result<(), DrawError>
    where
        H: GameHost + ?Sized,
        D: DrawList + ?Sized,
    {
        let fail = DrawError::in_pass(RenderPass::Dynamic);

        match self.agents.maybe_refresh(host, now) {
            Ok(refreshed) => stats.agents_refreshed = refreshed,
            Err(error) => log::warn!("Keeping previous agent snapshot: {}", error),
        }

        let max_distance_sq = config.max_agent_render_distance.powi(2);
        let player = self.view.player;

        for entry in self.agents.entries() {
            if (entry.position - player).norm_squared() > max_distance_sq {
                stats.agents_culled += 1;
                continue;
            }

            let allegiance = host.agent_allegiance(entry.id).map_err(&fail)?;
            let profession = if entry.is_boss() {
                host.agent_primary_profession(entry.id).map_err(&fail)?
            } else {
                Profession::None
            };
            let category = AgentCategory::classify(entry.is_boss(), allegiance, profession);

            draw.add_circle_filled(
                projector.project(entry.position),
                palette::agent_radius(category),
                palette::agent_color(category, entry.is_alive()),
                palette::agent_segments(category),
            )
            .map_err(&fail)?;
            stats.agents_drawn += 1;
        }

        Ok(())
    }

    fn auxiliary_pass<H, D>(
        &self,
        host: &H,
        projector: &Projector,
        draw: &mut D,
        stats: &mut FrameStats,
    ) -> Result<(), DrawError>
    where
        H: GameHost + ?Sized,
        D: DrawList + ?Sized,
    {
        let fail = DrawError::in_pass(RenderPass::Auxiliary);
        let center = projector.center();

        for ring in RangeRing::ALL {
            draw.add_circle(
                center,
                projector.scale_radius(ring.radius()),
                ring.color(),
                palette::RING_SEGMENTS,
                palette::RING_THICKNESS,
            )
            .map_err(&fail)?;
            stats.rings_drawn += 1;
        }

        let alive = host.player_alive().map_err(&fail)?;
        draw.add_circle_filled(
            center,
            palette::PLAYER_RADIUS,
            palette::player_color(alive),
            palette::PLAYER_SEGMENTS,
        )
        .map_err(&fail)?;
        stats.player_drawn = true;

        Ok(())
    }
}
