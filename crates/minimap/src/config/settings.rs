//! # Minimap Configuration
//!
//! Everything the host's configuration UI can change, plus the tuning values
//! of the frame pipeline. All fields default to the in-game widget's behavior,
//! so a partial TOML or RON file only needs to name what it overrides.

use super::{Config, ConfigError};
use crate::agents::DEFAULT_REFRESH_INTERVAL;
use crate::pathing::{LayerFilter, MapFilterEntry};
use serde::{Deserialize, Serialize};

/// Smallest accepted zoom (pixels per world unit)
pub const MIN_ZOOM: f32 = 0.01;

/// Largest accepted zoom (pixels per world unit)
pub const MAX_ZOOM: f32 = 0.1;

/// Zoom used when nothing else is configured
pub const DEFAULT_ZOOM: f32 = 0.03;

/// How the map follows camera yaw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationMode {
    /// Exponentially blend toward the camera yaw every frame
    Smooth,
    /// Use the camera yaw as-is
    #[default]
    Instant,
}

/// # Minimap Configuration
///
/// In-memory per session unless the host chooses to persist it through [`Config`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimapConfig {
    /// Whether the minimap draws at all
    pub enabled: bool,
    /// Pixels per world unit, kept within `[MIN_ZOOM, MAX_ZOOM]`
    pub zoom: f32,
    /// Yaw following mode
    pub rotation_mode: RotationMode,
    /// Negate the rotated vertical axis
    pub invert_y: bool,
    /// Only cache pathing layers on this plane
    pub plane_filter: Option<u32>,
    /// Per-frame blend factor for smooth rotation
    pub smoothing_factor: f32,
    /// Seconds between agent snapshots
    pub agent_refresh_interval: f64,
    /// Agents farther than this (world units) are not drawn
    pub max_agent_render_distance: f32,
    /// Filter entries added to the built-in broken-map table
    pub layer_filters: Vec<MapFilterEntry>,
}

impl MinimapConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self {
            enabled: true,
            zoom: DEFAULT_ZOOM,
            rotation_mode: RotationMode::default(),
            invert_y: true,
            plane_filter: None,
            smoothing_factor: 0.15,
            agent_refresh_interval: DEFAULT_REFRESH_INTERVAL,
            max_agent_render_distance: 5000.0,
            layer_filters: Vec::new(),
        }
    }

    /// Enable or disable drawing
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set zoom, clamped to the accepted range
    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.zoom = clamp_zoom(zoom);
        self
    }

    /// Set rotation mode
    pub fn with_rotation_mode(mut self, mode: RotationMode) -> Self {
        self.rotation_mode = mode;
        self
    }

    /// Set vertical flip
    pub fn with_invert_y(mut self, invert_y: bool) -> Self {
        self.invert_y = invert_y;
        self
    }

    /// Restrict the cache to one plane
    pub fn with_plane_filter(mut self, plane: Option<u32>) -> Self {
        self.plane_filter = plane;
        self
    }

    /// Add a broken-map filter entry
    pub fn with_layer_filter(mut self, entry: MapFilterEntry) -> Self {
        self.layer_filters.push(entry);
        self
    }

    /// Built-in filter table extended with the configured entries
    pub fn layer_filter(&self) -> LayerFilter {
        let mut filter = LayerFilter::with_known_maps();
        filter.extend(&self.layer_filters);
        filter
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.zoom.is_finite() || !(MIN_ZOOM..=MAX_ZOOM).contains(&self.zoom) {
            return Err(ConfigError::Invalid(format!(
                "zoom {} outside [{}, {}]",
                self.zoom, MIN_ZOOM, MAX_ZOOM
            )));
        }

        if !(self.smoothing_factor > 0.0 && self.smoothing_factor <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "smoothing factor {} must be in (0, 1]",
                self.smoothing_factor
            )));
        }

        if !self.agent_refresh_interval.is_finite() || self.agent_refresh_interval < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "agent refresh interval {} must be a non-negative number of seconds",
                self.agent_refresh_interval
            )));
        }

        if !(self.max_agent_render_distance.is_finite() && self.max_agent_render_distance > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "agent render distance {} must be positive",
                self.max_agent_render_distance
            )));
        }

        Ok(())
    }
}

impl Default for MinimapConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for MinimapConfig {}

/// Clamp a zoom value into `[MIN_ZOOM, MAX_ZOOM]`; NaN falls back to the default
pub fn clamp_zoom(zoom: f32) -> f32 {
    if zoom.is_nan() {
        DEFAULT_ZOOM
    } else {
        zoom.clamp(MIN_ZOOM, MAX_ZOOM)
    }
}
