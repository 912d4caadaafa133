//! # Minimap Widget
//!
//! Entry point for hosts. Holds the configuration and the frame compositor,
//! gates drawing on world readiness, and turns per-frame failures into a
//! skipped frame instead of an error.

use crate::config::{clamp_zoom, ConfigError, MinimapConfig, RotationMode};
use crate::host::{DrawList, GameHost};
use crate::render::{Canvas, FrameCompositor, FrameStats};

/// What happened when a frame was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Drawing is switched off
    Disabled,
    /// The world is loading or hidden
    NotReady,
    /// The frame was drawn
    Drawn(FrameStats),
    /// A host failure ended the frame early; cached state is intact
    Skipped,
}

/// Rotating, zooming minimap
#[derive(Debug, Clone)]
pub struct Minimap {
    config: MinimapConfig,
    compositor: FrameCompositor,
}

impl Minimap {
    /// Create a minimap from a validated configuration
    pub fn new(config: MinimapConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let compositor = FrameCompositor::new(&config);

        log::info!(
            "Minimap created: zoom {}, rotation {:?}, invert_y {}",
            config.zoom,
            config.rotation_mode,
            config.invert_y
        );

        Ok(Self { config, compositor })
    }

    /// Draw one frame
    ///
    /// Never fails: host errors are logged and the frame is skipped.
    pub fn draw_frame<H, D>(&mut self, host: &H, draw: &mut D, canvas: &Canvas, now: f64) -> FrameOutcome
    where
        H: GameHost + ?Sized,
        D: DrawList + ?Sized,
    {
        if !self.config.enabled {
            return FrameOutcome::Disabled;
        }

        match host.is_map_ready() {
            Ok(true) => {}
            Ok(false) => return FrameOutcome::NotReady,
            Err(error) => {
                log::debug!("Readiness check failed, treating as not ready: {}", error);
                return FrameOutcome::NotReady;
            }
        }

        match self.compositor.compose(host, draw, canvas, &self.config, now) {
            Ok(stats) => FrameOutcome::Drawn(stats),
            Err(error) => {
                log::warn!("Minimap frame skipped: {}", error);
                FrameOutcome::Skipped
            }
        }
    }

    /// Current configuration
    pub fn config(&self) -> &MinimapConfig {
        &self.config
    }

    /// Replace the whole configuration
    pub fn configure(&mut self, config: MinimapConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.compositor.reconfigure(&config);
        self.config = config;
        Ok(())
    }

    /// Switch drawing on or off
    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    /// Set zoom, clamped to the accepted range; returns the value in effect
    pub fn set_zoom(&mut self, zoom: f32) -> f32 {
        self.config.zoom = clamp_zoom(zoom);
        self.config.zoom
    }

    /// Set rotation mode
    pub fn set_rotation_mode(&mut self, mode: RotationMode) {
        if self.config.rotation_mode != mode {
            log::debug!("Rotation mode {:?} -> {:?}", self.config.rotation_mode, mode);
            self.config.rotation_mode = mode;
        }
    }

    /// Set vertical flip
    pub fn set_invert_y(&mut self, invert_y: bool) {
        self.config.invert_y = invert_y;
    }

    /// Snap rotation to the camera on the next frame
    ///
    /// Hosts call this after a same-map teleport; map changes reset on their own.
    pub fn reset_view(&mut self) {
        self.compositor.reset_view();
    }

    /// Rebuild pathing and agents from scratch on the next frame
    pub fn invalidate(&mut self) {
        self.compositor.invalidate();
    }

    /// Number of cached pathing quads
    pub fn quad_count(&self) -> usize {
        self.compositor.geometry().polygons().quad_count()
    }

    /// Frame compositor, for inspection
    pub fn compositor(&self) -> &FrameCompositor {
        &self.compositor
    }
}
