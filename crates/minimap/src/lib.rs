//! # Minimap
//!
//! A rotating, zoomable top-down minimap for a host game client.
//!
//! ## Features
//!
//! - **Pathing Cache**: Navigation trapezoids fetched once per map, filtered per map, drawn every frame
//! - **Agent Snapshots**: Live agent positions refreshed on an interval instead of every frame
//! - **Rotation**: Instant or smoothed camera-yaw following
//! - **Host Agnostic**: Game state and drawing go through small traits the host implements
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use minimap::prelude::*;
//!
//! fn frame<H: GameHost, D: DrawList>(minimap: &mut Minimap, host: &H, draw: &mut D, now: f64) {
//!     let canvas = Canvas::from_content_region(Point2::new(0.0, 0.0), Vec2::new(420.0, 420.0));
//!     if let FrameOutcome::Drawn(stats) = minimap.draw_frame(host, draw, &canvas, now) {
//!         println!("{} quads drawn", stats.quads_drawn);
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = MinimapConfig::load_from_file("minimap.toml").unwrap_or_default();
//!     let _minimap = Minimap::new(config)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod host;
pub mod pathing;
pub mod agents;
pub mod render;

mod minimap;

#[cfg(test)]
pub(crate) mod testing;

pub use minimap::{FrameOutcome, Minimap};

/// Common imports for minimap users
pub mod prelude {
    pub use crate::{
        FrameOutcome, Minimap,
        config::{Config, ConfigError, MinimapConfig, RotationMode},
        foundation::{
            math::{Point2, Vec2},
            time::Timer,
        },
        host::{AgentId, DrawList, GameHost, HostError, MapId, PathingSource, WorldState},
        agents::{Allegiance, Profession},
        pathing::{BoundaryRect, Layer, MapFilterEntry, Trapezoid, TrapezoidRule},
        render::{Canvas, Color, FrameStats},
    };
}
