//! Per-frame world-to-canvas rendering
//!
//! Draw order within a frame is fixed: pathing quads, agents, range rings,
//! then the player marker.

pub mod palette;
pub mod view;
pub mod projector;
pub mod compositor;

pub use palette::{rgba, Color, RangeRing};
pub use view::{Canvas, ViewState};
pub use projector::{project, Projector};
pub use compositor::{FrameCompositor, FrameStats, PATHING_RETRY_INTERVAL};

use crate::host::HostError;
use std::fmt;
use thiserror::Error;

/// Draw pass of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPass {
    /// Map id, player position and camera yaw lookups before any drawing
    Setup,
    /// Pathing quads
    Static,
    /// Agent markers
    Dynamic,
    /// Range rings and player marker
    Auxiliary,
}

impl fmt::Display for RenderPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Setup => "setup",
            Self::Static => "static",
            Self::Dynamic => "dynamic",
            Self::Auxiliary => "auxiliary",
        };
        f.write_str(name)
    }
}

/// A frame's drawing was abandoned
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{pass} pass aborted: {source}")]
pub struct DrawError {
    /// Pass that failed
    pub pass: RenderPass,
    /// Underlying host failure
    #[source]
    pub source: HostError,
}

impl DrawError {
    pub(crate) fn in_pass(pass: RenderPass) -> impl Fn(HostError) -> Self {
        move |source| Self { pass, source }
    }
}
