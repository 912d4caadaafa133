//! Static pathing geometry
//!
//! Raw trapezoids come from the host once per map load, pass through the
//! per-map [`LayerFilter`], and end up as plane-grouped quads in a
//! [`PolygonCache`] that the static draw pass reads every frame.

pub mod trapezoid;
pub mod source;
pub mod filter;
pub mod cache;

pub use trapezoid::{BoundaryRect, Layer, Quad, Trapezoid};
pub use source::{fetch, RawPathing};
pub use filter::{known_maps, LayerFilter, MapFilterEntry, TrapezoidRule};
pub use cache::{GeometryCache, PlaneGeometry, PolygonCache};

use crate::host::HostError;
use thiserror::Error;

/// Pathing geometry errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathingError {
    /// The host could not deliver layers or boundaries
    #[error("failed to fetch pathing data: {0}")]
    Fetch(#[from] HostError),

    /// A single trapezoid could not be turned into a quad
    #[error("trapezoid {index} on plane {plane} has a non-finite corner")]
    PrimitiveExtraction {
        /// Plane of the malformed trapezoid
        plane: u32,
        /// Position of the trapezoid inside its layer
        index: usize,
    },

    /// Coordinate normalization against an empty or inverted boundary
    #[error("map boundary is degenerate: {0:?}")]
    DegenerateBoundary(BoundaryRect),
}
