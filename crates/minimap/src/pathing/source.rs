//! Raw pathing retrieval

use super::{BoundaryRect, Layer, PathingError};
use crate::host::PathingSource;

/// Unfiltered pathing data for one map load
#[derive(Debug, Clone, PartialEq)]
pub struct RawPathing {
    /// Layers in host order
    pub layers: Vec<Layer>,
    /// Map extent
    pub boundary: BoundaryRect,
}

impl RawPathing {
    /// Plane of the first layer the host reported, independent of any plane filter
    pub fn primary_plane(&self) -> u32 {
        self.layers.first().map_or(0, |layer| layer.plane)
    }

    /// Total number of trapezoids across all layers
    pub fn trapezoid_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.trapezoids.len()).sum()
    }
}

/// Fetch layers and boundary in one round-trip
///
/// Either both arrive or the call fails; callers keep their previous cache on error.
pub fn fetch<S: PathingSource + ?Sized>(source: &S) -> Result<RawPathing, PathingError> {
    let layers = source.pathing_layers()?;
    let boundary = source.map_boundary()?;

    let raw = RawPathing { layers, boundary };
    log::debug!(
        "Fetched {} pathing layers ({} trapezoids), boundary {:?}",
        raw.layers.len(),
        raw.trapezoid_count(),
        raw.boundary
    );

    Ok(raw)
}
