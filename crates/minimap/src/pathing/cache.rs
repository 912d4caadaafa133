//! Precomputed, filtered pathing quads
//!
//! [`PolygonCache`] is an immutable product of one map load. [`GeometryCache`]
//! owns the current one and only ever replaces it wholesale: a failed fetch
//! leaves the previous cache exactly as it was.

use super::{fetch, BoundaryRect, LayerFilter, PathingError, Quad, RawPathing};
use crate::host::{MapId, PathingSource};

/// Accepted quads of one vertical plane
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaneGeometry {
    /// Vertical plane index
    pub plane: u32,
    /// World-space quads in host order
    pub quads: Vec<Quad>,
}

/// Filtered world-space quads grouped by plane, for exactly one map
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolygonCache {
    map_id: Option<MapId>,
    boundary: Option<BoundaryRect>,
    geometry_bounds: Option<BoundaryRect>,
    primary_plane: u32,
    planes: Vec<PlaneGeometry>,
    quad_count: usize,
}

impl PolygonCache {
    /// Build a cache from raw pathing data
    ///
    /// Malformed trapezoids are logged and skipped; they never abort their layer.
    pub fn build(map_id: MapId, raw: &RawPathing, plane_filter: Option<u32>, filter: &LayerFilter) -> Self {
        let mut cache = Self {
            map_id: Some(map_id),
            boundary: Some(raw.boundary),
            geometry_bounds: None,
            primary_plane: raw.primary_plane(),
            planes: Vec::new(),
            quad_count: 0,
        };

        let layers: Vec<_> = raw
            .layers
            .iter()
            .filter(|layer| plane_filter.map_or(true, |plane| layer.plane == plane))
            .collect();

        let Some(reference) = layers.first() else {
            log::debug!("Map {}: no pathing layers match plane filter {:?}", map_id, plane_filter);
            return cache;
        };
        cache.geometry_bounds = BoundaryRect::of_layer(reference);

        let mut rejected = 0usize;
        for layer in layers {
            let mut quads = Vec::with_capacity(layer.trapezoids.len());

            for (index, trapezoid) in layer.trapezoids.iter().enumerate() {
                if !filter.accept(map_id, trapezoid) {
                    rejected += 1;
                    continue;
                }

                match trapezoid.corners() {
                    Some(quad) => quads.push(quad),
                    None => {
                        let error = PathingError::PrimitiveExtraction { plane: layer.plane, index };
                        log::warn!("Map {}: skipping trapezoid: {}", map_id, error);
                    }
                }
            }

            cache.quad_count += quads.len();
            match cache.planes.iter_mut().find(|existing| existing.plane == layer.plane) {
                Some(existing) => existing.quads.extend(quads),
                None => cache.planes.push(PlaneGeometry { plane: layer.plane, quads }),
            }
        }

        if rejected > 0 {
            log::debug!("Map {}: layer filter rejected {} trapezoids", map_id, rejected);
        }

        cache
    }

    /// Map this cache was built for, `None` before the first successful load
    pub fn map_id(&self) -> Option<MapId> {
        self.map_id
    }

    /// Whether the cache belongs to `map_id`
    pub fn is_for(&self, map_id: MapId) -> bool {
        self.map_id == Some(map_id)
    }

    /// Map extent reported by the host
    pub fn boundary(&self) -> Option<BoundaryRect> {
        self.boundary
    }

    /// Bounds of the first plane-filtered layer
    pub fn geometry_bounds(&self) -> Option<BoundaryRect> {
        self.geometry_bounds
    }

    /// Plane drawn with the primary color
    pub fn primary_plane(&self) -> u32 {
        self.primary_plane
    }

    /// Plane groups in host layer order
    pub fn planes(&self) -> &[PlaneGeometry] {
        &self.planes
    }

    /// Quads of one plane
    pub fn plane(&self, plane: u32) -> Option<&[Quad]> {
        self.planes
            .iter()
            .find(|group| group.plane == plane)
            .map(|group| group.quads.as_slice())
    }

    /// Total number of cached quads
    pub fn quad_count(&self) -> usize {
        self.quad_count
    }

    /// Whether there is nothing to draw
    pub fn is_empty(&self) -> bool {
        self.quad_count == 0
    }
}

/// Owner of the current [`PolygonCache`]
#[derive(Debug, Clone, Default)]
pub struct GeometryCache {
    current: PolygonCache,
    filter: LayerFilter,
    plane_filter: Option<u32>,
}

impl GeometryCache {
    /// Create an empty cache
    pub fn new(filter: LayerFilter, plane_filter: Option<u32>) -> Self {
        Self {
            current: PolygonCache::default(),
            filter,
            plane_filter,
        }
    }

    /// Fetch and rebuild for `map_id`
    ///
    /// On fetch failure the previous cache is kept untouched and the error is returned.
    pub fn rebuild<S: PathingSource + ?Sized>(
        &mut self,
        map_id: MapId,
        source: &S,
    ) -> Result<&PolygonCache, PathingError> {
        let raw = fetch(source)?;
        self.current = PolygonCache::build(map_id, &raw, self.plane_filter, &self.filter);

        log::info!(
            "Pathing cache rebuilt for map {}: {} quads on {} planes",
            map_id,
            self.current.quad_count(),
            self.current.planes().len()
        );

        Ok(&self.current)
    }

    /// Current cache
    pub fn polygons(&self) -> &PolygonCache {
        &self.current
    }

    /// Whether the current cache was built for `map_id`
    pub fn is_current_for(&self, map_id: MapId) -> bool {
        self.current.is_for(map_id)
    }

    /// Drop the current cache so the next frame rebuilds
    pub fn invalidate(&mut self) {
        self.current = PolygonCache::default();
    }

    /// Active filter table
    pub fn filter(&self) -> &LayerFilter {
        &self.filter
    }

    /// Replace the filter table and plane filter; takes effect on the next rebuild
    pub fn reconfigure(&mut self, filter: LayerFilter, plane_filter: Option<u32>) {
        if self.filter != filter || self.plane_filter != plane_filter {
            self.filter = filter;
            self.plane_filter = plane_filter;
            self.invalidate();
        }
    }
}
