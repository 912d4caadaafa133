//! Pathing primitives and map extents

use super::PathingError;
use crate::foundation::math::Point2;
use serde::{Deserialize, Serialize};

/// Four canvas or world points: top-left, top-right, bottom-right, bottom-left
pub type Quad = [Point2; 4];

/// Raw navigation primitive as the host stores it
///
/// Top and bottom edges are horizontal, so six scalars describe the four corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trapezoid {
    /// X of the top-left corner
    pub x_top_left: f32,
    /// X of the top-right corner
    pub x_top_right: f32,
    /// X of the bottom-left corner
    pub x_bottom_left: f32,
    /// X of the bottom-right corner
    pub x_bottom_right: f32,
    /// Y of the top edge
    pub y_top: f32,
    /// Y of the bottom edge
    pub y_bottom: f32,
    /// Vertical plane index
    pub plane: u32,
}

impl Trapezoid {
    /// Create a trapezoid from its edges
    pub fn new(
        plane: u32,
        (x_top_left, x_top_right, y_top): (f32, f32, f32),
        (x_bottom_left, x_bottom_right, y_bottom): (f32, f32, f32),
    ) -> Self {
        Self {
            x_top_left,
            x_top_right,
            x_bottom_left,
            x_bottom_right,
            y_top,
            y_bottom,
            plane,
        }
    }

    /// Axis-aligned rectangle helper, mostly for synthetic maps
    pub fn rect(plane: u32, x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> Self {
        Self::new(plane, (x_min, x_max, y_max), (x_min, x_max, y_min))
    }

    /// World-space corners, or `None` if any coordinate is NaN or infinite
    pub fn corners(&self) -> Option<Quad> {
        let finite = [
            self.x_top_left,
            self.x_top_right,
            self.x_bottom_left,
            self.x_bottom_right,
            self.y_top,
            self.y_bottom,
        ]
        .iter()
        .all(|v| v.is_finite());

        finite.then(|| {
            [
                Point2::new(self.x_top_left, self.y_top),
                Point2::new(self.x_top_right, self.y_top),
                Point2::new(self.x_bottom_right, self.y_bottom),
                Point2::new(self.x_bottom_left, self.y_bottom),
            ]
        })
    }
}

/// Trapezoids sharing one vertical plane
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Layer {
    /// Vertical plane index
    pub plane: u32,
    /// Primitives in host order
    pub trapezoids: Vec<Trapezoid>,
}

impl Layer {
    /// Create a layer
    pub fn new(plane: u32, trapezoids: Vec<Trapezoid>) -> Self {
        Self { plane, trapezoids }
    }
}

/// World-space rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryRect {
    /// Minimum X
    pub x_min: f32,
    /// Maximum X
    pub x_max: f32,
    /// Minimum Y
    pub y_min: f32,
    /// Maximum Y
    pub y_max: f32,
}

impl BoundaryRect {
    /// Create a rectangle from its extents
    pub fn new(x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> Self {
        Self { x_min, x_max, y_min, y_max }
    }

    /// Extent along X
    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    /// Extent along Y
    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }

    /// Normalize a world point into a `width` x `height` rectangle anchored at the origin
    pub fn scale_coords(&self, point: Point2, width: f32, height: f32) -> Result<Point2, PathingError> {
        if self.width() <= 0.0 || self.height() <= 0.0 {
            return Err(PathingError::DegenerateBoundary(*self));
        }

        Ok(Point2::new(
            (point.x - self.x_min) / self.width() * width,
            (point.y - self.y_min) / self.height() * height,
        ))
    }

    /// Bounds spanned by a layer: left-most top-left X, right-most top-right X,
    /// lowest bottom edge and highest top edge
    pub fn of_layer(layer: &Layer) -> Option<Self> {
        let first = layer.trapezoids.first()?;
        let seed = Self::new(first.x_top_left, first.x_top_right, first.y_bottom, first.y_top);

        Some(layer.trapezoids.iter().skip(1).fold(seed, |bounds, t| Self {
            x_min: bounds.x_min.min(t.x_top_left),
            x_max: bounds.x_max.max(t.x_top_right),
            y_min: bounds.y_min.min(t.y_bottom),
            y_max: bounds.y_max.max(t.y_top),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_corner_order() {
        let trapezoid = Trapezoid::new(0, (1.0, 9.0, 10.0), (0.0, 10.0, 0.0));
        let quad = trapezoid.corners().unwrap();

        assert_eq!(quad[0], Point2::new(1.0, 10.0));
        assert_eq!(quad[1], Point2::new(9.0, 10.0));
        assert_eq!(quad[2], Point2::new(10.0, 0.0));
        assert_eq!(quad[3], Point2::new(0.0, 0.0));
    }

    #[test]
    fn test_non_finite_trapezoid_has_no_corners() {
        let mut trapezoid = Trapezoid::rect(0, 0.0, 0.0, 10.0, 10.0);
        trapezoid.y_bottom = f32::NAN;
        assert!(trapezoid.corners().is_none());

        trapezoid.y_bottom = 0.0;
        trapezoid.x_top_right = f32::INFINITY;
        assert!(trapezoid.corners().is_none());
    }

    #[test]
    fn test_scale_coords() {
        let bounds = BoundaryRect::new(-100.0, 100.0, 0.0, 50.0);
        let scaled = bounds.scale_coords(Point2::new(0.0, 25.0), 400.0, 200.0).unwrap();

        assert_relative_eq!(scaled.x, 200.0);
        assert_relative_eq!(scaled.y, 100.0);
    }

    #[test]
    fn test_scale_coords_rejects_degenerate_bounds() {
        let bounds = BoundaryRect::new(10.0, 10.0, 0.0, 50.0);
        let result = bounds.scale_coords(Point2::origin(), 100.0, 100.0);
        assert_eq!(result, Err(PathingError::DegenerateBoundary(bounds)));
    }

    #[test]
    fn test_layer_bounds() {
        let layer = Layer::new(
            0,
            vec![
                Trapezoid::new(0, (-5.0, 5.0, 20.0), (-6.0, 6.0, 10.0)),
                Trapezoid::new(0, (2.0, 40.0, 8.0), (2.0, 30.0, -3.0)),
            ],
        );

        let bounds = BoundaryRect::of_layer(&layer).unwrap();
        assert_eq!(bounds, BoundaryRect::new(-5.0, 40.0, -3.0, 20.0));
        assert!(BoundaryRect::of_layer(&Layer::default()).is_none());
    }
}
