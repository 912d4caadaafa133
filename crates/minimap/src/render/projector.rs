//! World to canvas transform
//!
//! One formula serves pathing corners and agent positions alike: offset from
//! the player, rotate by `π/2 - rotation` so the camera's forward points up,
//! optionally mirror the vertical axis, scale by zoom, then move to the canvas
//! center. Range ring radii only take the zoom.

use super::view::ViewState;
use crate::foundation::math::constants::HALF_PI;
use crate::foundation::math::{Point2, Rot2};
use crate::pathing::Quad;

/// Project a single world point
pub fn project(world: Point2, view: &ViewState) -> Point2 {
    Projector::new(view).project(world)
}

/// Transform with the frame's trigonometry computed once
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    center: Point2,
    player: Point2,
    zoom: f32,
    flip: f32,
    rotation: Rot2,
}

impl Projector {
    /// Prepare the transform for a view
    pub fn new(view: &ViewState) -> Self {
        Self {
            center: view.center,
            player: view.player,
            zoom: view.zoom,
            flip: if view.invert_y { -1.0 } else { 1.0 },
            rotation: Rot2::new(HALF_PI - view.rotation),
        }
    }

    /// World point to canvas point
    pub fn project(&self, world: Point2) -> Point2 {
        let mut rotated = self.rotation * (world - self.player);
        rotated.y *= self.flip;
        self.center + rotated * self.zoom
    }

    /// All four corners of a quad
    pub fn project_quad(&self, quad: &Quad) -> Quad {
        quad.map(|corner| self.project(corner))
    }

    /// World distance to canvas distance
    pub fn scale_radius(&self, world_radius: f32) -> f32 {
        world_radius * self.zoom
    }

    /// Canvas center
    pub fn center(&self) -> Point2 {
        self.center
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::constants::PI;
    use crate::foundation::math::Vec2;
    use approx::assert_relative_eq;

    fn view(player: Point2, zoom: f32, rotation: f32, invert_y: bool) -> ViewState {
        ViewState::new(Point2::new(200.0, 150.0), player, zoom, rotation, invert_y)
    }

    #[test]
    fn test_player_maps_to_center() {
        let player = Point2::new(1234.0, -987.0);
        for rotation in [0.0, 1.0, 4.0] {
            let projected = project(player, &view(player, 0.03, rotation, true));
            assert_relative_eq!(projected, Point2::new(200.0, 150.0), epsilon = 1e-4);
        }
    }

    #[test]
    fn test_fixed_quarter_turn_at_zero_rotation() {
        let player = Point2::new(30.0, 40.0);
        let view = view(player, 1.0, 0.0, false);

        // +x in the world ends up pointing down the canvas, +y pointing left
        let projected = project(player + Vec2::new(7.0, 3.0), &view);
        assert_relative_eq!(projected, Point2::new(200.0 - 3.0, 150.0 + 7.0), epsilon = 1e-4);
    }

    #[test]
    fn test_invert_y_mirrors_vertical_axis() {
        let player = Point2::origin();
        let plain = project(Point2::new(7.0, 3.0), &view(player, 1.0, 0.0, false));
        let flipped = project(Point2::new(7.0, 3.0), &view(player, 1.0, 0.0, true));

        assert_relative_eq!(plain.x, flipped.x, epsilon = 1e-4);
        assert_relative_eq!(plain.y - 150.0, 150.0 - flipped.y, epsilon = 1e-4);
    }

    #[test]
    fn test_camera_facing_points_up() {
        // With invert_y, the direction the camera faces is drawn straight up
        let rotation = 0.8_f32;
        let player = Point2::new(-50.0, 10.0);
        let ahead = player + Vec2::new(rotation.cos(), rotation.sin()) * 100.0;

        let projected = project(ahead, &view(player, 1.0, rotation, true));
        assert_relative_eq!(projected, Point2::new(200.0, 50.0), epsilon = 1e-3);
    }

    #[test]
    fn test_rotation_preserves_distance_from_center() {
        let player = Point2::new(500.0, 500.0);
        let offset = Vec2::new(120.0, -45.0);
        let zoom = 0.05;

        for step in 0..16 {
            let rotation = step as f32 * PI / 8.0;
            for invert_y in [false, true] {
                let projected = project(player + offset, &view(player, zoom, rotation, invert_y));
                let distance = (projected - Point2::new(200.0, 150.0)).norm();
                assert_relative_eq!(distance, zoom * offset.norm(), epsilon = 1e-3);
            }
        }
    }

    #[test]
    fn test_quad_and_radius_use_same_zoom() {
        let projector = Projector::new(&view(Point2::origin(), 0.5, 0.0, false));
        let quad = [
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ];

        let projected = projector.project_quad(&quad);
        assert_relative_eq!(projected[0], projector.center(), epsilon = 1e-4);
        assert_relative_eq!((projected[1] - projected[0]).norm(), 5.0, epsilon = 1e-4);
        assert_relative_eq!(projector.scale_radius(1012.0), 506.0);
    }
}
