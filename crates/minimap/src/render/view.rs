//! Canvas geometry and per-frame view parameters

use crate::config::RotationMode;
use crate::foundation::math::utils::{lerp_angle, wrap_angle};
use crate::foundation::math::{Point2, Vec2};

/// Margin kept between the host window edge and the canvas, in pixels
pub const CANVAS_MARGIN: f32 = 8.0;

/// Smallest canvas edge, in pixels
pub const MIN_CANVAS_SIZE: f32 = 300.0;

/// Screen rectangle the minimap draws into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    /// Top-left corner in screen coordinates
    pub origin: Point2,
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Canvas {
    /// Create a canvas
    pub fn new(origin: Point2, width: f32, height: f32) -> Self {
        Self { origin, width, height }
    }

    /// Lay out a canvas inside a host window's content region
    ///
    /// Keeps a fixed margin on every side and never shrinks below
    /// [`MIN_CANVAS_SIZE`] in either direction.
    pub fn from_content_region(window_pos: Point2, available: Vec2) -> Self {
        let margin = Vec2::new(CANVAS_MARGIN, CANVAS_MARGIN);
        Self {
            origin: window_pos + margin,
            width: (available.x - 2.0 * CANVAS_MARGIN).max(MIN_CANVAS_SIZE),
            height: (available.y - 2.0 * CANVAS_MARGIN).max(MIN_CANVAS_SIZE),
        }
    }

    /// Center point in screen coordinates
    pub fn center(&self) -> Point2 {
        self.origin + Vec2::new(self.width, self.height) * 0.5
    }

    /// Radius of the circle inside which geometry counts as visible
    pub fn visibility_radius(&self) -> f32 {
        self.width.min(self.height) * 0.5
    }
}

/// Render parameters for one frame, plus the yaw carried between frames
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Canvas center; the player is drawn here
    pub center: Point2,
    /// Player world position; the view is centered on it
    pub player: Point2,
    /// Pixels per world unit
    pub zoom: f32,
    /// Map rotation in radians, wrapped into `[0, 2π)`
    pub rotation: f32,
    /// Negate the rotated vertical axis
    pub invert_y: bool,
    smoothed_yaw: Option<f32>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(Point2::origin(), Point2::origin(), 1.0, 0.0, false)
    }
}

impl ViewState {
    /// Create a view without smoothing history
    pub fn new(center: Point2, player: Point2, zoom: f32, rotation: f32, invert_y: bool) -> Self {
        Self {
            center,
            player,
            zoom,
            rotation: wrap_angle(rotation),
            invert_y,
            smoothed_yaw: None,
        }
    }

    /// Follow the camera yaw and store the result as this frame's rotation
    ///
    /// Smooth mode blends the previous frame's yaw toward `camera_yaw` by
    /// `factor` along the shortest arc. The first frame after a reset snaps.
    pub fn follow_yaw(&mut self, camera_yaw: f32, mode: RotationMode, factor: f32) -> f32 {
        let yaw = match (mode, self.smoothed_yaw) {
            (RotationMode::Smooth, Some(previous)) => lerp_angle(previous, camera_yaw, factor),
            _ => camera_yaw,
        };

        let wrapped = wrap_angle(yaw);
        self.smoothed_yaw = Some(wrapped);
        self.rotation = wrapped;
        wrapped
    }

    /// Yaw carried into the next frame, if any
    pub fn smoothed_yaw(&self) -> Option<f32> {
        self.smoothed_yaw
    }

    /// Forget the smoothing history
    pub fn reset_smoothing(&mut self) {
        self.smoothed_yaw = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::constants::{PI, TAU};
    use crate::foundation::math::utils::shortest_arc;
    use approx::assert_relative_eq;

    #[test]
    fn test_content_region_layout() {
        let canvas = Canvas::from_content_region(Point2::new(100.0, 50.0), Vec2::new(416.0, 200.0));

        assert_eq!(canvas.origin, Point2::new(108.0, 58.0));
        assert_eq!(canvas.width, 400.0);
        assert_eq!(canvas.height, MIN_CANVAS_SIZE);
        assert_relative_eq!(canvas.center(), Point2::new(308.0, 208.0));
        assert_relative_eq!(canvas.visibility_radius(), 150.0);
    }

    #[test]
    fn test_instant_mode_uses_raw_yaw() {
        let mut view = ViewState::default();
        view.follow_yaw(1.0, RotationMode::Smooth, 0.15);

        let yaw = view.follow_yaw(2.0, RotationMode::Instant, 0.15);
        assert_relative_eq!(yaw, 2.0);
        assert_relative_eq!(view.rotation, 2.0);
    }

    #[test]
    fn test_smooth_mode_snaps_on_first_frame_then_blends() {
        let mut view = ViewState::default();

        assert_relative_eq!(view.follow_yaw(1.0, RotationMode::Smooth, 0.15), 1.0);
        assert_relative_eq!(view.follow_yaw(2.0, RotationMode::Smooth, 0.15), 1.15, epsilon = 1e-5);
    }

    #[test]
    fn test_smooth_mode_takes_short_way_around() {
        let mut view = ViewState::default();
        view.follow_yaw(TAU - 0.1, RotationMode::Smooth, 0.5);

        // Halfway between -0.1 and 0.1 is zero, possibly wrapped to just under TAU
        let yaw = view.follow_yaw(0.1, RotationMode::Smooth, 0.5);
        assert!(shortest_arc(yaw, 0.0).abs() < 1e-5, "yaw {yaw}");
    }

    #[test]
    fn test_smoothing_converges_and_stays_wrapped() {
        let mut view = ViewState::default();
        view.follow_yaw(-3.0, RotationMode::Smooth, 0.15);

        for _ in 0..100 {
            let yaw = view.follow_yaw(PI * 0.75, RotationMode::Smooth, 0.15);
            assert!((0.0..TAU).contains(&yaw));
        }

        let remaining = shortest_arc(view.rotation, PI * 0.75).abs();
        assert!(remaining < 1e-4, "remaining arc {remaining}");
    }

    #[test]
    fn test_reset_forgets_history() {
        let mut view = ViewState::default();
        view.follow_yaw(1.0, RotationMode::Smooth, 0.15);
        view.reset_smoothing();

        assert!(view.smoothed_yaw().is_none());
        assert_relative_eq!(view.follow_yaw(3.0, RotationMode::Smooth, 0.15), 3.0);
    }
}
