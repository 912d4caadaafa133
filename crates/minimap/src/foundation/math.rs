//! Math utilities and types
//!
//! Provides the 2D math types used by the world-to-canvas transform.

pub use nalgebra::{Rotation2, Vector2, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 4D vector type (RGBA colors)
pub type Vec4 = Vector4<f32>;

/// 2D point type
pub type Point2 = nalgebra::Point2<f32>;

/// 2D rotation type
pub type Rot2 = Rotation2<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;
}

/// Math utility functions
pub mod utils {
    use super::constants::{PI, TAU};

    /// Wrap an angle into `[0, 2π)`
    pub fn wrap_angle(angle: f32) -> f32 {
        let wrapped = angle.rem_euclid(TAU);
        // rem_euclid can round up to exactly TAU for tiny negative inputs
        if wrapped >= TAU { 0.0 } else { wrapped }
    }

    /// Signed shortest-arc difference `to - from`, in `[-π, π)`
    pub fn shortest_arc(from: f32, to: f32) -> f32 {
        (to - from + PI).rem_euclid(TAU) - PI
    }

    /// Interpolate between two angles along the shortest arc
    ///
    /// The result is not wrapped; callers wrap before using it as a rotation.
    pub fn lerp_angle(a: f32, b: f32, t: f32) -> f32 {
        a + shortest_arc(a, b) * t
    }
}

#[cfg(test)]
mod tests {
    use super::constants::{PI, TAU};
    use super::utils::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_wrap_angle_range() {
        for raw in [-7.0_f32, -PI, -0.0, 0.0, 1.0, PI, TAU, 13.0] {
            let wrapped = wrap_angle(raw);
            assert!((0.0..TAU).contains(&wrapped), "{raw} wrapped to {wrapped}");
        }
        assert_relative_eq!(wrap_angle(-PI * 0.5), PI * 1.5, epsilon = 1e-5);
    }

    #[test]
    fn test_shortest_arc_crosses_zero() {
        // 350° -> 10° is +20°, not -340°
        let delta = shortest_arc(350.0_f32.to_radians(), 10.0_f32.to_radians());
        assert_relative_eq!(delta.to_degrees(), 20.0, epsilon = 1e-3);

        let delta = shortest_arc(10.0_f32.to_radians(), 350.0_f32.to_radians());
        assert_relative_eq!(delta.to_degrees(), -20.0, epsilon = 1e-3);
    }

    #[test]
    fn test_lerp_angle_full_step_reaches_target_equivalent() {
        let result = lerp_angle(0.1, TAU - 0.1, 1.0);
        assert_relative_eq!(result, -0.1, epsilon = 1e-5);
    }

    #[test]
    fn test_lerp_angle_converges_without_overshoot() {
        let target = 2.5_f32;
        for start in [-3.0_f32, -1.0, 0.0, 0.7, 3.1, 5.9] {
            let mut angle = start;
            let mut previous = shortest_arc(angle, target).abs();
            let mut iterations = 0;

            while previous > 1e-4 {
                angle = lerp_angle(angle, target, 0.15);
                let remaining = shortest_arc(angle, target).abs();
                assert!(remaining <= previous + 1e-6, "overshot from start {start}");
                previous = remaining;
                iterations += 1;
                assert!(iterations < 200, "no convergence from start {start}");
            }

            // The unwrapped angle never drifts more than one turn from the start
            assert!((angle - start).abs() <= PI + 1e-4);
        }
    }
}
