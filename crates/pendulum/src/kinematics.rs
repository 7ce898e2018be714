//! Forward and inverse kinematics for a single rod.
//!
//! Angles are measured from the downward vertical and grow clockwise on a
//! Y-down screen, so a rod at angle `θ` and length `l` hangs at offset
//! `(l·sin θ, l·cos θ)` from its pivot.
//!
//! The lower rod of a [`DoublePendulum`](crate::DoublePendulum) is stored with
//! the opposite sign: callers pass `-ang1` here and negate the angle returned
//! by [`polar_offset`].

use crate::geometry::{Point, Vector};

/// Position of a bob hanging from `origin` at `angle` with rod `length`.
///
/// # Example
///
/// ```rust
/// use pendulum::{bob_position, Point};
///
/// let bob = bob_position(Point::new(10.0, 10.0), 0.0, 5.0);
/// assert_eq!(bob, Point::new(10.0, 15.0));
/// ```
#[inline]
pub fn bob_position(origin: Point, angle: f64, length: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    origin + Vector::new(length * sin, length * cos)
}

/// Rod length and angle that place a bob hanging from `pivot` at `bob`.
///
/// Inverse of [`bob_position`]. The angle is `atan2(dx, dy)`, x-component
/// first, which is what makes it agree with the `(sin, cos)` offset above.
/// The result lies in `[-π, π]`.
///
/// # Example
///
/// ```rust
/// use pendulum::{polar_offset, Point};
///
/// let (length, angle) = polar_offset(Point::origin(), Point::new(3.0, 4.0));
/// assert_eq!(length, 5.0);
/// assert!((angle - 3.0_f64.atan2(4.0)).abs() < 1e-12);
/// ```
#[inline]
pub fn polar_offset(pivot: Point, bob: Point) -> (f64, f64) {
    let d = bob - pivot;
    (d.magnitude(), d.x.atan2(d.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, PI};

    const TOLERANCE: f64 = 1e-10;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn test_straight_down() {
        let p = bob_position(Point::new(2.0, 3.0), 0.0, 4.0);
        assert!(approx_eq(p.x, 2.0));
        assert!(approx_eq(p.y, 7.0));
    }

    #[test]
    fn test_positive_angle_swings_right() {
        let p = bob_position(Point::origin(), FRAC_PI_2, 1.0);
        assert!(approx_eq(p.x, 1.0));
        assert!(approx_eq(p.y, 0.0));
    }

    #[test]
    fn test_inverted_points_up() {
        let p = bob_position(Point::origin(), PI, 2.0);
        assert!(approx_eq(p.x, 0.0));
        assert!(approx_eq(p.y, -2.0));
    }

    #[test]
    fn test_polar_offset_inverts_bob_position() {
        let pivot = Point::new(-1.5, 8.0);
        for &angle in &[-3.0, -1.2, 0.0, 0.4, 2.9] {
            let bob = bob_position(pivot, angle, 2.5);
            let (length, back) = polar_offset(pivot, bob);
            assert!(approx_eq(length, 2.5), "length {length}");
            assert!(approx_eq(back, angle), "angle {angle} came back as {back}");
        }
    }

    #[test]
    fn test_polar_offset_argument_order() {
        // Directly to the right of the pivot is +π/2, not 0.
        let (_, angle) = polar_offset(Point::origin(), Point::new(1.0, 0.0));
        assert!(approx_eq(angle, FRAC_PI_2));
    }

    #[test]
    fn test_polar_offset_coincident_points() {
        let (length, angle) = polar_offset(Point::new(1.0, 1.0), Point::new(1.0, 1.0));
        assert!(approx_eq(length, 0.0));
        assert!(approx_eq(angle, 0.0));
    }
}
