//! Planar points and displacement vectors in world (screen) coordinates.
//!
//! The pendulum lives in a screen-style plane: the origin is wherever the
//! host puts it, X grows to the right and Y grows *downward*, so a bob
//! hanging straight down has a larger Y than its pivot.
//!
//! ```text
//!   ┌───── +x
//!   │
//!   │
//!   +y
//! ```

use core::ops::{Add, Sub};

/// A position in the plane.
///
/// # Example
///
/// ```rust
/// use pendulum::{Point, Vector};
///
/// let pivot = Point::new(100.0, 50.0);
/// let bob = pivot + Vector::new(0.0, 20.0);
/// assert_eq!(bob, Point::new(100.0, 70.0));
/// assert_eq!((bob - pivot).magnitude(), 20.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate (grows downward).
    pub y: f64,
}

impl Point {
    /// Creates a new point with the given coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the origin point (0, 0).
    #[inline]
    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Whether both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    #[inline]
    fn add(self, v: Vector) -> Point {
        Point {
            x: self.x + v.x,
            y: self.y + v.y,
        }
    }
}

impl Sub for Point {
    type Output = Vector;

    #[inline]
    fn sub(self, other: Point) -> Vector {
        Vector {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

/// A displacement between two points.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
}

impl Vector {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the magnitude (length) of the vector.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-10;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn test_point_add_vector() {
        let p = Point::new(1.0, 2.0);
        let result = p + Vector::new(4.0, 5.0);

        assert!(approx_eq(result.x, 5.0));
        assert!(approx_eq(result.y, 7.0));
    }

    #[test]
    fn test_point_sub_point() {
        let v = Point::new(5.0, 7.0) - Point::new(1.0, 2.0);

        assert!(approx_eq(v.x, 4.0));
        assert!(approx_eq(v.y, 5.0));
    }

    #[test]
    fn test_magnitude() {
        let v = Point::new(4.0, 5.0) - Point::new(1.0, 1.0);
        assert!(approx_eq(v.magnitude(), 5.0));
        assert!(approx_eq(Vector::new(-3.0, 0.0).magnitude(), 3.0));
    }

    #[test]
    fn test_is_finite() {
        assert!(Point::new(1.0, 2.0).is_finite());
        assert!(!Point::new(f64::NAN, 2.0).is_finite());
        assert!(!Point::new(1.0, f64::INFINITY).is_finite());
    }
}
