//! # Geometric Primitives
//!
//! Point-to-line distance, signed point-to-plane distance and plane
//! construction from three points. Pure functions over [`Vec3`].

use crate::core::vec3::Vec3;

/// Distance from `point` to the line through the origin along
/// `unit_direction`.
///
/// `unit_direction` must have unit length; the result is scaled otherwise.
///
/// # Examples
/// ```
/// use incremental_hull::geometry::distance_to_line;
/// use incremental_hull::Vec3;
/// let d = distance_to_line(Vec3::new(3.0, 4.0, 0.0), Vec3::X);
/// assert_eq!(d, 4.0);
/// ```
pub fn distance_to_line(point: Vec3, unit_direction: Vec3) -> f64 {
    (point - unit_direction * point.dot(unit_direction)).length()
}

/// Oriented plane: `normal · p - offset` is the signed distance of `p`.
///
/// Positive distances are on the side the normal points to, which for a hull
/// face is outside the hull.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal (zero for [`Plane::ZERO`]).
    pub normal: Vec3,
    /// Distance of the plane from the origin along `normal`.
    pub offset: f64,
}

impl Plane {
    /// Sentinel plane with zero normal and offset.
    ///
    /// Every point has distance `0.0` from it, so it never reports a point
    /// as outside.
    pub const ZERO: Self = Self {
        normal: Vec3::ZERO,
        offset: 0.0,
    };

    /// Plane through `a`, `b`, `c` with normal `(c - a) × (b - a)`.
    ///
    /// The normal points toward the side from which `a`, `b`, `c` appear
    /// clockwise. Returns `None` when the points are collinear.
    ///
    /// # Examples
    /// ```
    /// use incremental_hull::{Plane, Vec3};
    /// let plane = Plane::through(Vec3::ZERO, Vec3::Y, Vec3::X).unwrap();
    /// assert_eq!(plane.normal, Vec3::Z);
    /// assert!(Plane::through(Vec3::ZERO, Vec3::X, Vec3::X * 2.0).is_none());
    /// ```
    pub fn through(a: Vec3, b: Vec3, c: Vec3) -> Option<Self> {
        let cross = (c - a).cross(b - a);
        let length = cross.length();
        if length == 0.0 {
            return None;
        }
        Some(Self {
            normal: cross / length,
            offset: cross.dot(a) / length,
        })
    }

    /// Like [`Plane::through`], falling back to [`Plane::ZERO`].
    pub fn through_or_zero(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self::through(a, b, c).unwrap_or(Self::ZERO)
    }

    /// Signed distance of `point`; positive on the normal's side.
    #[inline]
    pub fn signed_distance(&self, point: Vec3) -> f64 {
        self.normal.dot(point) - self.offset
    }

    /// True for [`Plane::ZERO`].
    pub fn is_degenerate(&self) -> bool {
        self.normal == Vec3::ZERO
    }
}
