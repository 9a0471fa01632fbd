//! # Precision Selector
//!
//! Derives the hull tolerance from the data's own magnitude, so the same
//! shape at any scale produces the same triangles.


use crate::core::vec3::{infinity_norm, Vec3};
use crate::hull::{hull_with_precision, Triangle};
use config::constants::HullSettings;

/// Default tolerance: `1e-9 ×` the largest absolute coordinate component.
///
/// Input at the origin only gives `0.0`, i.e. exact comparisons.
///
/// # Examples
/// ```
/// use incremental_hull::{default_precision, Vec3};
/// let pts = [Vec3::new(-200.0, 3.0, 0.0), Vec3::new(5.0, 50.0, 1.0)];
/// assert_eq!(default_precision(&pts), 200.0 * 1e-9);
/// ```
pub fn default_precision(points: &[Vec3]) -> f64 {
    HullSettings::default().precision_for(infinity_norm(points))
}

/// Convex hull of `points` with the default, scale-relative tolerance.
///
/// See [`hull_with_precision`] for the output convention.
///
/// # Examples
/// ```
/// use incremental_hull::{hull, Vec3};
/// let pts = [Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z];
/// assert_eq!(hull(&pts).len(), 4);
/// ```
pub fn hull(points: &[Vec3]) -> Vec<Triangle> {
    hull_with_precision(points, default_precision(points))
}
