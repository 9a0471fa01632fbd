//! Volume and surface area of a hull given as indexed triangles.

use crate::core::vec3::Vec3;
use crate::hull::Triangle;

/// Enclosed volume, positive for outward (counter-clockwise) winding.
///
/// Sums signed tetrahedra against the origin, so it is exact only for a
/// closed surface.
///
/// # Examples
/// ```
/// use incremental_hull::{hull, metrics::volume, Vec3};
/// let pts = [Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z];
/// let v = volume(&pts, &hull(&pts));
/// assert!((v - 1.0 / 6.0).abs() < 1e-12);
/// ```
pub fn volume(points: &[Vec3], triangles: &[Triangle]) -> f64 {
    triangles
        .iter()
        .map(|t| {
            let [a, b, c] = t.vertices();
            points[a].dot(points[b].cross(points[c]))
        })
        .sum::<f64>()
        / 6.0
}

/// Total triangle area.
pub fn surface_area(points: &[Vec3], triangles: &[Triangle]) -> f64 {
    triangles
        .iter()
        .map(|t| {
            let [a, b, c] = t.vertices();
            (points[b] - points[a]).cross(points[c] - points[a]).length() / 2.0
        })
        .sum()
}
