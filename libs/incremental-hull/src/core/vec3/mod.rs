//! Thin wrapper around `glam::DVec3` shared across kernel modules.
//!
//! Callers hand points in as `Vec3`; the kernel never copies or reorders
//! them, so a point's slice index is its identity.

pub use glam::DVec3 as Vec3;

/// Largest absolute coordinate component across `points`.
///
/// Returns `0.0` for an empty slice.
///
/// # Examples
/// ```
/// use incremental_hull::core::vec3::{infinity_norm, Vec3};
/// let pts = [Vec3::new(1.0, -4.0, 2.0), Vec3::new(3.0, 0.0, 0.5)];
/// assert_eq!(infinity_norm(&pts), 4.0);
/// ```
pub fn infinity_norm(points: &[Vec3]) -> f64 {
    points
        .iter()
        .map(|p| p.abs().max_element())
        .fold(0.0, f64::max)
}
