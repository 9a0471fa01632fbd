//! # Degeneracy Scanner
//!
//! Finds the points that seed the initial tetrahedron, or reports that the
//! input has no 3D extent.
//!
//! Both scans are order dependent: the first index achieving a strictly
//! greater distance wins, so bootstrap selection is reproducible.

use crate::core::vec3::Vec3;
use crate::error::{HullError, HullResult};
use crate::geometry::{distance_to_line, Plane};

/// A point found off a supporting plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffPlane {
    /// Index of the point.
    pub index: usize,
    /// True when the point lies on the positive side of the plane.
    pub above: bool,
}

/// Three point indices that are not collinear within tolerance.
///
/// The triple is point 0, the point farthest from it, and the point farthest
/// from the line through those two. Returns `None` if all points coincide
/// within `precision`, or if no point is farther than
/// `precision × base distance` from that line.
///
/// # Examples
/// ```
/// use incremental_hull::scan::non_collinear_triple;
/// use incremental_hull::Vec3;
/// let pts = [Vec3::ZERO, Vec3::X, Vec3::X * 3.0, Vec3::new(1.0, 1.0, 0.0)];
/// assert_eq!(non_collinear_triple(&pts, 1e-9), Some([0, 2, 3]));
/// ```
pub fn non_collinear_triple(points: &[Vec3], precision: f64) -> Option<[usize; 3]> {
    find_triple(points, precision).ok()
}

/// First point (in index order) farther than `precision` from `plane`.
///
/// `None` means the input is flat and has no 3D hull.
///
/// # Examples
/// ```
/// use incremental_hull::scan::first_non_coplanar;
/// use incremental_hull::{Plane, Vec3};
/// let plane = Plane::through(Vec3::ZERO, Vec3::Y, Vec3::X).unwrap();
/// let pts = [Vec3::X, Vec3::Y, Vec3::new(0.0, 0.0, -2.0)];
/// let found = first_non_coplanar(&pts, &plane, 1e-9).unwrap();
/// assert_eq!((found.index, found.above), (2, false));
/// ```
pub fn first_non_coplanar(points: &[Vec3], plane: &Plane, precision: f64) -> Option<OffPlane> {
    points.iter().enumerate().find_map(|(index, &p)| {
        let dist = plane.signed_distance(p);
        (dist.abs() > precision).then_some(OffPlane {
            index,
            above: dist > precision,
        })
    })
}

/// Same as [`non_collinear_triple`], keeping the reason for failure.
pub(crate) fn find_triple(points: &[Vec3], precision: f64) -> HullResult<[usize; 3]> {
    if points.len() < 3 {
        return Err(HullError::TooFewPoints {
            count: points.len(),
        });
    }

    let origin = points[0];
    let mut farthest = 1;
    let mut base = origin.distance(points[1]);
    for (i, p) in points.iter().enumerate().skip(2) {
        let d = origin.distance(*p);
        if d > base {
            farthest = i;
            base = d;
        }
    }
    if base <= precision {
        return Err(HullError::Coincident);
    }

    let axis = (origin - points[farthest]) / base;
    let mut third = None;
    let mut offset = base * precision;
    for (i, p) in points.iter().enumerate().skip(1) {
        let off = distance_to_line(*p - origin, axis);
        if off > offset {
            third = Some(i);
            offset = off;
        }
    }

    third
        .map(|third| [0, farthest, third])
        .ok_or(HullError::Collinear)
}

#[cfg(test)]
mod tests;
