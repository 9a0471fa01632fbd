//! # Hull Validation
//!
//! Structural checks for a triangle list produced by the hull builder:
//! closure (watertight, consistently wound) and outward orientation.


use crate::core::vec3::Vec3;
use crate::error::{HullError, HullResult};
use crate::hull::{HalfEdge, Triangle};
use std::collections::{BTreeSet, HashSet};

/// Checks that every directed edge appears once and its reverse appears on
/// exactly one other triangle.
///
/// # Errors
///
/// [`HullError::NotClosed`] naming the first offending edge found.
///
/// # Examples
/// ```
/// use incremental_hull::{hull, validate::check_closed, Vec3};
/// let tris = hull(&[Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z]);
/// assert!(check_closed(&tris).is_ok());
/// assert!(check_closed(&tris[..3]).is_err());
/// ```
pub fn check_closed(triangles: &[Triangle]) -> HullResult<()> {
    let mut edges: HashSet<HalfEdge> = HashSet::with_capacity(3 * triangles.len());
    for triangle in triangles {
        for (from, to) in triangle.edges() {
            if !edges.insert((from, to)) {
                return Err(HullError::NotClosed {
                    from,
                    to,
                    reason: "edge used by more than one triangle",
                });
            }
        }
    }
    for &(from, to) in &edges {
        if !edges.contains(&(to, from)) {
            return Err(HullError::NotClosed {
                from,
                to,
                reason: "no opposite edge",
            });
        }
    }
    Ok(())
}

/// Checks that no point lies more than `precision` outside any face.
///
/// Zero-area faces are skipped.
///
/// # Errors
///
/// [`HullError::PointOutside`] for the first violation found.
pub fn check_outward(points: &[Vec3], triangles: &[Triangle], precision: f64) -> HullResult<()> {
    for triangle in triangles {
        let Some(plane) = triangle.plane(points) else {
            continue;
        };
        for (point, &p) in points.iter().enumerate() {
            let distance = plane.signed_distance(p);
            if distance > precision {
                return Err(HullError::PointOutside {
                    point,
                    triangle: triangle.vertices(),
                    distance,
                });
            }
        }
    }
    Ok(())
}

/// Sorted, distinct point indices used by `triangles`.
pub fn hull_vertices(triangles: &[Triangle]) -> Vec<usize> {
    triangles
        .iter()
        .flat_map(Triangle::vertices)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// `V - E + F` of the surface, counting each undirected edge once.
///
/// Equals 2 for a closed hull.
pub fn euler_characteristic(triangles: &[Triangle]) -> i64 {
    let vertices = hull_vertices(triangles).len() as i64;
    let edges = triangles
        .iter()
        .flat_map(Triangle::edges)
        .map(|(a, b)| (a.min(b), a.max(b)))
        .collect::<HashSet<_>>()
        .len() as i64;
    vertices - edges + triangles.len() as i64
}
