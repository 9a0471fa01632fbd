//! # Incremental Hull Builder
//!
//! Grows the hull one point at a time from an initial tetrahedron.
//!
//! ## Insertion Step
//!
//! For point `i`:
//! 1. Drop every live triangle whose plane has `i` more than `precision`
//!    outside, recording its three directed half-edges
//! 2. A recorded edge `(u, v)` is on the horizon unless `(v, u)` was also
//!    recorded; opposite pairs are interior to the dropped region
//! 3. Add `(u, v, i)` for every horizon edge, refilling dropped slots first
//!
//! Points inside the current hull drop nothing and leave it unchanged.
//! There is no conflict graph: each insertion scans all live triangles once.

mod slots;
mod triangle;


pub use triangle::{HalfEdge, Triangle};

use crate::core::vec3::Vec3;
use crate::error::{HullError, HullResult};
use crate::geometry::Plane;
use crate::scan::{find_triple, first_non_coplanar};
use config::constants::MIN_HULL_POINTS;
use slots::TriangleSlots;
use std::collections::HashSet;
use tracing::{debug, trace};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Convex hull of `points` using an explicit tolerance.
///
/// Returns triangles of input indices, counter-clockwise seen from outside,
/// in no particular order. Fewer than 4 points, or collinear or coplanar
/// input, yields an empty list; so does a negative or non-finite
/// `precision`. Use [`try_hull`] to learn which.
///
/// # Examples
///
/// ```rust
/// use incremental_hull::{hull_with_precision, Vec3};
///
/// let flat = [Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::new(1.0, 1.0, 0.0)];
/// assert!(hull_with_precision(&flat, 1e-9).is_empty());
/// ```
pub fn hull_with_precision(points: &[Vec3], precision: f64) -> Vec<Triangle> {
    try_hull(points, precision).unwrap_or_else(|err| {
        debug!(points = points.len(), precision, %err, "no hull");
        Vec::new()
    })
}

/// Convex hull of `points`, reporting why no hull exists.
///
/// On success the triangles are the same as [`hull_with_precision`] returns.
///
/// # Errors
///
/// - [`HullError::InvalidPrecision`] if `precision` is negative or not finite
/// - [`HullError::TooFewPoints`] for fewer than 4 points
/// - [`HullError::Coincident`], [`HullError::Collinear`] or
///   [`HullError::Coplanar`] when the points span less than 3 dimensions
pub fn try_hull(points: &[Vec3], precision: f64) -> HullResult<Vec<Triangle>> {
    if !precision.is_finite() || precision < 0.0 {
        return Err(HullError::InvalidPrecision(precision));
    }
    if points.len() < MIN_HULL_POINTS {
        return Err(HullError::TooFewPoints {
            count: points.len(),
        });
    }

    let mut hull = IncrementalHull::bootstrap(points, precision)?;
    for index in 0..points.len() {
        if !hull.is_seed(index) {
            hull.insert(index);
        }
    }
    Ok(hull.into_triangles())
}

// =============================================================================
// HULL STRUCTURE
// =============================================================================

/// Hull under construction.
struct IncrementalHull<'a> {
    /// Caller's points, addressed by index
    points: &'a [Vec3],
    precision: f64,
    slots: TriangleSlots,
    /// Directed edges of triangles dropped by the current insertion
    half_edges: HashSet<HalfEdge>,
    /// Tetrahedron vertices, skipped by the insertion loop
    seeds: [usize; 4],
}

impl<'a> IncrementalHull<'a> {
    /// Builds the outward-oriented initial tetrahedron.
    fn bootstrap(points: &'a [Vec3], precision: f64) -> HullResult<Self> {
        let [p0, p1, p2] = find_triple(points, precision)?;
        let plane = Plane::through_or_zero(points[p0], points[p1], points[p2]);
        let apex = first_non_coplanar(points, &plane, precision).ok_or(HullError::Coplanar)?;

        // (a, b, c) is clockwise seen from the side away from the apex
        let a = p0;
        let (b, c) = if apex.above { (p2, p1) } else { (p1, p2) };
        let d = apex.index;
        debug!(a, b, c, d, "seed tetrahedron");

        let mut slots = TriangleSlots::with_capacity(2 * points.len());
        slots.add(points, a, b, c);
        slots.add(points, d, b, a);
        slots.add(points, c, d, a);
        slots.add(points, b, d, c);

        Ok(Self {
            points,
            precision,
            slots,
            half_edges: HashSet::new(),
            seeds: [a, b, c, d],
        })
    }

    fn is_seed(&self, index: usize) -> bool {
        self.seeds.contains(&index)
    }

    /// Adds point `index` to the hull.
    fn insert(&mut self, index: usize) {
        let conflicts =
            self.slots
                .drop_conflicts(self.points[index], self.precision, &mut self.half_edges);
        if conflicts == 0 {
            trace!(point = index, "interior point");
            return;
        }

        let horizon: Vec<HalfEdge> = self
            .half_edges
            .iter()
            .filter(|&&(u, v)| !self.half_edges.contains(&(v, u)))
            .copied()
            .collect();
        for &(u, v) in &horizon {
            self.slots.add(self.points, u, v, index);
        }
        self.half_edges.clear();

        trace!(
            point = index,
            conflicts,
            horizon = horizon.len(),
            live = self.slots.live_count(),
            slots = self.slots.capacity_used(),
            "inserted point"
        );
    }

    fn into_triangles(self) -> Vec<Triangle> {
        self.slots.into_triangles()
    }
}
