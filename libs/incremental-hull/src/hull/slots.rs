//! # Triangle Slots
//!
//! Index-addressed arena of hull triangles with recycled slots.
//!
//! ## Memory Layout
//!
//! ```text
//! triangles: [a, b, c]      build order, clockwise from outside
//! planes:    Option<Plane>  None for zero-area triangles
//! kept:      bool           live flag
//! dropped:   Vec<usize>     free slots, most recent on top
//! ```
//!
//! Slot indices never leave the hull builder; only [`Triangle`]s do.

use super::triangle::{HalfEdge, Triangle};
use crate::core::vec3::Vec3;
use crate::geometry::Plane;
use std::collections::HashSet;

/// Working set of hull triangles.
#[derive(Debug, Default)]
pub(crate) struct TriangleSlots {
    triangles: Vec<[usize; 3]>,
    planes: Vec<Option<Plane>>,
    kept: Vec<bool>,
    dropped: Vec<usize>,
}

impl TriangleSlots {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
            planes: Vec::with_capacity(capacity),
            kept: Vec::with_capacity(capacity),
            dropped: Vec::new(),
        }
    }

    /// Stores triangle `(a, b, c)`, reusing the most recently dropped slot.
    ///
    /// `(a, b, c)` must be clockwise seen from outside, i.e. the plane
    /// normal `(c - a) × (b - a)` points outward.
    pub(crate) fn add(&mut self, points: &[Vec3], a: usize, b: usize, c: usize) {
        let triangle = [a, b, c];
        let plane = Plane::through(points[a], points[b], points[c]);
        match self.dropped.pop() {
            Some(slot) => {
                self.triangles[slot] = triangle;
                self.planes[slot] = plane;
                self.kept[slot] = true;
            }
            None => {
                self.triangles.push(triangle);
                self.planes.push(plane);
                self.kept.push(true);
            }
        }
    }

    /// Drops every live triangle `point` is more than `precision` outside
    /// of, recording its directed edges into `half_edges`.
    ///
    /// Returns the number of dropped triangles.
    pub(crate) fn drop_conflicts(
        &mut self,
        point: Vec3,
        precision: f64,
        half_edges: &mut HashSet<HalfEdge>,
    ) -> usize {
        let mut conflicts = 0;
        for slot in 0..self.triangles.len() {
            if !self.kept[slot] {
                continue;
            }
            let outside = self.planes[slot]
                .is_some_and(|plane| plane.signed_distance(point) > precision);
            if outside {
                let [a, b, c] = self.triangles[slot];
                half_edges.insert((a, b));
                half_edges.insert((b, c));
                half_edges.insert((c, a));
                self.dropped.push(slot);
                self.kept[slot] = false;
                conflicts += 1;
            }
        }
        conflicts
    }

    /// Number of live triangles.
    pub(crate) fn live_count(&self) -> usize {
        self.triangles.len() - self.dropped.len()
    }

    /// Number of allocated slots, live or not.
    pub(crate) fn capacity_used(&self) -> usize {
        self.triangles.len()
    }

    /// Consumes the arena, returning live triangles counter-clockwise from
    /// outside.
    pub(crate) fn into_triangles(self) -> Vec<Triangle> {
        debug_assert_eq!(
            self.kept.iter().filter(|&&kept| kept).count(),
            self.live_count()
        );
        self.triangles
            .into_iter()
            .zip(self.kept)
            .filter_map(|([a, b, c], kept)| kept.then_some(Triangle::new(c, b, a)))
            .collect()
    }
}
