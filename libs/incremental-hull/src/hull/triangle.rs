//! Output triangle type.

use crate::core::vec3::Vec3;
use crate::geometry::Plane;
use std::fmt;

/// Directed edge `(from, to)` between two point indices.
pub type HalfEdge = (usize, usize);

/// Hull face as three input point indices.
///
/// Vertices are counter-clockwise when seen from outside the hull, so
/// `(v1 - v0) × (v2 - v0)` points outward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle(pub [usize; 3]);

impl Triangle {
    /// Creates a triangle from three point indices.
    pub fn new(v0: usize, v1: usize, v2: usize) -> Self {
        Self([v0, v1, v2])
    }

    /// Vertex indices in winding order.
    pub fn vertices(&self) -> [usize; 3] {
        self.0
    }

    /// The three directed edges in winding order.
    pub fn edges(&self) -> [HalfEdge; 3] {
        let [a, b, c] = self.0;
        [(a, b), (b, c), (c, a)]
    }

    /// True if `index` is one of the vertices.
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    /// Outward supporting plane, `None` for a zero-area face.
    pub fn plane(&self, points: &[Vec3]) -> Option<Plane> {
        let [a, b, c] = self.0;
        Plane::through(points[a], points[c], points[b])
    }

    /// Same face rotated so the smallest index comes first.
    ///
    /// Winding is preserved, so two triangles describe the same oriented
    /// face iff their canonical forms are equal.
    pub fn canonical(&self) -> Self {
        let [a, b, c] = self.0;
        if a <= b && a <= c {
            Self([a, b, c])
        } else if b <= c {
            Self([b, c, a])
        } else {
            Self([c, a, b])
        }
    }
}

impl From<[usize; 3]> for Triangle {
    fn from(vertices: [usize; 3]) -> Self {
        Self(vertices)
    }
}

impl From<Triangle> for [usize; 3] {
    fn from(triangle: Triangle) -> Self {
        triangle.0
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "({a}, {b}, {c})")
    }
}
