//! # Incremental Hull
//!
//! 3D convex hull of a finite point set, returned as outward-oriented
//! triangles that reference the caller's point indices.
//!
//! ## Algorithm
//!
//! 1. Pick a non-collinear triple and a point off its plane
//! 2. Emit the four faces of that tetrahedron
//! 3. Insert every remaining point in input order:
//!    - drop the triangles the point is outside of
//!    - find the horizon by cancelling opposite half-edges
//!    - connect each horizon edge to the point
//!
//! Degenerate inputs (fewer than 4 points, collinear or coplanar sets)
//! produce an empty triangle list. [`try_hull`] reports the cause instead.
//!
//! ## Example
//!
//! ```rust
//! use incremental_hull::{hull, Vec3};
//!
//! let points = [
//!     Vec3::new(0.0, 0.0, 0.0),
//!     Vec3::new(1.0, 0.0, 0.0),
//!     Vec3::new(0.0, 1.0, 0.0),
//!     Vec3::new(0.0, 0.0, 1.0),
//!     Vec3::new(0.1, 0.1, 0.1), // interior
//! ];
//! let triangles = hull(&points);
//! assert_eq!(triangles.len(), 4);
//! assert!(triangles.iter().all(|t| !t.contains(4)));
//! ```

pub mod builder;
pub mod core;
pub mod error;
pub mod geometry;
pub mod hull;
pub mod metrics;
pub mod precision;
pub mod scan;
pub mod validate;

pub use builder::HullBuilder;
pub use crate::core::vec3::Vec3;
pub use error::{HullError, HullResult};
pub use geometry::Plane;
pub use hull::{hull_with_precision, try_hull, Triangle};
pub use precision::{default_precision, hull};
