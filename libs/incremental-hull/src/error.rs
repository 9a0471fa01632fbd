//! # Error Types
//!
//! Causes behind an empty hull, plus validation failures.
//!
//! ## Error Policy
//!
//! - [`crate::hull`] and [`crate::hull_with_precision`] fold every cause into
//!   an empty triangle list
//! - [`crate::try_hull`] and [`crate::HullBuilder`] surface the cause
//! - Nothing in the kernel panics on degenerate input

use config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building or validating a hull.
///
/// ## Example
///
/// ```rust
/// use incremental_hull::{try_hull, HullError, Vec3};
///
/// let points = [Vec3::ZERO, Vec3::X, Vec3::Y];
/// match try_hull(&points, 1.0e-9) {
///     Err(HullError::TooFewPoints { count }) => assert_eq!(count, 3),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HullError {
    /// Fewer points than a tetrahedron needs.
    #[error("Hull requires at least 4 points, got {count}")]
    TooFewPoints {
        /// Number of points supplied
        count: usize,
    },

    /// Every point coincides with the first one within tolerance.
    #[error("All points coincide within tolerance")]
    Coincident,

    /// Every point lies on one line within tolerance.
    #[error("All points are collinear")]
    Collinear,

    /// Every point lies on one plane within tolerance.
    #[error("All points are coplanar")]
    Coplanar,

    /// Tolerance is negative or not finite.
    #[error("Invalid precision: {0}")]
    InvalidPrecision(f64),

    /// Rejected hull settings.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// A directed edge lacks exactly one opposite partner.
    #[error("Surface is not closed at edge ({from}, {to}): {reason}")]
    NotClosed {
        /// Edge start index
        from: usize,
        /// Edge end index
        to: usize,
        /// What is wrong with the edge
        reason: &'static str,
    },

    /// A point lies outside a face by more than the tolerance.
    #[error("Point {point} lies {distance} outside triangle {triangle:?}")]
    PointOutside {
        /// Offending point index
        point: usize,
        /// Vertex indices of the face
        triangle: [usize; 3],
        /// Signed distance past the face
        distance: f64,
    },
}

impl HullError {
    /// True for the causes that mean "no 3D hull exists for this input".
    pub fn is_degenerate_input(&self) -> bool {
        matches!(
            self,
            Self::TooFewPoints { .. } | Self::Coincident | Self::Collinear | Self::Coplanar
        )
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for hull operations.
pub type HullResult<T> = Result<T, HullError>;

// =============================================================================
// TESTS
// =============================================================================
