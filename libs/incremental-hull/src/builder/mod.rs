//! # Hull Builder
//!
//! Configurable entry point on top of [`HullSettings`].
//!
//! ```rust
//! use incremental_hull::{HullBuilder, Vec3};
//!
//! let pts = [Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z];
//! let triangles = HullBuilder::new().precision(1e-12).build(&pts)?;
//! assert_eq!(triangles.len(), 4);
//! # Ok::<(), incremental_hull::HullError>(())
//! ```


use crate::core::vec3::{infinity_norm, Vec3};
use crate::error::HullResult;
use crate::hull::{try_hull, Triangle};
use config::constants::HullSettings;

/// Builder resolving the tolerance before running the hull.
#[derive(Debug, Clone, Copy, Default)]
pub struct HullBuilder {
    relative_precision: Option<f64>,
    precision: Option<f64>,
}

impl HullBuilder {
    /// Builder with the scale-relative default tolerance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `precision` as the absolute tolerance.
    pub fn precision(mut self, precision: f64) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Scales the tolerance by `factor ×` the input's largest coordinate.
    ///
    /// Ignored when [`HullBuilder::precision`] is set.
    pub fn relative_precision(mut self, factor: f64) -> Self {
        self.relative_precision = Some(factor);
        self
    }

    /// Validated settings for this builder.
    ///
    /// # Errors
    ///
    /// [`crate::HullError::Config`] for a non-positive relative factor or a
    /// negative absolute tolerance.
    pub fn settings(&self) -> HullResult<HullSettings> {
        let defaults = HullSettings::default();
        let relative = self
            .relative_precision
            .unwrap_or(defaults.relative_precision);
        Ok(HullSettings::new(relative, self.precision)?)
    }

    /// Runs the hull over `points`.
    ///
    /// # Errors
    ///
    /// Configuration errors, or the degenerate-input errors of
    /// [`try_hull`].
    pub fn build(&self, points: &[Vec3]) -> HullResult<Vec<Triangle>> {
        let settings = self.settings()?;
        try_hull(points, settings.precision_for(infinity_norm(points)))
    }
}
