//! Centralized configuration values shared across the hull workspace.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

/// Relative tolerance applied to the bounding magnitude of a point set.
///
/// The default hull precision is `HULL_RELATIVE_PRECISION * scale`, where
/// `scale` is the largest absolute coordinate component of the input.
///
/// # Examples
/// ```
/// use config::constants::HULL_RELATIVE_PRECISION;
/// assert!(HULL_RELATIVE_PRECISION < 1.0e-6);
/// ```
pub const HULL_RELATIVE_PRECISION: f64 = 1.0e-9;

/// Minimum number of points that can span a 3D hull (one tetrahedron).
///
/// # Examples
/// ```
/// use config::constants::MIN_HULL_POINTS;
/// assert_eq!(MIN_HULL_POINTS, 4);
/// ```
pub const MIN_HULL_POINTS: usize = 4;

/// Immutable snapshot of hull tolerance settings.
///
/// When `absolute_precision` is set it is used verbatim; otherwise the
/// tolerance is derived from the data scale and `relative_precision`.
///
/// # Examples
/// ```
/// use config::constants::HullSettings;
/// let settings = HullSettings::default();
/// assert!(settings.relative_precision > 0.0);
/// assert!(settings.absolute_precision.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HullSettings {
    /// Factor applied to the input's infinity-norm extent.
    pub relative_precision: f64,
    /// Explicit tolerance overriding the scale-derived one.
    pub absolute_precision: Option<f64>,
}

impl HullSettings {
    /// Builds settings enforcing strict validation of the supplied
    /// tolerances.
    ///
    /// # Examples
    /// ```
    /// use config::constants::HullSettings;
    /// let cfg = HullSettings::new(1.0e-6, Some(0.5)).expect("valid settings");
    /// assert_eq!(cfg.precision_for(1.0e9), 0.5);
    /// ```
    pub fn new(
        relative_precision: f64,
        absolute_precision: Option<f64>,
    ) -> Result<Self, ConfigError> {
        if !relative_precision.is_finite() || relative_precision <= 0.0 {
            return Err(ConfigError::InvalidRelativePrecision(relative_precision));
        }
        if let Some(value) = absolute_precision {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidAbsolutePrecision(value));
            }
        }
        Ok(Self {
            relative_precision,
            absolute_precision,
        })
    }

    /// Resolves the tolerance for a point set whose largest absolute
    /// coordinate component is `scale`.
    ///
    /// # Examples
    /// ```
    /// use config::constants::HullSettings;
    /// assert_eq!(HullSettings::default().precision_for(0.0), 0.0);
    /// ```
    pub fn precision_for(&self, scale: f64) -> f64 {
        self.absolute_precision
            .unwrap_or(self.relative_precision * scale)
    }
}

impl Default for HullSettings {
    fn default() -> Self {
        Self {
            relative_precision: HULL_RELATIVE_PRECISION,
            absolute_precision: None,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when the relative precision is zero, negative or not finite.
    InvalidRelativePrecision(f64),
    /// Raised when an explicit precision is negative or not finite.
    InvalidAbsolutePrecision(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRelativePrecision(value) => {
                write!(f, "relative precision must be positive and finite: {value}")
            }
            ConfigError::InvalidAbsolutePrecision(value) => {
                write!(f, "precision must be non-negative and finite: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
