//! # Config Crate
//!
//! Centralized configuration constants for the incremental hull workspace.
//! Numeric tolerances and input limits are defined here so the hull kernel
//! never carries literal magic numbers.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{HullSettings, HULL_RELATIVE_PRECISION};
//!
//! // Tolerance for a point cloud whose largest coordinate is 1000.
//! let settings = HullSettings::default();
//! let precision = settings.precision_for(1000.0);
//! assert_eq!(precision, HULL_RELATIVE_PRECISION * 1000.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Scale Aware**: Tolerances are relative to the data's own magnitude
//! - **Validated**: Settings are checked once, at construction

pub mod constants;
