//! Tests for the centralized configuration constants.

use super::*;

/// Ensures default settings are sane and positive.
///
/// # Examples
/// ```
/// use config::constants::HullSettings;
/// let cfg = HullSettings::default();
/// assert!(cfg.relative_precision > 0.0);
/// ```
#[test]
fn default_settings_are_valid() {
    let cfg = HullSettings::default();
    assert_eq!(cfg.relative_precision, HULL_RELATIVE_PRECISION);
    assert_eq!(cfg.absolute_precision, None);
}

/// Validates the builder rejects invalid values.
///
/// # Examples
/// ```
/// use config::constants::HullSettings;
/// assert!(HullSettings::new(0.0, None).is_err());
/// ```
#[test]
fn new_validates_inputs() {
    assert_eq!(
        HullSettings::new(0.0, None).unwrap_err(),
        ConfigError::InvalidRelativePrecision(0.0)
    );
    assert_eq!(
        HullSettings::new(1.0e-9, Some(-1.0)).unwrap_err(),
        ConfigError::InvalidAbsolutePrecision(-1.0)
    );
    assert!(HullSettings::new(f64::NAN, None).is_err());
    assert!(HullSettings::new(1.0e-9, Some(f64::INFINITY)).is_err());
}

#[test]
fn zero_absolute_precision_is_allowed() {
    let cfg = HullSettings::new(1.0e-9, Some(0.0)).unwrap();
    assert_eq!(cfg.precision_for(50.0), 0.0);
}

#[test]
fn precision_scales_with_extent() {
    let cfg = HullSettings::default();
    assert_eq!(cfg.precision_for(2.0), 2.0 * HULL_RELATIVE_PRECISION);
    assert_eq!(cfg.precision_for(0.0), 0.0);
}

#[test]
fn absolute_precision_overrides_scale() {
    let cfg = HullSettings::new(1.0e-3, Some(0.25)).unwrap();
    assert_eq!(cfg.precision_for(1.0e6), 0.25);
}

#[test]
fn error_display_names_the_value() {
    let msg = ConfigError::InvalidAbsolutePrecision(-2.0).to_string();
    assert!(msg.contains("-2"));
}
