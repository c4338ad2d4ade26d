//! Design and settings validation.
//!
//! Files on disk hold plain strings and numbers; this module checks them
//! against the filter core's domain rules and reports every problem at once
//! rather than stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use pilc_config::{get_factory_design, validate_design};
//!
//! let mut design = get_factory_design("lpf-40m").unwrap();
//! assert!(validate_design(&design).is_ok());
//!
//! design.cutoff_hz = -1.0;
//! design.impedance_ohm = 0.0;
//! assert!(validate_design(&design).is_err());
//! ```

use pilc_core::{ESeries, EvenOrderPolicy, FilterError, FilterFamily};
use thiserror::Error;

use crate::design::Design;
use crate::settings::Settings;

/// Smallest plot width the renderer accepts.
pub const MIN_PLOT_WIDTH: usize = 40;
/// Largest plot width the renderer accepts.
pub const MAX_PLOT_WIDTH: usize = 240;
/// Smallest plot height the renderer accepts.
pub const MIN_PLOT_HEIGHT: usize = 6;
/// Largest plot height the renderer accepts.
pub const MAX_PLOT_HEIGHT: usize = 80;
/// Upper bound on sweep points kept in settings.
pub const MAX_POINTS: usize = 10_000;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Unrecognized filter family name.
    #[error("unknown filter type: {0}. Use butterworth, chebyshev, or bessel")]
    UnknownFamily(String),

    /// Unrecognized E-series name.
    #[error("unknown series: {0}. Use E12, E24, or E96")]
    UnknownSeries(String),

    /// Unrecognized even-order policy.
    #[error("unknown even-order policy: {0}. Use reject, increment, or accept")]
    UnknownPolicy(String),

    /// A field must be a positive finite number.
    #[error("'{field}' must be positive, got {value}")]
    NotPositive {
        /// Name of the field.
        field: String,
        /// The offending value.
        value: f64,
    },

    /// An integer field fell outside its allowed range.
    #[error("'{field}' value {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// Name of the field.
        field: String,
        /// The offending value.
        value: usize,
        /// Minimum allowed value.
        min: usize,
        /// Maximum allowed value.
        max: usize,
    },

    /// The filter core rejected a field.
    #[error("invalid '{field}': {source}")]
    Rejected {
        /// Name of the field.
        field: String,
        /// Error reported by the core.
        #[source]
        source: FilterError,
    },

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Parse a family name, accepting the usual short aliases.
pub fn parse_family(name: &str) -> ValidationResult<FilterFamily> {
    name.parse()
        .map_err(|_| ValidationError::UnknownFamily(name.to_string()))
}

/// Parse an E-series name, case-insensitively.
pub fn parse_series(name: &str) -> ValidationResult<ESeries> {
    name.parse()
        .map_err(|_| ValidationError::UnknownSeries(name.to_string()))
}

/// Parse an even-order policy name.
pub fn parse_policy(name: &str) -> ValidationResult<EvenOrderPolicy> {
    name.parse().map_err(ValidationError::UnknownPolicy)
}

fn check_positive(field: &str, value: f64, errors: &mut Vec<ValidationError>) {
    if !(value.is_finite() && value > 0.0) {
        errors.push(ValidationError::NotPositive {
            field: field.to_string(),
            value,
        });
    }
}

fn check_range(field: &str, value: usize, min: usize, max: usize, errors: &mut Vec<ValidationError>) {
    if !(min..=max).contains(&value) {
        errors.push(ValidationError::OutOfRange {
            field: field.to_string(),
            value,
            min,
            max,
        });
    }
}

fn collect(mut errors: Vec<ValidationError>) -> ValidationResult<()> {
    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}

/// Validate a saved design.
///
/// Chebyshev designs must carry a ripple; other families ignore it.
/// Even Chebyshev orders pass here and are left to the even-order policy
/// applied at synthesis time.
pub fn validate_design(design: &Design) -> ValidationResult<()> {
    let mut errors = Vec::new();

    check_positive("cutoff_hz", design.cutoff_hz, &mut errors);
    check_positive("impedance_ohm", design.impedance_ohm, &mut errors);

    match parse_family(&design.filter_type) {
        Ok(family) => {
            if let Err(source) = family.check_order(design.order) {
                errors.push(ValidationError::Rejected {
                    field: "order".to_string(),
                    source,
                });
            }
            if family.uses_ripple() {
                match design.ripple_db {
                    Some(r) => check_positive("ripple_db", r, &mut errors),
                    None => errors.push(ValidationError::Rejected {
                        field: "ripple_db".to_string(),
                        source: FilterError::InvalidRipple(None),
                    }),
                }
            }
        }
        Err(e) => errors.push(e),
    }

    collect(errors)
}

/// Validate user settings.
pub fn validate_settings(settings: &Settings) -> ValidationResult<()> {
    let mut errors = Vec::new();

    check_positive("impedance_ohm", settings.impedance_ohm, &mut errors);
    check_positive("ripple_db", settings.ripple_db, &mut errors);
    check_range("points", settings.points, 2, MAX_POINTS, &mut errors);
    check_range(
        "plot.width",
        settings.plot.width,
        MIN_PLOT_WIDTH,
        MAX_PLOT_WIDTH,
        &mut errors,
    );
    check_range(
        "plot.height",
        settings.plot.height,
        MIN_PLOT_HEIGHT,
        MAX_PLOT_HEIGHT,
        &mut errors,
    );
    if let Err(e) = parse_series(&settings.series) {
        errors.push(e);
    }
    if let Err(e) = parse_policy(&settings.even_order) {
        errors.push(e);
    }

    collect(errors)
}
