//! Error types for synthesis, response evaluation and standard-value matching.
//!
//! Every failure is deterministic and reported synchronously; nothing in the
//! core clamps an out-of-domain input into range. [`FilterError::kind`] maps
//! each variant onto the two broad failure classes callers usually care about.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use crate::family::FilterFamily;

/// Broad classification of a [`FilterError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An input is outside the domain of the computation.
    InvalidParameter,
    /// The computation produced (or would produce) a meaningless number.
    NumericDegenerate,
}

/// Errors produced by the core filter computations.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterError {
    /// Cutoff frequency is not a positive finite number.
    InvalidCutoff(f64),
    /// Query frequency is negative or not finite.
    InvalidFrequency(f64),
    /// Characteristic impedance is not a positive finite number.
    InvalidImpedance(f64),
    /// Passband ripple is missing, non-positive or non-finite (Chebyshev only).
    InvalidRipple(Option<f64>),
    /// The family has no valid realization at this order.
    UnsupportedOrder {
        /// Requested family.
        family: FilterFamily,
        /// Requested order.
        order: usize,
    },
    /// An even Chebyshev order was requested under [`EvenOrderPolicy::Reject`](crate::EvenOrderPolicy::Reject).
    EvenOrderRejected(usize),
    /// A value handed to the standard-value matcher is not positive and finite.
    InvalidValue(f64),
    /// Unknown E-series name.
    UnknownSeries(String),
    /// A frequency sweep needs at least two points.
    TooFewPoints(usize),
    /// A computation produced a non-finite or non-positive result.
    Degenerate(&'static str),
}

impl FilterError {
    /// Taxonomy class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Degenerate(_) => ErrorKind::NumericDegenerate,
            _ => ErrorKind::InvalidParameter,
        }
    }
}

impl core::fmt::Display for FilterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidCutoff(v) => write!(f, "cutoff frequency must be positive, got {v}"),
            Self::InvalidFrequency(v) => {
                write!(f, "query frequency must be finite and non-negative, got {v}")
            }
            Self::InvalidImpedance(v) => write!(f, "impedance must be positive, got {v}"),
            Self::InvalidRipple(Some(v)) => write!(f, "ripple must be positive, got {v} dB"),
            Self::InvalidRipple(None) => write!(f, "chebyshev filters require a ripple value"),
            Self::UnsupportedOrder { family, order } => {
                write!(f, "{family} filters do not support order {order}")
            }
            Self::EvenOrderRejected(n) => {
                write!(f, "chebyshev pi ladders need an odd order, got {n}")
            }
            Self::InvalidValue(v) => write!(f, "value must be positive, got {v}"),
            Self::UnknownSeries(name) => {
                write!(f, "unknown series: {name}. Use E12, E24, or E96")
            }
            Self::TooFewPoints(n) => write!(f, "sweep needs at least 2 points, got {n}"),
            Self::Degenerate(what) => write!(f, "numerically degenerate result: {what}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FilterError {}

/// Result alias for core computations.
pub type Result<T> = core::result::Result<T, FilterError>;
