//! pilc Core - Pi-ladder LC low-pass filter design
//!
//! This crate holds the numerical side of Pi LC low-pass design: turning a
//! family, order, cutoff and impedance into component values, evaluating the
//! ideal magnitude response, and mapping ideal values onto standard parts.
//!
//! # Components
//!
//! ## Prototype Synthesis
//!
//! - [`synthesize`] / [`synthesize_with_policy`] - [`FilterSpec`] → [`ComponentSequence`]
//! - [`butterworth_g_values`], [`chebyshev_g_values`], [`bessel_g_values`] - normalized prototypes
//! - [`EvenOrderPolicy`] - explicit handling of even Chebyshev orders
//!
//! ## Transfer Functions
//!
//! - [`magnitude`] / [`magnitude_db`] - family dispatch
//! - [`butterworth_magnitude`], [`chebyshev_magnitude`], [`bessel_magnitude`]
//! - [`chebyshev_polynomial`], [`magnitude_to_db`]
//!
//! ## Standard Values
//!
//! - [`match_standard`] - closest E12/E24/E96 value plus optional two-part combination
//! - [`find_closest`], [`find_parallel_match`], [`normalize_to_decade`]
//!
//! ## Response Sampling
//!
//! - [`sweep`] - [`ResponseCurve`] over fc/10 .. fc·10
//!
//! # no_std Support
//!
//! The crate only needs `alloc`. Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! pilc-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use pilc_core::{ESeries, FilterSpec, match_standard, synthesize};
//!
//! let spec = FilterSpec::butterworth(3, 10e6, 50.0);
//! let ladder = synthesize(&spec).unwrap();
//! assert_eq!(ladder.capacitors().count(), 2);
//!
//! let c1 = ladder.capacitor_values()[0];
//! let part = match_standard(c1, ESeries::E24).unwrap();
//! assert!(part.error_percent.abs() < 5.0);
//!
//! let db = spec.magnitude_db(10e6).unwrap();
//! assert!((db + 3.0103).abs() < 1e-3);
//! ```
//!
//! # Design Principles
//!
//! - **Pure**: every function is deterministic with no shared state
//! - **Fail closed**: out-of-domain inputs are errors, never clamped
//! - **Closed family set**: dispatch is a `match` on [`FilterFamily`]

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub mod eseries;
pub mod family;
pub mod prototype;
pub mod response;
pub mod sweep;
pub mod tables;

pub use error::{ErrorKind, FilterError, Result};
pub use eseries::{
    ESeries, MatchResult, PARALLEL_MAX_RATIO, PARALLEL_MIN_IMPROVEMENT_PERCENT,
    PARALLEL_SEARCH_THRESHOLD_PERCENT, ParallelMatch, StandardValue, find_closest,
    find_parallel_match, match_standard, match_standard_named, normalize_to_decade,
};
pub use family::{EvenOrderPolicy, FilterFamily, FilterSpec, UnknownFamily};
pub use prototype::{
    Component, ComponentKind, ComponentSequence, OrderAdjustment, butterworth_g_values,
    chebyshev_g_values, synthesize, synthesize_with_policy,
};
pub use response::{
    MIN_DB, bessel_magnitude, butterworth_magnitude, chebyshev_magnitude, chebyshev_polynomial,
    magnitude, magnitude_db, magnitude_to_db,
};
pub use sweep::{DEFAULT_POINTS, ResponseCurve, frequency_points, sweep};
pub use tables::{BESSEL_MAX_ORDER, BESSEL_MIN_ORDER, bessel_g_values};
