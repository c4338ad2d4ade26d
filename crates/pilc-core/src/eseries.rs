//! Standard-value (E-series) matching.
//!
//! Maps an ideal component value onto the IEC 60063 preferred values of a
//! chosen series, and, when the best single part is off by more than
//! [`PARALLEL_SEARCH_THRESHOLD_PERCENT`], looks for a two-part additive
//! combination that does noticeably better.
//!
//! Combination is additive: capacitors in parallel or inductors in series.
//! For reciprocal combining (inductors in parallel, capacitors in series)
//! callers transform into reciprocal space before matching and back after.

use core::fmt;
use core::str::FromStr;
use libm::{floor, log10, pow};

#[cfg(not(feature = "std"))]
use alloc::{string::ToString, vec::Vec};

use crate::error::{FilterError, Result};

/// Single-match error (in percent, magnitude) above which a two-part
/// combination is searched for.
pub const PARALLEL_SEARCH_THRESHOLD_PERCENT: f64 = 2.0;

/// Improvement (in percentage points) a combination must achieve over the
/// single match before it is recommended.
pub const PARALLEL_MIN_IMPROVEMENT_PERCENT: f64 = 2.0;

/// Largest allowed ratio between the two parts of a combination.
pub const PARALLEL_MAX_RATIO: f64 = 10.0;

const E12: [f64; 12] = [1.0, 1.2, 1.5, 1.8, 2.2, 2.7, 3.3, 3.9, 4.7, 5.6, 6.8, 8.2];

const E24: [f64; 24] = [
    1.0, 1.1, 1.2, 1.3, 1.5, 1.6, 1.8, 2.0, 2.2, 2.4, 2.7, 3.0, 3.3, 3.6, 3.9, 4.3, 4.7, 5.1,
    5.6, 6.2, 6.8, 7.5, 8.2, 9.1,
];

const E96: [f64; 96] = [
    1.00, 1.02, 1.05, 1.07, 1.10, 1.13, 1.15, 1.18, 1.21, 1.24, 1.27, 1.30, 1.33, 1.37, 1.40,
    1.43, 1.47, 1.50, 1.54, 1.58, 1.62, 1.65, 1.69, 1.74, 1.78, 1.82, 1.87, 1.91, 1.96, 2.00,
    2.05, 2.10, 2.15, 2.21, 2.26, 2.32, 2.37, 2.43, 2.49, 2.55, 2.61, 2.67, 2.74, 2.80, 2.87,
    2.94, 3.01, 3.09, 3.16, 3.24, 3.32, 3.40, 3.48, 3.57, 3.65, 3.74, 3.83, 3.92, 4.02, 4.12,
    4.22, 4.32, 4.42, 4.53, 4.64, 4.75, 4.87, 4.99, 5.11, 5.23, 5.36, 5.49, 5.62, 5.76, 5.90,
    6.04, 6.19, 6.34, 6.49, 6.65, 6.81, 6.98, 7.15, 7.32, 7.50, 7.68, 7.87, 8.06, 8.25, 8.45,
    8.66, 8.87, 9.09, 9.31, 9.53, 9.76,
];

/// Preferred-number series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ESeries {
    /// 12 values per decade (10 % tolerance parts).
    E12,
    /// 24 values per decade (5 %).
    #[default]
    E24,
    /// 96 values per decade (1 %).
    E96,
}

impl ESeries {
    /// All supported series.
    pub const ALL: [ESeries; 3] = [Self::E12, Self::E24, Self::E96];

    /// Sorted mantissas in [1.0, 10.0).
    pub fn mantissas(self) -> &'static [f64] {
        match self {
            Self::E12 => &E12,
            Self::E24 => &E24,
            Self::E96 => &E96,
        }
    }

    /// Canonical uppercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::E12 => "E12",
            Self::E24 => "E24",
            Self::E96 => "E96",
        }
    }
}

impl fmt::Display for ESeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ESeries {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|series| series.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| FilterError::UnknownSeries(s.to_string()))
    }
}

/// A standard value split into series mantissa and decade exponent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardValue {
    /// Mantissa in [1.0, 10.0).
    pub mantissa: f64,
    /// Decade exponent.
    pub exponent: i32,
}

impl StandardValue {
    /// Reconstructed real value, `mantissa · 10^exponent`.
    pub fn value(self) -> f64 {
        self.mantissa * decade(self.exponent)
    }
}

/// Two standard parts whose sum approximates the ideal value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallelMatch {
    /// First part (the larger-or-equal decade candidate).
    pub first: f64,
    /// Second part.
    pub second: f64,
    /// Signed error of `first + second` relative to the ideal value, in percent.
    pub error_percent: f64,
}

impl ParallelMatch {
    /// Combined (summed) value.
    pub fn combined(&self) -> f64 {
        self.first + self.second
    }
}

/// Outcome of matching one ideal value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResult {
    /// Value that was asked for.
    pub ideal_value: f64,
    /// Closest single standard value.
    pub matched: StandardValue,
    /// `100·(matched − ideal)/ideal`.
    pub error_percent: f64,
    /// Series that was searched.
    pub series: ESeries,
    /// Recommended two-part combination, if one beats the single part by
    /// more than [`PARALLEL_MIN_IMPROVEMENT_PERCENT`].
    pub parallel: Option<ParallelMatch>,
}

impl MatchResult {
    /// Closest single standard value as a real number.
    pub fn matched_value(&self) -> f64 {
        self.matched.value()
    }
}

fn decade(exponent: i32) -> f64 {
    pow(10.0, f64::from(exponent))
}

fn percent_error(actual: f64, ideal: f64) -> f64 {
    100.0 * (actual - ideal) / ideal
}

/// Split a positive value into a mantissa in [1, 10) and a decade exponent.
pub fn normalize_to_decade(value: f64) -> Result<(f64, i32)> {
    if !(value.is_finite() && value > 0.0) {
        return Err(FilterError::InvalidValue(value));
    }
    let mut exponent = floor(log10(value)) as i32;
    let mut mantissa = value / decade(exponent);
    // log10 can land a hair either side of an exact power of ten
    if mantissa >= 10.0 {
        mantissa /= 10.0;
        exponent += 1;
    } else if mantissa < 1.0 {
        mantissa *= 10.0;
        exponent -= 1;
    }
    Ok((mantissa, exponent))
}

/// Closest single standard value in `series`.
///
/// Neighbouring decades are considered too: a mantissa just under 10 may be
/// nearer 1.0 of the next decade than to the top of the series.
pub fn find_closest(value: f64, series: ESeries) -> Result<StandardValue> {
    let (mantissa, exponent) = normalize_to_decade(value)?;
    Ok(closest_in_decade(mantissa, exponent, series))
}

fn closest_in_decade(mantissa: f64, exponent: i32, series: ESeries) -> StandardValue {
    let values = series.mantissas();

    let mut best = values[0];
    let mut best_diff = (mantissa - best).abs();
    for &candidate in &values[1..] {
        let diff = (mantissa - candidate).abs();
        if diff < best_diff {
            best_diff = diff;
            best = candidate;
        } else if diff > best_diff && candidate > mantissa {
            // sorted: only getting further away from here
            break;
        }
    }

    let mut matched = StandardValue {
        mantissa: best,
        exponent,
    };

    let first = values[0];
    let last = values[values.len() - 1];

    // Top of the previous decade. Never taken with the built-in tables:
    // normalized mantissas are >= 1.0 and every series starts at 1.0.
    if mantissa < first && (mantissa - last / 10.0).abs() < best_diff {
        matched = StandardValue {
            mantissa: last,
            exponent: exponent - 1,
        };
    }

    // Bottom of the next decade.
    if mantissa > last && (first * 10.0 - mantissa).abs() < (mantissa - best).abs() {
        matched = StandardValue {
            mantissa: first,
            exponent: exponent + 1,
        };
    }

    matched
}

/// Search for a two-part additive combination closer than the single match.
///
/// Returns `None` when the single match is already within
/// [`PARALLEL_SEARCH_THRESHOLD_PERCENT`], or when no pair improves on it by
/// more than [`PARALLEL_MIN_IMPROVEMENT_PERCENT`].
pub fn find_parallel_match(value: f64, series: ESeries) -> Result<Option<ParallelMatch>> {
    let (mantissa, exponent) = normalize_to_decade(value)?;
    let single = closest_in_decade(mantissa, exponent, series);
    Ok(parallel_search(value, exponent, single, series))
}

fn parallel_search(
    value: f64,
    exponent: i32,
    single: StandardValue,
    series: ESeries,
) -> Option<ParallelMatch> {
    let single_error = percent_error(single.value(), value).abs();
    if single_error <= PARALLEL_SEARCH_THRESHOLD_PERCENT {
        return None;
    }

    let candidates: Vec<f64> = [exponent, exponent - 1]
        .into_iter()
        .flat_map(|e| {
            let scale = decade(e);
            series.mantissas().iter().map(move |m| m * scale)
        })
        .collect();

    let mut best: Option<ParallelMatch> = None;
    let mut best_error = single_error;
    for (i, &first) in candidates.iter().enumerate() {
        for &second in &candidates[i..] {
            if first.max(second) / first.min(second) > PARALLEL_MAX_RATIO {
                continue;
            }
            let error = percent_error(first + second, value);
            if error.abs() < best_error {
                best_error = error.abs();
                best = Some(ParallelMatch {
                    first,
                    second,
                    error_percent: error,
                });
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        value,
        series = series.name(),
        single_error,
        best_error,
        candidates = candidates.len(),
        "parallel search finished"
    );

    best.filter(|_| single_error - best_error > PARALLEL_MIN_IMPROVEMENT_PERCENT)
}

/// Match `value` against `series`, including the two-part search.
pub fn match_standard(value: f64, series: ESeries) -> Result<MatchResult> {
    let (mantissa, exponent) = normalize_to_decade(value)?;
    let matched = closest_in_decade(mantissa, exponent, series);
    Ok(MatchResult {
        ideal_value: value,
        matched,
        error_percent: percent_error(matched.value(), value),
        series,
        parallel: parallel_search(value, exponent, matched, series),
    })
}

/// [`match_standard`] with the series given by name ("E12", "e24", ..).
pub fn match_standard_named(value: f64, series: &str) -> Result<MatchResult> {
    match_standard(value, series.parse()?)
}
