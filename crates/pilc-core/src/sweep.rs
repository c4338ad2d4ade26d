//! Logarithmic frequency sweeps around cutoff.

use libm::{log10, pow};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::error::{FilterError, Result};
use crate::family::{FilterFamily, FilterSpec, check_cutoff};
use crate::response::magnitude_db;

/// Default number of sweep points.
pub const DEFAULT_POINTS: usize = 51;

/// Decades covered on each side of cutoff (fc/10 .. fc·10).
pub const SWEEP_HALF_SPAN_DECADES: f64 = 1.0;

/// Sampled magnitude response.
///
/// Frequencies are strictly increasing; every magnitude is ≤ 0 dB and no
/// lower than [`MIN_DB`](crate::MIN_DB). Samples are stored as pairs so the
/// two series always have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseCurve {
    frequency_hz: Vec<f64>,
    magnitude_db: Vec<f64>,
}

impl ResponseCurve {
    /// Build a curve from `(frequency_hz, magnitude_db)` pairs.
    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let (frequency_hz, magnitude_db) = points.into_iter().unzip();
        Self {
            frequency_hz,
            magnitude_db,
        }
    }

    /// Sample frequencies in Hz.
    pub fn frequencies(&self) -> &[f64] {
        &self.frequency_hz
    }

    /// Magnitude at each frequency in dB.
    pub fn magnitudes_db(&self) -> &[f64] {
        &self.magnitude_db
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.frequency_hz.len()
    }

    /// Whether the curve has no samples.
    pub fn is_empty(&self) -> bool {
        self.frequency_hz.is_empty()
    }

    /// `(frequency_hz, magnitude_db)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.frequency_hz
            .iter()
            .copied()
            .zip(self.magnitude_db.iter().copied())
    }

    /// Lowest magnitude in the curve.
    pub fn min_db(&self) -> Option<f64> {
        self.magnitude_db.iter().copied().reduce(f64::min)
    }

    /// Highest magnitude in the curve.
    pub fn max_db(&self) -> Option<f64> {
        self.magnitude_db.iter().copied().reduce(f64::max)
    }

    /// Spread between the highest and lowest magnitude.
    ///
    /// A flat curve has no dynamic range to display or scale against and is
    /// reported as [`FilterError::Degenerate`].
    pub fn dynamic_range_db(&self) -> Result<f64> {
        match (self.max_db(), self.min_db()) {
            (Some(max), Some(min)) if max > min => Ok(max - min),
            _ => Err(FilterError::Degenerate("response has zero dynamic range")),
        }
    }

    /// First frequency where the curve falls through `level_db`.
    ///
    /// Looks for adjacent samples with the first at or above the level and
    /// the second below it, and interpolates the crossing in log-frequency.
    pub fn crossing_frequency(&self, level_db: f64) -> Option<f64> {
        let pairs: Vec<(f64, f64)> = self.points().collect();
        pairs.windows(2).find_map(|w| {
            let ((f0, db0), (f1, db1)) = (w[0], w[1]);
            if !(db0 >= level_db && db1 < level_db) {
                return None;
            }
            let t = (level_db - db0) / (db1 - db0);
            let (lo, hi) = (log10(f0), log10(f1));
            Some(pow(10.0, lo + t * (hi - lo)))
        })
    }

    /// Interpolated −3 dB frequency, if the sweep crosses it.
    pub fn minus_3db_frequency(&self) -> Option<f64> {
        self.crossing_frequency(-3.0)
    }
}

/// `num_points` frequencies logarithmically spaced from fc/10 to fc·10.
pub fn frequency_points(cutoff_hz: f64, num_points: usize) -> Result<Vec<f64>> {
    check_cutoff(cutoff_hz)?;
    if num_points < 2 {
        return Err(FilterError::TooFewPoints(num_points));
    }
    let steps = (num_points - 1) as f64;
    Ok((0..num_points)
        .map(|i| {
            let exp = -SWEEP_HALF_SPAN_DECADES + 2.0 * SWEEP_HALF_SPAN_DECADES * i as f64 / steps;
            cutoff_hz * pow(10.0, exp)
        })
        .collect())
}

/// Sample the magnitude response of a family over the standard sweep.
pub fn sweep(
    family: FilterFamily,
    cutoff_hz: f64,
    order: usize,
    ripple_db: Option<f64>,
    num_points: usize,
) -> Result<ResponseCurve> {
    let frequency_hz = frequency_points(cutoff_hz, num_points)?;
    let magnitude_db = frequency_hz
        .iter()
        .map(|&f| magnitude_db(family, f, cutoff_hz, order, ripple_db))
        .collect::<Result<Vec<_>>>()?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        family = family.name(),
        order,
        cutoff_hz,
        points = num_points,
        "response sweep"
    );

    Ok(ResponseCurve::from_points(
        frequency_hz.into_iter().zip(magnitude_db),
    ))
}

impl FilterSpec {
    /// Sample this design's response with `num_points` points.
    pub fn sweep(&self, num_points: usize) -> Result<ResponseCurve> {
        sweep(
            self.family,
            self.cutoff_hz,
            self.order,
            self.effective_ripple(),
            num_points,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_span_two_decades() {
        let f = frequency_points(1e6, DEFAULT_POINTS).unwrap();
        assert_eq!(f.len(), 51);
        assert!((f[0] - 1e5).abs() < 1e-3);
        assert!((f[25] - 1e6).abs() < 1e-3);
        assert!((f[50] - 1e7).abs() < 1e-2);
        assert!(f.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn two_points_are_the_endpoints() {
        let f = frequency_points(1e3, 2).unwrap();
        assert!((f[0] - 100.0).abs() < 1e-9);
        assert!((f[1] - 1e4).abs() < 1e-9);
    }

    #[test]
    fn rejects_bad_inputs() {
        assert_eq!(frequency_points(1e6, 1), Err(FilterError::TooFewPoints(1)));
        assert_eq!(frequency_points(0.0, 51), Err(FilterError::InvalidCutoff(0.0)));
        assert!(sweep(FilterFamily::Bessel, 1e6, 12, None, 51).is_err());
    }

    #[test]
    fn curve_is_attenuating() {
        for family in FilterFamily::ALL {
            let curve = sweep(family, 1e6, 5, Some(0.5), DEFAULT_POINTS).unwrap();
            assert_eq!(curve.len(), DEFAULT_POINTS);
            assert!(curve.magnitudes_db().iter().all(|&db| db <= 0.0 && db >= crate::MIN_DB));
        }
    }

    #[test]
    fn butterworth_minus_3db_near_cutoff() {
        let curve = FilterSpec::butterworth(5, 1e6, 50.0).sweep(DEFAULT_POINTS).unwrap();
        let f3 = curve.minus_3db_frequency().unwrap();
        assert!((f3 / 1e6 - 1.0).abs() < 0.01, "{f3}");
    }

    #[test]
    fn chebyshev_minus_3db_beyond_cutoff() {
        let curve = FilterSpec::chebyshev(5, 1e6, 50.0, 0.5).sweep(201).unwrap();
        let f3 = curve.minus_3db_frequency().unwrap();
        assert!(f3 > 1e6, "{f3}");
    }

    #[test]
    fn flat_curve_is_degenerate() {
        let curve = ResponseCurve::from_points([(1.0, 0.0), (2.0, 0.0)]);
        assert!(matches!(
            curve.dynamic_range_db(),
            Err(FilterError::Degenerate(_))
        ));
        assert_eq!(curve.crossing_frequency(-3.0), None);
    }

    #[test]
    fn hand_built_curve_keeps_series_aligned() {
        let curve = ResponseCurve::from_points([(1e3, 0.0), (2e3, -1.0), (4e3, -7.0)]);
        assert_eq!(curve.len(), 3);
        assert_eq!(curve.frequencies().len(), curve.magnitudes_db().len());

        // -3 dB lies a third of the way from 2 kHz to 4 kHz in log space
        let f3 = curve.minus_3db_frequency().unwrap();
        let expected = pow(10.0, log10(2e3) + (log10(4e3) - log10(2e3)) / 3.0);
        assert!((f3 - expected).abs() < 1e-6, "{f3}");

        let single = ResponseCurve::from_points([(1e3, -10.0)]);
        assert_eq!(single.minus_3db_frequency(), None);
        assert!(ResponseCurve::from_points(Vec::<(f64, f64)>::new()).is_empty());
    }

    #[test]
    fn dynamic_range_of_real_sweep() {
        let curve = FilterSpec::butterworth(3, 1e6, 50.0).sweep(DEFAULT_POINTS).unwrap();
        let range = curve.dynamic_range_db().unwrap();
        assert!(range > 50.0, "{range}");
    }
}
