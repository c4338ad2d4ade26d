//! Closed-form magnitude response for each filter family.
//!
//! These evaluators depend only on family, order, cutoff and ripple; they do
//! not read synthesized component values.
//!
//! | Family | \|H\|² |
//! |--------|--------|
//! | Butterworth | 1 / (1 + (f/fc)^2n) |
//! | Chebyshev | 1 / (1 + ε²·Tn(f/fc)²), ε = √(10^(r/10) − 1) |
//! | Bessel | Bn(0)² / \|Bn(jω)\|², ω = (f/fc)·scale(n) |

use libm::{log10, pow, sqrt};

use crate::error::{FilterError, Result};
use crate::family::{FilterFamily, FilterSpec, check_cutoff, check_ripple};
use crate::tables::{bessel_polynomial, bessel_scale};

/// Lowest magnitude reported in dB; exact zeros map here instead of −∞.
pub const MIN_DB: f64 = -120.0;

fn check_frequency(freq_hz: f64) -> Result<()> {
    if freq_hz.is_finite() && freq_hz >= 0.0 {
        Ok(())
    } else {
        Err(FilterError::InvalidFrequency(freq_hz))
    }
}

fn check_order(order: usize) -> Result<()> {
    if order >= 1 {
        Ok(())
    } else {
        Err(FilterError::UnsupportedOrder {
            family: FilterFamily::Butterworth,
            order,
        })
    }
}

/// Chebyshev polynomial of the first kind, Tn(x).
///
/// Uses the three-term recurrence T_k = 2x·T_{k−1} − T_{k−2}, which is
/// uniform over |x| ≤ 1 and |x| > 1.
pub fn chebyshev_polynomial(n: usize, x: f64) -> f64 {
    match n {
        0 => 1.0,
        1 => x,
        _ => {
            let mut t_prev2 = 1.0;
            let mut t_prev1 = x;
            for _ in 2..=n {
                let t = 2.0 * x * t_prev1 - t_prev2;
                t_prev2 = t_prev1;
                t_prev1 = t;
            }
            t_prev1
        }
    }
}

/// Butterworth linear magnitude at `freq_hz`.
pub fn butterworth_magnitude(freq_hz: f64, cutoff_hz: f64, order: usize) -> Result<f64> {
    check_frequency(freq_hz)?;
    check_cutoff(cutoff_hz)?;
    check_order(order)?;
    let ratio = freq_hz / cutoff_hz;
    let h2 = 1.0 / (1.0 + pow(ratio, 2.0 * order as f64));
    Ok(sqrt(h2))
}

/// Chebyshev Type I linear magnitude at `freq_hz`.
pub fn chebyshev_magnitude(
    freq_hz: f64,
    cutoff_hz: f64,
    order: usize,
    ripple_db: f64,
) -> Result<f64> {
    check_frequency(freq_hz)?;
    check_cutoff(cutoff_hz)?;
    check_order(order).map_err(|_| FilterError::UnsupportedOrder {
        family: FilterFamily::Chebyshev,
        order,
    })?;
    let ripple_db = check_ripple(Some(ripple_db))?;

    let eps2 = pow(10.0, ripple_db / 10.0) - 1.0;
    let tn = chebyshev_polynomial(order, freq_hz / cutoff_hz);
    let h2 = 1.0 / (1.0 + eps2 * tn * tn);
    Ok(sqrt(h2))
}

/// Bessel linear magnitude at `freq_hz`, normalized to −3 dB at cutoff.
pub fn bessel_magnitude(freq_hz: f64, cutoff_hz: f64, order: usize) -> Result<f64> {
    check_frequency(freq_hz)?;
    check_cutoff(cutoff_hz)?;
    let unsupported = FilterError::UnsupportedOrder {
        family: FilterFamily::Bessel,
        order,
    };
    let scale = bessel_scale(order).ok_or_else(|| unsupported.clone())?;
    let coeffs = bessel_polynomial(order).ok_or(unsupported)?;

    let w = freq_hz / cutoff_hz * scale;

    // Bn(jw): even powers land on the real axis, odd powers on the imaginary
    // axis, each with sign (−1)^(k/2).
    let mut real = 0.0;
    let mut imag = 0.0;
    let mut w_power = 1.0;
    for (k, &c) in coeffs.iter().enumerate() {
        let sign = if (k / 2) % 2 == 0 { 1.0 } else { -1.0 };
        if k % 2 == 0 {
            real += sign * c * w_power;
        } else {
            imag += sign * c * w_power;
        }
        w_power *= w;
    }

    let denom2 = real * real + imag * imag;
    if denom2 == 0.0 {
        return Err(FilterError::Degenerate("bessel denominator vanished"));
    }
    let h2 = coeffs[0] * coeffs[0] / denom2;
    Ok(sqrt(h2.min(1.0)))
}

/// Linear magnitude for any family.
///
/// `ripple_db` is required for Chebyshev and ignored otherwise.
pub fn magnitude(
    family: FilterFamily,
    freq_hz: f64,
    cutoff_hz: f64,
    order: usize,
    ripple_db: Option<f64>,
) -> Result<f64> {
    match family {
        FilterFamily::Butterworth => butterworth_magnitude(freq_hz, cutoff_hz, order),
        FilterFamily::Chebyshev => {
            let ripple = check_ripple(ripple_db)?;
            chebyshev_magnitude(freq_hz, cutoff_hz, order, ripple)
        }
        FilterFamily::Bessel => bessel_magnitude(freq_hz, cutoff_hz, order),
    }
}

/// Magnitude in dB for any family, floored at [`MIN_DB`].
pub fn magnitude_db(
    family: FilterFamily,
    freq_hz: f64,
    cutoff_hz: f64,
    order: usize,
    ripple_db: Option<f64>,
) -> Result<f64> {
    magnitude(family, freq_hz, cutoff_hz, order, ripple_db).map(magnitude_to_db)
}

/// Convert a linear magnitude to dB, floored at [`MIN_DB`].
///
/// NaN passes through unchanged rather than landing on the floor.
pub fn magnitude_to_db(magnitude: f64) -> f64 {
    if magnitude.is_nan() {
        return magnitude;
    }
    if magnitude <= 0.0 {
        return MIN_DB;
    }
    (20.0 * log10(magnitude)).max(MIN_DB)
}

impl FilterSpec {
    /// Linear magnitude of this design at `freq_hz`.
    pub fn magnitude(&self, freq_hz: f64) -> Result<f64> {
        magnitude(
            self.family,
            freq_hz,
            self.cutoff_hz,
            self.order,
            self.effective_ripple(),
        )
    }

    /// Magnitude of this design at `freq_hz` in dB.
    pub fn magnitude_db(&self, freq_hz: f64) -> Result<f64> {
        self.magnitude(freq_hz).map(magnitude_to_db)
    }
}
