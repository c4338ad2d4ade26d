//! Parsing and formatting of frequencies, impedances and component values.

use thiserror::Error;

/// A command-line value that could not be read.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UnitError {
    /// Not a frequency.
    #[error("invalid frequency '{0}' (examples: 14.2MHz, 500kHz, 1GHz, 7100000)")]
    Frequency(String),
    /// Not an impedance.
    #[error("invalid impedance '{0}' (examples: 50, 75ohm, 1kohm, 50Ω)")]
    Impedance(String),
}

const FREQUENCY_SUFFIXES: [(&str, f64); 4] =
    [("ghz", 1e9), ("mhz", 1e6), ("khz", 1e3), ("hz", 1.0)];

const IMPEDANCE_SUFFIXES: [(&str, f64); 3] = [("mohm", 1e6), ("kohm", 1e3), ("ohm", 1.0)];

fn parse_with_suffixes(
    lower: &str,
    suffixes: &[(&str, f64)],
) -> Option<f64> {
    for (suffix, scale) in suffixes {
        if let Some(number) = lower.strip_suffix(suffix) {
            return number.trim().parse::<f64>().ok().map(|v| v * scale);
        }
    }
    lower.parse().ok()
}

/// Parse a frequency with an optional Hz/kHz/MHz/GHz suffix (any case).
///
/// The sign is not checked here; the filter core rejects non-positive
/// cutoffs with a domain error.
pub fn parse_frequency(s: &str) -> Result<f64, UnitError> {
    let lower = s.trim().to_ascii_lowercase();
    parse_with_suffixes(&lower, &FREQUENCY_SUFFIXES).ok_or_else(|| UnitError::Frequency(s.to_string()))
}

/// Parse an impedance with an optional ohm/kohm/Mohm suffix or Ω.
pub fn parse_impedance(s: &str) -> Result<f64, UnitError> {
    let lower = s
        .trim()
        .replace(['Ω', 'ω'], "ohm")
        .to_ascii_lowercase();
    parse_with_suffixes(&lower, &IMPEDANCE_SUFFIXES).ok_or_else(|| UnitError::Impedance(s.to_string()))
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

fn exponent_suffix(exp: i32) -> String {
    let sign = if exp < 0 { '-' } else { '+' };
    format!("e{sign}{:02}", exp.abs())
}

/// `%.{significant}g`-style formatting: fixed or scientific, whichever is
/// shorter for the magnitude, with trailing zeros removed.
pub fn format_g(value: f64, significant: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }
    let p = significant.max(1);
    let sci = format!("{:.*e}", p - 1, value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= p as i32 {
        format!("{}{}", trim_fraction(mantissa), exponent_suffix(exp))
    } else {
        let decimals = (p as i32 - 1 - exp) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

/// Scientific notation with a signed two-digit exponent, e.g. `3.183099e-10`.
pub fn format_sci(value: f64, precision: usize) -> String {
    let s = format!("{value:.precision$e}");
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            format!("{mantissa}{}", exponent_suffix(exp))
        }
        None => s,
    }
}

fn format_scaled(value: f64, units: &[(f64, &str)], fmt: impl Fn(f64) -> String) -> String {
    let (scale, suffix) = units
        .iter()
        .find(|(threshold, _)| value.abs() >= *threshold)
        .or_else(|| units.last())
        .copied()
        .unwrap_or((1.0, ""));
    format!("{} {suffix}", fmt(value / scale))
}

/// Frequency in GHz, MHz, kHz or Hz with four significant digits.
pub fn format_frequency(hz: f64) -> String {
    format_scaled(
        hz,
        &[(1e9, "GHz"), (1e6, "MHz"), (1e3, "kHz"), (1.0, "Hz")],
        |v| format_g(v, 4),
    )
}

/// Capacitance in mF, uF, nF or pF with two decimals.
pub fn format_capacitance(farads: f64) -> String {
    format_scaled(
        farads,
        &[(1e-3, "mF"), (1e-6, "uF"), (1e-9, "nF"), (1e-12, "pF")],
        |v| format!("{v:.2}"),
    )
}

/// Inductance in H, mH, uH or nH with two decimals.
pub fn format_inductance(henries: f64) -> String {
    format_scaled(
        henries,
        &[(1.0, "H"), (1e-3, "mH"), (1e-6, "uH"), (1e-9, "nH")],
        |v| format!("{v:.2}"),
    )
}

/// Compact frequency label for plot axes, e.g. `7.1M`.
pub fn format_frequency_compact(hz: f64) -> String {
    let (scale, suffix) = if hz >= 1e9 {
        (1e9, "G")
    } else if hz >= 1e6 {
        (1e6, "M")
    } else if hz >= 1e3 {
        (1e3, "k")
    } else {
        (1.0, "")
    };
    format!("{}{suffix}", format_g(hz / scale, 3))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_suffixes() {
        assert_eq!(parse_frequency("14.2MHz"), Ok(14.2e6));
        assert_eq!(parse_frequency("14.2mhz"), Ok(14.2e6));
        assert_eq!(parse_frequency("500kHz"), Ok(500e3));
        assert_eq!(parse_frequency("1GHz"), Ok(1e9));
        assert_eq!(parse_frequency("60 Hz"), Ok(60.0));
        assert_eq!(parse_frequency(" 7100000 "), Ok(7.1e6));
    }

    #[test]
    fn frequency_errors() {
        assert!(parse_frequency("fast").is_err());
        assert!(parse_frequency("MHz").is_err());
        assert_eq!(
            parse_frequency("12 parsecs"),
            Err(UnitError::Frequency("12 parsecs".to_string()))
        );
    }

    #[test]
    fn impedance_suffixes() {
        assert_eq!(parse_impedance("50"), Ok(50.0));
        assert_eq!(parse_impedance("75ohm"), Ok(75.0));
        assert_eq!(parse_impedance("1kohm"), Ok(1000.0));
        assert_eq!(parse_impedance("2Mohm"), Ok(2e6));
        assert_eq!(parse_impedance("50Ω"), Ok(50.0));
        assert!(parse_impedance("fifty").is_err());
    }

    #[test]
    fn g_format_matches_printf() {
        assert_eq!(format_g(10.0, 4), "10");
        assert_eq!(format_g(7.1, 4), "7.1");
        assert_eq!(format_g(14.235, 4), "14.23");
        assert_eq!(format_g(123_456.0, 4), "1.235e+05");
        assert_eq!(format_g(0.000_012_34, 4), "1.234e-05");
        assert_eq!(format_g(0.001_234, 4), "0.001234");
        assert_eq!(format_g(9.9999, 4), "10");
        assert_eq!(format_g(1e7, 6), "1e+07");
        assert_eq!(format_g(1_258_925.4, 6), "1.25893e+06");
        assert_eq!(format_g(125_892.54, 6), "125893");
        assert_eq!(format_g(0.0, 6), "0");
    }

    #[test]
    fn sci_format() {
        assert_eq!(format_sci(3.183_098_86e-10, 6), "3.183099e-10");
        assert_eq!(format_sci(1.5e6, 6), "1.500000e+06");
        assert_eq!(format_sci(2.0, 2), "2.00e+00");
    }

    #[test]
    fn engineering_units() {
        assert_eq!(format_frequency(10e6), "10 MHz");
        assert_eq!(format_frequency(7.1e6), "7.1 MHz");
        assert_eq!(format_frequency(455e3), "455 kHz");
        assert_eq!(format_frequency(2.4e9), "2.4 GHz");
        assert_eq!(format_frequency(0.5), "0.5 Hz");

        assert_eq!(format_capacitance(318.31e-12), "318.31 pF");
        assert_eq!(format_capacitance(4.7e-6), "4.70 uF");
        assert_eq!(format_capacitance(1e-15), "0.00 pF");

        assert_eq!(format_inductance(1.5915e-6), "1.59 uH");
        assert_eq!(format_inductance(2.0), "2.00 H");
        assert_eq!(format_inductance(12e-9), "12.00 nH");
    }

    #[test]
    fn compact_labels() {
        assert_eq!(format_frequency_compact(1e6), "1M");
        assert_eq!(format_frequency_compact(100e3), "100k");
        assert_eq!(format_frequency_compact(7.1e6), "7.1M");
        assert_eq!(format_frequency_compact(50.0), "50");
        assert_eq!(format_frequency_compact(1.25e9), "1.25G");
    }
}
