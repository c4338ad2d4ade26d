//! Built-in designs that are always available.
//!
//! Most are transmitter harmonic filters for the HF amateur bands: odd-order
//! Chebyshev ladders with the cutoff a little above the top of the band, so
//! the band sits in the passband and the second harmonic is well into the
//! stopband. A couple of general-purpose designs show the other families.

use crate::design::Design;

/// Names of the factory designs, in listing order.
pub static FACTORY_DESIGN_NAMES: &[&str] = &[
    "lpf-160m",
    "lpf-80m",
    "lpf-40m",
    "lpf-20m",
    "lpf-15m",
    "lpf-10m",
    "if-455k-bessel",
    "audio-3k",
];

/// TOML content for factory designs, embedded at compile time.
static FACTORY_DESIGNS_TOML: &[(&str, &str)] = &[
    ("lpf-160m", LPF_160M),
    ("lpf-80m", LPF_80M),
    ("lpf-40m", LPF_40M),
    ("lpf-20m", LPF_20M),
    ("lpf-15m", LPF_15M),
    ("lpf-10m", LPF_10M),
    ("if-455k-bessel", IF_455K_BESSEL),
    ("audio-3k", AUDIO_3K),
];

const LPF_160M: &str = r#"
name = "160m harmonic filter"
description = "1.8-2.0 MHz transmitter low-pass"
type = "chebyshev"
order = 5
cutoff_hz = 2.5e6
impedance_ohm = 50.0
ripple_db = 0.1
"#;

const LPF_80M: &str = r#"
name = "80m harmonic filter"
description = "3.5-4.0 MHz transmitter low-pass"
type = "chebyshev"
order = 5
cutoff_hz = 4.5e6
impedance_ohm = 50.0
ripple_db = 0.1
"#;

const LPF_40M: &str = r#"
name = "40m harmonic filter"
description = "7.0-7.3 MHz transmitter low-pass"
type = "chebyshev"
order = 5
cutoff_hz = 8.0e6
impedance_ohm = 50.0
ripple_db = 0.1
"#;

const LPF_20M: &str = r#"
name = "20m harmonic filter"
description = "14.0-14.35 MHz transmitter low-pass"
type = "chebyshev"
order = 7
cutoff_hz = 15.5e6
impedance_ohm = 50.0
ripple_db = 0.1
"#;

const LPF_15M: &str = r#"
name = "15m harmonic filter"
description = "21.0-21.45 MHz transmitter low-pass"
type = "chebyshev"
order = 7
cutoff_hz = 23.0e6
impedance_ohm = 50.0
ripple_db = 0.1
"#;

const LPF_10M: &str = r#"
name = "10m harmonic filter"
description = "28.0-29.7 MHz transmitter low-pass"
type = "chebyshev"
order = 7
cutoff_hz = 32.0e6
impedance_ohm = 50.0
ripple_db = 0.1
"#;

const IF_455K_BESSEL: &str = r#"
name = "455 kHz IF post-filter"
description = "Flat group delay after an AM detector"
type = "bessel"
order = 5
cutoff_hz = 455.0e3
impedance_ohm = 1000.0
"#;

const AUDIO_3K: &str = r#"
name = "3 kHz audio low-pass"
description = "Speech bandwidth limiter on a 600 ohm line"
type = "butterworth"
order = 3
cutoff_hz = 3.0e3
impedance_ohm = 600.0
"#;

/// All factory designs.
pub fn factory_designs() -> Vec<Design> {
    FACTORY_DESIGNS_TOML
        .iter()
        .filter_map(|(_, toml)| Design::from_toml(toml).ok())
        .collect()
}

/// Get a factory design by key or display name, case-insensitively.
///
/// ```rust
/// use pilc_config::get_factory_design;
///
/// let design = get_factory_design("LPF-40M").unwrap();
/// assert_eq!(design.order, 5);
/// assert!(get_factory_design("lpf-2m").is_none());
/// ```
pub fn get_factory_design(name: &str) -> Option<Design> {
    FACTORY_DESIGNS_TOML
        .iter()
        .filter_map(|(key, toml)| Some((key, Design::from_toml(toml).ok()?)))
        .find(|(key, design)| key.eq_ignore_ascii_case(name) || design.name.eq_ignore_ascii_case(name))
        .map(|(_, design)| design)
}

/// Keys of all factory designs.
pub fn factory_design_names() -> Vec<&'static str> {
    FACTORY_DESIGNS_TOML.iter().map(|(name, _)| *name).collect()
}

/// Whether `name` refers to a factory design.
pub fn is_factory_design(name: &str) -> bool {
    get_factory_design(name).is_some()
}
