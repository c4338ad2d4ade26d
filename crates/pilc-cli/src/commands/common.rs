//! Shared CLI helpers used across multiple commands.

use clap::Args;
use pilc_config::{Design, Settings, resolve_design};
use pilc_core::{FilterFamily, FilterSpec};
use std::path::Path;

use crate::units::{parse_frequency, parse_impedance};

/// Filter parameters shared by `design` and `response`.
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Filter type: butterworth|bw, chebyshev|ch|cheby, bessel|bs
    #[arg(short = 't', long = "type", value_name = "FAMILY")]
    pub family: Option<FilterFamily>,

    /// Cutoff frequency (e.g. 7.3MHz, 500kHz, 1.2GHz)
    #[arg(short, long = "frequency", value_name = "FREQ", value_parser = parse_frequency)]
    pub frequency: Option<f64>,

    /// Characteristic impedance (e.g. 50, 75ohm, 1kohm) [default: from settings, 50]
    #[arg(short = 'z', long, value_name = "IMPEDANCE", value_parser = parse_impedance)]
    pub impedance: Option<f64>,

    /// Passband ripple in dB, Chebyshev only [default: from settings, 0.5]
    #[arg(short, long, value_name = "DB", allow_negative_numbers = true)]
    pub ripple: Option<f64>,

    /// Number of components (poles)
    #[arg(
        short = 'n',
        long = "order",
        visible_alias = "components",
        default_value_t = 3,
        value_parser = clap::value_parser!(u8).range(2..=9)
    )]
    pub order: u8,
}

impl FilterArgs {
    /// Build a spec, filling unset values from `settings`.
    pub fn to_spec(&self, settings: &Settings) -> anyhow::Result<FilterSpec> {
        let Some(family) = self.family else {
            anyhow::bail!("missing filter type: pass -t/--type (butterworth, chebyshev or bessel)");
        };
        let Some(cutoff_hz) = self.frequency else {
            anyhow::bail!("missing cutoff frequency: pass -f/--frequency (e.g. 7.3MHz)");
        };

        let spec = FilterSpec {
            family,
            order: usize::from(self.order),
            cutoff_hz,
            impedance_ohm: self.impedance.unwrap_or(settings.impedance_ohm),
            ripple_db: family
                .uses_ripple()
                .then(|| self.ripple.unwrap_or(settings.ripple_db)),
        };
        spec.validate()?;

        tracing::debug!(?spec, "filter spec from arguments");
        Ok(spec)
    }
}

/// Load settings from `--config` or the user config directory.
pub fn load_settings(config: Option<&Path>) -> anyhow::Result<Settings> {
    let settings = Settings::load_or_default(config)?;
    tracing::debug!(?settings, "settings loaded");
    Ok(settings)
}

/// Load a design by factory name, user design name, or path.
pub fn load_design(name: &str) -> anyhow::Result<Design> {
    match resolve_design(name) {
        Ok(design) => {
            tracing::info!(name = %design.name, "design loaded");
            Ok(design)
        }
        Err(pilc_config::ConfigError::DesignNotFound(_)) => anyhow::bail!(
            "Design '{}' not found. Use 'pilc designs' to see available designs.",
            name
        ),
        Err(e) => Err(e.into()),
    }
}
