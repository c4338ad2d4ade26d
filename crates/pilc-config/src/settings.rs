//! User settings: defaults applied when a command leaves an option unset.

use pilc_core::{DEFAULT_POINTS, ESeries, EvenOrderPolicy};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::validation::{parse_policy, parse_series, validate_settings};

/// Default output plot size.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PlotSettings {
    /// Total width in characters, axis labels included.
    pub width: usize,
    /// Total height in lines, axis labels included.
    pub height: usize,
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            width: 60,
            height: 12,
        }
    }
}

/// Settings file contents.
///
/// Every field is optional in the file; missing fields take the built-in
/// defaults.
///
/// ```toml
/// impedance_ohm = 50.0
/// ripple_db = 0.5
/// series = "E24"
/// points = 51
/// even_order = "increment"
///
/// [plot]
/// width = 60
/// height = 12
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Impedance used when none is given, in ohms.
    pub impedance_ohm: f64,
    /// Chebyshev ripple used when none is given, in dB.
    pub ripple_db: f64,
    /// E-series for standard value matching.
    pub series: String,
    /// Number of sweep points.
    pub points: usize,
    /// Even-order handling for Chebyshev ladders.
    pub even_order: String,
    /// Plot dimensions.
    pub plot: PlotSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            impedance_ohm: 50.0,
            ripple_db: 0.5,
            series: ESeries::default().name().to_string(),
            points: DEFAULT_POINTS,
            even_order: EvenOrderPolicy::default().name().to_string(),
            plot: PlotSettings::default(),
        }
    }
}

impl Settings {
    /// Load and validate settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Parse and validate settings from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(toml_str)?;
        validate_settings(&settings)?;
        Ok(settings)
    }

    /// Resolve settings for a run.
    ///
    /// An explicit path must exist. Without one, the user settings file is
    /// read if present and the built-in defaults are used otherwise.
    #[cfg(feature = "std")]
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let path = crate::paths::settings_path();
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save the settings to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Configured E-series.
    pub fn series(&self) -> Result<ESeries, ConfigError> {
        Ok(parse_series(&self.series)?)
    }

    /// Configured even-order policy.
    pub fn even_order_policy(&self) -> Result<EvenOrderPolicy, ConfigError> {
        Ok(parse_policy(&self.even_order)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.impedance_ohm, 50.0);
        assert_eq!(s.ripple_db, 0.5);
        assert_eq!(s.series().unwrap(), ESeries::E24);
        assert_eq!(s.points, 51);
        assert_eq!(s.even_order_policy().unwrap(), EvenOrderPolicy::Increment);
        assert_eq!(s.plot, PlotSettings { width: 60, height: 12 });
    }

    #[test]
    fn partial_file_fills_defaults() {
        let s = Settings::from_toml("series = \"e96\"\n[plot]\nwidth = 100\n").unwrap();
        assert_eq!(s.series().unwrap(), ESeries::E96);
        assert_eq!(s.plot.width, 100);
        assert_eq!(s.plot.height, 12);
        assert_eq!(s.impedance_ohm, 50.0);
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = Settings::from_toml("impedance_ohm = -50.0").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        let err = Settings::from_toml("even_order = \"maybe\"").unwrap_err();
        assert!(err.to_string().contains("maybe"));
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pilc").join("settings.toml");
        let settings = Settings {
            ripple_db: 0.1,
            even_order: "reject".to_string(),
            ..Settings::default()
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings);
    }

    #[test]
    fn explicit_path_must_exist() {
        let err = Settings::load_or_default(Some(Path::new("/nonexistent/pilc.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }
}
