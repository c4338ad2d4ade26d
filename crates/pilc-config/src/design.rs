//! Saved filter design files.

use pilc_core::{FilterFamily, FilterSpec};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::validation::{parse_family, validate_design};

/// A filter design stored as TOML.
///
/// Designs capture everything [`FilterSpec`] needs, plus a name and an
/// optional description for listings. The family is kept as text so a file
/// can use any accepted alias.
///
/// # TOML Format
///
/// ```toml
/// name = "40m harmonic filter"
/// description = "5th-order Chebyshev for 7.0-7.3 MHz"
/// type = "chebyshev"
/// order = 5
/// cutoff_hz = 8.0e6
/// impedance_ohm = 50.0
/// ripple_db = 0.1
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Design {
    /// Name of the design.
    pub name: String,

    /// Optional description of the design.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Filter family name or alias.
    #[serde(rename = "type")]
    pub filter_type: String,

    /// Requested order.
    pub order: usize,

    /// Cutoff frequency in Hz.
    pub cutoff_hz: f64,

    /// Source/load impedance in ohms (defaults to 50).
    #[serde(default = "default_impedance")]
    pub impedance_ohm: f64,

    /// Passband ripple in dB, Chebyshev only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ripple_db: Option<f64>,
}

fn default_impedance() -> f64 {
    50.0
}

impl Design {
    /// Capture a spec under a name.
    pub fn from_spec(name: impl Into<String>, spec: &FilterSpec) -> Self {
        Self {
            name: name.into(),
            description: None,
            filter_type: spec.family.name().to_string(),
            order: spec.order,
            cutoff_hz: spec.cutoff_hz,
            impedance_ohm: spec.impedance_ohm,
            ripple_db: spec.effective_ripple(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Load a design from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Load a design from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the design to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the design to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Parsed filter family.
    pub fn family(&self) -> Result<FilterFamily, ConfigError> {
        Ok(parse_family(&self.filter_type)?)
    }

    /// Validate the design and convert it to a [`FilterSpec`].
    pub fn to_spec(&self) -> Result<FilterSpec, ConfigError> {
        validate_design(self)?;
        let family = self.family()?;
        Ok(FilterSpec {
            family,
            order: self.order,
            cutoff_hz: self.cutoff_hz,
            impedance_ohm: self.impedance_ohm,
            ripple_db: if family.uses_ripple() {
                self.ripple_db
            } else {
                None
            },
        })
    }
}
