//! Settings and saved designs for the pilc filter designer.
//!
//! # Features
//!
//! - **Settings**: default impedance, ripple, E-series, sweep size, even-order
//!   policy and plot size, read from `settings.toml`
//! - **Designs**: named [`FilterSpec`](pilc_core::FilterSpec)s stored as TOML
//! - **Validation**: both checked against the core's domain rules
//! - **Paths**: platform config directory lookup
//! - **Factory Designs**: built-in amateur-radio harmonic filters and examples
//!
//! # Example
//!
//! ```rust,no_run
//! use pilc_config::{Design, Settings, get_factory_design, user_designs_dir};
//! use pilc_core::synthesize;
//!
//! let settings = Settings::load_or_default(None).unwrap();
//! let design = get_factory_design("lpf-40m").unwrap();
//! let ladder = synthesize(&design.to_spec().unwrap()).unwrap();
//! println!("{} components, matched to {}", ladder.order(), settings.series);
//!
//! design.save(user_designs_dir().join("my-40m.toml")).unwrap();
//! ```

mod design;
mod error;
mod settings;

/// Platform-specific paths for settings and designs.
#[cfg(feature = "std")]
pub mod paths;

/// Design and settings validation.
pub mod validation;

/// Factory designs bundled with the library.
pub mod factory_designs;

pub use design::Design;
pub use error::ConfigError;
pub use factory_designs::{
    FACTORY_DESIGN_NAMES, factory_design_names, factory_designs, get_factory_design,
    is_factory_design,
};
#[cfg(feature = "std")]
pub use paths::{
    design_name_from_path, ensure_user_designs_dir, find_design, list_user_designs,
    settings_path, user_config_dir, user_designs_dir,
};
pub use settings::{PlotSettings, Settings};
pub use validation::{
    ValidationError, ValidationResult, parse_family, parse_policy, parse_series, validate_design,
    validate_settings,
};

/// Resolve a design by factory name, user design name, or file path.
///
/// Factory designs win over user files with the same name, matching the
/// order `pilc designs` lists them in.
#[cfg(feature = "std")]
pub fn resolve_design(name: &str) -> Result<Design, ConfigError> {
    if let Some(design) = get_factory_design(name) {
        return Ok(design);
    }
    match find_design(name) {
        Some(path) => Design::load(path),
        None => Err(ConfigError::DesignNotFound(name.to_string())),
    }
}
