//! Error types for configuration operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, saving or resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("failed to write file '{path}': {source}")]
    WriteFile {
        /// Path of the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create directory
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        /// Path of the directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// No saved or factory design with this name
    #[error("design not found: {0}")]
    DesignNotFound(String),

    /// Field-level validation failed
    #[error("validation failed: {0}")]
    Validation(#[from] crate::validation::ValidationError),

    /// The design was rejected by the filter core
    #[error(transparent)]
    Filter(#[from] pilc_core::FilterError),
}

impl ConfigError {
    /// Create a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Create a write file error.
    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::WriteFile {
            path: path.into(),
            source,
        }
    }

    /// Create a create directory error.
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::CreateDir {
            path: path.into(),
            source,
        }
    }
}
