//! Platform-specific paths for settings and saved designs.
//!
//! # Directory Structure
//!
//! - **User config**: `~/.config/pilc/` (Linux), `~/Library/Application Support/pilc/` (macOS), `%APPDATA%\pilc\` (Windows)
//! - **Settings**: `<user config>/settings.toml`
//! - **User designs**: `<user config>/designs/`
//!
//! # Example
//!
//! ```rust,no_run
//! use pilc_config::paths;
//!
//! println!("settings: {:?}", paths::settings_path());
//! if let Some(path) = paths::find_design("lpf-40m") {
//!     println!("found design at {:?}", path);
//! }
//! ```

use std::path::{Path, PathBuf};

/// Application name used for directory paths.
const APP_NAME: &str = "pilc";

/// Subdirectory name for saved designs.
const DESIGNS_SUBDIR: &str = "designs";

/// Settings file name inside the user config directory.
const SETTINGS_FILE: &str = "settings.toml";

/// Returns the user-specific configuration directory.
///
/// Returns a fallback path if the config directory cannot be determined.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Returns the default settings file path.
pub fn settings_path() -> PathBuf {
    user_config_dir().join(SETTINGS_FILE)
}

/// Returns the user-specific designs directory.
pub fn user_designs_dir() -> PathBuf {
    user_config_dir().join(DESIGNS_SUBDIR)
}

/// Find a design file by name or path.
///
/// An existing file path is returned as is. Otherwise the name (with or
/// without `.toml`) is looked up in the user designs directory.
pub fn find_design(name: &str) -> Option<PathBuf> {
    find_design_in(name, &user_designs_dir())
}

fn find_design_in(name: &str, dir: &Path) -> Option<PathBuf> {
    let path = PathBuf::from(name);
    if path.is_file() {
        return Some(path);
    }

    let filename = if name.ends_with(".toml") {
        name.to_string()
    } else {
        format!("{name}.toml")
    };

    let candidate = dir.join(filename);
    candidate.is_file().then_some(candidate)
}

/// Ensure the user designs directory exists.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_user_designs_dir() -> Result<PathBuf, crate::ConfigError> {
    let dir = user_designs_dir();

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| crate::ConfigError::create_dir(&dir, e))?;
    }

    Ok(dir)
}

/// List all design files in the user designs directory, sorted by path.
///
/// Returns an empty vector if the directory doesn't exist or can't be read.
pub fn list_user_designs() -> Vec<PathBuf> {
    list_designs_in_dir(&user_designs_dir())
}

fn list_designs_in_dir(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut designs: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    designs.sort();
    designs
}

/// Get the design name from a file path (the file stem).
///
/// ```rust
/// use pilc_config::paths::design_name_from_path;
/// use std::path::Path;
///
/// let name = design_name_from_path(Path::new("/designs/lpf-20m.toml"));
/// assert_eq!(name, Some("lpf-20m".to_string()));
/// ```
pub fn design_name_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn dirs_are_namespaced() {
        assert!(user_config_dir().to_string_lossy().contains("pilc"));
        assert!(settings_path().ends_with("settings.toml"));
        assert!(user_designs_dir().ends_with("designs"));
    }

    #[test]
    fn find_by_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mine.toml");
        fs::write(&path, "").unwrap();
        assert_eq!(find_design(path.to_str().unwrap()), Some(path));
    }

    #[test]
    fn find_by_name_adds_extension() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("lpf-17m.toml");
        fs::write(&path, "").unwrap();
        assert_eq!(find_design_in("lpf-17m", temp.path()), Some(path.clone()));
        assert_eq!(find_design_in("lpf-17m.toml", temp.path()), Some(path));
        assert_eq!(find_design_in("lpf-12m", temp.path()), None);
    }

    #[test]
    fn find_not_found() {
        assert!(find_design("nonexistent_design_12345").is_none());
    }

    #[test]
    fn lists_only_toml_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b.toml"), "").unwrap();
        fs::write(temp.path().join("a.toml"), "").unwrap();
        fs::write(temp.path().join("notes.txt"), "").unwrap();

        let designs = list_designs_in_dir(temp.path());
        let names: Vec<_> = designs
            .iter()
            .filter_map(|p| design_name_from_path(p))
            .collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn list_missing_dir_is_empty() {
        assert!(list_designs_in_dir(Path::new("/nonexistent/path/12345")).is_empty());
    }
}
