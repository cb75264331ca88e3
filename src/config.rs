// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Optional TOML configuration: startup preload list and validation thresholds.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::contact::ValidationRules;

/// Settings read once at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Image paths preloaded when the window opens.
    pub preload: Vec<String>,
    /// Validator thresholds.
    pub validation: ValidationRules,
}

/// Location of the config file (`<config_dir>/contactform/config.toml`).
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("contactform").join("config.toml"))
}

/// Read `path`, falling back to defaults when the file does not exist.
///
/// # Errors
///
/// Returns an error when the file exists but cannot be read or is not valid TOML.
pub fn load_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Load the user config; problems are logged and defaults are used instead.
pub fn load() -> AppConfig {
    let Some(path) = config_path() else {
        tracing::debug!("no config directory available; using defaults");
        return AppConfig::default();
    };

    match load_from(&path) {
        Ok(config) => {
            tracing::info!(
                path = %path.display(),
                preload = config.preload.len(),
                "configuration loaded"
            );
            config
        }
        Err(err) => {
            tracing::warn!("{err:#}; using defaults");
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = TempDir::new().unwrap();

        let config = load_from(&tmp.path().join("config.toml")).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.validation.min_name_len, 3);
    }

    #[test]
    fn parses_preload_list_and_rules() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            "preload = [\"thing.png\", \"anotherthing.png\"]\n\n[validation]\nstrict_email = true\n",
        )
        .unwrap();

        let config = load_from(&path).unwrap();

        assert_eq!(config.preload, vec!["thing.png", "anotherthing.png"]);
        assert!(config.validation.strict_email);
        assert_eq!(config.validation.min_email_len, 5);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "preload = 42").unwrap();

        let err = load_from(&path).unwrap_err();

        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
