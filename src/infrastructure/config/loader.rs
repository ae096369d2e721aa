use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::Settings;

/// Default settings file, read from the working directory when present.
pub const DEFAULT_SETTINGS_FILE: &str = "addon-config.yaml";

/// Prefix for settings overrides in the environment, e.g.
/// `ADDON_CONFIG_LOGGING__LEVEL=debug`.
pub const ENV_PREFIX: &str = "ADDON_CONFIG_";

/// Settings validation errors
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Settings loader with hierarchical merging
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `path`, or `addon-config.yaml` in the working directory (optional)
    /// 3. Environment variables (`ADDON_CONFIG_*`, `__` separates sections)
    pub fn load(path: Option<&Path>) -> Result<Settings> {
        let file = path.map_or_else(
            || Path::new(DEFAULT_SETTINGS_FILE).to_path_buf(),
            Path::to_path_buf,
        );

        if let Some(explicit) = path {
            anyhow::ensure!(
                explicit.exists(),
                "Settings file not found: {}",
                explicit.display()
            );
        }

        let settings: Settings = Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Yaml::file(&file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context(format!("Failed to load settings from {}", file.display()))?;

        Self::validate(&settings)?;
        Ok(settings)
    }

    /// Validate settings after loading
    pub fn validate(settings: &Settings) -> Result<(), SettingsError> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&settings.logging.level.to_lowercase().as_str()) {
            return Err(SettingsError::InvalidLogLevel(settings.logging.level.clone()));
        }

        Ok(())
    }
}
