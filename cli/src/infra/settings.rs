//! Infrastructure implementation of the `SettingsStore` port.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::SettingsStore;
use crate::domain::SettingsFile;
use crate::domain::settings::DEFAULT_SETTINGS_PATH;

/// Environment variable that overrides the settings file location.
pub const SETTINGS_ENV: &str = "REMCTL_HELP_CONFIG";

/// Production implementation of `SettingsStore` that uses a YAML file on disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlSettingsStore;

impl SettingsStore for YamlSettingsStore {
    fn load(&self) -> Result<SettingsFile> {
        let path = self.path();
        if !path.exists() {
            return Ok(SettingsFile::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(SettingsFile::default());
        }
        serde_yaml::from_str(&content).with_context(|| format!("cannot parse {}", path.display()))
    }

    fn path(&self) -> PathBuf {
        std::env::var_os(SETTINGS_ENV)
            .map_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH), PathBuf::from)
    }
}
