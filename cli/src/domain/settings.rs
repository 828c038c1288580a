//! Run settings: the optional YAML file merged with command-line overrides.
//!
//! Pure functions only. No I/O.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::SettingsError;

// ── Constants ────────────────────────────────────────────────────────────────

/// Directory remctld reads its command configuration from.
pub const DEFAULT_CONFIG_DIR: &str = "/etc/remctl/conf.d";

/// Settings file consulted when `REMCTL_HELP_CONFIG` is unset.
pub const DEFAULT_SETTINGS_PATH: &str = "/etc/remctl-help.yaml";

// ── Schema ───────────────────────────────────────────────────────────────────

/// How discovered services are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// List service names only.
    #[default]
    Summary,
    /// Run each service's help and show its output.
    Verbose,
}

/// Contents of the settings file. Every key is optional.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SettingsFile {
    /// remctl configuration directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_dir: Option<PathBuf>,
    /// Upper bound, in seconds, on each help invocation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_timeout_secs: Option<u64>,
}

/// Values taken from the command line; these win over the settings file.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub config_dir: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
    pub verbose: bool,
    pub services: Vec<String>,
}

/// Fully resolved settings for one run, passed by reference to every stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub config_dir: PathBuf,
    pub mode: DisplayMode,
    /// Services to restrict output to; empty means all.
    pub services: Vec<String>,
    /// `None` waits for each help program indefinitely.
    pub help_timeout: Option<Duration>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            mode: DisplayMode::Summary,
            services: Vec::new(),
            help_timeout: None,
        }
    }
}

impl Settings {
    /// Merge the settings file with command-line overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout is zero or the directory path is empty.
    pub fn resolve(file: &SettingsFile, overrides: SettingsOverrides) -> Result<Self> {
        let config_dir = overrides
            .config_dir
            .or_else(|| file.config_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR));
        if config_dir.as_os_str().is_empty() {
            return Err(SettingsError::EmptyConfigDir.into());
        }

        let help_timeout = match overrides.timeout_secs.or(file.help_timeout_secs) {
            Some(0) => return Err(SettingsError::InvalidTimeout(0).into()),
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };

        let mode = if overrides.verbose {
            DisplayMode::Verbose
        } else {
            DisplayMode::Summary
        };

        let mut services = overrides.services;
        services.sort();
        services.dedup();

        Ok(Self {
            config_dir,
            mode,
            services,
            help_timeout,
        })
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
