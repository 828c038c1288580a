//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

// ── Discovery errors ──────────────────────────────────────────────────────────

/// Errors that stop command discovery as a whole.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Configuration directory {} does not exist", path.display())]
    ConfigDirMissing { path: PathBuf },

    #[error("Cannot read configuration directory {}: {source}", path.display())]
    ConfigDirUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No matching services: {0}")]
    NoMatchingServices(String),
}

impl DiscoveryError {
    /// Stable machine-readable code used by `--json` error output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigDirMissing { .. } => "CONFIG_DIR_MISSING",
            Self::ConfigDirUnreadable { .. } => "CONFIG_DIR_UNREADABLE",
            Self::NoMatchingServices(_) => "NO_MATCHING_SERVICES",
        }
    }
}

// ── Runner errors ─────────────────────────────────────────────────────────────

/// A help program that started but could not be collected in full.
///
/// Both variants carry the stdout read before the failure.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("{program} timed out after {}s", timeout.as_secs())]
    TimedOut {
        program: String,
        timeout: Duration,
        stdout: Vec<u8>,
    },

    #[error("cannot read output of {program}: {source}")]
    OutputUnreadable {
        program: String,
        #[source]
        source: std::io::Error,
        stdout: Vec<u8>,
    },
}

impl RunError {
    /// Stdout captured before the failure.
    #[must_use]
    pub fn partial_stdout(&self) -> &[u8] {
        match self {
            Self::TimedOut { stdout, .. } | Self::OutputUnreadable { stdout, .. } => stdout,
        }
    }
}

// ── Settings errors ───────────────────────────────────────────────────────────

/// Errors related to settings validation.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Invalid help timeout: {0} (must be at least 1 second)")]
    InvalidTimeout(u64),

    #[error("Configuration directory path is empty")]
    EmptyConfigDir,
}
