//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::{Path, PathBuf};
use std::process::Output;

use anyhow::Result;

use crate::domain::SettingsFile;

// ── Configuration Ports ───────────────────────────────────────────────────────

/// Access to the remctl configuration directory.
pub trait ConfigSource {
    /// List the regular files directly inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns a `DiscoveryError` if the directory is missing or cannot be
    /// listed. Unreadable individual entries are not an error here.
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>>;

    /// Read one configuration file as text.
    fn read_file(&self, path: &Path) -> Result<String>;
}

/// Checks whether a configured executable is present.
pub trait ExecutableProbe {
    /// Returns `true` if `path` names an existing regular file.
    fn is_file(&self, path: &Path) -> bool;
}

/// Loads the optional settings file.
pub trait SettingsStore {
    /// Load settings, returning defaults when no file exists.
    fn load(&self) -> Result<SettingsFile>;
    /// Location the settings are read from.
    fn path(&self) -> PathBuf;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait.
pub trait ProgressReporter {
    /// A new step is starting; replaces any step still in progress.
    fn step(&self, message: &str);
    /// The current step is over.
    fn finish(&self);
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program to completion and capture its output.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
    /// Run a program with a custom timeout override.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds `timeout`.
    /// On timeout, the child process must be killed (not left orphaned).
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: std::time::Duration,
    ) -> Result<Output>;
}
