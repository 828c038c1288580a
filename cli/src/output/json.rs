//! JSON output helpers.
//!
//! Provides the `--json` renderings of both display modes and the
//! error-object formatter used when a command fails.

use std::path::Path;

use anyhow::{Context, Result};
use remctl_conf::CommandTable;
use serde::Serialize;

use crate::domain::HelpCapture;

#[derive(Serialize)]
struct ServiceEntry<'a> {
    service: &'a str,
    executable: &'a str,
}

#[derive(Serialize)]
struct SummaryDocument<'a> {
    config_dir: &'a Path,
    services: Vec<ServiceEntry<'a>>,
}

#[derive(Serialize)]
struct HelpEntry<'a> {
    service: &'a str,
    executable: &'a str,
    output: &'a str,
    warning: Option<String>,
}

#[derive(Serialize)]
struct HelpDocument<'a> {
    config_dir: &'a Path,
    help: Vec<HelpEntry<'a>>,
}

/// Renders discovery results as pretty-printed JSON on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    /// Print the summary document.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_summary(&self, config_dir: &Path, table: &CommandTable) -> Result<()> {
        println!("{}", summary_json(config_dir, table)?);
        Ok(())
    }

    /// Print the help document.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_help(&self, config_dir: &Path, captures: &[HelpCapture]) -> Result<()> {
        println!("{}", help_json(config_dir, captures)?);
        Ok(())
    }
}

/// Serialize the service list.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn summary_json(config_dir: &Path, table: &CommandTable) -> Result<String> {
    let doc = SummaryDocument {
        config_dir,
        services: table
            .iter()
            .map(|(service, executable)| ServiceEntry {
                service,
                executable,
            })
            .collect(),
    };
    serde_json::to_string_pretty(&doc).context("JSON serialization failed")
}

/// Serialize captured help output.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn help_json(config_dir: &Path, captures: &[HelpCapture]) -> Result<String> {
    let doc = HelpDocument {
        config_dir,
        help: captures
            .iter()
            .map(|c| HelpEntry {
                service: &c.service,
                executable: &c.executable,
                output: &c.output,
                warning: c.warning.as_ref().map(ToString::to_string),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&doc).context("JSON serialization failed")
}

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails (should not happen in
/// practice: `serde_json` only fails on non-finite floats and maps with
/// non-string keys, neither of which appear here).
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}
