//! Application service: discover help-capable remctl services.
//!
//! Reads every file in the configuration directory, unfolds it into logical
//! lines, and keeps the `ALL`/`help` records whose executable exists.

use std::path::{Path, PathBuf};

use anyhow::Result;
use remctl_conf::{CommandTable, ConfigLine, parse_record, unfold};

use crate::application::ports::{ConfigSource, ExecutableProbe};
use crate::domain::{DiscoveryError, Settings};

/// A logical line together with the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedLine {
    pub file: PathBuf,
    pub line: ConfigLine,
}

/// Outcome of a discovery pass.
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    pub table: CommandTable,
    /// Requested services that have no help-capable entry.
    pub missing: Vec<String>,
}

/// Read and unfold every configuration file in `dir`.
///
/// Files that cannot be read are logged and skipped.
///
/// # Errors
///
/// Returns an error if the directory itself cannot be listed.
pub fn load_logical_lines(source: &impl ConfigSource, dir: &Path) -> Result<Vec<LoadedLine>> {
    let files = source.list_files(dir)?;
    let mut lines = Vec::new();

    for file in files {
        match source.read_file(&file) {
            Ok(contents) => {
                let unfolded = unfold(&contents);
                tracing::debug!(
                    file = %file.display(),
                    lines = unfolded.len(),
                    "loaded configuration file"
                );
                lines.extend(unfolded.into_iter().map(|line| LoadedLine {
                    file: file.clone(),
                    line,
                }));
            }
            Err(e) => {
                tracing::warn!(file = %file.display(), "skipping unreadable configuration file: {e:#}");
            }
        }
    }

    Ok(lines)
}

/// Build the service table from logical lines, in order.
///
/// Lines with fewer than three fields, subcommands other than `ALL`/`help`,
/// and executables that are not regular files are excluded without error.
pub fn build_command_table(lines: &[LoadedLine], probe: &impl ExecutableProbe) -> CommandTable {
    let mut table = CommandTable::new();

    for loaded in lines {
        let Ok(entry) = parse_record(&loaded.line.text) else {
            continue;
        };
        let origin = format!("{}:{}", loaded.file.display(), loaded.line.line);
        if !entry.is_help_capable() {
            tracing::trace!(%origin, service = %entry.service, subcommand = %entry.subcommand, "not a help entry");
            continue;
        }
        if !probe.is_file(Path::new(&entry.executable)) {
            tracing::debug!(%origin, service = %entry.service, executable = %entry.executable, "executable not found, skipping");
            continue;
        }
        let service = entry.service.clone();
        if let Some(previous) = table.insert(entry) {
            tracing::debug!(%origin, %service, %previous, "later entry replaces earlier one");
        }
    }

    table
}

/// Run a full discovery pass and apply the service filter from `settings`.
///
/// # Errors
///
/// Returns an error if the configuration directory cannot be listed, or if a
/// service filter was given and none of the names matched.
pub fn discover(
    source: &impl ConfigSource,
    probe: &impl ExecutableProbe,
    settings: &Settings,
) -> Result<Discovery> {
    let lines = load_logical_lines(source, &settings.config_dir)?;
    let mut table = build_command_table(&lines, probe);
    tracing::debug!(services = table.len(), "discovered help-capable services");

    let missing = table.retain_services(&settings.services);
    if !settings.services.is_empty() && table.is_empty() {
        return Err(DiscoveryError::NoMatchingServices(settings.services.join(", ")).into());
    }

    Ok(Discovery { table, missing })
}
