//! Default command: list remctl services, or show each service's help.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::{AppContext, OutputMode, renderer_for};
use crate::application::ports::{CommandRunner, ConfigSource, ExecutableProbe};
use crate::application::services::{discovery, dispatch};
use crate::domain::{DisplayMode, Settings};
use crate::output::{OutputContext, SpinnerReporter};

/// Run discovery and display with the production adapters in `app`.
///
/// # Errors
///
/// Returns an error if the configuration directory cannot be read or a
/// service filter matches nothing.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    execute(
        &app.output,
        app.mode,
        &app.settings,
        &app.source,
        &app.probe,
        &app.runner,
    )
    .await
}

/// Run discovery and display against arbitrary port implementations.
///
/// # Errors
///
/// Returns an error if the configuration directory cannot be read or a
/// service filter matches nothing.
pub async fn execute(
    output: &OutputContext,
    mode: OutputMode,
    settings: &Settings,
    source: &impl ConfigSource,
    probe: &impl ExecutableProbe,
    runner: &impl CommandRunner,
) -> Result<ExitCode> {
    let found = discovery::discover(source, probe, settings)?;

    for name in &found.missing {
        let msg = format!("No help-capable service named '{name}'");
        match mode {
            OutputMode::Human => output.warn(&msg),
            OutputMode::Json => tracing::warn!("{msg}"),
        }
    }

    let renderer = renderer_for(output, mode);
    match settings.mode {
        DisplayMode::Summary => renderer.render_summary(&settings.config_dir, &found.table)?,
        DisplayMode::Verbose => {
            let captures = {
                let reporter = SpinnerReporter::new(output);
                dispatch::capture_help(runner, &reporter, &found.table, settings.help_timeout)
                    .await
            };
            renderer.render_help(&settings.config_dir, &captures)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
