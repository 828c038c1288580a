//! Application context: unified state passed to every command handler.
//!
//! `AppContext` bundles the output context, the resolved run settings, and
//! the concrete infrastructure adapters. It is built once in `Cli::run()`;
//! nothing downstream reads process-wide option state.

use crate::domain::Settings;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config_dir::FsConfigSource;
use crate::infra::fs::LocalExecutableProbe;
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Resolved settings for this run.
    pub settings: Settings,
    /// Reads the remctl configuration directory.
    pub source: FsConfigSource,
    /// Checks configured executables.
    pub probe: LocalExecutableProbe,
    /// Runs help programs.
    pub runner: TokioCommandRunner,
}

impl AppContext {
    /// Construct an `AppContext` from output flags and resolved settings.
    #[must_use]
    pub fn new(flags: &OutputFlags, settings: Settings) -> Self {
        let mode = if flags.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            mode,
            settings,
            source: FsConfigSource,
            probe: LocalExecutableProbe,
            runner: TokioCommandRunner::new(),
        }
    }
}

/// Build the renderer for an output mode.
#[must_use]
pub fn renderer_for(output: &OutputContext, mode: OutputMode) -> Renderer<'_> {
    match mode {
        OutputMode::Human => Renderer::Human(HumanRenderer::new(output)),
        OutputMode::Json => Renderer::Json(JsonRenderer),
    }
}
