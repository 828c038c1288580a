//! Output formatting module

pub mod human;
pub mod json;
pub mod progress;
pub mod reporter;
pub mod styles;

use std::path::Path;

use anyhow::Result;
use console::Term;
use owo_colors::OwoColorize as _;
use remctl_conf::CommandTable;

pub use human::HumanRenderer;
pub use json::JsonRenderer;
pub use reporter::SpinnerReporter;
pub use styles::Styles;

use crate::domain::HelpCapture;

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether stdout is a TTY.
    pub is_tty: bool,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self {
            styles,
            is_tty,
            quiet,
        }
    }

    /// Check if progress indicators should be shown.
    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.is_tty && !self.quiet
    }

    /// Print a warning message prefixed with `⚠` to stderr. Suppressed when
    /// `quiet`.
    pub fn warn(&self, msg: &str) {
        if !self.quiet {
            eprintln!("  {} {msg}", "⚠".style(self.styles.warning));
        }
    }

    /// Print an info message prefixed with `ℹ`. Suppressed when `quiet`.
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "ℹ".style(self.styles.info));
        }
    }
}

/// Output renderer selected by `--json`.
pub enum Renderer<'a> {
    Human(HumanRenderer<'a>),
    Json(JsonRenderer),
}

impl Renderer<'_> {
    /// Render the list of discovered services.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_summary(&self, config_dir: &Path, table: &CommandTable) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_summary(config_dir, table);
                Ok(())
            }
            Self::Json(r) => r.render_summary(config_dir, table),
        }
    }

    /// Render captured help output for each service.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_help(&self, config_dir: &Path, captures: &[HelpCapture]) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_help(config_dir, captures);
                Ok(())
            }
            Self::Json(r) => r.render_help(config_dir, captures),
        }
    }
}
