//! Human-readable terminal renderer.

use std::fmt::Write as _;
use std::path::Path;

use owo_colors::OwoColorize as _;
use remctl_conf::CommandTable;

use crate::domain::HelpCapture;
use crate::output::{OutputContext, Styles};

/// Header printed above the summary list.
pub const SUMMARY_HEADER: &str = "Available remctl services:";

/// Line printed before each verbose help block.
pub const SEPARATOR: &str =
    "========================================================================";

/// Renders discovery results as human-readable terminal output.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the sorted service list under a header.
    pub fn render_summary(&self, config_dir: &Path, table: &CommandTable) {
        if table.is_empty() {
            self.ctx.info(&format!(
                "No services with help found in {}",
                config_dir.display()
            ));
            return;
        }
        print!("{}", format_summary(&self.ctx.styles, table, !self.ctx.quiet));
    }

    /// Render one block per captured service.
    pub fn render_help(&self, config_dir: &Path, captures: &[HelpCapture]) {
        if captures.is_empty() {
            self.ctx.info(&format!(
                "No services with help found in {}",
                config_dir.display()
            ));
            return;
        }
        for capture in captures {
            print!("{}", format_help_block(&self.ctx.styles, capture));
        }
    }
}

/// Format the summary list, optionally with its header line.
#[must_use]
pub fn format_summary(styles: &Styles, table: &CommandTable, with_header: bool) -> String {
    let mut out = String::new();
    if with_header {
        let _ = writeln!(out, "{}", SUMMARY_HEADER.style(styles.header));
    }
    for service in table.services() {
        let _ = writeln!(out, "  {service}");
    }
    out
}

/// Format one verbose block: separator, service label, optional warning,
/// blank line, then the captured output.
///
/// The output is reproduced verbatim; a final newline is added only when the
/// program did not print one.
#[must_use]
pub fn format_help_block(styles: &Styles, capture: &HelpCapture) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", SEPARATOR.style(styles.dim));
    let _ = writeln!(out, "{} {}", "Service:".style(styles.bold), capture.service);
    if let Some(warning) = &capture.warning {
        let label = format!("warning: {warning} ({})", capture.executable);
        let _ = writeln!(out, "{}", label.style(styles.warning));
    }
    out.push('\n');
    out.push_str(&capture.output);
    if !capture.output.is_empty() && !capture.output.ends_with('\n') {
        out.push('\n');
    }
    out
}
