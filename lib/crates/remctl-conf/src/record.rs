//! Command records: `<service> <subcommand> <executable> [ACL...]`.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// Subcommand marker that routes every subcommand of a service to one program.
pub const WILDCARD_SUBCOMMAND: &str = "ALL";

/// Subcommand name reserved for help output.
pub const HELP_SUBCOMMAND: &str = "help";

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    // Safety: this is a compile-time constant pattern, cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(r"\s{2,}").expect("valid regex")
});

/// Why a logical line did not yield a [`CommandEntry`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("expected at least 3 fields, found {found}")]
    TooFewFields { found: usize },
}

/// One command definition taken from the first three fields of a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandEntry {
    pub service: String,
    pub subcommand: String,
    pub executable: String,
}

impl CommandEntry {
    /// Whether this entry answers `<service> help`, either directly or
    /// through the `ALL` wildcard.
    #[must_use]
    pub fn is_help_capable(&self) -> bool {
        self.subcommand == WILDCARD_SUBCOMMAND || self.subcommand == HELP_SUBCOMMAND
    }
}

/// Collapse runs of two or more whitespace characters into a single space
/// and trim both ends.
#[must_use]
pub fn normalize_whitespace(line: &str) -> String {
    WHITESPACE_RUN.replace_all(line, " ").trim().to_string()
}

/// Parse a logical line into a [`CommandEntry`].
///
/// Fields beyond the third (ACL specifications, options) are ignored.
///
/// # Errors
///
/// Returns [`RecordError::TooFewFields`] for lines with fewer than three
/// fields, such as ACL group definitions or blank lines.
pub fn parse_record(line: &str) -> Result<CommandEntry, RecordError> {
    let normalized = normalize_whitespace(line);
    let fields: Vec<&str> = if normalized.is_empty() {
        Vec::new()
    } else {
        normalized.split(' ').collect()
    };

    match fields.as_slice() {
        [service, subcommand, executable, ..] => Ok(CommandEntry {
            service: (*service).to_string(),
            subcommand: (*subcommand).to_string(),
            executable: (*executable).to_string(),
        }),
        short => Err(RecordError::TooFewFields { found: short.len() }),
    }
}
