//! Physical-to-logical line unfolding.
//!
//! remctl configuration files allow full-line `#` comments and backslash
//! continuation. [`unfold`] applies both rules to the contents of one file.

use serde::Serialize;

/// One configuration statement after continuation lines have been joined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigLine {
    /// Joined statement text.
    pub text: String,
    /// 1-based physical line number where the statement starts.
    pub line: usize,
}

/// Returns `true` when the first non-whitespace character is `#`.
///
/// Comments are only recognised at the start of a line; `#` anywhere else is
/// ordinary text.
#[must_use]
pub fn is_comment(physical: &str) -> bool {
    physical.trim_start().starts_with('#')
}

/// Unfold the contents of one configuration file into logical lines.
///
/// - comment lines are dropped, including those between continuation lines
/// - a line ending in `\` is stripped of the backslash and surrounding
///   whitespace and joined to the next with a single space
/// - a line without a pending continuation is emitted unchanged
/// - an unterminated continuation at end of input is still emitted
#[must_use]
pub fn unfold(contents: &str) -> Vec<ConfigLine> {
    let mut lines = Vec::new();
    let mut pending = String::new();
    let mut pending_start = 0;

    for (idx, physical) in contents.lines().enumerate() {
        let number = idx + 1;
        if is_comment(physical) {
            continue;
        }

        if let Some(body) = physical.trim_end().strip_suffix('\\') {
            if pending.is_empty() {
                pending_start = number;
            }
            append_part(&mut pending, body.trim());
            continue;
        }

        if pending.is_empty() {
            lines.push(ConfigLine {
                text: physical.to_string(),
                line: number,
            });
        } else {
            append_part(&mut pending, physical.trim());
            lines.push(ConfigLine {
                text: std::mem::take(&mut pending),
                line: pending_start,
            });
        }
    }

    if !pending.is_empty() {
        lines.push(ConfigLine {
            text: pending,
            line: pending_start,
        });
    }

    lines
}

fn append_part(buffer: &mut String, part: &str) {
    if part.is_empty() {
        return;
    }
    if !buffer.is_empty() {
        buffer.push(' ');
    }
    buffer.push_str(part);
}
