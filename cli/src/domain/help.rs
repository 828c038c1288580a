//! Help output captured from one service executable.

use std::fmt;

/// Why a help block is annotated instead of being shown cleanly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelpWarning {
    /// The program could not be started.
    RunFailed(String),
    /// The program was killed after running for this many seconds.
    TimedOut(u64),
    /// Reading the program's output failed part way through.
    OutputUnreadable(String),
    /// The program ran but exited unsuccessfully. `None` means it was
    /// terminated by a signal.
    NonZeroExit(Option<i32>),
}

impl fmt::Display for HelpWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RunFailed(reason) => write!(f, "help could not be run: {reason}"),
            Self::TimedOut(secs) => write!(f, "help timed out after {secs}s"),
            Self::OutputUnreadable(reason) => write!(f, "help output could not be read: {reason}"),
            Self::NonZeroExit(Some(code)) => write!(f, "help exited with status {code}"),
            Self::NonZeroExit(None) => f.write_str("help was terminated by a signal"),
        }
    }
}

/// Result of running `<executable> help` for one service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpCapture {
    pub service: String,
    pub executable: String,
    /// Captured standard output, lossily decoded as UTF-8.
    pub output: String,
    pub warning: Option<HelpWarning>,
}

impl HelpCapture {
    /// Returns `true` when the help program ran and exited successfully.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warning.is_none()
    }
}
