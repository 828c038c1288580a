//! Application service: run each service's help program.

use std::time::Duration;

use remctl_conf::{CommandTable, HELP_SUBCOMMAND};

use crate::application::ports::{CommandRunner, ProgressReporter};
use crate::domain::{HelpCapture, HelpWarning, RunError};

/// Run `<executable> help` for one service and capture the result.
///
/// Never fails: every failure becomes a [`HelpWarning`] on the returned
/// capture. Stdout read before a timeout or a read error is kept.
pub async fn capture_one(
    runner: &impl CommandRunner,
    service: &str,
    executable: &str,
    timeout: Option<Duration>,
) -> HelpCapture {
    let args = [HELP_SUBCOMMAND];
    let result = match timeout {
        Some(limit) => runner.run_with_timeout(executable, &args, limit).await,
        None => runner.run(executable, &args).await,
    };

    let (output, warning) = match result {
        Ok(out) => {
            let text = String::from_utf8_lossy(&out.stdout).into_owned();
            let warning = (!out.status.success())
                .then(|| HelpWarning::NonZeroExit(out.status.code()));
            (text, warning)
        }
        Err(e) => match e.downcast::<RunError>() {
            Ok(RunError::TimedOut { timeout, stdout, .. }) => (
                String::from_utf8_lossy(&stdout).into_owned(),
                Some(HelpWarning::TimedOut(timeout.as_secs())),
            ),
            Ok(RunError::OutputUnreadable { source, stdout, .. }) => (
                String::from_utf8_lossy(&stdout).into_owned(),
                Some(HelpWarning::OutputUnreadable(source.to_string())),
            ),
            Err(e) => (String::new(), Some(HelpWarning::RunFailed(format!("{e:#}")))),
        },
    };

    if let Some(w) = &warning {
        tracing::warn!(%service, %executable, "{w}");
    }

    HelpCapture {
        service: service.to_string(),
        executable: executable.to_string(),
        output,
        warning,
    }
}

/// Capture help for every service in the table, in sorted service order.
///
/// Runs sequentially; a failing service does not stop the batch.
pub async fn capture_help(
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
    table: &CommandTable,
    timeout: Option<Duration>,
) -> Vec<HelpCapture> {
    let mut captures = Vec::with_capacity(table.len());
    for (service, executable) in table.iter() {
        reporter.step(&format!("Running {service} help"));
        captures.push(capture_one(runner, service, executable, timeout).await);
    }
    reporter.finish();
    captures
}
