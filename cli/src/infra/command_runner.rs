//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` uses tokio for async process execution. When a
//! timeout is given the child is killed explicitly on expiry.

use std::io;
use std::process::{ExitStatus, Output, Stdio};
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Child;

use crate::application::ports::CommandRunner;
use crate::domain::RunError;

const READ_CHUNK: usize = 8 * 1024;

/// Production `CommandRunner` backed by `tokio::process`.
///
/// Children get a null stdin so a help program that waits for input sees
/// end-of-file instead of hanging on the operator's terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioCommandRunner;

impl TokioCommandRunner {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn spawn(program: &str, args: &[&str]) -> Result<Child> {
        tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))
    }
}

/// Append everything readable from `pipe` to `buf`.
///
/// Reads in chunks so `buf` holds every byte received so far even when the
/// future is dropped part way through.
async fn drain<R: AsyncRead + Unpin>(pipe: Option<R>, buf: &mut Vec<u8>) -> io::Result<()> {
    let Some(mut pipe) = pipe else {
        return Ok(());
    };
    let mut chunk = [0u8; READ_CHUNK];
    loop {
        let n = pipe.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..n]);
    }
}

/// Drain stdout and stderr into the given buffers while waiting for exit.
async fn collect(
    child: &mut Child,
    program: &str,
    stdout: &mut Vec<u8>,
    stderr: &mut Vec<u8>,
) -> Result<ExitStatus> {
    let stdout_pipe = child.stdout.take();
    let stderr_pipe = child.stderr.take();

    let (status, stdout_read, stderr_read) = tokio::join!(
        child.wait(),
        drain(stdout_pipe, stdout),
        drain(stderr_pipe, stderr),
    );

    let status = status.with_context(|| format!("waiting for {program}"))?;
    if let Err(source) = stdout_read.and(stderr_read) {
        return Err(RunError::OutputUnreadable {
            program: program.to_string(),
            source,
            stdout: std::mem::take(stdout),
        }
        .into());
    }
    Ok(status)
}

impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        let mut child = Self::spawn(program, args)?;
        let (mut stdout, mut stderr) = (Vec::new(), Vec::new());
        let status = collect(&mut child, program, &mut stdout, &mut stderr).await?;
        Ok(Output {
            status,
            stdout,
            stderr,
        })
    }

    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output> {
        let mut child = Self::spawn(program, args)?;
        let (mut stdout, mut stderr) = (Vec::new(), Vec::new());

        let status = tokio::select! {
            result = collect(&mut child, program, &mut stdout, &mut stderr) => result?,
            () = tokio::time::sleep(timeout) => {
                let _ = child.kill().await;
                return Err(RunError::TimedOut {
                    program: program.to_string(),
                    timeout,
                    stdout,
                }
                .into());
            }
        };

        Ok(Output {
            status,
            stdout,
            stderr,
        })
    }
}
