//! Unit tests for the help dispatch service.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::time::Duration;

use remctl_conf::{CommandTable, parse_record};
use remctl_help::application::services::dispatch::{capture_help, capture_one};
use remctl_help::domain::HelpWarning;

use crate::mocks::{CannedRunner, RecordingReporter, err_output, ok_output};

fn table(lines: &[&str]) -> CommandTable {
    lines
        .iter()
        .map(|l| parse_record(l).expect("record"))
        .collect()
}

#[tokio::test]
async fn test_capture_one_passes_single_help_argument() {
    let runner = CannedRunner::new().with_output("/bin/svc", ok_output(b"usage\n"));
    let capture = capture_one(&runner, "svc", "/bin/svc", None).await;

    assert_eq!(capture.output, "usage\n");
    assert!(capture.is_clean());
    let calls = runner.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].program, "/bin/svc");
    assert_eq!(calls[0].args, vec!["help"]);
    assert_eq!(calls[0].timeout, None);
}

#[tokio::test]
async fn test_capture_one_uses_timeout_when_given() {
    let runner = CannedRunner::new().with_output("/bin/svc", ok_output(b""));
    capture_one(&runner, "svc", "/bin/svc", Some(Duration::from_secs(7))).await;
    assert_eq!(runner.calls()[0].timeout, Some(Duration::from_secs(7)));
}

#[tokio::test]
async fn test_capture_one_non_zero_exit_keeps_output_and_warns() {
    let runner = CannedRunner::new().with_output("/bin/svc", err_output(3, b"partial\n"));
    let capture = capture_one(&runner, "svc", "/bin/svc", None).await;
    assert_eq!(capture.output, "partial\n");
    assert_eq!(capture.warning, Some(HelpWarning::NonZeroExit(Some(3))));
}

#[tokio::test]
async fn test_capture_one_spawn_failure_becomes_warning() {
    let runner = CannedRunner::new().with_failure("/bin/svc", "failed to spawn /bin/svc");
    let capture = capture_one(&runner, "svc", "/bin/svc", None).await;
    assert!(capture.output.is_empty());
    match capture.warning {
        Some(HelpWarning::RunFailed(reason)) => assert!(reason.contains("failed to spawn")),
        other => panic!("unexpected warning: {other:?}"),
    }
}

#[tokio::test]
async fn test_capture_one_timeout_keeps_partial_output() {
    let runner = CannedRunner::new().with_timeout("/bin/slow", b"partial-help-text\n");
    let capture = capture_one(&runner, "slow", "/bin/slow", Some(Duration::from_secs(1))).await;
    assert_eq!(capture.output, "partial-help-text\n");
    assert_eq!(capture.warning, Some(HelpWarning::TimedOut(1)));
}

#[tokio::test]
async fn test_capture_one_read_error_keeps_output_and_warns() {
    let runner = CannedRunner::new().with_read_error("/bin/svc", b"usage: sv");
    let capture = capture_one(&runner, "svc", "/bin/svc", None).await;
    assert_eq!(capture.output, "usage: sv");
    match capture.warning {
        Some(HelpWarning::OutputUnreadable(reason)) => assert!(!reason.is_empty()),
        other => panic!("unexpected warning: {other:?}"),
    }
}

#[tokio::test]
async fn test_capture_one_decodes_invalid_utf8_lossily() {
    let runner = CannedRunner::new().with_output("/bin/svc", ok_output(b"ok \xff\n"));
    let capture = capture_one(&runner, "svc", "/bin/svc", None).await;
    assert!(capture.output.starts_with("ok "));
}

#[tokio::test]
async fn test_capture_help_runs_services_in_sorted_order() {
    let runner = CannedRunner::new()
        .with_output("/bin/b", ok_output(b"b help\n"))
        .with_output("/bin/a", ok_output(b"a help\n"));
    let reporter = RecordingReporter::default();
    let t = table(&["beta ALL /bin/b", "alpha help /bin/a"]);

    let captures = capture_help(&runner, &reporter, &t, None).await;

    let services: Vec<&str> = captures.iter().map(|c| c.service.as_str()).collect();
    assert_eq!(services, vec!["alpha", "beta"]);
    let programs: Vec<String> = runner.calls().into_iter().map(|c| c.program).collect();
    assert_eq!(programs, vec!["/bin/a", "/bin/b"]);
}

#[tokio::test]
async fn test_capture_help_continues_after_failure() {
    let runner = CannedRunner::new()
        .with_failure("/bin/a", "boom")
        .with_output("/bin/b", ok_output(b"fine\n"));
    let reporter = RecordingReporter::default();
    let t = table(&["a ALL /bin/a", "b ALL /bin/b"]);

    let captures = capture_help(&runner, &reporter, &t, None).await;

    assert_eq!(captures.len(), 2);
    assert!(!captures[0].is_clean());
    assert!(captures[1].is_clean());
    assert_eq!(captures[1].output, "fine\n");
}

#[tokio::test]
async fn test_capture_help_reports_one_step_per_service() {
    let runner = CannedRunner::new()
        .with_output("/bin/a", ok_output(b""))
        .with_output("/bin/b", ok_output(b""));
    let reporter = RecordingReporter::default();
    let t = table(&["a ALL /bin/a", "b ALL /bin/b"]);

    capture_help(&runner, &reporter, &t, None).await;

    assert_eq!(
        *reporter.steps.borrow(),
        vec!["Running a help".to_string(), "Running b help".to_string()]
    );
    assert_eq!(*reporter.finished.borrow(), 1);
}

#[tokio::test]
async fn test_capture_help_empty_table_runs_nothing() {
    let runner = CannedRunner::new();
    let reporter = RecordingReporter::default();
    let captures = capture_help(&runner, &reporter, &CommandTable::new(), None).await;
    assert!(captures.is_empty());
    assert!(runner.calls().is_empty());
}
