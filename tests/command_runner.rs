// tests/command_runner.rs
//
// Runs real processes. Every test holds `cwd_lock()` because the runner
// changes the process-wide working directory.

#![cfg(unix)]

use std::env;
use std::error::Error;
use std::fs;
use std::io::ErrorKind;
use std::sync::Arc;
use std::time::{Duration, Instant};

use launcher::errors::LauncherError;
use launcher::exec::{CommandInvocation, CommandRunner, RunOutcome, WorkingDirGuard};
use launcher::output::MemorySink;
use launcher_test_utils::{cwd_lock, init_tracing, with_timeout};
use tempfile::tempdir;

type TestResult = Result<(), Box<dyn Error>>;

fn runner() -> (CommandRunner, MemorySink) {
    let sink = MemorySink::new();
    (CommandRunner::with_sink(Arc::new(sink.clone())), sink)
}

#[tokio::test]
async fn echo_returns_exact_stdout_and_logs_one_entry() -> TestResult {
    init_tracing();
    let _lock = cwd_lock();
    let (runner, sink) = runner();

    let out = runner.run(&CommandInvocation::from_tokens(["echo", "hi"])?).await?;
    assert_eq!(out, "hi\n");

    let lines = sink.lines();
    assert_eq!(lines.len(), 2, "transcript: {lines:?}");
    assert!(lines[0].ends_with(r#" - ["echo", "hi"]"#), "got {:?}", lines[0]);
    assert_eq!(lines[1], "hi");
    Ok(())
}

#[tokio::test]
async fn string_command_is_split_on_whitespace() -> TestResult {
    let _lock = cwd_lock();
    let (runner, sink) = runner();

    let out = runner.run(&CommandInvocation::parse("echo  a   b")?).await?;
    assert_eq!(out, "a b\n");
    assert!(sink.lines()[0].ends_with(r#" - ["echo", "a", "b"]"#));
    Ok(())
}

#[tokio::test]
async fn runs_inside_the_requested_directory_and_restores_cwd() -> TestResult {
    let _lock = cwd_lock();
    let dir = tempdir()?;
    fs::write(dir.path().join("marker.txt"), "inside\n")?;
    let before = env::current_dir()?;
    let (runner, _sink) = runner();

    let invocation = CommandInvocation::from_tokens(["cat", "marker.txt"])?.in_dir(dir.path());
    let out = with_timeout(runner.run(&invocation)).await?;

    assert_eq!(out, "inside\n");
    assert_eq!(env::current_dir()?, before);
    Ok(())
}

#[tokio::test]
async fn nonzero_exit_still_returns_output_and_stderr() -> TestResult {
    let _lock = cwd_lock();
    let (runner, sink) = runner();

    let invocation =
        CommandInvocation::from_tokens(["sh", "-c", "echo out; echo err 1>&2; exit 3"])?;
    let captured = with_timeout(runner.capture(&invocation)).await?;

    assert_eq!(captured.stdout, "out\n");
    assert_eq!(captured.stderr, "err\n");
    assert_eq!(captured.exit_code, Some(3));
    assert!(!captured.success());

    let lines = sink.lines();
    assert_eq!(&lines[1..], &["out", "stderr:", "err"]);

    // The string-returning contract does not raise either.
    assert_eq!(with_timeout(runner.run(&invocation)).await?, "out\n");
    Ok(())
}

#[tokio::test]
async fn detached_run_returns_empty_without_waiting() -> TestResult {
    let _lock = cwd_lock();
    let before = env::current_dir()?;
    let (runner, sink) = runner();

    let invocation = CommandInvocation::from_tokens(["sleep", "5"])?.detached();

    let started = Instant::now();
    let out = runner.run(&invocation).await?;
    assert!(started.elapsed() < Duration::from_secs(2));
    assert_eq!(out, "");
    assert_eq!(sink.lines().len(), 1);
    assert_eq!(env::current_dir()?, before);

    match runner.execute(&invocation).await? {
        RunOutcome::Detached(task) => {
            assert_eq!(task.program, "sleep");
            assert!(task.pid.is_some());
        }
        other => panic!("expected Detached, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn missing_working_directory_fails_and_leaves_cwd_alone() -> TestResult {
    let _lock = cwd_lock();
    let dir = tempdir()?;
    let missing = dir.path().join("does-not-exist");
    let before = env::current_dir()?;
    let (runner, sink) = runner();

    let invocation = CommandInvocation::from_tokens(["echo", "hi"])?.in_dir(&missing);
    let err = runner.run(&invocation).await.unwrap_err();

    match &err {
        LauncherError::WorkingDirectory { path, .. } => assert_eq!(path, &missing),
        other => panic!("expected WorkingDirectory, got {other:?}"),
    }
    assert_eq!(err.io_kind(), Some(ErrorKind::NotFound));
    assert_eq!(env::current_dir()?, before);
    assert!(sink.lines().is_empty(), "nothing should be logged before the chdir");
    Ok(())
}

#[tokio::test]
async fn missing_executable_fails_but_restores_cwd() -> TestResult {
    let _lock = cwd_lock();
    let dir = tempdir()?;
    let before = env::current_dir()?;
    let (runner, _sink) = runner();

    for wait in [true, false] {
        let invocation = CommandInvocation::from_tokens(["definitely-not-a-real-program-xyz"])?
            .in_dir(dir.path())
            .wait_for_exit(wait);
        let err = runner.run(&invocation).await.unwrap_err();

        match &err {
            LauncherError::Spawn { program, .. } => {
                assert_eq!(program, "definitely-not-a-real-program-xyz")
            }
            other => panic!("expected Spawn, got {other:?}"),
        }
        assert_eq!(err.io_kind(), Some(ErrorKind::NotFound));
        assert_eq!(env::current_dir()?, before);
    }
    Ok(())
}

#[tokio::test]
async fn restoration_holds_for_many_directories() -> TestResult {
    let _lock = cwd_lock();
    let before = env::current_dir()?;
    let (runner, _sink) = runner();
    let dirs = [tempdir()?, tempdir()?, tempdir()?];

    for dir in &dirs {
        runner
            .run(&CommandInvocation::from_tokens(["true"])?.in_dir(dir.path()))
            .await?;
        runner
            .run(&CommandInvocation::from_tokens(["false"])?.in_dir(dir.path()))
            .await?;
        assert_eq!(env::current_dir()?, before);
    }
    Ok(())
}

#[tokio::test]
async fn guard_reports_and_restores_the_previous_directory() -> TestResult {
    let _lock = cwd_lock();
    let dir = tempdir()?;
    let before = env::current_dir()?;

    {
        let guard = WorkingDirGuard::enter(dir.path()).await?;
        assert_eq!(guard.previous(), before.as_path());
        assert_eq!(env::current_dir()?.canonicalize()?, dir.path().canonicalize()?);
    }

    assert_eq!(env::current_dir()?, before);
    Ok(())
}
