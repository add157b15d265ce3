//! End-to-end swap invocation against a stub interpreter.
//!
//! Runs the real shell runner, so Unix only.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use hotswap_core::{ClassEvent, CommandRunner, Invocation, ShellRunner, SwapInvoker, SwapOptions};
use tempfile::TempDir;

/// Writes an executable script that logs its arguments and exits with `code`.
fn stub_interpreter(dir: &Path, log: &Path, code: i32) -> PathBuf {
    let path = dir.join("java");
    let script = format!("#!/bin/sh\nprintf '%s\\n' \"$*\" >> \"{}\"\nexit {}\n", log.display(), code);
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[test]
fn shell_runner_captures_exit_code_and_stdout() {
    let result: Invocation = ShellRunner.run("echo swapping; exit 3").unwrap();
    assert_eq!(result.exit_code, 3);
    assert_eq!(result.stdout, "swapping\n");
}

#[test]
fn shell_runner_flags_signal_killed_process_as_failure() {
    // The shell kills itself, so there is no exit code; the runner must
    // synthesize one that classifies as a failed swap.
    let result = ShellRunner.run("kill -9 $$").unwrap();
    assert_eq!(result.exit_code, -1);
    assert!(result.is_failure());
}

#[test]
fn shell_runner_reports_zero_on_success() {
    let result = ShellRunner.run("true").unwrap();
    assert_eq!(result.exit_code, 0);
}

#[test]
fn invoker_passes_agent_arguments_through_the_shell() {
    let temp = TempDir::new().unwrap();
    let log = temp.path().join("invocations.log");
    let java = stub_interpreter(temp.path(), &log, 0);

    let options = SwapOptions {
        java: Some(java),
        agent_jar: Some(temp.path().join("hotswap.jar")),
        ..SwapOptions::default()
    };
    let invoker = SwapInvoker::new(options).unwrap();

    let event = ClassEvent::changed("/proj/build", "com/acme/Foo.class");
    let forwarded = invoker.handle(event.clone());
    assert_eq!(forwarded, event);

    let recorded = fs::read_to_string(&log).unwrap();
    assert_eq!(
        recorded.trim_end(),
        format!(
            "-Dhost=localhost -Dport=9000 -Dpath=/proj/build -jar {} com/acme/Foo.class",
            temp.path().join("hotswap.jar").display()
        )
    );
}

#[test]
fn failing_agent_does_not_disturb_the_stream() {
    let temp = TempDir::new().unwrap();
    let log = temp.path().join("invocations.log");
    let java = stub_interpreter(temp.path(), &log, 1);

    let options = SwapOptions {
        java: Some(java),
        agent_jar: Some(temp.path().join("hotswap.jar")),
        ..SwapOptions::default()
    };
    let invoker = SwapInvoker::new(options).unwrap();

    // Two events in order; the first fails, the second must still run.
    let first = invoker.handle(ClassEvent::changed("/proj/build", "A.class"));
    let second = invoker.handle(ClassEvent::changed("/proj/build", "B.class"));
    assert_eq!(first.relative, PathBuf::from("A.class"));
    assert_eq!(second.relative, PathBuf::from("B.class"));

    let recorded = fs::read_to_string(&log).unwrap();
    assert_eq!(recorded.lines().count(), 2);
}
