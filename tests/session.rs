use floatmark::cli::run_session;
use floatmark::Harness;
use std::io::{Cursor, Write};
use std::process::{Command, Stdio};

fn session(input: &str) -> (String, String) {
    let mut input = Cursor::new(input.as_bytes().to_vec());
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut harness = Harness::with_seed(2024);
    run_session(&mut input, &mut out, &mut err, &mut harness).unwrap();
    (
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn invalid_choice_then_exit() {
    let (out, err) = session("5\n0\n");
    assert_eq!(err, "Invalid choice\n");
    assert_eq!(out.matches("Choose a benchmarking task:").count(), 2);
    assert!(!out.contains("Enter matrix dimension"));
}

#[test]
fn multiplication_report() {
    let (out, err) = session("1\n4\n0\n");
    assert!(err.is_empty(), "unexpected stderr: {err}");
    assert!(out.contains("Enter matrix dimension (n x n): "));

    let report: Vec<&str> = out
        .lines()
        .skip_while(|l| !l.ends_with("Benchmark Report:"))
        .take(4)
        .collect();
    assert_eq!(report.len(), 4);
    assert!(report[0].ends_with("Benchmark Report:"));
    assert_eq!(report[1], "Task: Matrix Multiplication");
    assert!(report[2].starts_with("Elapsed time: ") && report[2].ends_with(" seconds"));
    assert!(report[3].starts_with("Error: ") && report[3].contains("e+"));
}

#[test]
fn lu_report() {
    let (out, err) = session("2\n5\n0\n");
    assert!(err.is_empty(), "unexpected stderr: {err}");
    assert!(out.contains("Task: LU Decomposition\n"));
}

#[test]
fn bad_dimension_keeps_menu_running() {
    let (out, err) = session("2\n-4\n1\nabc\n1\n2\n0\n");
    assert_eq!(err.lines().count(), 2);
    assert!(err.lines().all(|l| l.contains("invalid matrix dimension")));
    assert!(out.contains("Task: Matrix Multiplication"));
}

#[cfg(target_pointer_width = "64")]
#[test]
fn allocation_failure_ends_only_that_run() {
    // 2^32 * 2^32 не помещается в usize
    let (out, err) = session("1\n4294967296\n1\n2\n0\n");
    assert_eq!(err.lines().count(), 1);
    assert!(
        err.contains("failed to allocate a 4294967296x4294967296 matrix"),
        "unexpected stderr: {err}"
    );
    assert_eq!(out.matches("Task: Matrix Multiplication").count(), 1);
    assert_eq!(out.matches("Choose a benchmarking task:").count(), 3);
}

#[test]
fn end_of_input_exits_cleanly() {
    let (out, err) = session("");
    assert!(err.is_empty());
    assert!(out.ends_with("Choice: "));

    let (_, err) = session("1\n");
    assert!(err.is_empty());
}

#[test]
fn binary_exits_with_zero_after_invalid_choice() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_floatmark"))
        .args(["--seed", "1"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"5\n0\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stderr), "Invalid choice\n");
}

#[cfg(target_pointer_width = "64")]
#[test]
fn sweep_prints_summary_with_failed_rows() {
    let output = Command::new(env!("CARGO_BIN_EXE_floatmark-sweep"))
        .args(["--seed", "1", "--sizes", "2,3,4294967296"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Benchmark summary:"));
    assert_eq!(stdout.matches("Matrix Multiplication").count(), 3);
    assert_eq!(stdout.matches("LU Decomposition").count(), 3);
    assert_eq!(stdout.matches("failed to allocate").count(), 2);
    assert!(stdout.contains("e+00") || stdout.contains("e-01"));
}

#[test]
fn sweep_rejects_unknown_option() {
    let output = Command::new(env!("CARGO_BIN_EXE_floatmark-sweep"))
        .arg("--frobnicate")
        .output()
        .unwrap();
    assert!(!output.status.success());
}
