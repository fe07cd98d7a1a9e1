use std::process::{Command, Output};

fn run_rpntab(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rpntab")).args(args)
                                              .output()
                                              .expect("run rpntab")
}

#[test]
fn csv_output_lists_samples() {
    let output = run_rpntab(&["x^2", "--from", "0", "--to", "2", "--samples", "3", "--format",
                              "csv"]);

    assert!(output.status.success(), "process failed: {output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "x,y\n0,0\n1,1\n2,4\n");
}

#[test]
fn table_output_has_one_row_per_sample() {
    let output = run_rpntab(&["2*x", "-f", "-1", "-t", "1", "-n", "5"]);

    assert!(output.status.success(), "process failed: {output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 6);
    assert!(stdout.lines().last().is_some_and(|l| l.trim_end().ends_with('2')),
            "unexpected table: {stdout}");
}

#[test]
fn rpn_flag_prints_postfix_form() {
    let output = run_rpntab(&["--rpn", "2^3^2"]);

    assert!(output.status.success(), "process failed: {output:?}");
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "2 3 2 ^ ^");
}

#[test]
fn trace_writes_tokens_to_stderr() {
    let output = run_rpntab(&["--trace", "--rpn", "--", "-x"]);

    assert!(output.status.success(), "process failed: {output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("tokens: Operator(-)@0 Identifier(x)@1"), "stderr: {stderr}");
    assert!(stderr.contains("rpn: x neg"), "stderr: {stderr}");
}

#[test]
fn errors_are_reported_on_stderr() {
    let output = run_rpntab(&["1/(x-1)", "--from", "0", "--to", "2", "--samples", "3"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Division by zero"), "stderr: {stderr}");
}

#[test]
fn invalid_range_is_rejected() {
    let output = run_rpntab(&["x", "--from", "5", "--to", "1"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid range"), "stderr: {stderr}");
}

#[test]
fn range_is_checked_before_the_expression() {
    let output = run_rpntab(&["(", "--from", "5", "--to", "1"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid range"), "stderr: {stderr}");
}

#[test]
fn rpn_flag_ignores_the_range() {
    let output = run_rpntab(&["--rpn", "x+1", "--from", "5", "--to", "1"]);

    assert!(output.status.success(), "process failed: {output:?}");
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "x 1 +");
}
