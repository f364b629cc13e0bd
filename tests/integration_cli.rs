use assert_cmd::Command;

// Binary-level checks that don't need a TTY: argument validation and the
// tty guard itself.

#[test]
fn help_prints_usage() {
    let mut cmd = Command::cargo_bin("klok").unwrap();
    let output = cmd.arg("--help").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("countdown"));
    assert!(stdout.contains("--duration"));
}

#[test]
fn zero_duration_is_rejected() {
    let mut cmd = Command::cargo_bin("klok").unwrap();
    cmd.args(["--duration", "0"]).assert().failure();
}

#[test]
fn invalid_appearance_is_rejected() {
    let mut cmd = Command::cargo_bin("klok").unwrap();
    cmd.args(["--appearance", "mauve"]).assert().failure();
}

#[test]
fn refuses_to_run_without_a_tty() {
    // assert_cmd pipes stdin, so the tty guard must trip
    let mut cmd = Command::cargo_bin("klok").unwrap();
    let output = cmd.output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("stdin must be a tty"));
}
