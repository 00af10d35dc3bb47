use std::process::Command;

fn xtask(arg: &str) -> std::process::Output {
    let exe = env!("CARGO_BIN_EXE_xtask");
    Command::new(exe).arg(arg).output().expect("run xtask")
}

#[test]
fn xtask_help_runs() {
    let output = xtask("help");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("xtask commands"));
}

#[test]
fn xtask_explain_coverage_passes() {
    let output = xtask("explain-coverage");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("3 issue codes have explanations"));
}

#[test]
fn xtask_print_schema_ids() {
    let output = xtask("print-schema-ids");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("secctl.report.v1"));
    assert!(stdout.contains("secctl.config.v1"));
}

#[test]
fn xtask_unknown_command_fails() {
    let output = xtask("nope");
    assert!(!output.status.success());
}
