//! CLI behavior tests: exit codes, output formats, init.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn aide_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_algebra-aide"))
}

#[test]
fn no_args_returns_error_not_panic() {
    let mut cmd = aide_cmd();
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("required"));
}

#[test]
fn analyze_prints_roots_and_vertex() {
    let mut cmd = aide_cmd();
    cmd.arg("x^2 - 4");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("two real roots"))
        .stdout(predicate::str::contains("2.00"))
        .stdout(predicate::str::contains("Vertex"));
}

#[test]
fn analyze_accepts_comma_triple() {
    let mut cmd = aide_cmd();
    cmd.arg("1, 0, -4").arg("--quiet");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("discriminant=16.00"));
}

#[test]
fn json_output_valid() {
    let mut cmd = aide_cmd();
    cmd.arg("x^2 - 4").arg("--json");
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let s = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(s.trim()).expect("valid JSON");
    assert_eq!(value["discriminant"], 16.0);
    assert_eq!(value["rootClass"], "two-real");
}

#[test]
fn degenerate_equation_reports_undefined_vertex() {
    let mut cmd = aide_cmd();
    cmd.arg("2x + 3").arg("--quiet");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("vertex=undefined"));
}

#[test]
fn unparseable_equation_exit_2() {
    let mut cmd = aide_cmd();
    cmd.arg("x^3 - 1");
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn svg_file_is_written() {
    let dir = tempfile::TempDir::new().unwrap();
    let svg_path = dir.path().join("curve.svg");
    let mut cmd = aide_cmd();
    cmd.arg("x^2 - 4").arg("--svg").arg(&svg_path);
    cmd.assert().success();
    let content = fs::read_to_string(&svg_path).unwrap();
    assert!(content.starts_with("<svg"));
    assert!(content.contains("<path"));
}

#[test]
fn quiz_runs_to_completion_on_piped_answers() {
    let mut cmd = aide_cmd();
    cmd.arg("quiz").arg("--difficulty").arg("easy").arg("--seed").arg("1");
    // Enough wrong answers to burn through every question and retry
    cmd.write_stdin("0,0\n0,0\n0,0\n0,0\n0,0\n0,0\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Quiz Completed!"))
        .stdout(predicate::str::contains("Hint:"));
}

#[test]
fn quiz_handles_closed_stdin() {
    let mut cmd = aide_cmd();
    cmd.arg("quiz").arg("--seed").arg("2");
    cmd.write_stdin("");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Quiz Completed!"));
}

#[test]
fn quiz_rejects_unknown_difficulty() {
    let mut cmd = aide_cmd();
    cmd.arg("quiz").arg("--difficulty").arg("impossible");
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unknown difficulty"));
}

#[test]
fn explain_shows_all_steps() {
    let mut cmd = aide_cmd();
    cmd.arg("explain");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Step 1"))
        .stdout(predicate::str::contains("Step 4"))
        .stdout(predicate::str::contains("discriminant"));
}

#[test]
fn explain_single_step() {
    let mut cmd = aide_cmd();
    cmd.arg("explain").arg("--step").arg("2");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Finding the Roots"))
        .stdout(predicate::str::contains("Applications").not());
}

#[test]
fn explain_bad_step_exit_2() {
    let mut cmd = aide_cmd();
    cmd.arg("explain").arg("--step").arg("9");
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("no such lesson step"));
}

#[test]
fn progress_overview() {
    let mut cmd = aide_cmd();
    cmd.arg("progress");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Factoring"))
        .stdout(predicate::str::contains("Recommended next topic"));
}

#[test]
fn progress_json_valid() {
    let mut cmd = aide_cmd();
    cmd.arg("progress").arg("--json");
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let s = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(s.trim()).expect("valid JSON");
    assert!(value["topics"].is_array());
}

#[test]
fn init_creates_config() {
    let dir = tempfile::TempDir::new().unwrap();
    let config_path = dir.path().join(".algebraiderc.json");
    let mut cmd = aide_cmd();
    cmd.arg("init").arg("--dir").arg(dir.path());
    cmd.assert().success();
    assert!(config_path.exists(), ".algebraiderc.json should be created");
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("halfRange"));
    assert!(content.contains("difficulty"));
}

#[test]
fn init_refuses_to_overwrite() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut cmd = aide_cmd();
    cmd.arg("init").arg("--dir").arg(dir.path());
    cmd.assert().success();

    let mut cmd = aide_cmd();
    cmd.arg("init").arg("--dir").arg(dir.path());
    cmd.assert().failure().code(2);
}

#[test]
fn custom_config_file_is_honored() {
    let dir = tempfile::TempDir::new().unwrap();
    let config_path = dir.path().join("custom.json");
    fs::write(&config_path, r#"{ "sampleCount": 10, "halfRange": 2 }"#).unwrap();

    let mut cmd = aide_cmd();
    cmd.arg("x^2 - 4")
        .arg("--verbose")
        .arg("--config")
        .arg(&config_path);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("points sampled"));
}

#[test]
fn missing_config_file_exit_2() {
    let mut cmd = aide_cmd();
    cmd.arg("x^2 - 4").arg("--config").arg("does-not-exist.json");
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Config file not found"));
}
