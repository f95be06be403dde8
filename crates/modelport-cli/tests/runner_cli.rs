use std::path::PathBuf;
use std::process::{Command, Output};

fn run_with_args(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_modelport-run"))
        .args(args)
        .output()
        .expect("failed to spawn modelport-run")
}

fn identity_model() -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../models/identity.onnx")
        .to_string_lossy()
        .into_owned()
}

#[test]
fn no_arguments_prints_usage_and_fails() {
    let out = run_with_args(&[]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Usage"), "stderr was: {stderr}");
}

#[test]
fn extra_arguments_fail() {
    let out = run_with_args(&["a.onnx", "b.onnx"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn invalid_model_fails_without_acknowledgment() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.onnx");
    std::fs::write(&path, b"definitely not a model").unwrap();

    let out = run_with_args(&[path.to_str().unwrap()]);
    assert!(!out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(!stdout.contains("ok"), "stdout was: {stdout}");
    assert!(!out.stderr.is_empty());
}

#[test]
fn valid_model_prints_acknowledgment_then_slice() {
    let out = run_with_args(&[&identity_model()]);
    assert!(
        out.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("ok\n"), "stdout was: {stdout}");
    assert!(stdout.ends_with('\n'));
    // Identity of an all-ones input: the rendered slice is made of ones.
    assert!(stdout.contains('1'));
}

#[test]
fn repeated_runs_are_deterministic() {
    let model = identity_model();
    let first = run_with_args(&[&model]);
    let second = run_with_args(&[&model]);
    assert!(first.status.success() && second.status.success());
    assert_eq!(first.stdout, second.stdout);
}
