#![cfg(feature = "cli")]

use std::fs;
use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_triparty-sign"))
}

#[test]
fn test_demo_without_arguments() {
    let out = bin().output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Signature: (151073, 453186)"));
    assert!(stdout.contains("Verification: true"));
    assert!(stdout.contains("Recovered message: 11"));
}

#[test]
fn test_file_mode_writes_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "683,811,3,13,5,7,11").unwrap();

    let status = bin().arg(&input).arg(&output).status().unwrap();
    assert!(status.success());
    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, "Signature: (151073, 453186)\nVerification: true\nRecovered message: 11");
}

#[test]
fn test_zero_rounds_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "9,25,7,11,13,2,4").unwrap();

    let out = bin().args(["--rounds", "0"]).arg(&input).arg(&output).output().unwrap();
    assert!(!out.status.success());
    assert!(!output.exists());
}

#[test]
fn test_bad_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.txt");

    let out = bin().arg(dir.path().join("missing.txt")).arg(&output).output().unwrap();
    assert!(!String::from_utf8_lossy(&out.stderr).is_empty());
    assert!(!output.exists());

    let input = dir.path().join("in.txt");
    fs::write(&input, "1,2,3").unwrap();
    bin().arg(&input).arg(&output).output().unwrap();
    assert!(!output.exists());
}
