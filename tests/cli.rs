#![cfg(feature = "cli")]

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_strptime-guess"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();

    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_valid_format() {
    let output = run(&["2030-01-24 05:45"], "");

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "%Y-%m-%d %H:%M");
}

#[test]
fn test_words_are_joined() {
    let output = run(&["Thu,", "24", "Jan", "2030", "05:45"], "");

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "%a, %d %b %Y %H:%M");
}

#[test]
fn test_invalid_format() {
    let output = run(&["invalid-date-format"], "");

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("No valid format found."));
}

#[test]
fn test_no_args_prompts() {
    let output = run(&[], "2030-01-24 05:45\n");
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(out.contains("Paste an example date/time string to see the guessed format."));
    assert!(out.contains("%Y-%m-%d %H:%M"));
}

#[test]
fn test_all() {
    let output = run(&["--all", "01/02/2030"], "");

    assert!(output.status.success());
    assert_eq!(
        stdout(&output).lines().collect::<Vec<_>>(),
        vec!["%m/%d/%Y", "%d/%m/%Y"]
    );
}

#[test]
fn test_help() {
    let output = run(&["--help"], "");

    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage:"));
}
