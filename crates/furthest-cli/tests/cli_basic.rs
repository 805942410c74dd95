//! Basic CLI E2E tests.
//!
//! Tests invoke the built `furthest` binary with a throwaway HOME and piped
//! stdin, and verify outputs.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Run a CLI command feeding `stdin`, and return (stdout, stderr, code).
fn run_cli(home: &Path, args: &[&str], stdin: impl AsRef<[u8]>) -> (String, String, i32) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_furthest"))
        .args(args)
        .env("HOME", home)
        .env_remove("FURTHEST_ENV")
        .env_remove("FURTHEST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI command");

    // The CLI may exit before reading everything, e.g. on a rejected max.
    let _ = child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_ref());

    let output = child.wait_with_output().expect("Failed to wait for CLI");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_play_quit_immediately() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["play", "--max", "10", "--seed", "1"], "q\n");
    assert_eq!(code, 0, "play failed");
    assert!(stdout.starts_with("Starting the game. Good luck!"));
    assert!(stdout.contains("Numbers : "));
    assert!(stdout.contains("Questions asked.....: 0"));
    assert!(stdout.contains("Your score is 0.00"));
}

#[test]
fn test_play_records_an_answer() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["play", "--max", "10", "--seed", "3"], "5\nq\n");
    assert_eq!(code, 0, "play failed");
    assert!(stdout.contains("Your answer is '5'"));
    assert!(stdout.contains("Questions asked.....: 1"));
    assert!(stdout.contains("  -> 5"));
}

#[test]
fn test_play_survives_invalid_utf8_answer() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) =
        run_cli(home.path(), &["play", "--max", "10", "--seed", "3"], b"\xff\n5\nq\n");
    assert_eq!(code, 0, "play failed");
    assert!(stdout.contains("Your answer is '\u{FFFD}'"));
    assert!(stdout.contains("Questions asked.....: 2"));
}

#[test]
fn test_play_prompt_reprompts_on_invalid_utf8() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["play"], b"\xff\n15\nq\n");
    assert_eq!(code, 0, "play failed");
    assert!(stdout.contains("I am sorry, but '\u{FFFD}' is not a number"));
    assert!(stdout.contains("Starting the game. Good luck!"));
}

#[test]
fn test_play_closed_input_ends_session() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["play", "--max", "10"], "");
    assert_eq!(code, 0, "play failed");
    assert!(stdout.contains("Questions asked.....: 0"));
}

#[test]
fn test_play_json_summary() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) =
        run_cli(home.path(), &["play", "--max", "10", "--seed", "7", "--json"], "q\n");
    assert_eq!(code, 0, "play --json failed");

    let start = stdout.find("\n{").expect("no JSON summary in output");
    let summary: serde_json::Value = serde_json::from_str(&stdout[start..]).unwrap();
    assert_eq!(summary["questions_asked"], 0);
    assert_eq!(summary["correct_answers"], 0);
    assert_eq!(summary["answer_timeout_secs"], 6);
    assert!(summary["rounds"].as_array().unwrap().is_empty());
}

#[test]
fn test_play_rejects_out_of_range_max() {
    let home = tempfile::tempdir().unwrap();
    for max in ["3", "101", "-5"] {
        let (stdout, stderr, code) = run_cli(home.path(), &["play", "--max", max], "q\n");
        assert_ne!(code, 0, "max {max} should be rejected");
        assert!(stderr.contains("error:"));
        assert!(!stdout.contains("Starting the game"));
    }
}

#[test]
fn test_play_rejects_zero_timeout() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) =
        run_cli(home.path(), &["play", "--max", "10", "--timeout-secs", "0"], "q\n");
    assert_ne!(code, 0);
    assert!(stderr.contains("timeout"));
}

#[test]
fn test_play_prompts_for_max() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["play"], "abc\n15\nq\n");
    assert_eq!(code, 0, "play failed");
    assert!(stdout.starts_with("Enter the max value for the numbers in the game."));
    assert!(stdout.contains("I am sorry, but 'abc' is not a number"));
    assert!(stdout.contains("Starting the game. Good luck!"));
}

#[test]
fn test_play_prompt_with_closed_input_fails() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["play"], "abc\n");
    assert_ne!(code, 0);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_config_set_get_and_play_uses_it() {
    let home = tempfile::tempdir().unwrap();

    let (stdout, _, code) = run_cli(home.path(), &["config", "set", "game.highest_number", "20"], "");
    assert_eq!(code, 0, "config set failed");
    assert_eq!(stdout.trim(), "ok");

    let (stdout, _, code) = run_cli(home.path(), &["config", "get", "game.highest_number"], "");
    assert_eq!(code, 0, "config get failed");
    assert_eq!(stdout.trim(), "20");

    let (stdout, _, code) = run_cli(home.path(), &["play"], "q\n");
    assert_eq!(code, 0, "play failed");
    assert!(!stdout.contains("Enter the max value"));
}

#[test]
fn test_config_list_and_reset() {
    let home = tempfile::tempdir().unwrap();
    let _ = run_cli(home.path(), &["config", "set", "seed", "99"], "");

    let (stdout, _, code) = run_cli(home.path(), &["config", "list"], "");
    assert_eq!(code, 0, "config list failed");
    let listed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(listed["seed"], 99);

    let (_, _, code) = run_cli(home.path(), &["config", "reset"], "");
    assert_eq!(code, 0, "config reset failed");
    let (stdout, _, _) = run_cli(home.path(), &["config", "get", "seed"], "");
    assert_eq!(stdout.trim(), "none");
}

#[test]
fn test_config_unknown_key() {
    let home = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(home.path(), &["config", "get", "game.nope"], "");
    assert_ne!(code, 0);
    let (_, stderr, code) = run_cli(home.path(), &["config", "set", "game.nope", "1"], "");
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown config key"));
}
