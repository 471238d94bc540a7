//! Integration tests for the CLI binary.
//!
//! This test is registered as a [[test]] in the directory-keys-cli crate
//! so that CARGO_BIN_EXE_dkey is available.

use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Get a Command pointing to the `dkey` binary.
fn dkey_binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dkey"))
}

fn run(args: &[&str]) -> Output {
    dkey_binary()
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute dkey {args:?}: {e}"))
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn cli_responds_to_help() {
    let output = run(&["--help"]);
    assert!(
        output.status.success(),
        "dkey --help should exit with success, stderr: {}",
        stderr(&output)
    );
    let out = stdout(&output);
    assert!(
        out.contains("dkey") || out.contains("Usage"),
        "dkey --help output should contain usage information, got: {out}"
    );
}

#[test]
fn cli_exits_with_error_on_unknown_flag() {
    let output = run(&["--nonexistent-flag"]);
    assert!(!output.status.success());
}

#[test]
fn cli_parse_permitted_key() {
    let output = run(&["parse", "account", "foreignPrincipal"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "account by foreignPrincipal");
}

#[test]
fn cli_parse_rejects_key_outside_category() {
    let output = run(&["parse", "shareLocator", "name"]);
    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("Invalid shareLocator lookup key"), "got: {err}");
    assert!(err.contains("permitted keys for shareLocator: id"), "got: {err}");
}

#[test]
fn cli_parse_is_case_sensitive() {
    let output = run(&["parse", "domain", "ID"]);
    assert!(!output.status.success());
}

#[test]
fn cli_parse_unknown_category() {
    let output = run(&["parse", "mailbox", "id"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Unknown entity category"));
}

#[test]
fn cli_parse_json_output() {
    let output = run(&["--json", "parse", "server", "serviceHostname"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["category"], "server");
    assert_eq!(value["key"], "serviceHostname");
}

#[test]
fn cli_categories_lists_all() {
    let output = run(&["--json", "categories"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let list = value.as_array().unwrap();
    assert_eq!(list.len(), 15);
    assert_eq!(list[0]["category"], "account");
    assert_eq!(list[0]["keys"].as_array().unwrap().len(), 6);
}

#[test]
fn cli_guess() {
    let output = run(&["guess", "cos", "4a1c2e3f-0000-1111-2222-333344445555"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "cos by id");

    let output = run(&["guess", "cos", "default"]);
    assert_eq!(stdout(&output).trim(), "cos by name");

    let output = run(&["guess", "shareLocator", "not-a-uuid"]);
    assert!(!output.status.success());
}

#[test]
fn cli_signature_lookups() {
    let output = run(&["signature", "mime", "zimbraPrefMailSignatureHTML"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "text/html");

    let output = run(&["signature", "attr", "text/plain"]);
    assert_eq!(stdout(&output).trim(), "zimbraPrefMailSignature");

    let output = run(&["signature", "attr", "application/json"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("application/json"));
}

#[test]
fn cli_code_field_unknown_is_not_an_error() {
    let output = run(&["code", "field", "unknown"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("unknown field"));

    let output = run(&["code", "field", "resendCount"]);
    assert!(stdout(&output).contains("ResendCount"));
}

#[test]
fn cli_code_decode_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("code.json");
    std::fs::write(
        &path,
        r#"{"email":"backup@example.org","code":"9QW3ZT","expiryTime":"0","resendCount":"3"}"#,
    )
    .unwrap();

    let output = run(&["code", "decode", "--file", path.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("backup@example.org"));
    assert!(out.contains("1970-01-01T00:00:00+00:00"));
    assert!(out.contains("expired"));
}

#[test]
fn cli_code_decode_stdin_rejects_missing_field() {
    let mut child = dkey_binary()
        .args(["code", "decode"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(br#"{"email":"a@b.c","code":"1","expiryTime":"5"}"#)
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(!output.status.success());
    assert!(stderr(&output).contains("missing field: resendCount"));
}

#[test]
fn cli_code_encode() {
    let output = run(&[
        "code",
        "encode",
        "--email",
        "a@b.c",
        "--code",
        "XYZ",
        "--expiry-time",
        "1000",
    ]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(value["email"], "a@b.c");
    assert_eq!(value["expiryTime"], "1000");
    assert_eq!(value["resendCount"], "0");
}
