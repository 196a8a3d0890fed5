//! The binary as a process: exit codes and the log file.

use std::process::Command;

use httpmock::prelude::*;

fn graph_pulse() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_graph-pulse"));
    cmd.env_clear();
    cmd
}

#[test]
fn missing_credentials_exit_non_zero_before_any_request() {
    let server = MockServer::start();
    let token_mock = server.mock(|when, then| {
        when.method(POST).path("/token");
        then.status(200).body(r#"{"access_token":"abc123"}"#);
    });

    let output = graph_pulse()
        .env("CONFIG_ID", "client-id")
        .env("CONFIG_KEY", "client-secret")
        .args(["--token-endpoint", &server.url("/token")])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("REFRESH_TOKEN"), "stderr: {stderr}");
    token_mock.assert_calls(0);
}

#[test]
fn failed_rounds_still_exit_zero_and_are_logged_to_file() {
    let server = MockServer::start();
    let token_mock = server.mock(|when, then| {
        when.method(POST).path("/token");
        then.status(400).body(r#"{"error":"invalid_grant"}"#);
    });

    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("pulse.log");
    std::fs::write(&log_path, "previous line\n").unwrap();

    let output = graph_pulse()
        .env("REFRESH_TOKEN", "refresh-tok")
        .env("CONFIG_ID", "client-id")
        .env("CONFIG_KEY", "client-secret")
        .args(["--token-endpoint", &server.url("/token")])
        .arg("--log-file")
        .arg(&log_path)
        .output()
        .unwrap();

    assert!(output.status.success());
    token_mock.assert_calls(3);

    let log = std::fs::read_to_string(&log_path).unwrap();
    assert!(log.starts_with("previous line\n"));
    assert_eq!(log.matches("skipping round").count(), 3);
    assert!(log.contains("invalid_grant"));
    assert!(!log.contains("client-secret"));
}
