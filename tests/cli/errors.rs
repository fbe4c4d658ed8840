//! Tests for error reporting and global flags.

use predicates::prelude::*;

use crate::support::*;

#[test]
fn test_help_lists_commands() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    for command in ["fetch", "list", "push", "login", "logout", "profiles"] {
        assert!(out.contains(command), "help missing {}: {}", command, out);
    }
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_no_authorization_data() {
    let t = Test::new();

    let output = t.fetch(&["--collection", COLLECTION_ID]);
    assert_failure(&output);
    assert_stderr_contains(&output, "No authorization data found.");
    assert_stderr_contains(&output, "courier login");
}

#[test]
fn test_any_identifier_needs_credentials() {
    let t = Test::new();
    let id = uuid::Uuid::new_v4().to_string();

    t.cmd()
        .args(["fetch", "--environment", &format!("1234-{}", id)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No authorization data found."))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_unknown_alias_is_no_authorization_data() {
    let t = Test::with_profiles(vec![courier::core::profile::Profile::seal(
        "default", API_KEY, None,
    )
    .unwrap()]);

    let output = t.fetch(&["--collection", COLLECTION_ID, "--alias", "work"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "No authorization data found.");
}

#[test]
fn test_invalid_api_url_rejected() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["--api-url", "not a url", "fetch", "--collection", COLLECTION_ID])
        .args(["--api-key", API_KEY])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "could not find the remote resource location");
}

#[test]
fn test_invalid_auth_mode_rejected() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["--auth", "cookie", "profiles"])
        .output()
        .unwrap();
    assert_failure(&output);
}

#[test]
fn test_completions_bash() {
    let t = Test::new();

    t.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("courier").and(predicate::str::contains("fetch")));
}
