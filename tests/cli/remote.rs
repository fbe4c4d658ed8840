//! CLI tests against a mock Postman API.

use std::process::Output;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::support::mock::*;
use crate::support::*;

/// Run `courier <args>` against `server` with `stdin` piped.
async fn run(t: Test, server: &MockServer, args: &[&str], stdin: &str) -> (Test, Output) {
    let base = server.uri();
    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    let stdin = stdin.to_string();

    blocking(move || {
        let output = t
            .cmd()
            .args(["--api-url", base.as_str()])
            .args(&args)
            .write_stdin(stdin)
            .output()
            .expect("failed to run courier");
        (t, output)
    })
    .await
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_with_explicit_key() {
    let server = MockServer::start().await;
    serve_collection(&server).await;

    let (_t, output) = run(
        Test::new(),
        &server,
        &["fetch", "--collection", COLLECTION_ID, "--api-key", API_KEY],
        "",
    )
    .await;

    assert_success(&output);
    assert_eq!(stdout_json(&output), json!({ "collection": collection() }));
    assert_eq!(api_key_headers(&server).await, vec![Some(API_KEY.to_string())]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_with_encrypted_profile_prompts_once() {
    let server = MockServer::start().await;
    serve_collection(&server).await;
    serve_environment(&server).await;

    let (t, output) = blocking(|| {
        let t = Test::new();
        let output = t.login_encrypted("default", API_KEY, PASSKEY);
        (t, output)
    })
    .await;
    assert_success(&output);

    let (_t, output) = run(
        t,
        &server,
        &[
            "fetch",
            "--collection",
            COLLECTION_ID,
            "--environment",
            ENVIRONMENT_UID,
        ],
        &format!("{}\n", PASSKEY),
    )
    .await;

    assert_success(&output);
    let json = stdout_json(&output);
    assert_eq!(json["collection"], collection());
    assert_eq!(json["environment"], environment());
    assert_eq!(api_key_headers(&server).await.len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_with_wrong_passkey() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let t = Test::with_profiles(vec![courier::core::profile::Profile::seal(
        "default",
        API_KEY,
        Some(PASSKEY),
    )
    .unwrap()]);
    let (_t, output) = run(
        t,
        &server,
        &["fetch", "--collection", COLLECTION_ID],
        "not the passkey\n",
    )
    .await;

    assert_failure(&output);
    assert_stderr_contains(&output, "Error during decryption");
    assert_stderr_contains(&output, "verify the key entered is correct");
    assert_output_excludes(&output, API_KEY);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_reports_api_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(invalid_key_body()))
        .mount(&server)
        .await;

    let (_t, output) = run(
        Test::new(),
        &server,
        &["fetch", "--collection", COLLECTION_ID, "--api-key", "PMAK-bad"],
        "",
    )
    .await;

    assert_failure(&output);
    assert_stderr_contains(&output, INVALID_KEY_MESSAGE);
    assert_stderr_contains(&output, "Error fetching the collection from the provided URL.");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_query_transport() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/collections/{}", COLLECTION_ID)))
        .and(query_param("apikey", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope("collection", collection())))
        .expect(1)
        .mount(&server)
        .await;

    let (_t, output) = run(
        Test::new(),
        &server,
        &[
            "--auth",
            "query",
            "fetch",
            "--collection",
            COLLECTION_ID,
            "--api-key",
            API_KEY,
        ],
        "",
    )
    .await;

    assert_success(&output);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_push_updates_remote() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(format!("/environments/{}", ENVIRONMENT_UID)))
        .and(header("X-Api-Key", API_KEY))
        .and(body_json(envelope("environment", environment())))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"environment": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let t = Test::new();
    t.write("env.json", &environment().to_string());
    let (_t, output) = run(
        t,
        &server,
        &["push", "environment", "env.json", ENVIRONMENT_UID, "--api-key", API_KEY],
        "",
    )
    .await;

    assert_success(&output);
    assert_stderr_contains(&output, "updated environment");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_push_to_keyed_url_masks_key() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(format!("/environments/{}", ENVIRONMENT_UID)))
        .and(query_param("apikey", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"environment": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let t = Test::new();
    t.write("env.json", &environment().to_string());
    let target = format!("{}/environments/{}?apikey={}", server.uri(), ENVIRONMENT_UID, API_KEY);
    let (_t, output) = run(
        t,
        &server,
        &["push", "environment", "env.json", &target, "--verbose"],
        "",
    )
    .await;

    assert_success(&output);
    assert_stderr_contains(&output, "apikey=****");
    assert_output_excludes(&output, API_KEY);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/collections"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "collections": [{ "id": "a", "name": "First", "uid": "1-a" }]
        })))
        .mount(&server)
        .await;

    let (_t, output) = run(
        Test::new(),
        &server,
        &["list", "collection", "--json", "--api-key", API_KEY],
        "",
    )
    .await;

    assert_success(&output);
    assert_eq!(stdout_json(&output)[0]["name"], "First");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_table() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/environments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "environments": [{ "id": "e", "name": "staging", "uid": "1-e" }]
        })))
        .mount(&server)
        .await;

    let (_t, output) = run(
        Test::new(),
        &server,
        &["list", "environment", "--api-key", API_KEY],
        "",
    )
    .await;

    assert_success(&output);
    assert_stdout_contains(&output, "staging");
    assert_stdout_contains(&output, "1-e");
}
