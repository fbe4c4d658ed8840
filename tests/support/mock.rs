//! Mock Postman API helpers.
//!
//! The courier client is blocking, so anything that builds or drops it (or
//! runs the binary against the mock) goes through [`blocking`].

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::fixtures::*;

/// Run blocking work off the async test runtime.
pub async fn blocking<T, F>(f: F) -> T
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .expect("blocking task panicked")
}

/// Serve the fixture collection at `/collections/<COLLECTION_ID>`.
pub async fn serve_collection(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(format!("/collections/{}", COLLECTION_ID)))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope("collection", collection())),
        )
        .mount(server)
        .await;
}

/// Serve the fixture environment at `/environments/<ENVIRONMENT_UID>`.
pub async fn serve_environment(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(format!("/environments/{}", ENVIRONMENT_UID)))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope("environment", environment())),
        )
        .mount(server)
        .await;
}

/// Value of the `X-Api-Key` header on each request the server received.
pub async fn api_key_headers(server: &MockServer) -> Vec<Option<String>> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| {
            request
                .headers
                .get("x-api-key")
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        })
        .collect()
}
