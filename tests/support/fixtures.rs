//! Test fixtures and constants.

use serde_json::{json, Value};

/// A Postman collection ID.
pub const COLLECTION_ID: &str = "931c1484-fd1e-4ceb-81d0-2aa102ca8b5f";

/// A Postman environment UID (owner-prefixed ID).
pub const ENVIRONMENT_UID: &str = "1234-5c3c2f4e-8d1a-4b7e-9f00-0123456789ab";

/// API key used against the mock API.
pub const API_KEY: &str = "PMAK-0123456789abcdef-secret";

/// Passkey used for encrypted profiles.
pub const PASSKEY: &str = "correct horse battery staple";

/// Message the Postman API returns for a bad key.
pub const INVALID_KEY_MESSAGE: &str =
    "Invalid API Key. Every request requires a valid API Key to be sent.";

/// Body the Postman API returns with a 401.
pub fn invalid_key_body() -> Value {
    json!({
        "error": {
            "name": "AuthenticationError",
            "message": INVALID_KEY_MESSAGE
        }
    })
}

/// A minimal collection payload.
pub fn collection() -> Value {
    json!({
        "info": {
            "_postman_id": COLLECTION_ID,
            "name": "Demo API",
            "schema": "https://schema.getpostman.com/json/collection/v2.1.0/collection.json"
        },
        "item": [
            { "name": "List users", "request": { "method": "GET", "url": "{{baseUrl}}/users" } }
        ]
    })
}

/// A minimal environment payload.
pub fn environment() -> Value {
    json!({
        "id": "5c3c2f4e-8d1a-4b7e-9f00-0123456789ab",
        "name": "staging",
        "values": [
            { "key": "baseUrl", "value": "https://staging.example.com", "enabled": true }
        ]
    })
}

/// `{"<key>": payload}` as the API wraps single resources.
pub fn envelope(key: &str, payload: Value) -> Value {
    let mut object = serde_json::Map::new();
    object.insert(key.to_string(), payload);
    Value::Object(object)
}
