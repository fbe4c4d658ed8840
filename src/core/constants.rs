//! Constants used throughout courier.
//!
//! Centralizes API endpoints, header names and file locations.

/// Base URL of the Postman API.
pub const API_URL: &str = "https://api.getpostman.com";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Query parameter carrying the API key (compatibility transport).
pub const API_KEY_PARAM: &str = "apikey";

/// Client identifier sent with every request.
pub const USER_AGENT: &str = concat!("courier/", env!("CARGO_PKG_VERSION"));

/// Request timeout in seconds when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Same-origin redirects followed before a request fails.
pub const MAX_REDIRECTS: usize = 10;

/// Profile alias used when none is given.
pub const DEFAULT_ALIAS: &str = "default";

/// Prompt shown when an encrypted profile needs its passkey.
pub const PASSKEY_PROMPT: &str = "Passkey";

/// Prompt shown when storing a new API key.
pub const API_KEY_PROMPT: &str = "Postman API key";

/// Profile file relative to HOME (~/.courier/config.toml).
pub const HOME_CONFIG_DIR: &str = ".courier";

/// Profile file name inside [`HOME_CONFIG_DIR`].
pub const HOME_CONFIG_FILE: &str = "config.toml";

/// Project-level profile overlay in the current directory.
pub const PROJECT_CONFIG_FILE: &str = ".courier.toml";
