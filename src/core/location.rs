//! Location classification.
//!
//! A location is a Postman ID/UID, an http(s) URL, or (handled elsewhere) a
//! local path. Classification decides the request URL and whether the
//! request needs an API key.

use std::sync::OnceLock;

use regex::Regex;
use tracing::trace;
use url::Url;

use crate::core::config::ApiConfig;
use crate::core::constants;
use crate::core::resource::ResourceKind;
use crate::error::{RemoteError, Result};

/// Postman ID, optionally prefixed by an owner segment to form a UID.
fn id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"(?i)^([0-9a-z]+-)?[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$",
        )
        .expect("identifier pattern compiles")
    })
}

/// Whether `location` is a Postman ID or UID.
pub fn is_identifier(location: &str) -> bool {
    id_pattern().is_match(location)
}

/// Whether `location` is an absolute http(s) URL.
pub fn is_url(location: &str) -> bool {
    parse_url(location).is_some()
}

/// Whether `location` is served remotely (URL or identifier) rather than from disk.
pub fn is_remote(location: &str) -> bool {
    is_identifier(location) || is_url(location)
}

fn parse_url(location: &str) -> Option<Url> {
    Url::parse(location)
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
}

/// Render any location for output, masking `apikey` when it is a URL.
pub fn display(location: &str) -> String {
    match parse_url(location) {
        Some(url) => redact(&url),
        None => location.to_string(),
    }
}

/// Whether the URL already carries its own `apikey` query parameter.
pub fn has_credential(url: &Url) -> bool {
    url.query_pairs()
        .any(|(key, _)| key.eq_ignore_ascii_case(constants::API_KEY_PARAM))
}

/// Render a URL for logs and hints with any `apikey` value masked.
pub fn redact(url: &Url) -> String {
    if !has_credential(url) {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if key.eq_ignore_ascii_case(constants::API_KEY_PARAM) {
                "****".to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

/// Where a request goes and whether it needs a credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// On the API host with no credential yet.
    Api(Url),
    /// Already carries `apikey`; sent unchanged.
    Preauthorized(Url),
    /// Some other host; sent without a credential.
    External(Url),
}

impl Target {
    pub fn url(&self) -> &Url {
        match self {
            Target::Api(url) | Target::Preauthorized(url) | Target::External(url) => url,
        }
    }

    pub fn into_url(self) -> Url {
        match self {
            Target::Api(url) | Target::Preauthorized(url) | Target::External(url) => url,
        }
    }

    pub fn needs_credential(&self) -> bool {
        matches!(self, Target::Api(_))
    }

    pub fn is_external(&self) -> bool {
        matches!(self, Target::External(_))
    }
}

/// Classify a location for `kind`.
///
/// Identifiers become `<api>/<segment>/<id>`. URLs carrying `apikey` pass
/// through. URLs on the API host need a credential; other hosts do not.
///
/// # Errors
///
/// Returns `RemoteError::NotFound` if the location is neither an identifier
/// nor an absolute http(s) URL.
pub fn classify(kind: ResourceKind, location: &str, config: &ApiConfig) -> Result<Target> {
    if is_identifier(location) {
        let url = config.resource_url(kind, location)?;
        trace!(%kind, url = %url, "identifier location");
        return Ok(Target::Api(url));
    }

    let url = parse_url(location).ok_or_else(|| RemoteError::NotFound {
        location: location.to_string(),
    })?;

    let target = if has_credential(&url) {
        Target::Preauthorized(url)
    } else if config.is_api_host(&url) {
        Target::Api(url)
    } else {
        Target::External(url)
    };

    trace!(%kind, url = %redact(target.url()), "url location");
    Ok(target)
}

/// Human-readable resource name for a URL, used in error messages.
///
/// For the API host this is the first path segment singularized
/// (`/collections/..` gives `collection`); anything else is `resource`.
pub fn resource_label(url: &Url, config: &ApiConfig) -> String {
    const GENERIC: &str = "resource";

    if !config.is_api_host(url) {
        return GENERIC.to_string();
    }

    let base_depth = Url::parse(config.base_url())
        .ok()
        .and_then(|base| base.path_segments().map(|s| s.filter(|p| !p.is_empty()).count()))
        .unwrap_or(0);

    url.path_segments()
        .and_then(|mut segments| segments.nth(base_depth))
        .and_then(|segment| {
            let mut chars = segment.chars();
            chars.next_back();
            let label = chars.as_str();
            (!label.is_empty()).then(|| label.to_string())
        })
        .unwrap_or_else(|| GENERIC.to_string())
}
