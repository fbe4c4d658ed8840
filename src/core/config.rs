//! API endpoint configuration.
//!
//! Holds the typed settings the fetcher needs: which host to talk to, how the
//! API key travels, and how long to wait for a response.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::core::constants;
use crate::core::resource::ResourceKind;
use crate::error::{RemoteError, Result};

/// How the API key is attached to a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transport {
    /// `X-Api-Key` header.
    #[default]
    Header,
    /// `apikey` query parameter, for older deployments.
    Query,
}

impl FromStr for Transport {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "header" => Ok(Transport::Header),
            "query" => Ok(Transport::Query),
            other => Err(format!("unknown auth transport: {} (expected header or query)", other)),
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transport::Header => f.write_str("header"),
            Transport::Query => f.write_str("query"),
        }
    }
}

/// Postman API settings.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
    transport: Transport,
    timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: constants::API_URL.to_string(),
            transport: Transport::default(),
            timeout: Duration::from_secs(constants::DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    /// Configuration for an API served at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::NotFound` if `base_url` is not an http(s) URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim_end_matches('/');
        let valid = Url::parse(trimmed)
            .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
            .unwrap_or(false);
        if !valid {
            return Err(RemoteError::NotFound {
                location: base_url.to_string(),
            }
            .into());
        }

        debug!(base_url = trimmed, "api config");

        Ok(Self {
            base_url: trimmed.to_string(),
            ..Self::default()
        })
    }

    pub fn with_transport(mut self, transport: Transport) -> Self {
        self.transport = transport;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> Transport {
        self.transport
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Listing endpoint for a kind (`<base>/collections`).
    pub fn endpoint(&self, kind: ResourceKind) -> Result<Url> {
        self.join(&[kind.path_segment()])
    }

    /// Single-resource endpoint (`<base>/collections/<id>`).
    pub fn resource_url(&self, kind: ResourceKind, id: &str) -> Result<Url> {
        self.join(&[kind.path_segment(), id])
    }

    /// Whether `url` points at the configured API host.
    pub fn is_api_host(&self, url: &Url) -> bool {
        let Ok(base) = Url::parse(&self.base_url) else {
            return false;
        };
        url.host_str()
            .zip(base.host_str())
            .is_some_and(|(a, b)| a.eq_ignore_ascii_case(b))
            && url.port_or_known_default() == base.port_or_known_default()
    }

    fn join(&self, segments: &[&str]) -> Result<Url> {
        let not_found = || RemoteError::NotFound {
            location: self.base_url.clone(),
        };
        let mut url = Url::parse(&self.base_url).map_err(|_| not_found())?;
        url.path_segments_mut()
            .map_err(|_| not_found())?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
