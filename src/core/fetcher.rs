//! Remote resource fetching.
//!
//! [`ResourceFetcher`] classifies a location, resolves an API key when the
//! target needs one, issues the request and maps the response into either
//! the unwrapped payload or a typed [`RemoteError`]. There is no retry: any
//! transport failure or non-2xx status is returned immediately.

use std::fmt;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::redirect::Policy;
use reqwest::StatusCode;
use serde_json::{Map, Value};
use tracing::{debug, trace};
use url::Url;
use zeroize::Zeroizing;

use crate::core::config::{ApiConfig, Transport};
use crate::core::constants;
use crate::core::location::{self, Target};
use crate::core::prompt::Prompt;
use crate::core::resolver::{CredentialResolver, ResolutionContext};
use crate::core::resource::ResourceKind;
use crate::error::{Operation, RemoteError, Result};

/// A request URL with its credential attached according to the transport.
pub struct AuthorizedRequest {
    url: Url,
    header: Option<Zeroizing<String>>,
    external: bool,
}

impl AuthorizedRequest {
    fn anonymous(target: Target) -> Self {
        let external = target.is_external();
        Self {
            url: target.into_url(),
            header: None,
            external,
        }
    }

    fn with_key(mut url: Url, key: Zeroizing<String>, transport: Transport) -> Self {
        let header = match transport {
            Transport::Header => Some(key),
            Transport::Query => {
                url.query_pairs_mut()
                    .append_pair(constants::API_KEY_PARAM, key.as_str());
                None
            }
        };
        Self {
            url,
            header,
            external: false,
        }
    }

    /// Final request URL. Contains the key under the query transport.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Value of the `X-Api-Key` header, if one is sent.
    pub fn api_key_header(&self) -> Option<&str> {
        self.header.as_ref().map(|key| key.as_str())
    }

    /// URL safe to show in logs and hints.
    pub fn display_url(&self) -> String {
        location::redact(&self.url)
    }

    fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.header {
            Some(key) => builder.header(constants::API_KEY_HEADER, key.as_str()),
            None => builder,
        }
    }
}

impl fmt::Debug for AuthorizedRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthorizedRequest")
            .field("url", &self.display_url())
            .field("header", &self.header.as_ref().map(|_| "<redacted>"))
            .field("external", &self.external)
            .finish()
    }
}

/// Follow redirects only while they stay on the original scheme, host and port.
///
/// reqwest keeps custom headers like `X-Api-Key` across hosts, so a redirect
/// off the origin is returned unfollowed.
fn same_origin_redirects() -> Policy {
    Policy::custom(|attempt| {
        let leaves_origin = attempt
            .previous()
            .first()
            .map_or(true, |origin| origin.origin() != attempt.url().origin());

        if leaves_origin {
            debug!(url = %location::redact(attempt.url()), "not following cross-origin redirect");
            attempt.stop()
        } else if attempt.previous().len() > constants::MAX_REDIRECTS {
            attempt.error("too many redirects")
        } else {
            attempt.follow()
        }
    })
}

/// Fetches and updates collections and environments.
pub struct ResourceFetcher<P> {
    client: Client,
    config: ApiConfig,
    resolver: CredentialResolver<P>,
}

impl<P: Prompt> ResourceFetcher<P> {
    /// Create a fetcher for `config`, prompting through `prompt`.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::Client` if the HTTP client cannot be built.
    pub fn new(config: ApiConfig, prompt: P) -> Result<Self> {
        let client = Client::builder()
            .user_agent(constants::USER_AGENT)
            .timeout(config.timeout())
            .redirect(same_origin_redirects())
            .build()
            .map_err(RemoteError::Client)?;

        Ok(Self {
            client,
            config,
            resolver: CredentialResolver::new(prompt),
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Classify `location` and attach a credential when it needs one.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::NotFound` for unrecognized locations, or any
    /// resolution error when a credential is required.
    pub fn authorize(
        &self,
        kind: ResourceKind,
        location: &str,
        ctx: &mut ResolutionContext,
    ) -> Result<AuthorizedRequest> {
        let target = location::classify(kind, location, &self.config)?;
        if !target.needs_credential() {
            return Ok(AuthorizedRequest::anonymous(target));
        }

        let key = self.resolver.resolve(ctx)?;
        Ok(AuthorizedRequest::with_key(
            target.into_url(),
            key,
            self.config.transport(),
        ))
    }

    /// Fetch a resource and return its payload without the kind envelope.
    ///
    /// # Errors
    ///
    /// Returns classification and resolution errors, `RemoteError::Fetch` on
    /// transport failure, `RemoteError::Api` on a non-2xx status and
    /// `RemoteError::InvalidBody` if the body is not the expected JSON.
    pub fn get(
        &self,
        kind: ResourceKind,
        location: &str,
        ctx: &mut ResolutionContext,
    ) -> Result<Value> {
        let request = self.authorize(kind, location, ctx)?;
        debug!(%kind, url = %request.display_url(), "fetching");

        let builder = request.apply(self.client.get(request.url.clone()));
        let (status, body) = send(builder, &request)?;
        if !status.is_success() {
            return Err(self.api_error(&request, status, &body, Operation::Fetch).into());
        }

        let value = parse_body(&body, &request)?;
        unwrap_envelope(value, kind, &request)
    }

    /// Replace a remote resource with `data`.
    ///
    /// The body is sent wrapped in the kind envelope. Success is signalled by
    /// the status alone.
    ///
    /// # Errors
    ///
    /// Same as [`ResourceFetcher::get`], with hints naming a synchronization.
    pub fn update(
        &self,
        kind: ResourceKind,
        data: &Value,
        location: &str,
        ctx: &mut ResolutionContext,
    ) -> Result<()> {
        let request = self.authorize(kind, location, ctx)?;
        debug!(%kind, url = %request.display_url(), "updating");

        let mut envelope = Map::new();
        envelope.insert(kind.envelope_key().to_string(), data.clone());

        let builder = request.apply(
            self.client
                .put(request.url.clone())
                .json(&Value::Object(envelope)),
        );
        let (status, body) = send(builder, &request)?;
        if !status.is_success() {
            return Err(self.api_error(&request, status, &body, Operation::Sync).into());
        }

        trace!(status = status.as_u16(), "updated");
        Ok(())
    }

    /// List every resource of `kind` visible to the resolved key.
    ///
    /// # Errors
    ///
    /// Returns resolution errors, transport and status errors, or
    /// `RemoteError::InvalidBody` if the listing array is missing.
    pub fn get_all(&self, kind: ResourceKind, ctx: &mut ResolutionContext) -> Result<Vec<Value>> {
        let key = self.resolver.resolve(ctx)?;
        let request =
            AuthorizedRequest::with_key(self.config.endpoint(kind)?, key, self.config.transport());
        debug!(%kind, url = %request.display_url(), "listing");

        let builder = request.apply(self.client.get(request.url.clone()));
        let (status, body) = send(builder, &request)?;
        if !status.is_success() {
            return Err(self.api_error(&request, status, &body, Operation::Fetch).into());
        }

        let mut value = parse_body(&body, &request)?;
        match value
            .as_object_mut()
            .and_then(|object| object.remove(kind.path_segment()))
        {
            Some(Value::Array(items)) => Ok(items),
            _ => Err(RemoteError::InvalidBody {
                url: request.display_url(),
                reason: format!("response has no `{}` list", kind.path_segment()),
            }
            .into()),
        }
    }

    fn api_error(
        &self,
        request: &AuthorizedRequest,
        status: StatusCode,
        body: &str,
        operation: Operation,
    ) -> RemoteError {
        let resource = location::resource_label(&request.url, &self.config);
        let parsed: Option<Value> = serde_json::from_str(body.trim()).ok();
        let field = |pointer: &str| {
            parsed
                .as_ref()
                .and_then(|v| v.pointer(pointer))
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        let message = field("/error/message").unwrap_or_else(|| {
            format!(
                "Error {} {}, the provided URL returned status code: {}",
                operation.verb(),
                resource,
                status.as_u16()
            )
        });
        let name = field("/error/name")
            .unwrap_or_else(|| format!("{}{}Error", capitalize(&resource), operation.noun()));

        debug!(status = status.as_u16(), %name, "remote api error");

        RemoteError::Api {
            resource,
            name,
            status: status.as_u16(),
            message,
            operation,
        }
    }
}

fn send(builder: RequestBuilder, request: &AuthorizedRequest) -> Result<(StatusCode, String)> {
    // reqwest errors embed the request URL, which may carry the key.
    let fetch_error = |source: reqwest::Error| RemoteError::Fetch {
        url: request.display_url(),
        source: source.without_url(),
    };

    let response: Response = builder.send().map_err(fetch_error)?;
    let status = response.status();
    let body = response.text().map_err(fetch_error)?;

    trace!(status = status.as_u16(), body_len = body.len(), "response");
    Ok((status, body))
}

fn parse_body(body: &str, request: &AuthorizedRequest) -> Result<Value> {
    let body = body.trim_start_matches('\u{feff}').trim();
    serde_json::from_str(body).map_err(|e| {
        RemoteError::InvalidBody {
            url: request.display_url(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// Take the payload out of `{"<kind>": {...}}`.
///
/// API responses must carry the envelope. Bodies from other hosts are often
/// bare exports and are returned whole.
fn unwrap_envelope(mut value: Value, kind: ResourceKind, request: &AuthorizedRequest) -> Result<Value> {
    if let Some(inner) = value
        .as_object_mut()
        .and_then(|object| object.remove(kind.envelope_key()))
    {
        return Ok(inner);
    }

    if request.external {
        return Ok(value);
    }

    Err(RemoteError::InvalidBody {
        url: request.display_url(),
        reason: format!("response has no `{}` field", kind.envelope_key()),
    }
    .into())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
