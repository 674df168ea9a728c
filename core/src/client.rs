//! Authenticated request execution against one Re:amaze brand.
//!
//! # Design
//! `Client` is immutable after construction. It owns the brand base URL, the
//! pre-encoded Basic credential and a `Transport`. Every resource operation
//! funnels through `execute`, which attaches the same three headers, performs
//! one round-trip and turns any status outside `[200, 300)` into
//! `ApiError::Remote`. Resource operations live in `crate::resources` as
//! further `impl` blocks on `Client`.

use std::fmt;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{trace, warn};

use crate::email;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::transport::{Transport, UreqTransport};

/// Domain every brand is served under.
pub const PLATFORM_DOMAIN: &str = "reamaze.io";

const JSON: &str = "application/json";

/// Synchronous client for the Re:amaze REST API.
///
/// Cheap to clone when the transport is, and safe to share between threads.
#[derive(Clone)]
pub struct Client<T = UreqTransport> {
    base_url: String,
    credential: String,
    transport: T,
}

impl Client<UreqTransport> {
    /// Client for `https://{brand}.reamaze.io`, authenticating as `email`
    /// with `api_token`.
    pub fn new(email: &str, api_token: &str, brand: &str) -> Result<Self, ApiError> {
        if email.is_empty() {
            return Err(ApiError::validation("email cannot be empty"));
        }
        if !email::is_valid(email) {
            return Err(ApiError::validation(format!("{email:?} is not a valid email address")));
        }
        if api_token.is_empty() {
            return Err(ApiError::validation("api token cannot be empty"));
        }
        if brand.is_empty() {
            return Err(ApiError::validation("brand cannot be empty"));
        }

        Ok(Self {
            base_url: format!("https://{brand}.{PLATFORM_DOMAIN}"),
            credential: STANDARD.encode(format!("{email}:{api_token}")),
            transport: UreqTransport::new(),
        })
    }

    /// Bound every request's whole round-trip by `timeout`. Without this the
    /// client waits as long as the server and the OS allow.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_transport(UreqTransport::with_timeout(Some(timeout)))
    }
}

impl<T: Transport> Client<T> {
    /// Replace the transport, keeping base URL and credential.
    pub fn with_transport<U: Transport>(self, transport: U) -> Client<U> {
        Client {
            base_url: self.base_url,
            credential: self.credential,
            transport,
        }
    }

    /// Send requests to `base_url` instead of the brand's public host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Base64 of `email:api_token`, as sent after `Basic `.
    pub fn credential(&self) -> &str {
        &self.credential
    }

    /// Perform one authenticated request and return the raw response body.
    ///
    /// `path` starts with `/` and already carries any query string.
    pub fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, ApiError> {
        let url = format!("{}{path}", self.base_url);
        url::Url::parse(&url)
            .map_err(|e| ApiError::transport(format!("invalid request URL {url:?}: {e}"), e))?;

        let request = HttpRequest {
            method,
            url,
            headers: vec![
                ("Authorization".to_string(), format!("Basic {}", self.credential)),
                ("Content-Type".to_string(), JSON.to_string()),
                ("Accept".to_string(), JSON.to_string()),
            ],
            body,
        };
        trace!(
            %method,
            url = %request.url,
            authorization = "[REDACTED]",
            bytes = request.body.as_ref().map_or(0, Vec::len),
            "Sending request."
        );

        let response = self.transport.send(request)?;
        if !response.is_success() {
            let message = response.status_line();
            warn!(%method, path, status = response.status, "Re:amaze returned an error status.");
            return Err(ApiError::Remote {
                status: response.status,
                message,
            });
        }
        Ok(response.body)
    }

    pub(crate) fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let body = self.execute(HttpMethod::Get, path, None)?;
        decode(&body)
    }

    pub(crate) fn send_json<B, R>(&self, method: HttpMethod, path: &str, payload: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let encoded = serde_json::to_vec(payload).map_err(ApiError::Serialization)?;
        let body = self.execute(method, path, Some(encoded))?;
        decode(&body)
    }
}

impl<T> fmt::Debug for Client<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("credential", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

pub(crate) fn decode<R: DeserializeOwned>(body: &[u8]) -> Result<R, ApiError> {
    serde_json::from_slice(body).map_err(ApiError::Deserialization)
}

/// Fail with a `Validation` error naming `what` when `value` is empty.
pub(crate) fn require(value: &str, what: &str) -> Result<(), ApiError> {
    if value.is_empty() {
        return Err(ApiError::validation(format!("{what} cannot be empty")));
    }
    Ok(())
}

/// Fail with a `Validation` error when `request` equals its default value.
pub(crate) fn require_request<R: Default + PartialEq>(request: &R, what: &str) -> Result<(), ApiError> {
    if *request == R::default() {
        return Err(ApiError::validation(format!("{what} is empty")));
    }
    Ok(())
}
