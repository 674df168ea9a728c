//! The single network round-trip behind every `Client` call.
//!
//! `UreqTransport` is the default: a blocking `ureq` agent configured so
//! that 4xx/5xx responses come back as data instead of `Err`, leaving status
//! classification to the client.

use std::time::Duration;

use tracing::debug;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes one `HttpRequest` and returns the fully-read `HttpResponse`.
///
/// Implementations must be safe to share between threads; `Client` holds
/// exactly one transport for its whole lifetime.
pub trait Transport: Send + Sync {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Blocking HTTP transport backed by `ureq`.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        Self::with_timeout(None)
    }

    /// Transport whose whole round-trip is bounded by `timeout`. `None` waits
    /// as long as the server and the OS allow.
    pub fn with_timeout(timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;
        let body = body.unwrap_or_default();

        let result = match method {
            HttpMethod::Get => apply_headers(self.agent.get(&url), &headers).call(),
            HttpMethod::Delete => apply_headers(self.agent.delete(&url), &headers).call(),
            HttpMethod::Post => apply_headers(self.agent.post(&url), &headers).send(body.as_slice()),
            HttpMethod::Put => apply_headers(self.agent.put(&url), &headers).send(body.as_slice()),
        };
        let mut response =
            result.map_err(|e| ApiError::transport(format!("{method} {url} failed: {e}"), e))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();

        // Reading to the end releases the connection on both success and
        // error statuses. ureq caps bodies at 10 MiB unless told otherwise.
        let body = response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_vec()
            .map_err(|e| ApiError::transport(format!("reading {url} response body failed: {e}"), e))?;
        debug!(%method, %url, status, bytes = body.len(), "Received response.");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn apply_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}
