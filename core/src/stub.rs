//! In-memory `Transport` that records requests and replays one canned
//! response.

use std::io;
use std::sync::{Arc, Mutex};

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::Client;

#[derive(Debug, Clone)]
pub(crate) struct StubTransport {
    response: Option<HttpResponse>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl StubTransport {
    pub(crate) fn ok(body: &str) -> Self {
        Self::with_status(200, body)
    }

    pub(crate) fn with_status(status: u16, body: &str) -> Self {
        Self {
            response: Some(HttpResponse {
                status,
                headers: Vec::new(),
                body: body.as_bytes().to_vec(),
            }),
            requests: Arc::default(),
        }
    }

    /// Every send fails as if the connection was refused.
    pub(crate) fn failing() -> Self {
        Self {
            response: None,
            requests: Arc::default(),
        }
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> HttpRequest {
        self.requests().pop().expect("no request was sent")
    }

    /// Request body parsed as JSON.
    pub(crate) fn last_json(&self) -> serde_json::Value {
        let body = self.last_request().body.expect("request had no body");
        serde_json::from_slice(&body).unwrap()
    }
}

impl Transport for StubTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        match &self.response {
            Some(response) => Ok(response.clone()),
            None => Err(ApiError::transport(
                "connection refused",
                io::Error::new(io::ErrorKind::ConnectionRefused, "refused"),
            )),
        }
    }
}

/// Client for brand `dummy` wired to `stub`.
pub(crate) fn client(stub: &StubTransport) -> Client<StubTransport> {
    Client::new("test@example.com", "something", "dummy")
        .unwrap()
        .with_transport(stub.clone())
}
