//! Contact-form relay: accepts a website form submission and opens a
//! Re:amaze conversation for it.
//!
//! # Design
//! One route, `POST /v1/sendmessage`. The body is read raw so empty and
//! malformed payloads get the relay's own JSON envelope instead of the
//! extractor's plain-text rejection. The blocking Re:amaze client runs on
//! tokio's blocking pool.

pub mod config;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{ACCEPT, CONTENT_TYPE, ORIGIN};
use axum::http::{HeaderName, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use reamaze_core::types::CreateConversationRequest;
use reamaze_core::{ApiError, Client};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, warn};

pub use config::RelayConfig;

/// Failures that stop the relay from starting or serving.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),

    #[error("cannot build Re:amaze client: {0}")]
    Client(#[from] ApiError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// `errCode` values in the response envelope.
pub mod codes {
    pub const MISSING_REQUIRED: u16 = 100;
    pub const INVALID_JSON: u16 = 101;
    pub const WEBSERVICE_ERROR: u16 = 102;
    pub const REAMAZE_ERROR: u16 = 103;
}

/// A contact-form submission.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SendMessageBody {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub company_name: String,
    pub hear_about_us: String,
    pub tell_us: String,
    pub nda: bool,
    pub marketing: bool,
}

impl SendMessageBody {
    /// JSON keys of required fields that are missing or blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("hearAboutUs", &self.hear_about_us),
            ("tellUs", &self.tell_us),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(key, _)| key)
        .collect()
    }

    /// The conversation this submission becomes, filed under `category`.
    pub fn to_conversation(&self, category: &str) -> CreateConversationRequest {
        let mut req = CreateConversationRequest::default();
        let conversation = &mut req.conversation;
        conversation.category = category.to_string();
        conversation.message.body = self.tell_us.clone();
        conversation.data = Some(self.data(true));
        conversation.user.email = self.email.clone();
        conversation.user.name = format!("{} {}", self.first_name, self.last_name);
        conversation.user.data = Some(self.data(false));
        req
    }

    /// Custom data attached to the conversation (`with_source`) or to the
    /// customer. Empty text fields are left out.
    fn data(&self, with_source: bool) -> Value {
        let mut data = Map::new();
        let mut text = |key: &str, value: &str| {
            if !value.is_empty() {
                data.insert(key.to_string(), Value::from(value));
            }
        };
        text("phone", &self.phone_number);
        text("company_name", &self.company_name);
        if with_source {
            text("hear_about_us", &self.hear_about_us);
        }
        text("first_name", &self.first_name);
        text("last_name", &self.last_name);
        data.insert("nda".to_string(), Value::Bool(self.nda));
        data.insert("marketing_approval".to_string(), Value::Bool(self.marketing));
        Value::Object(data)
    }
}

/// Response envelope for every outcome.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMsg {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub err_code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub err_msg: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
    #[serde(default)]
    pub msg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl ResponseMsg {
    fn ok(id: Option<String>) -> Self {
        Self {
            msg: "OK".to_string(),
            id,
            ..Self::default()
        }
    }

    fn error(code: u16, message: String) -> Self {
        Self {
            err_code: Some(code),
            err_msg: Some(message.clone()),
            msg: message,
            ..Self::default()
        }
    }
}

/// Shared handler state: one client for the whole process.
#[derive(Debug, Clone)]
pub struct AppState {
    client: Client,
    category: String,
}

impl AppState {
    pub fn new(client: Client, category: impl Into<String>) -> Self {
        Self {
            client,
            category: category.into(),
        }
    }

    pub fn from_config(config: &RelayConfig) -> Result<Self, RelayError> {
        let mut client = Client::new(&config.email, &config.api_token, &config.brand)?;
        if let Some(base_url) = &config.base_url {
            client = client.with_base_url(base_url.as_str());
        }
        Ok(Self::new(client, config.category.as_str()))
    }
}

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::HEAD])
        .allow_headers([
            ORIGIN,
            ACCEPT,
            CONTENT_TYPE,
            HeaderName::from_static("x-requested-with"),
        ]);

    Router::new()
        .route("/v1/sendmessage", post(send_message))
        .layer(cors)
        .with_state(state)
}

pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state)).await
}

async fn send_message(State(state): State<AppState>, body: Bytes) -> Response {
    if body.iter().all(u8::is_ascii_whitespace) {
        return reply(
            StatusCode::BAD_REQUEST,
            ResponseMsg::error(codes::INVALID_JSON, "Invalid JSON request. Empty body".to_string()),
        );
    }

    let submission: SendMessageBody = match serde_json::from_slice(&body) {
        Ok(submission) => submission,
        Err(e) => {
            warn!(error = %e, "Rejected malformed submission.");
            return reply(
                StatusCode::BAD_REQUEST,
                ResponseMsg::error(codes::INVALID_JSON, format!("Invalid JSON request. {e}")),
            );
        }
    };

    let missing = submission.missing_fields();
    if !missing.is_empty() {
        let mut msg = ResponseMsg::error(
            codes::MISSING_REQUIRED,
            format!("Missing required fields: {}", missing.join(", ")),
        );
        msg.fields = missing.into_iter().map(String::from).collect();
        return reply(StatusCode::BAD_REQUEST, msg);
    }

    let request = submission.to_conversation(&state.category);
    let client = state.client.clone();
    let outcome = tokio::task::spawn_blocking(move || client.create_conversation(&request)).await;

    match outcome {
        Ok(Ok(conversation)) => {
            info!(
                slug = conversation.slug.as_deref().unwrap_or_default(),
                category = %state.category,
                "Forwarded contact form submission."
            );
            reply(StatusCode::OK, ResponseMsg::ok(conversation.slug))
        }
        Ok(Err(e)) => {
            error!(error = %e, "Re:amaze rejected conversation.");
            reply(
                StatusCode::SERVICE_UNAVAILABLE,
                ResponseMsg::error(codes::REAMAZE_ERROR, format!("Internal communication error: {e}")),
            )
        }
        Err(e) => {
            error!(error = %e, "Conversation task failed.");
            reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                ResponseMsg::error(codes::WEBSERVICE_ERROR, format!("Internal error: {e}")),
            )
        }
    }
}

fn reply(status: StatusCode, msg: ResponseMsg) -> Response {
    (status, Json(msg)).into_response()
}
