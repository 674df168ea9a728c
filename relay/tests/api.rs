use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use reamaze_core::Client;
use reamaze_relay::{app, codes, AppState, ResponseMsg};
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FORM: &str = r#"{
    "firstName": "Jane",
    "lastName": "Doe",
    "email": "jane@example.com",
    "phoneNumber": "+1 555 0100",
    "companyName": "Acme",
    "hearAboutUs": "Search",
    "tellUs": "We need a quote",
    "nda": true,
    "marketing": true
}"#;

fn state(server: &MockServer) -> AppState {
    let client = Client::new("test@example.com", "something", "example")
        .unwrap()
        .with_base_url(server.uri());
    AppState::new(client, "relations")
}

async fn body_msg(response: axum::response::Response) -> ResponseMsg {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn send(body: &str) -> Request<String> {
    Request::builder()
        .method("POST")
        .uri("/v1/sendmessage")
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- success ---

#[tokio::test(flavor = "multi_thread")]
async fn submission_opens_conversation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/conversations"))
        .and(body_partial_json(json!({
            "conversation": {
                "category": "relations",
                "data": {"phone": "+1 555 0100", "hear_about_us": "Search", "nda": true, "marketing_approval": true},
                "message": {"body": "We need a quote"},
                "user": {"name": "Jane Doe", "email": "jane@example.com"}
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"slug": "we-need-a-quote"})))
        .expect(1)
        .mount(&server)
        .await;

    let resp = app(state(&server)).oneshot(send(FORM)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(http::header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let msg = body_msg(resp).await;
    assert_eq!(msg.msg, "OK");
    assert_eq!(msg.id.as_deref(), Some("we-need-a-quote"));
    assert_eq!(msg.err_code, None);
}

// --- rejected input ---

#[tokio::test(flavor = "multi_thread")]
async fn empty_body_is_invalid_json() {
    let server = MockServer::start().await;
    let resp = app(state(&server)).oneshot(send("")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let msg = body_msg(resp).await;
    assert_eq!(msg.err_code, Some(codes::INVALID_JSON));
    assert!(msg.msg.starts_with("Invalid JSON request."));
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_body_is_invalid_json() {
    let server = MockServer::start().await;
    let resp = app(state(&server)).oneshot(send(r#"{"firstName": "#)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let msg = body_msg(resp).await;
    assert_eq!(msg.err_code, Some(codes::INVALID_JSON));
    assert_eq!(msg.err_msg.as_deref(), Some(msg.msg.as_str()));
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_fields_are_listed_and_nothing_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let body = r#"{"firstName": "Jane", "email": "jane@example.com", "tellUs": " "}"#;
    let resp = app(state(&server)).oneshot(send(body)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let msg = body_msg(resp).await;
    assert_eq!(msg.err_code, Some(codes::MISSING_REQUIRED));
    assert_eq!(msg.fields, ["lastName", "hearAboutUs", "tellUs"]);
}

// --- upstream failure ---

#[tokio::test(flavor = "multi_thread")]
async fn reamaze_failure_is_service_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/conversations"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({})))
        .mount(&server)
        .await;

    let resp = app(state(&server)).oneshot(send(FORM)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let msg = body_msg(resp).await;
    assert_eq!(msg.err_code, Some(codes::REAMAZE_ERROR));
    assert!(msg.msg.starts_with("Internal communication error:"), "{}", msg.msg);
    assert!(msg.msg.contains("422"));
}

// --- routing and CORS ---

#[tokio::test(flavor = "multi_thread")]
async fn other_methods_are_not_allowed() {
    let server = MockServer::start().await;
    let resp = app(state(&server))
        .oneshot(
            Request::builder()
                .uri("/v1/sendmessage")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test(flavor = "multi_thread")]
async fn preflight_allows_any_origin() {
    let server = MockServer::start().await;
    let resp = app(state(&server))
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/v1/sendmessage")
                .header(http::header::ORIGIN, "https://www.example.com")
                .header(http::header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(http::header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get(http::header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
    let methods = resp
        .headers()
        .get(http::header::ACCESS_CONTROL_ALLOW_METHODS)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(methods.contains("POST"), "{methods}");
    assert!(body_bytes(resp).await.is_empty());
}
