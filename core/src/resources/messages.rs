use super::API_ROOT;
use crate::client::{require, require_request, Client};
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::query::escape;
use crate::transport::Transport;
use crate::types::{CreateMessageRequest, CreateMessageResponse, GetMessagesResponse};

impl<T: Transport> Client<T> {
    /// Latest messages across all conversations.
    pub fn get_messages(&self) -> Result<GetMessagesResponse, ApiError> {
        self.get_json(&format!("{API_ROOT}/messages"))
    }

    pub fn get_conversation_messages(&self, slug: &str) -> Result<GetMessagesResponse, ApiError> {
        require(slug, "conversation slug")?;
        self.get_json(&format!("{API_ROOT}/conversations/{}/messages", escape(slug)))
    }

    /// Post a message into the conversation identified by `slug`.
    pub fn create_message(
        &self,
        slug: &str,
        req: &CreateMessageRequest,
    ) -> Result<CreateMessageResponse, ApiError> {
        require_request(req, "create message request")?;
        require(slug, "conversation slug")?;
        self.send_json(
            HttpMethod::Post,
            &format!("{API_ROOT}/conversations/{}/messages", escape(slug)),
            req,
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::http::HttpMethod;
    use crate::stub::{client, StubTransport};
    use crate::types::{CreateMessageRequest, MessageVisibility, NewMessage};

    #[test]
    fn get_messages_hits_messages_root() {
        let stub = StubTransport::ok(r#"{"messages":[{"body":"hi"}]}"#);
        let response = client(&stub).get_messages().unwrap();
        assert_eq!(response.messages[0].body.as_deref(), Some("hi"));
        assert_eq!(stub.last_request().url, "https://dummy.reamaze.io/api/v1/messages");
        assert_eq!(stub.last_request().method, HttpMethod::Get);
    }

    #[test]
    fn get_conversation_messages_scopes_by_slug() {
        let stub = StubTransport::ok("{}");
        let client = client(&stub);
        assert!(client.get_conversation_messages("").unwrap_err().is_validation());
        client.get_conversation_messages("abc").unwrap();
        assert_eq!(
            stub.last_request().url,
            "https://dummy.reamaze.io/api/v1/conversations/abc/messages"
        );
    }

    #[test]
    fn create_message_checks_request_before_slug() {
        let stub = StubTransport::ok("{}");
        let client = client(&stub);
        let err = client.create_message("", &CreateMessageRequest::default()).unwrap_err();
        assert_eq!(err.to_string(), "validation failed: create message request is empty");

        let req = CreateMessageRequest {
            message: NewMessage {
                body: "hello".to_string(),
                ..Default::default()
            },
        };
        let err = client.create_message("", &req).unwrap_err();
        assert_eq!(err.to_string(), "validation failed: conversation slug cannot be empty");
        assert!(stub.requests().is_empty());
    }

    #[test]
    fn create_message_posts_internal_note() {
        let stub = StubTransport::ok(r#"{"body":"hello","visibility":1}"#);
        let req = CreateMessageRequest {
            message: NewMessage {
                body: "hello".to_string(),
                visibility: Some(MessageVisibility::InternalNote),
                ..Default::default()
            },
        };
        let created = client(&stub).create_message("abc", &req).unwrap();
        assert_eq!(created.visibility, Some(MessageVisibility::InternalNote));
        assert_eq!(
            stub.last_request().url,
            "https://dummy.reamaze.io/api/v1/conversations/abc/messages"
        );
        assert_eq!(stub.last_json(), json!({"message": {"body": "hello", "visibility": 1}}));
    }

    #[test]
    fn create_message_reports_404() {
        let stub = StubTransport::with_status(404, "{}");
        let req = CreateMessageRequest {
            message: NewMessage {
                body: "hello".to_string(),
                ..Default::default()
            },
        };
        let err = client(&stub).create_message("missing", &req).unwrap_err();
        assert_eq!(err.to_string(), "remote error: 404 Not Found");
    }
}
