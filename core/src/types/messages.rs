use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{Category, PageInfo, Person};

int_enum! {
    MessageVisibility {
        Regular = 0,
        InternalNote = 1,
    }
}

/// A single message inside a conversation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Message {
    pub body: Option<String>,
    pub visibility: Option<MessageVisibility>,
    pub origin: Option<i64>,
    pub origin_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub conversation: Option<ConversationSummary>,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub attachments: Vec<Attachment>,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub direct_recipients: Vec<Value>,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub recipients: Vec<Value>,
    pub user: Option<Person>,
    pub meta: Option<MessageMeta>,
}

/// The parent conversation as embedded in a message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversationSummary {
    pub subject: Option<String>,
    pub slug: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub category: Option<Category>,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub followers: Vec<Person>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attachment {
    pub thumb_url: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "image?")]
    pub image: Option<bool>,
    pub file_content_type: Option<String>,
    pub file_file_name: Option<String>,
    pub file_file_size: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageMeta {
    #[serde(rename = "Subject")]
    pub subject: Option<String>,
    pub language: Option<Language>,
}

/// Language detected for a message body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    pub name: Option<String>,
    pub code: Option<String>,
    pub reliable: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetMessagesResponse {
    #[serde(flatten)]
    pub page: PageInfo,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub messages: Vec<Message>,
}

pub type CreateMessageResponse = Message;

/// Request payload for posting a message into an existing conversation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateMessageRequest {
    pub message: NewMessage,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewMessage {
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<MessageVisibility>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_id: Option<String>,
    /// Author of the message; defaults to the API user when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<MessageAuthor>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub suppress_notifications: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub suppress_autoresolve: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub attachments: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageAuthor {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn messages_response_reads_paging_and_nested_shapes() {
        let body = json!({
            "page_size": 30,
            "page_count": 1,
            "total_count": 1,
            "messages": [{
                "body": "hello",
                "visibility": 1,
                "conversation": {"slug": "abc", "category": {"slug": "support"}},
                "attachments": [{"url": "https://x/y.png", "image?": true}],
                "user": {"name": "Ann", "mobile": null, "staff?": false},
                "meta": {"Subject": "Re: hi", "language": {"code": "en", "reliable": true}}
            }]
        });
        let response: GetMessagesResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.page.total_count, Some(1));
        let message = &response.messages[0];
        assert_eq!(message.visibility, Some(MessageVisibility::InternalNote));
        assert_eq!(message.attachments[0].image, Some(true));
        assert_eq!(
            message.meta.as_ref().and_then(|m| m.language.as_ref()).and_then(|l| l.code.as_deref()),
            Some("en")
        );
    }

    #[test]
    fn new_message_serializes_body_even_when_empty() {
        let value = serde_json::to_value(CreateMessageRequest::default()).unwrap();
        assert_eq!(value, json!({"message": {"body": ""}}));
    }
}
