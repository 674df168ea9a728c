use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{Category, PageInfo, Person};

int_enum! {
    /// Lifecycle state of a conversation.
    ConversationStatus {
        Unresolved = 0,
        Pending = 1,
        Resolved = 2,
        Spam = 3,
        Archived = 4,
        OnHold = 5,
        AutoResolved = 6,
        ChatbotAssigned = 7,
        ChatbotResolved = 8,
    }
}

/// A support conversation as returned by the get, list and create endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conversation {
    pub subject: Option<String>,
    pub slug: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub origin: Option<i64>,
    pub data: Option<Value>,
    pub hold_until: Option<Value>,
    pub author: Option<Person>,
    pub assignee: Option<Person>,
    pub perma_url: Option<String>,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub tag_list: Vec<String>,
    pub status: Option<ConversationStatus>,
    pub display_subject: Option<String>,
    pub category: Option<Category>,
    pub last_customer_message: Option<MessageBody>,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub followers: Vec<Person>,
    pub message: Option<MessageBody>,
    #[serde(rename = "readOnly")]
    pub read_only: Option<bool>,
    pub message_count: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageBody {
    pub body: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetConversationsResponse {
    #[serde(flatten)]
    pub page: PageInfo,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub conversations: Vec<Conversation>,
}

pub type GetConversationResponse = Conversation;
pub type CreateConversationResponse = Conversation;
pub type UpdateConversationResponse = Conversation;

/// Request payload for opening a new conversation.
///
/// `category`, `message.body` and `user.email` are required and checked
/// before anything is sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateConversationRequest {
    pub conversation: NewConversation,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewConversation {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subject: String,
    /// Slug of the channel the conversation is filed under.
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub tag_list: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ConversationStatus>,
    /// Stops Re:amaze sending email or integration notifications for this
    /// message.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub suppress_notifications: bool,
    /// Stops a staff `user` message from resolving the conversation.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub suppress_autoresolve: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default)]
    pub message: NewConversationMessage,
    #[serde(default)]
    pub user: ConversationUser,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewConversationMessage {
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub attachments: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationUser {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Request payload for changing an existing conversation. Only the fields
/// that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateConversationRequest {
    pub conversation: ConversationChanges,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationChanges {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub tag_list: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ConversationStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Email of the staff member to assign.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}
