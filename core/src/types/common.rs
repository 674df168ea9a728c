//! Nested shapes shared by several resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::channels::ChannelType;
use super::incidents::{IncidentSystemStatus, IncidentUpdateStatus};

/// A customer or staff member as embedded in conversations, messages and
/// articles (author, follower, message user).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub data: Option<Value>,
    pub email: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub mobile: Option<String>,
    pub friendly_name: Option<String>,
    pub display_name: Option<String>,
    #[serde(rename = "staff?")]
    pub staff: Option<bool>,
    #[serde(rename = "customer?")]
    pub customer: Option<bool>,
    #[serde(rename = "bot?")]
    pub bot: Option<bool>,
}

/// The channel ("category" in the API) a conversation or report belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub email: Option<String>,
    pub channel: Option<ChannelType>,
    pub settings_display_html_email: Option<Value>,
    pub channel_type: Option<ChannelType>,
    pub channel_type_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brand {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub url: Option<String>,
}

/// Knowledge-base topic an article is filed under.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Topic {
    pub name: Option<String>,
    pub slug: Option<String>,
}

/// A status update posted on an incident.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncidentUpdate {
    pub id: Option<String>,
    pub status: Option<IncidentUpdateStatus>,
    pub message: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Link between an incident and one affected system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncidentSystem {
    pub id: Option<String>,
    pub system_id: Option<String>,
    pub status: Option<IncidentSystemStatus>,
    pub system: Option<SystemRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemRef {
    pub id: Option<String>,
    pub title: Option<String>,
}

/// Paging counters returned alongside list payloads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageInfo {
    pub page_size: Option<Value>,
    pub page_count: Option<i64>,
    pub total_count: Option<i64>,
}
