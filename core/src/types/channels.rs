use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Brand;

int_enum! {
    /// Medium a channel receives conversations through.
    ChannelType {
        Email = 1,
        Twitter = 2,
        Facebook = 3,
        Chat = 6,
        Instagram = 8,
        Sms = 9,
        Voice = 10,
        FacebookMessenger = 12,
        FacebookLead = 13,
        InstagramAd = 14,
        WhatsApp = 15,
        InstagramDm = 16,
    }
}

int_enum! {
    ChannelVisibility {
        Private = 0,
        Public = 1,
    }
}

/// Who the "From" name on replies is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyFromName {
    Channel,
    Brand,
    Staff,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Channel {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub email: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub channel: Option<ChannelType>,
    pub visibility: Option<ChannelVisibility>,
    pub spam_filter_enabled: Option<bool>,
    pub reply_from_origin: Option<bool>,
    pub verified: Option<bool>,
    pub verification_email: Option<String>,
    pub last_verified: Option<DateTime<Utc>>,
    pub settings_reply_from_name: Option<ReplyFromName>,
    pub settings_signature: Option<String>,
    pub brand: Option<Brand>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetChannelsResponse {
    pub total_count: Option<i64>,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub channels: Vec<Channel>,
}

pub type GetChannelResponse = Channel;
