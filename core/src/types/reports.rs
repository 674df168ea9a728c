//! Aggregate reports. Every report echoes back the date range it covers.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{Brand, Category};

/// New conversations per day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeReport {
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub conversation_counts: BTreeMap<String, i64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// First-response times in seconds, per day and summarized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseTimeReport {
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub response_times: BTreeMap<String, Option<f64>>,
    pub summary: Option<ResponseTimeSummary>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseTimeSummary {
    pub averages: Option<ResponseTimeAverages>,
    pub trends: Option<ResponseTimeTrends>,
    pub ratio: Option<ResponseTimeRatio>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseTimeAverages {
    pub in_range: Option<f64>,
    pub this_month: Option<f64>,
    pub this_week: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseTimeTrends {
    pub last_30_days: Option<Trend>,
    pub last_7_days: Option<Trend>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Trend {
    pub average: Option<f64>,
    /// Either a number or a preformatted string such as `"+12%"`.
    pub change_rate: Option<Value>,
}

/// Share of conversations answered within each threshold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseTimeRatio {
    pub under_1_hour: Option<f64>,
    pub under_1_day: Option<f64>,
    pub under_1_week: Option<f64>,
}

/// Per-staff activity, keyed by staff name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaffReport {
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub report: BTreeMap<String, StaffActivity>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaffActivity {
    pub response_count: Option<i64>,
    pub archived_count: Option<i64>,
    pub resolved_count: Option<i64>,
    pub satisfaction_average: Option<Value>,
    pub appreciations_count: Option<Value>,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub responses_trend: BTreeMap<String, i64>,
    pub response_time_seconds: Option<f64>,
}

/// Conversation counts per tag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagsReport {
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub tags: BTreeMap<String, i64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Activity per channel, keyed by channel slug.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelSummaryReport {
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub channels: BTreeMap<String, ChannelSummary>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelSummary {
    pub category: Option<Category>,
    pub brand: Option<Brand>,
    pub staff_responses: Option<i64>,
    pub customer_responses: Option<i64>,
    pub average_response_time_seconds: Option<Value>,
    pub appreciations: Option<i64>,
    pub active_conversations: Option<i64>,
    pub resolved_conversations: Option<i64>,
    pub archived_conversations: Option<i64>,
    pub average_satisfaction_rating: Option<f64>,
    pub average_thread_size: Option<f64>,
}
