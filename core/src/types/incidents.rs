use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{IncidentSystem, IncidentUpdate};

/// Progress of an incident, as posted with each update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentUpdateStatus {
    Investigating,
    Identified,
    Monitoring,
    Resolved,
    #[serde(other)]
    Unknown,
}

/// Health of a system affected by an incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentSystemStatus {
    Operational,
    DegradedPerformance,
    PartialOutage,
    MajorOutage,
    UnderMaintenance,
    #[serde(other)]
    Unknown,
}

/// A status-page incident.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Incident {
    pub id: Option<String>,
    pub title: Option<String>,
    pub account_id: Option<i64>,
    pub brand_id: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub status: Option<IncidentUpdateStatus>,
    pub external_url: Option<String>,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub updates: Vec<IncidentUpdate>,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub incidents_systems: Vec<IncidentSystem>,
}

pub type GetIncidentsResponse = Vec<Incident>;
pub type GetIncidentResponse = Incident;
pub type CreateIncidentResponse = Incident;
pub type UpdateIncidentResponse = Incident;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateIncidentRequest {
    pub incident: IncidentInput,
}

pub type CreateIncidentRequest = UpdateIncidentRequest;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncidentInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub updates_attributes: Vec<IncidentUpdateInput>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub incidents_systems_attributes: Vec<IncidentSystemInput>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncidentUpdateInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<IncidentUpdateStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Sets the status of one affected system. `id` refers to an existing
/// incident-system link; leave it unset to add a new one by `system_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncidentSystemInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<IncidentSystemStatus>,
}
