use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::incidents::{Incident, IncidentSystemStatus};

/// A component listed on the status page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct System {
    pub id: Option<String>,
    pub title: Option<String>,
    pub account_id: Option<i64>,
    pub brand_id: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub status: Option<IncidentSystemStatus>,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub active_incidents: Vec<Incident>,
}

pub type GetSystemsResponse = Vec<System>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn systems_list_reads_active_incidents() {
        let systems: GetSystemsResponse = serde_json::from_str(
            r#"[{"id":"sys-1","title":"API","status":"major_outage","active_incidents":[{"id":"inc-1"}]}]"#,
        )
        .unwrap();
        assert_eq!(systems[0].status, Some(IncidentSystemStatus::MajorOutage));
        assert_eq!(systems[0].active_incidents[0].id.as_deref(), Some("inc-1"));
    }
}
