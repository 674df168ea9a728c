use super::API_ROOT;
use crate::client::{require, require_request, Client};
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::query::escape;
use crate::transport::Transport;
use crate::types::{
    CreateIncidentRequest, CreateIncidentResponse, GetIncidentResponse, GetIncidentsResponse,
    UpdateIncidentRequest, UpdateIncidentResponse,
};

impl<T: Transport> Client<T> {
    pub fn get_incidents(&self) -> Result<GetIncidentsResponse, ApiError> {
        self.get_json(&format!("{API_ROOT}/incidents"))
    }

    pub fn get_incident(&self, id: &str) -> Result<GetIncidentResponse, ApiError> {
        require(id, "incident id")?;
        self.get_json(&format!("{API_ROOT}/incidents/{}", escape(id)))
    }

    pub fn create_incident(&self, req: &CreateIncidentRequest) -> Result<CreateIncidentResponse, ApiError> {
        require_request(req, "create incident request")?;
        self.send_json(HttpMethod::Post, &format!("{API_ROOT}/incidents"), req)
    }

    /// Post a status update and/or change affected system statuses.
    pub fn update_incident(
        &self,
        id: &str,
        req: &UpdateIncidentRequest,
    ) -> Result<UpdateIncidentResponse, ApiError> {
        require_request(req, "update incident request")?;
        require(id, "incident id")?;
        self.send_json(HttpMethod::Put, &format!("{API_ROOT}/incidents/{}", escape(id)), req)
    }
}

#[cfg(test)]
mod tests {
    use crate::http::HttpMethod;
    use crate::stub::{client, StubTransport};
    use crate::types::{
        IncidentInput, IncidentUpdateInput, IncidentUpdateStatus, UpdateIncidentRequest,
    };

    fn update(status: IncidentUpdateStatus) -> UpdateIncidentRequest {
        UpdateIncidentRequest {
            incident: IncidentInput {
                title: Some("API latency".to_string()),
                updates_attributes: vec![IncidentUpdateInput {
                    status: Some(status),
                    message: Some("looking".to_string()),
                }],
                incidents_systems_attributes: Vec::new(),
            },
        }
    }

    #[test]
    fn get_incidents_decodes_array() {
        let stub = StubTransport::ok(r#"[{"id":"inc-1"},{"id":"inc-2"}]"#);
        let incidents = client(&stub).get_incidents().unwrap();
        assert_eq!(incidents.len(), 2);
        assert_eq!(stub.last_request().url, "https://dummy.reamaze.io/api/v1/incidents");
    }

    #[test]
    fn get_incident_requires_id() {
        let stub = StubTransport::ok(r#"{"id":"inc-1","title":"Down"}"#);
        let client = client(&stub);
        assert!(client.get_incident("").unwrap_err().is_validation());
        assert_eq!(client.get_incident("inc-1").unwrap().title.as_deref(), Some("Down"));
    }

    #[test]
    fn create_and_update_incident() {
        let stub = StubTransport::ok(r#"{"id":"inc-1","status":"investigating"}"#);
        let client = client(&stub);

        assert!(client
            .create_incident(&UpdateIncidentRequest::default())
            .unwrap_err()
            .is_validation());

        let created = client.create_incident(&update(IncidentUpdateStatus::Investigating)).unwrap();
        assert_eq!(created.status, Some(IncidentUpdateStatus::Investigating));
        assert_eq!(stub.last_request().method, HttpMethod::Post);

        client.update_incident("inc-1", &update(IncidentUpdateStatus::Resolved)).unwrap();
        let request = stub.last_request();
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.url, "https://dummy.reamaze.io/api/v1/incidents/inc-1");
        assert_eq!(
            stub.last_json()["incident"]["updates_attributes"][0]["status"],
            "resolved"
        );

        assert!(client
            .update_incident("", &update(IncidentUpdateStatus::Resolved))
            .unwrap_err()
            .is_validation());
    }
}
