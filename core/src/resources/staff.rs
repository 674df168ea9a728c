use super::API_ROOT;
use crate::client::{require_request, Client};
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::options::StaffOption;
use crate::query::compose;
use crate::transport::Transport;
use crate::types::{CreateStaffRequest, CreateStaffResponse, GetStaffResponse};

impl<T: Transport> Client<T> {
    pub fn get_staff(&self, options: &[StaffOption]) -> Result<GetStaffResponse, ApiError> {
        let query = compose(options).render();
        self.get_json(&format!("{API_ROOT}/staff{query}"))
    }

    /// Create a staff login. Adding staff may change the account's
    /// subscription cost.
    pub fn create_staff(&self, req: &CreateStaffRequest) -> Result<CreateStaffResponse, ApiError> {
        require_request(req, "create staff request")?;
        self.send_json(HttpMethod::Post, &format!("{API_ROOT}/staff"), req)
    }
}
