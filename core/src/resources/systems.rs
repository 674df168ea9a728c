use super::API_ROOT;
use crate::client::Client;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::GetSystemsResponse;

impl<T: Transport> Client<T> {
    /// Status-page systems with any incidents currently affecting them.
    pub fn get_systems(&self) -> Result<GetSystemsResponse, ApiError> {
        self.get_json(&format!("{API_ROOT}/systems"))
    }
}
