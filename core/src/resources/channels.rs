use super::API_ROOT;
use crate::client::{require, Client};
use crate::error::ApiError;
use crate::query::escape;
use crate::transport::Transport;
use crate::types::{GetChannelResponse, GetChannelsResponse};

impl<T: Transport> Client<T> {
    pub fn get_channels(&self) -> Result<GetChannelsResponse, ApiError> {
        self.get_json(&format!("{API_ROOT}/channels"))
    }

    pub fn get_channel(&self, slug: &str) -> Result<GetChannelResponse, ApiError> {
        require(slug, "channel slug")?;
        self.get_json(&format!("{API_ROOT}/channels/{}", escape(slug)))
    }
}
