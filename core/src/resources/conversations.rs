use tracing::debug;

use super::API_ROOT;
use crate::client::{require, require_request, Client};
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::options::ConversationOption;
use crate::query::{compose, escape};
use crate::transport::Transport;
use crate::types::{
    CreateConversationRequest, CreateConversationResponse, GetConversationResponse,
    GetConversationsResponse, UpdateConversationRequest, UpdateConversationResponse,
};

impl<T: Transport> Client<T> {
    /// Open a new conversation. The channel slug, the first message body and
    /// the customer email must be set.
    pub fn create_conversation(
        &self,
        req: &CreateConversationRequest,
    ) -> Result<CreateConversationResponse, ApiError> {
        let conversation = &req.conversation;
        require(&conversation.category, "conversation category")?;
        require(&conversation.message.body, "conversation message body")?;
        require(&conversation.user.email, "conversation user email")?;

        let created: CreateConversationResponse =
            self.send_json(HttpMethod::Post, &format!("{API_ROOT}/conversations"), req)?;
        debug!(slug = created.slug.as_deref().unwrap_or_default(), "Created conversation.");
        Ok(created)
    }

    pub fn get_conversations(
        &self,
        options: &[ConversationOption],
    ) -> Result<GetConversationsResponse, ApiError> {
        let query = compose(options).render();
        self.get_json(&format!("{API_ROOT}/conversations{query}"))
    }

    pub fn get_conversation(&self, slug: &str) -> Result<GetConversationResponse, ApiError> {
        require(slug, "conversation slug")?;
        self.get_json(&format!("{API_ROOT}/conversations/{}", escape(slug)))
    }

    /// Change status, tags, assignee, channel, brand or custom data of a
    /// conversation.
    pub fn update_conversation(
        &self,
        slug: &str,
        req: &UpdateConversationRequest,
    ) -> Result<UpdateConversationResponse, ApiError> {
        require(slug, "conversation slug")?;
        require_request(req, "update conversation request")?;
        self.send_json(
            HttpMethod::Put,
            &format!("{API_ROOT}/conversations/{}", escape(slug)),
            req,
        )
    }
}
