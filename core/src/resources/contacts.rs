use super::API_ROOT;
use crate::client::{require, require_request, Client};
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::options::ContactOption;
use crate::query::{compose, escape};
use crate::transport::Transport;
use crate::types::{
    CreateContactIdentityRequest, CreateContactIdentityResponse, CreateContactRequest,
    CreateContactResponse, GetContactIdentitiesResponse, GetContactResponse, GetContactsResponse,
    UpdateContactRequest, UpdateContactResponse,
};

impl<T: Transport> Client<T> {
    pub fn get_contacts(&self, options: &[ContactOption]) -> Result<GetContactsResponse, ApiError> {
        let query = compose(options).render();
        self.get_json(&format!("{API_ROOT}/contacts{query}"))
    }

    /// `id` is the contact's public identifier, usually an email address.
    pub fn get_contact(&self, id: &str) -> Result<GetContactResponse, ApiError> {
        require(id, "contact identifier")?;
        self.get_json(&format!("{API_ROOT}/contacts/{}", escape(id)))
    }

    pub fn create_contact(&self, req: &CreateContactRequest) -> Result<CreateContactResponse, ApiError> {
        require_request(req, "create contact request")?;
        self.send_json(HttpMethod::Post, &format!("{API_ROOT}/contacts"), req)
    }

    pub fn update_contact(
        &self,
        id: &str,
        req: &UpdateContactRequest,
    ) -> Result<UpdateContactResponse, ApiError> {
        require(id, "contact identifier")?;
        require_request(req, "update contact request")?;
        self.send_json(HttpMethod::Put, &format!("{API_ROOT}/contacts/{}", escape(id)), req)
    }

    pub fn get_contact_identities(&self, id: &str) -> Result<GetContactIdentitiesResponse, ApiError> {
        require(id, "contact identifier")?;
        self.get_json(&format!("{API_ROOT}/contacts/{}/identities", escape(id)))
    }

    /// Attach another handle (email, mobile, social account) to a contact.
    pub fn create_contact_identity(
        &self,
        id: &str,
        req: &CreateContactIdentityRequest,
    ) -> Result<CreateContactIdentityResponse, ApiError> {
        require(id, "contact identifier")?;
        if req.identity.kind.is_none() {
            return Err(ApiError::validation("identity type cannot be empty"));
        }
        require(&req.identity.identifier, "identity identifier")?;
        self.send_json(
            HttpMethod::Post,
            &format!("{API_ROOT}/contacts/{}/identities", escape(id)),
            req,
        )
    }
}
