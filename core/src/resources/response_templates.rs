use super::API_ROOT;
use crate::client::{require, require_request, Client};
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::options::ResponseTemplateOption;
use crate::query::{compose, escape};
use crate::transport::Transport;
use crate::types::{
    CreateResponseTemplateRequest, CreateResponseTemplateResponse, GetResponseTemplateResponse,
    GetResponseTemplatesResponse, UpdateResponseTemplateRequest, UpdateResponseTemplateResponse,
};

impl<T: Transport> Client<T> {
    pub fn get_response_templates(
        &self,
        options: &[ResponseTemplateOption],
    ) -> Result<GetResponseTemplatesResponse, ApiError> {
        let query = compose(options).render();
        self.get_json(&format!("{API_ROOT}/response_templates{query}"))
    }

    pub fn get_response_template(&self, id: &str) -> Result<GetResponseTemplateResponse, ApiError> {
        require(id, "response template id")?;
        self.get_json(&format!("{API_ROOT}/response_templates/{}", escape(id)))
    }

    pub fn create_response_template(
        &self,
        req: &CreateResponseTemplateRequest,
    ) -> Result<CreateResponseTemplateResponse, ApiError> {
        require_request(req, "create response template request")?;
        self.send_json(HttpMethod::Post, &format!("{API_ROOT}/response_templates"), req)
    }

    pub fn update_response_template(
        &self,
        id: &str,
        req: &UpdateResponseTemplateRequest,
    ) -> Result<UpdateResponseTemplateResponse, ApiError> {
        require_request(req, "update response template request")?;
        require(id, "response template id")?;
        self.send_json(
            HttpMethod::Put,
            &format!("{API_ROOT}/response_templates/{}", escape(id)),
            req,
        )
    }
}
