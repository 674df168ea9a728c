use serde::{Deserialize, Serialize};

/// A canned reply staff can insert into a conversation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseTemplate {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub body: Option<String>,
    pub response_template_group: Option<ResponseTemplateGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseTemplateGroup {
    pub id: Option<i64>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetResponseTemplatesResponse {
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub response_templates: Vec<ResponseTemplate>,
}

pub type GetResponseTemplateResponse = ResponseTemplate;
pub type CreateResponseTemplateResponse = ResponseTemplate;
pub type UpdateResponseTemplateResponse = ResponseTemplate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateResponseTemplateRequest {
    pub response_template: ResponseTemplateInput,
}

pub type UpdateResponseTemplateRequest = CreateResponseTemplateRequest;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseTemplateInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub body: String,
    /// Visible only to the creating staff member.
    #[serde(default)]
    pub is_personal: bool,
}
