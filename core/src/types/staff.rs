use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::PageInfo;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaffMember {
    pub name: Option<String>,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub notification_email: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub role: Option<StaffRole>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaffRole {
    pub id: Option<Value>,
    pub name: Option<String>,
    pub description: Option<Value>,
    #[serde(rename = "admin?")]
    pub admin: Option<bool>,
    #[serde(rename = "default?")]
    pub default: Option<bool>,
    pub permissions: Option<StaffPermissions>,
}

/// Role permission flags. Boolean flags carry a trailing `?` on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaffPermissions {
    #[serde(rename = "manage_staff?")]
    pub manage_staff: Option<bool>,
    #[serde(rename = "manage_staff_role?")]
    pub manage_staff_role: Option<bool>,
    #[serde(rename = "manage_departments?")]
    pub manage_departments: Option<bool>,
    #[serde(rename = "view_staff?")]
    pub view_staff: Option<bool>,
    #[serde(rename = "manage_subscriptions?")]
    pub manage_subscriptions: Option<bool>,
    #[serde(rename = "manage_invoice_email?")]
    pub manage_invoice_email: Option<bool>,
    #[serde(rename = "manage_kb?")]
    pub manage_kb: Option<bool>,
    #[serde(rename = "manage_account?")]
    pub manage_account: Option<bool>,
    #[serde(rename = "manage_response_templates?")]
    pub manage_response_templates: Option<bool>,
    #[serde(rename = "manage_personal_response_templates?")]
    pub manage_personal_response_templates: Option<bool>,
    #[serde(rename = "manage_workflows?")]
    pub manage_workflows: Option<bool>,
    #[serde(rename = "manage_chatbots?")]
    pub manage_chatbots: Option<bool>,
    #[serde(rename = "manage_push_campaigns?")]
    pub manage_push_campaigns: Option<bool>,
    #[serde(rename = "manage_website_integrations?")]
    pub manage_website_integrations: Option<bool>,
    #[serde(rename = "manage_developer_settings?")]
    pub manage_developer_settings: Option<bool>,
    #[serde(rename = "manage_assignments?")]
    pub manage_assignments: Option<bool>,
    #[serde(rename = "manage_incidents?")]
    pub manage_incidents: Option<bool>,
    #[serde(rename = "manage_notes?")]
    pub manage_notes: Option<bool>,
    #[serde(rename = "manage_tags?")]
    pub manage_tags: Option<bool>,
    #[serde(rename = "delete_conversations?")]
    pub delete_conversations: Option<bool>,
    #[serde(rename = "access_voice?")]
    pub access_voice: Option<bool>,
    #[serde(rename = "access_video_call?")]
    pub access_video_call: Option<bool>,
    #[serde(rename = "access_ai_features?")]
    pub access_ai_features: Option<bool>,
    #[serde(rename = "access_webhook_subscriptions_api?")]
    pub access_webhook_subscriptions_api: Option<bool>,
    #[serde(rename = "access_chat?")]
    pub access_chat: Option<bool>,
    #[serde(rename = "access_live_view?")]
    pub access_live_view: Option<bool>,
    #[serde(rename = "access_reports?")]
    pub access_reports: Option<bool>,
    #[serde(rename = "access_staff_reports?")]
    pub access_staff_reports: Option<bool>,
    #[serde(rename = "reply_to_customers?")]
    pub reply_to_customers: Option<bool>,
    #[serde(rename = "edit_customers?")]
    pub edit_customers: Option<bool>,
    #[serde(rename = "restrict_channels?")]
    pub restrict_channels: Option<bool>,
    #[serde(rename = "move_across_restricted_channels?")]
    pub move_across_restricted_channels: Option<bool>,
    #[serde(rename = "assign_across_restricted_channels?")]
    pub assign_across_restricted_channels: Option<bool>,
    #[serde(rename = "view_reports_for_restricted_channels?")]
    pub view_reports_for_restricted_channels: Option<bool>,
    #[serde(rename = "view_all_contacts?")]
    pub view_all_contacts: Option<bool>,
    #[serde(rename = "export_contacts?")]
    pub export_contacts: Option<bool>,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub visible_channel_ids: Vec<Value>,
    pub max_chats: Option<i64>,
    pub bigcommerce_access: Option<IntegrationAccess>,
    pub loyaltylion_access: Option<IntegrationAccess>,
    pub pipedrive_access: Option<IntegrationAccess>,
    pub shopify_access: Option<IntegrationAccess>,
    pub stripe_access: Option<IntegrationAccess>,
    pub woocommerce_access: Option<IntegrationAccess>,
    pub yotpo_access: Option<IntegrationAccess>,
    pub gbm_access: Option<IntegrationAccess>,
    pub wix_access: Option<IntegrationAccess>,
}

/// Access flags for one third-party integration. Each integration only
/// reports the subset of flags that applies to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrationAccess {
    pub access: Option<bool>,
    pub edit: Option<bool>,
    pub edit_details: Option<bool>,
    pub process_refunds: Option<bool>,
    pub process_cancels: Option<bool>,
    pub cancel_subscriptions: Option<bool>,
    pub manage_deals: Option<bool>,
    pub manage_draft_orders: Option<bool>,
    pub manage_fulfillments: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetStaffResponse {
    #[serde(flatten)]
    pub page: PageInfo,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub staff: Vec<StaffMember>,
}

pub type CreateStaffResponse = StaffMember;

/// Creates a staff login. No invite email is sent; the new user must change
/// their password on first login.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateStaffRequest {
    pub user: NewStaff,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewStaff {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}
