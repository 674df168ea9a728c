use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::PageInfo;
use super::notes::Note;

/// A customer record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    /// Public identifier, usually the primary email address.
    pub id: Option<String>,
    /// Numeric database id.
    #[serde(rename = "_id")]
    pub internal_id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub mobile: Option<String>,
    pub friendly_name: Option<String>,
    pub data: Option<Value>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub notes: Vec<Note>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetContactsResponse {
    #[serde(flatten)]
    pub page: PageInfo,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub contacts: Vec<Contact>,
}

pub type GetContactResponse = Contact;
pub type CreateContactResponse = Contact;
pub type UpdateContactResponse = Contact;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateContactRequest {
    pub contact: ContactInput,
}

pub type UpdateContactRequest = CreateContactRequest;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    /// Caller-chosen identifier for contacts without an email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub notes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Kind of handle an identity attaches to a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityType {
    Email,
    Mobile,
    Twitter,
    Facebook,
    Instagram,
    Custom,
    #[serde(other)]
    Unknown,
}

/// An additional handle (email, phone number, social account) under which a
/// contact is known.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactIdentity {
    #[serde(rename = "type")]
    pub kind: Option<IdentityType>,
    pub identifier: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

pub type GetContactIdentitiesResponse = Vec<ContactIdentity>;
pub type CreateContactIdentityResponse = ContactIdentity;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateContactIdentityRequest {
    pub identity: NewIdentity,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewIdentity {
    #[serde(rename = "type", default)]
    pub kind: Option<IdentityType>,
    #[serde(default)]
    pub identifier: String,
}
