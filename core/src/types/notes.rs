use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A staff note attached to a contact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Note {
    pub id: Option<String>,
    pub note: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub creator: Option<NoteCreator>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoteCreator {
    pub email: Option<String>,
    pub name: Option<String>,
}

pub type GetNotesResponse = Vec<Note>;
pub type CreateNoteResponse = Note;
pub type UpdateNoteResponse = Note;
pub type DeleteNoteResponse = Note;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateNoteRequest {
    pub note: NoteInput,
}

pub type UpdateNoteRequest = CreateNoteRequest;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteInput {
    #[serde(default)]
    pub body: String,
    /// Filled with the current time when left unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
