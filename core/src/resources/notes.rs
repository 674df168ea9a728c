use chrono::Utc;

use super::API_ROOT;
use crate::client::{decode, require, require_request, Client};
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::query::escape;
use crate::transport::Transport;
use crate::types::{
    CreateNoteRequest, CreateNoteResponse, DeleteNoteResponse, GetNotesResponse, UpdateNoteRequest,
    UpdateNoteResponse,
};

impl<T: Transport> Client<T> {
    /// Notes attached to the contact identified by `id`.
    pub fn get_notes(&self, id: &str) -> Result<GetNotesResponse, ApiError> {
        require(id, "contact identifier")?;
        self.get_json(&format!("{API_ROOT}/contacts/{}/notes", escape(id)))
    }

    /// Attach a note to a contact. An unset `created_at` is sent as the
    /// current time.
    pub fn create_note(&self, id: &str, req: &CreateNoteRequest) -> Result<CreateNoteResponse, ApiError> {
        require_request(req, "create note request")?;
        require(id, "contact identifier")?;
        self.send_json(
            HttpMethod::Post,
            &format!("{API_ROOT}/contacts/{}/notes", escape(id)),
            &stamped(req),
        )
    }

    pub fn update_note(
        &self,
        id: &str,
        note_id: &str,
        req: &UpdateNoteRequest,
    ) -> Result<UpdateNoteResponse, ApiError> {
        require_request(req, "update note request")?;
        require(id, "contact identifier")?;
        require(note_id, "note id")?;
        self.send_json(
            HttpMethod::Put,
            &format!("{API_ROOT}/contacts/{}/notes/{}", escape(id), escape(note_id)),
            &stamped(req),
        )
    }

    /// Delete a note. An empty success body yields a default `Note`.
    pub fn delete_note(&self, id: &str, note_id: &str) -> Result<DeleteNoteResponse, ApiError> {
        require(id, "contact identifier")?;
        require(note_id, "note id")?;
        let body = self.execute(
            HttpMethod::Delete,
            &format!("{API_ROOT}/contacts/{}/notes/{}", escape(id), escape(note_id)),
            None,
        )?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(DeleteNoteResponse::default());
        }
        decode(&body)
    }
}

fn stamped(req: &CreateNoteRequest) -> CreateNoteRequest {
    let mut req = req.clone();
    req.note.created_at.get_or_insert_with(Utc::now);
    req
}
