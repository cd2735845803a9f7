use chrono::Utc;
use validator::Validate;

use crate::domain::note::Note;
use crate::dto::note::NotePayload;
use crate::repository::{NoteReader, NoteWriter};
use crate::services::{ServiceError, ServiceResult};

/// Fetches a note by identifier. A miss is reported as an error rather
/// than an empty result.
pub fn get_note<R>(repo: &R, note_id: &str) -> ServiceResult<Note>
where
    R: NoteReader + ?Sized,
{
    repo.get_by_id(note_id)
        .map_err(ServiceError::from)?
        .ok_or_else(|| ServiceError::NotFound(format!("Note {note_id} not found")))
}

/// Lists the notes attached to a patient, most recent first.
pub fn list_patient_notes<R>(repo: &R, patient_id: i32) -> ServiceResult<Vec<Note>>
where
    R: NoteReader + ?Sized,
{
    if patient_id < 1 {
        return Err(ServiceError::BadRequest(
            "Patient id must be positive".to_string(),
        ));
    }

    repo.list_by_patient(patient_id).map_err(ServiceError::from)
}

/// Validates and persists a new note. Payloads that already carry an
/// identifier are refused. Note text is sanitized before storage.
pub fn create_note<R>(repo: &R, payload: NotePayload) -> ServiceResult<Note>
where
    R: NoteWriter + ?Sized,
{
    payload.validate()?;
    if payload.id.is_some() {
        return Err(ServiceError::Conflict(
            "A new note cannot carry an identifier".to_string(),
        ));
    }

    let payload = sanitized(payload);
    let new_note = payload.into_new_note(Utc::now().naive_utc());
    repo.create(&new_note).map_err(ServiceError::from)
}

/// Validates and applies a full update to an existing note.
pub fn update_note<R>(repo: &R, payload: NotePayload) -> ServiceResult<Note>
where
    R: NoteWriter + ?Sized,
{
    payload.validate()?;
    let id = payload
        .id
        .clone()
        .ok_or_else(|| ServiceError::BadRequest("Note id is required for an update".to_string()))?;

    let payload = sanitized(payload);
    let note = payload.into_note(id, Utc::now().naive_utc());
    repo.update(&note).map_err(ServiceError::from)
}

/// Removes a note. Unknown identifiers are ignored.
pub fn delete_note<R>(repo: &R, note_id: &str) -> ServiceResult<()>
where
    R: NoteWriter + ?Sized,
{
    repo.delete(note_id).map_err(ServiceError::from)
}

fn sanitized(payload: NotePayload) -> NotePayload {
    NotePayload {
        content: ammonia::clean(&payload.content),
        ..payload
    }
}
