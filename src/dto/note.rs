//! Wire payloads accepted by the note API.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::note::{NewNote, Note};

/// Note as submitted to the API. `id` must be absent for creations and
/// present for updates. A missing `date_time` is filled in with the
/// current time by the note service.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NotePayload {
    pub id: Option<String>,
    #[validate(range(min = 1, message = "Patient id is mandatory"))]
    pub patient_id: i32,
    pub date_time: Option<NaiveDateTime>,
    #[validate(length(min = 1, message = "Content is mandatory"))]
    pub content: String,
}

impl NotePayload {
    /// Domain form of the payload for creations.
    #[must_use]
    pub fn into_new_note(self, default_date_time: NaiveDateTime) -> NewNote {
        NewNote::new(
            self.patient_id,
            self.date_time.unwrap_or(default_date_time),
            self.content,
        )
    }

    /// Domain form of the payload for updates, once the target id is known.
    #[must_use]
    pub fn into_note(self, id: String, default_date_time: NaiveDateTime) -> Note {
        let normalized = self.into_new_note(default_date_time);
        Note {
            id,
            patient_id: normalized.patient_id,
            date_time: normalized.date_time,
            content: normalized.content,
        }
    }
}
