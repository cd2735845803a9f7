use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A clinical note attached to a patient record. Notes are keyed by an
/// opaque string identifier assigned by the note store.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Note {
    pub id: String,
    pub patient_id: i32,
    pub date_time: NaiveDateTime,
    pub content: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewNote {
    pub patient_id: i32,
    pub date_time: NaiveDateTime,
    pub content: String,
}

impl NewNote {
    #[must_use]
    pub fn new(patient_id: i32, date_time: NaiveDateTime, content: String) -> Self {
        Self {
            patient_id,
            date_time,
            content: content.trim().to_string(),
        }
    }
}
