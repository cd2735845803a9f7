use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::dto::note::NotePayload;

#[derive(Debug, Clone, Deserialize)]
/// Form data for adding a note to a patient record.
pub struct NoteForm {
    /// Note identifier, blank for a new note.
    #[serde(default, deserialize_with = "crate::forms::empty_string_as_none")]
    pub id: Option<String>,
    /// Identifier of the patient the note belongs to.
    pub patient_id: i32,
    /// Observation timestamp from the datetime-local input, blank to use
    /// the current time.
    pub date_time: Option<String>,
    /// Free-form note text.
    pub content: String,
}

impl TryFrom<NoteForm> for NotePayload {
    type Error = chrono::ParseError;

    fn try_from(form: NoteForm) -> Result<Self, Self::Error> {
        let date_time = match form.date_time.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => Some(parse_date_time(raw)?),
            None => None,
        };
        Ok(NotePayload {
            id: form.id,
            patient_id: form.patient_id,
            date_time,
            content: form.content,
        })
    }
}

// datetime-local inputs omit the seconds unless the form sets a step.
fn parse_date_time(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_form() -> NoteForm {
        NoteForm {
            id: None,
            patient_id: 2,
            date_time: Some("2023-11-02T14:30".to_string()),
            content: "Patient states that they feel tired".to_string(),
        }
    }

    #[test]
    fn minute_precision_timestamp_is_accepted() {
        let payload = NotePayload::try_from(sample_form()).unwrap();
        assert_eq!(
            payload.date_time,
            Some(
                NaiveDate::from_ymd_opt(2023, 11, 2)
                    .unwrap()
                    .and_hms_opt(14, 30, 0)
                    .unwrap()
            )
        );
    }

    #[test]
    fn blank_timestamp_becomes_none() {
        let mut form = sample_form();
        form.date_time = Some("  ".to_string());
        let payload = NotePayload::try_from(form).unwrap();
        assert_eq!(payload.date_time, None);
    }

    #[test]
    fn malformed_timestamp_is_an_error() {
        let mut form = sample_form();
        form.date_time = Some("02/11/2023 14:30".to_string());
        assert!(NotePayload::try_from(form).is_err());
    }
}
