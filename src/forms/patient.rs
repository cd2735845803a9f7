use chrono::NaiveDate;
use serde::Deserialize;

use crate::dto::patient::PatientPayload;

#[derive(Debug, Clone, Deserialize)]
/// Form data for creating or updating a patient. An empty `id` means the
/// form was submitted from the creation page.
pub struct PatientForm {
    /// Patient identifier, blank for a new patient.
    #[serde(default, deserialize_with = "crate::forms::empty_string_as_none")]
    pub id: Option<i32>,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Date of birth as submitted by the date input (`YYYY-MM-DD`).
    pub birth_date: String,
    /// Single-letter genre marker.
    pub genre: String,
    /// Postal address.
    pub address: Option<String>,
    /// Contact phone number.
    pub phone_number: Option<String>,
}

impl TryFrom<PatientForm> for PatientPayload {
    type Error = chrono::ParseError;

    fn try_from(form: PatientForm) -> Result<Self, Self::Error> {
        let birth_date = NaiveDate::parse_from_str(form.birth_date.trim(), "%Y-%m-%d")?;
        Ok(PatientPayload {
            id: form.id,
            first_name: form.first_name,
            last_name: form.last_name,
            birth_date,
            genre: form.genre,
            address: form.address,
            phone_number: form.phone_number,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> PatientForm {
        PatientForm {
            id: None,
            first_name: "Test".to_string(),
            last_name: "TestNone".to_string(),
            birth_date: "1966-12-31".to_string(),
            genre: "F".to_string(),
            address: None,
            phone_number: None,
        }
    }

    #[test]
    fn form_converts_into_payload() {
        let payload = PatientPayload::try_from(sample_form()).unwrap();
        assert_eq!(payload.id, None);
        assert_eq!(
            payload.birth_date,
            NaiveDate::from_ymd_opt(1966, 12, 31).unwrap()
        );
    }

    #[test]
    fn malformed_date_is_an_error() {
        let mut form = sample_form();
        form.birth_date = "31/12/1966".to_string();
        assert!(PatientPayload::try_from(form).is_err());
    }
}
