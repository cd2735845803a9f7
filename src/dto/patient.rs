//! Wire payloads accepted by the patient API.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::patient::{NewPatient, Patient};

/// Patient record as submitted to the API. `id` must be absent for
/// creations and present for updates.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PatientPayload {
    pub id: Option<i32>,
    #[validate(length(min = 1, max = 35, message = "First name is mandatory"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 35, message = "Last name is mandatory"))]
    pub last_name: String,
    #[validate(custom(function = validate_birth_date))]
    pub birth_date: NaiveDate,
    #[validate(length(min = 1, max = 1, message = "Genre is mandatory"))]
    pub genre: String,
    #[validate(length(max = 90))]
    pub address: Option<String>,
    #[validate(length(max = 16))]
    pub phone_number: Option<String>,
}

fn validate_birth_date(birth_date: &NaiveDate) -> Result<(), ValidationError> {
    if *birth_date >= Utc::now().date_naive() {
        let mut err = ValidationError::new("past");
        err.message = Some("Birthdate must be in the past".into());
        return Err(err);
    }
    Ok(())
}

impl From<PatientPayload> for NewPatient {
    fn from(payload: PatientPayload) -> Self {
        NewPatient::new(
            payload.first_name,
            payload.last_name,
            payload.birth_date,
            payload.genre,
            payload.address,
            payload.phone_number,
        )
    }
}

impl PatientPayload {
    /// Domain form of the payload for updates, once the target id is known.
    #[must_use]
    pub fn into_patient(self, id: i32) -> Patient {
        let normalized = NewPatient::from(self);
        Patient {
            id,
            first_name: normalized.first_name,
            last_name: normalized.last_name,
            birth_date: normalized.birth_date,
            genre: normalized.genre,
            address: normalized.address,
            phone_number: normalized.phone_number,
        }
    }
}
