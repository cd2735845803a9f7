use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Patient {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub genre: String,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewPatient {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub genre: String,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

impl NewPatient {
    #[must_use]
    pub fn new(
        first_name: String,
        last_name: String,
        birth_date: NaiveDate,
        genre: String,
        address: Option<String>,
        phone_number: Option<String>,
    ) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            birth_date,
            genre: genre.trim().to_string(),
            address: address
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            phone_number: phone_number
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}
