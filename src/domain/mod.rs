//! Domain aggregates shared by the patient and note services.

pub mod note;
pub mod patient;
