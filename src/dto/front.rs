//! Aggregates shaped for the server-rendered pages.

use crate::domain::note::Note;
use crate::domain::patient::Patient;
use crate::dto::page::Page;

/// Data required to render the patient roster page.
#[derive(Debug)]
pub struct HomePage {
    pub patients: Page<Patient>,
    /// Pager window, absent when the roster is empty.
    pub page_interval: Option<Vec<i32>>,
}

/// Data required to render the patient detail and edit page.
#[derive(Debug)]
pub struct PatientDetailPage {
    pub patient: Patient,
    pub notes: Vec<Note>,
}
