use crate::domain::note::{NewNote, Note};
use crate::domain::patient::{NewPatient, Patient};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod gateway;
pub mod note;
pub mod patient;

#[derive(Debug, Clone)]
pub struct Pagination {
    /// Zero-based page index.
    pub page: usize,
    pub per_page: usize,
}

#[derive(Debug, Clone, Default)]
pub struct PatientListQuery {
    pub pagination: Option<Pagination>,
}

impl PatientListQuery {
    #[must_use]
    pub fn new() -> Self {
        Self { pagination: None }
    }

    #[must_use]
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait PatientReader {
    fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Patient>>;
    fn list(&self, query: PatientListQuery) -> RepositoryResult<(usize, Vec<Patient>)>;
}

pub trait PatientWriter {
    fn create(&self, new_patient: &NewPatient) -> RepositoryResult<Patient>;
    fn update(&self, patient: &Patient) -> RepositoryResult<Patient>;
    fn delete(&self, patient_id: i32) -> RepositoryResult<()>;
}

pub trait NoteReader {
    fn get_by_id(&self, id: &str) -> RepositoryResult<Option<Note>>;
    fn list_by_patient(&self, patient_id: i32) -> RepositoryResult<Vec<Note>>;
}

pub trait NoteWriter {
    fn create(&self, new_note: &NewNote) -> RepositoryResult<Note>;
    fn update(&self, note: &Note) -> RepositoryResult<Note>;
    fn delete(&self, note_id: &str) -> RepositoryResult<()>;
}
