use validator::Validate;

use crate::domain::patient::{NewPatient, Patient};
use crate::dto::page::Page;
use crate::dto::patient::PatientPayload;
use crate::repository::{PatientListQuery, PatientReader, PatientWriter};
use crate::services::{ServiceError, ServiceResult};

/// Returns one page of the patient roster.
pub fn list_patients<R>(
    repo: &R,
    page_number: usize,
    per_page: usize,
) -> ServiceResult<Page<Patient>>
where
    R: PatientReader + ?Sized,
{
    let (total, items) = repo
        .list(PatientListQuery::new().paginate(page_number, per_page))
        .map_err(ServiceError::from)?;

    Ok(Page::new(items, page_number, per_page, total))
}

/// Fetches a patient by identifier. A miss is reported as an error rather
/// than an empty result.
pub fn get_patient<R>(repo: &R, patient_id: i32) -> ServiceResult<Patient>
where
    R: PatientReader + ?Sized,
{
    repo.get_by_id(patient_id)
        .map_err(ServiceError::from)?
        .ok_or_else(|| ServiceError::NotFound(format!("Patient {patient_id} not found")))
}

/// Validates and persists a new patient. Payloads that already carry an
/// identifier are refused.
pub fn create_patient<R>(repo: &R, payload: PatientPayload) -> ServiceResult<Patient>
where
    R: PatientWriter + ?Sized,
{
    payload.validate()?;
    if payload.id.is_some() {
        return Err(ServiceError::Conflict(
            "A new patient cannot carry an identifier".to_string(),
        ));
    }

    let new_patient = NewPatient::from(payload);
    repo.create(&new_patient).map_err(ServiceError::from)
}

/// Validates and applies a full update to an existing patient.
pub fn update_patient<R>(repo: &R, payload: PatientPayload) -> ServiceResult<Patient>
where
    R: PatientWriter + ?Sized,
{
    payload.validate()?;
    let id = payload.id.ok_or_else(|| {
        ServiceError::BadRequest("Patient id is required for an update".to_string())
    })?;

    let patient = payload.into_patient(id);
    repo.update(&patient).map_err(ServiceError::from)
}

/// Removes a patient. Unknown identifiers are ignored.
pub fn delete_patient<R>(repo: &R, patient_id: i32) -> ServiceResult<()>
where
    R: PatientWriter + ?Sized,
{
    repo.delete(patient_id).map_err(ServiceError::from)
}
