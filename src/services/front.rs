use chrono::Utc;
use validator::Validate;

use crate::domain::note::Note;
use crate::domain::patient::Patient;
use crate::dto::front::{HomePage, PatientDetailPage};
use crate::dto::note::NotePayload;
use crate::dto::patient::PatientPayload;
use crate::forms::note::NoteForm;
use crate::forms::patient::PatientForm;
use crate::pagination::page_interval;
use crate::repository::gateway::PatientGateway;
use crate::services::{ServiceError, ServiceResult};

/// Loads one page of the roster together with its pager window.
pub async fn load_home_page<G>(gateway: &G, page_number: i32) -> ServiceResult<HomePage>
where
    G: PatientGateway + ?Sized,
{
    let patients = gateway
        .get_patients(page_number)
        .await
        .map_err(ServiceError::from)?;

    log::info!(
        "patient page number {} of {}",
        patients.number + 1,
        patients.total_pages
    );

    let last_page = patients.total_pages as i32 - 1;
    let page_interval = page_interval(page_number, last_page);

    Ok(HomePage {
        patients,
        page_interval,
    })
}

/// Loads a patient and their notes for the detail page.
pub async fn load_patient_detail<G>(gateway: &G, patient_id: i32) -> ServiceResult<PatientDetailPage>
where
    G: PatientGateway + ?Sized,
{
    let patient = gateway
        .get_patient(patient_id)
        .await
        .map_err(ServiceError::from)?;
    let notes = gateway
        .get_notes_by_patient_id(patient_id)
        .await
        .map_err(ServiceError::from)?;

    Ok(PatientDetailPage { patient, notes })
}

/// Validates the submitted form and creates or updates the patient,
/// depending on whether the form carries an identifier.
pub async fn save_patient<G>(gateway: &G, form: PatientForm) -> ServiceResult<Patient>
where
    G: PatientGateway + ?Sized,
{
    let payload = PatientPayload::try_from(form)
        .map_err(|e| ServiceError::Validation(format!("Invalid birth date: {e}")))?;
    payload.validate()?;

    match payload.id {
        Some(_) => gateway
            .update_patient(&payload)
            .await
            .map_err(ServiceError::from),
        None => gateway
            .create_patient(&payload)
            .await
            .map_err(ServiceError::from),
    }
}

/// Removes a patient through the gateway.
pub async fn delete_patient<G>(gateway: &G, patient_id: i32) -> ServiceResult<()>
where
    G: PatientGateway + ?Sized,
{
    gateway
        .delete_patient(patient_id)
        .await
        .map_err(ServiceError::from)
}

/// Validates the note form and submits it, stamping the current time when
/// the observation timestamp was left blank.
pub async fn save_note<G>(gateway: &G, form: NoteForm) -> ServiceResult<Note>
where
    G: PatientGateway + ?Sized,
{
    let mut payload = NotePayload::try_from(form)
        .map_err(|e| ServiceError::Validation(format!("Invalid date: {e}")))?;
    if payload.date_time.is_none() {
        payload.date_time = Some(Utc::now().naive_utc());
    }
    payload.validate()?;

    gateway
        .create_note(&payload)
        .await
        .map_err(ServiceError::from)
}
