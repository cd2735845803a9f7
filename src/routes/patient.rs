//! JSON API of the patient service.

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::db::DbPool;
use crate::dto::patient::PatientPayload;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::PatientServiceConfig;
use crate::repository::patient::DieselPatientRepository;
use crate::routes::{PageQueryParams, parse_page_number};
use crate::services::{self, ServiceError};

#[get("/patients")]
pub async fn list_patients(
    params: web::Query<PageQueryParams>,
    _user: AuthenticatedUser,
    pool: web::Data<DbPool>,
    config: web::Data<PatientServiceConfig>,
) -> Result<HttpResponse, ServiceError> {
    let page_number = parse_page_number(params.page_number.as_deref())?;
    let repo = DieselPatientRepository::new(&pool);
    let page =
        services::patient::list_patients(&repo, page_number as usize, config.patients_per_page)?;
    Ok(HttpResponse::Ok().json(page))
}

#[get("/patients/{id}")]
pub async fn get_patient(
    patient_id: web::Path<i32>,
    _user: AuthenticatedUser,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ServiceError> {
    let repo = DieselPatientRepository::new(&pool);
    let patient = services::patient::get_patient(&repo, patient_id.into_inner())?;
    Ok(HttpResponse::Ok().json(patient))
}

#[post("/patients")]
pub async fn create_patient(
    payload: web::Json<PatientPayload>,
    _user: AuthenticatedUser,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ServiceError> {
    let repo = DieselPatientRepository::new(&pool);
    let patient = services::patient::create_patient(&repo, payload.into_inner())?;
    // Consumers expect a plain 200 on creation, not 201.
    Ok(HttpResponse::Ok().json(patient))
}

#[put("/patients")]
pub async fn update_patient(
    payload: web::Json<PatientPayload>,
    _user: AuthenticatedUser,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ServiceError> {
    let repo = DieselPatientRepository::new(&pool);
    let patient = services::patient::update_patient(&repo, payload.into_inner())?;
    Ok(HttpResponse::Ok().json(patient))
}

#[delete("/patients/{id}")]
pub async fn delete_patient(
    patient_id: web::Path<i32>,
    _user: AuthenticatedUser,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ServiceError> {
    let repo = DieselPatientRepository::new(&pool);
    services::patient::delete_patient(&repo, patient_id.into_inner())?;
    Ok(HttpResponse::Ok().finish())
}
