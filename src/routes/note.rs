//! JSON API of the note service.

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::db::DbPool;
use crate::dto::note::NotePayload;
use crate::models::auth::AuthenticatedUser;
use crate::repository::note::DieselNoteRepository;
use crate::services::{self, ServiceError};

#[get("/notes/{id}")]
pub async fn get_note(
    note_id: web::Path<String>,
    _user: AuthenticatedUser,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ServiceError> {
    let repo = DieselNoteRepository::new(&pool);
    let note = services::note::get_note(&repo, &note_id.into_inner())?;
    Ok(HttpResponse::Ok().json(note))
}

#[get("/notes/patient/{patient_id}")]
pub async fn list_patient_notes(
    patient_id: web::Path<i32>,
    _user: AuthenticatedUser,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ServiceError> {
    let repo = DieselNoteRepository::new(&pool);
    let notes = services::note::list_patient_notes(&repo, patient_id.into_inner())?;
    Ok(HttpResponse::Ok().json(notes))
}

#[post("/notes")]
pub async fn create_note(
    payload: web::Json<NotePayload>,
    _user: AuthenticatedUser,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ServiceError> {
    let repo = DieselNoteRepository::new(&pool);
    let note = services::note::create_note(&repo, payload.into_inner())?;
    Ok(HttpResponse::Created().json(note))
}

#[put("/notes")]
pub async fn update_note(
    payload: web::Json<NotePayload>,
    _user: AuthenticatedUser,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ServiceError> {
    let repo = DieselNoteRepository::new(&pool);
    let note = services::note::update_note(&repo, payload.into_inner())?;
    Ok(HttpResponse::Ok().json(note))
}

#[delete("/notes/{id}")]
pub async fn delete_note(
    note_id: web::Path<String>,
    _user: AuthenticatedUser,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ServiceError> {
    let repo = DieselNoteRepository::new(&pool);
    services::note::delete_note(&repo, &note_id.into_inner())?;
    Ok(HttpResponse::Ok().finish())
}
