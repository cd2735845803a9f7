//! Server-rendered pages of the front service.
//!
//! Every handler talks to the patient and note APIs through the
//! [`PatientGateway`] abstraction, so the pages never touch a database
//! directly. Failures render `error.html`: client-side problems as a 400,
//! everything else as a 500.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, ResponseError, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::{Context, Tera};

use crate::forms::note::NoteForm;
use crate::forms::patient::PatientForm;
use crate::models::auth::AuthenticatedUser;
use crate::repository::gateway::PatientGateway;
use crate::routes::{PageQueryParams, base_context, parse_page_number, redirect, render_template};
use crate::services::{self, ServiceError};

fn error_page(tera: &Tera, err: &ServiceError) -> HttpResponse {
    let (status, message) = if err.status_code() == StatusCode::BAD_REQUEST {
        (StatusCode::BAD_REQUEST, "Bad request")
    } else {
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
    };
    if status.is_server_error() {
        log::error!("front page error: {err}");
    }

    let mut context = Context::new();
    context.insert("status", &status.as_u16());
    context.insert("message", message);

    match tera.render("error.html", &context) {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(render_err) => {
            log::error!("Failed to render error.html: {render_err}");
            HttpResponse::build(status).finish()
        }
    }
}

#[get("/front")]
pub async fn front_index() -> impl Responder {
    redirect("/front/home")
}

#[get("/front/home")]
pub async fn home(
    params: web::Query<PageQueryParams>,
    user: Option<AuthenticatedUser>,
    flash_messages: IncomingFlashMessages,
    gateway: web::Data<dyn PatientGateway>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page_number = match parse_page_number(params.page_number.as_deref()) {
        Ok(page_number) => page_number,
        Err(e) => return error_page(&tera, &e),
    };

    match services::front::load_home_page(gateway.get_ref(), page_number).await {
        Ok(page) => {
            let mut context = base_context(&flash_messages, user.as_ref());
            context.insert("patients", &page.patients);
            context.insert("page_interval", &page.page_interval);
            render_template(&tera, "home.html", &context)
        }
        Err(e) => error_page(&tera, &e),
    }
}

#[get("/front/createpatient")]
pub async fn create_patient(
    user: Option<AuthenticatedUser>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, user.as_ref());
    render_template(&tera, "formnewpatient.html", &context)
}

#[get("/front/updatepatient/{id}")]
pub async fn update_patient(
    patient_id: web::Path<i32>,
    user: Option<AuthenticatedUser>,
    flash_messages: IncomingFlashMessages,
    gateway: web::Data<dyn PatientGateway>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match services::front::load_patient_detail(gateway.get_ref(), patient_id.into_inner()).await {
        Ok(detail) => {
            let mut context = base_context(&flash_messages, user.as_ref());
            context.insert("patient", &detail.patient);
            context.insert("notes", &detail.notes);
            render_template(&tera, "formupdatepatient.html", &context)
        }
        Err(e) => error_page(&tera, &e),
    }
}

#[get("/front/deletepatient/{id}")]
pub async fn delete_patient(
    patient_id: web::Path<i32>,
    gateway: web::Data<dyn PatientGateway>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let patient_id = patient_id.into_inner();
    match services::front::delete_patient(gateway.get_ref(), patient_id).await {
        Ok(()) => {
            log::info!("patient {patient_id} deleted");
            redirect("/front/home")
        }
        Err(e) => error_page(&tera, &e),
    }
}

#[post("/front/savepatient")]
pub async fn save_patient(
    web::Form(form): web::Form<PatientForm>,
    gateway: web::Data<dyn PatientGateway>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match services::front::save_patient(gateway.get_ref(), form).await {
        Ok(patient) => {
            log::info!("patient {} persisted", patient.id);
            FlashMessage::success("Patient saved.").send();
            redirect("/front/home")
        }
        Err(e) => error_page(&tera, &e),
    }
}

#[get("/front/createnote/{idPatient}")]
pub async fn create_note(
    patient_id: web::Path<i32>,
    user: Option<AuthenticatedUser>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, user.as_ref());
    context.insert("patient_id", &patient_id.into_inner());
    render_template(&tera, "formnewnote.html", &context)
}

#[post("/front/savenote")]
pub async fn save_note(
    web::Form(form): web::Form<NoteForm>,
    gateway: web::Data<dyn PatientGateway>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let patient_id = form.patient_id;
    match services::front::save_note(gateway.get_ref(), form).await {
        Ok(note) => {
            log::info!("note {} persisted", note.id);
            redirect(&format!("/front/updatepatient/{patient_id}"))
        }
        Err(e) => error_page(&tera, &e),
    }
}
