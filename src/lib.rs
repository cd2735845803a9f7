use std::sync::Arc;

use actix_cors::Cors;
use actix_files::Files;
use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::error::JsonPayloadError;
use actix_web::middleware::{Compress, Logger, NormalizePath};
use actix_web::{App, HttpRequest, HttpServer, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use tera::Tera;

use crate::db::establish_connection_pool;
use crate::middleware::RedirectUnauthorized;
use crate::models::auth::AuthSecret;
use crate::models::config::{
    FrontServiceConfig, GatewayConfig, NoteServiceConfig, PatientServiceConfig,
};
use crate::repository::gateway::{HttpPatientGateway, PatientGateway};
use crate::services::ServiceError;

pub mod db;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod middleware;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Renders malformed JSON bodies as the same error shape the handlers use.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ServiceError::BadRequest(format!("Malformed JSON body: {err}")).into()
}

/// Builds and runs the patient service using the provided configuration.
pub async fn run_patient_service(config: PatientServiceConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let bind_address = (config.address.clone(), config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(Compress::default())
            .wrap(Logger::default())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .service(routes::patient::list_patients)
            .service(routes::patient::get_patient)
            .service(routes::patient::create_patient)
            .service(routes::patient::update_patient)
            .service(routes::patient::delete_patient)
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(AuthSecret(config.secret.clone())))
            .app_data(web::Data::new(config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}

/// Builds and runs the note service using the provided configuration.
pub async fn run_note_service(config: NoteServiceConfig) -> std::io::Result<()> {
    let pool = establish_connection_pool(&config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let bind_address = (config.address.clone(), config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(Compress::default())
            .wrap(Logger::default())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .service(routes::note::get_note)
            .service(routes::note::list_patient_notes)
            .service(routes::note::create_note)
            .service(routes::note::update_note)
            .service(routes::note::delete_note)
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(AuthSecret(config.secret.clone())))
    })
    .bind(bind_address)?
    .run()
    .await
}

/// Builds and runs the front service using the provided configuration.
pub async fn run_front_service(config: FrontServiceConfig) -> std::io::Result<()> {
    let secret_key = Key::from(config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    // All API traffic goes back out through the gateway.
    let gateway: Arc<dyn PatientGateway> = Arc::new(HttpPatientGateway::new(
        config.gateway_url.clone(),
        config.secret.clone(),
    ));

    let bind_address = (config.address.clone(), config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(NormalizePath::trim())
            .wrap(Compress::default())
            .wrap(Logger::default())
            .service(Files::new("/assets", config.assets_dir.clone()))
            .service(routes::front::front_index)
            .service(routes::front::home)
            .service(routes::front::create_patient)
            .service(routes::front::update_patient)
            .service(routes::front::save_patient)
            .service(routes::front::delete_patient)
            .service(routes::front::create_note)
            .service(routes::front::save_note)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::from(gateway.clone()))
            .app_data(web::Data::new(AuthSecret(config.secret.clone())))
    })
    .bind(bind_address)?
    .run()
    .await
}

/// Builds and runs the gateway using the provided configuration.
pub async fn run_gateway(config: GatewayConfig) -> std::io::Result<()> {
    // Keys and stores for identity, sessions, and flash messages.
    let secret_key = Key::from(config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    // Redirects issued by the services must reach the browser untouched.
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .map_err(|e| std::io::Error::other(format!("Failed to build the HTTP client: {e}")))?;

    let bind_address = (config.address.clone(), config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .build(),
            )
            .wrap(Compress::default())
            .wrap(Logger::default())
            .service(Files::new("/assets", config.assets_dir.clone()))
            .service(routes::auth::index)
            .service(routes::auth::login_page)
            .service(routes::auth::login)
            .service(routes::auth::logout)
            .service(
                web::scope("/front")
                    .wrap(RedirectUnauthorized)
                    .default_service(web::to(routes::proxy::forward)),
            )
            .service(web::scope("/patients").default_service(web::to(routes::proxy::forward)))
            .service(web::scope("/notes").default_service(web::to(routes::proxy::forward)))
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(client.clone()))
            .app_data(web::Data::new(config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
