//! HTTP route handlers, one module per surface.
//!
//! `patient` and `note` expose the JSON APIs of their services, `front`
//! renders the server-side pages, and `auth` plus `proxy` together form
//! the gateway. Shared helpers for redirects, template rendering and
//! page-number parsing live here.

use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use serde::Deserialize;
use tera::{Context, Tera};

use crate::models::auth::AuthenticatedUser;
use crate::services::ServiceError;

pub mod auth;
pub mod front;
pub mod note;
pub mod patient;
pub mod proxy;

/// Builds a `303 See Other` redirect to the given location.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Maps a flash message level to the Bootstrap alert class used by the
/// templates.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Template context shared by every rendered page: pending flash messages
/// and the authenticated principal, when one is known.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    current_user: Option<&AuthenticatedUser>,
) -> Context {
    let alerts: Vec<(&str, &str)> = flash_messages
        .iter()
        .map(|m| (m.content(), alert_level_to_str(&m.level())))
        .collect();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    if let Some(user) = current_user {
        context.insert("current_user", &user.sub);
    }
    context
}

/// Renders a template, falling back to a bare 500 when rendering fails.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render {template}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Query parameters accepted by the paginated patient listings.
#[derive(Debug, Deserialize)]
pub struct PageQueryParams {
    #[serde(rename = "pageNumber")]
    pub page_number: Option<String>,
}

/// Parses a `pageNumber` query value, defaulting to the first page when the
/// parameter is absent or blank.
pub(crate) fn parse_page_number(raw: Option<&str>) -> Result<i32, ServiceError> {
    let Some(raw) = raw else {
        return Ok(0);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    let page_number = raw
        .parse::<i32>()
        .map_err(|_| ServiceError::BadRequest(format!("Invalid page number: {raw}")))?;
    if page_number < 0 {
        return Err(ServiceError::BadRequest(
            "Page index must not be negative".to_string(),
        ));
    }
    Ok(page_number)
}
