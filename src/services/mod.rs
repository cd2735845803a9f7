//! Service layer shared by the HTTP surfaces.
//!
//! Operations are free functions generic over the repository traits so the
//! route tests can substitute mocks. [`ServiceError`] is the single error
//! type every surface speaks; its [`ResponseError`] impl renders the JSON
//! error body used by the patient and note APIs.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;
use validator::ValidationErrors;

use crate::dto::api::ApiError;
use crate::repository::errors::RepositoryError;
use crate::repository::gateway::GatewayError;

pub mod auth;
pub mod front;
pub mod note;
pub mod patient;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound("Resource not found".to_string()),
            RepositoryError::ConstraintViolation(message) => ServiceError::Conflict(message),
            other => ServiceError::Internal(other.to_string()),
        }
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(err: ValidationErrors) -> Self {
        ServiceError::Validation(err.to_string())
    }
}

impl From<GatewayError> for ServiceError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Status(status) if (400..500).contains(&status) => {
                ServiceError::BadRequest(format!("Upstream rejected the request ({status})"))
            }
            other => ServiceError::Internal(other.to_string()),
        }
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Unauthorized => StatusCode::UNAUTHORIZED,
            // Lookup misses surface as 400, not 404. The consumers treat
            // an unknown identifier as a malformed request.
            ServiceError::NotFound(_)
            | ServiceError::BadRequest(_)
            | ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Conflict(_) => StatusCode::CONFLICT,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("service error: {self}");
        }
        let body = ApiError::new(
            status.as_u16(),
            status.canonical_reason().unwrap_or("Error"),
            self.to_string(),
        );
        HttpResponse::build(status).json(body)
    }
}
