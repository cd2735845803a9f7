//! HTTP access to the patient and note APIs, routed through the gateway.
//!
//! The front service never talks to the backing services directly. Every
//! call goes through the gateway with a short-lived service token attached.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::note::Note;
use crate::domain::patient::Patient;
use crate::dto::note::NotePayload;
use crate::dto::page::Page;
use crate::dto::patient::PatientPayload;
use crate::models::auth::AuthenticatedUser;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("upstream returned status {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("token error: {0}")]
    Token(String),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GatewayError::Decode(err.to_string())
        } else {
            GatewayError::Transport(err.to_string())
        }
    }
}

#[async_trait]
pub trait PatientGateway: Send + Sync {
    async fn get_patients(&self, page_number: i32) -> GatewayResult<Page<Patient>>;
    async fn get_patient(&self, id: i32) -> GatewayResult<Patient>;
    async fn create_patient(&self, payload: &PatientPayload) -> GatewayResult<Patient>;
    async fn update_patient(&self, payload: &PatientPayload) -> GatewayResult<Patient>;
    async fn delete_patient(&self, id: i32) -> GatewayResult<()>;
    async fn get_notes_by_patient_id(&self, patient_id: i32) -> GatewayResult<Vec<Note>>;
    async fn create_note(&self, payload: &NotePayload) -> GatewayResult<Note>;
}

/// Reqwest implementation of [`PatientGateway`] that signs every request
/// with a service token.
pub struct HttpPatientGateway {
    base_url: String,
    secret: String,
    client: reqwest::Client,
}

impl HttpPatientGateway {
    const SERVICE_PRINCIPAL: &'static str = "front-service";

    #[must_use]
    pub fn new(base_url: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            secret: secret.into(),
            client: reqwest::Client::new(),
        }
    }

    fn token(&self) -> GatewayResult<String> {
        AuthenticatedUser::new(Self::SERVICE_PRINCIPAL)
            .to_jwt(&self.secret)
            .map_err(|e| GatewayError::Token(e.to_string()))
    }

    fn check(response: reqwest::Response) -> GatewayResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(GatewayError::Status(status.as_u16()))
        }
    }
}

#[async_trait]
impl PatientGateway for HttpPatientGateway {
    async fn get_patients(&self, page_number: i32) -> GatewayResult<Page<Patient>> {
        let response = self
            .client
            .get(format!("{}/patients", self.base_url))
            .query(&[("pageNumber", page_number)])
            .bearer_auth(self.token()?)
            .send()
            .await?;

        Ok(Self::check(response)?.json().await?)
    }

    async fn get_patient(&self, id: i32) -> GatewayResult<Patient> {
        let response = self
            .client
            .get(format!("{}/patients/{id}", self.base_url))
            .bearer_auth(self.token()?)
            .send()
            .await?;

        Ok(Self::check(response)?.json().await?)
    }

    async fn create_patient(&self, payload: &PatientPayload) -> GatewayResult<Patient> {
        let response = self
            .client
            .post(format!("{}/patients", self.base_url))
            .bearer_auth(self.token()?)
            .json(payload)
            .send()
            .await?;

        Ok(Self::check(response)?.json().await?)
    }

    async fn update_patient(&self, payload: &PatientPayload) -> GatewayResult<Patient> {
        let response = self
            .client
            .put(format!("{}/patients", self.base_url))
            .bearer_auth(self.token()?)
            .json(payload)
            .send()
            .await?;

        Ok(Self::check(response)?.json().await?)
    }

    async fn delete_patient(&self, id: i32) -> GatewayResult<()> {
        let response = self
            .client
            .delete(format!("{}/patients/{id}", self.base_url))
            .bearer_auth(self.token()?)
            .send()
            .await?;

        Self::check(response)?;
        Ok(())
    }

    async fn get_notes_by_patient_id(&self, patient_id: i32) -> GatewayResult<Vec<Note>> {
        let response = self
            .client
            .get(format!("{}/notes/patient/{patient_id}", self.base_url))
            .bearer_auth(self.token()?)
            .send()
            .await?;

        Ok(Self::check(response)?.json().await?)
    }

    async fn create_note(&self, payload: &NotePayload) -> GatewayResult<Note> {
        let response = self
            .client
            .post(format!("{}/notes", self.base_url))
            .bearer_auth(self.token()?)
            .json(payload)
            .send()
            .await?;

        Ok(Self::check(response)?.json().await?)
    }
}
