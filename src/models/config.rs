//! Configuration models loaded from external sources.
//!
//! Every service reads the same layered configuration tree
//! (`config/default.yaml`, an optional per-environment overlay, then
//! `APP_`-prefixed environment variables) and picks its own section.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Top-level configuration tree with one section per service.
pub struct AppConfig {
    pub patient: PatientServiceConfig,
    pub note: NoteServiceConfig,
    pub front: FrontServiceConfig,
    pub gateway: GatewayConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PatientServiceConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Secret shared with the gateway, used to verify bearer tokens.
    pub secret: String,
    /// Page size for the patient listing.
    pub patients_per_page: usize,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NoteServiceConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Secret shared with the gateway, used to verify bearer tokens.
    pub secret: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct FrontServiceConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    pub assets_dir: String,
    /// Base URL of the gateway, through which all API calls are routed.
    pub gateway_url: String,
    pub secret: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct GatewayConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    pub assets_dir: String,
    pub secret: String,
    pub auth_username: String,
    pub auth_password: String,
    pub patient_service_url: String,
    pub note_service_url: String,
    pub front_service_url: String,
}
