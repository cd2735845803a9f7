//! Database and wire-level models shared across the services.

pub mod auth;
pub mod config;
pub mod note;
pub mod patient;
