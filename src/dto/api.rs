//! Error payload returned by the JSON APIs.

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body attached to every non-2xx API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub status: u16,
    pub error: String,
    pub timestamp: NaiveDateTime,
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn new(status: u16, error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
            timestamp: Utc::now().naive_utc(),
            message: message.into(),
        }
    }
}
