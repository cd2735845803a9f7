//! Form definitions backing the browser-facing routes.
//!
//! Forms are deliberately stringly typed where the browser is sloppy
//! (hidden id fields, datetime-local inputs) and convert into the
//! validated wire payloads from [`crate::dto`].

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

pub mod auth;
pub mod note;
pub mod patient;

/// Deserializes an optional form field, treating a missing or blank value
/// as `None`. HTML forms submit empty hidden fields as empty strings.
pub(crate) fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse::<T>().map(Some).map_err(serde::de::Error::custom),
    }
}
