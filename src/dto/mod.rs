//! Wire-level payloads shared by the services and their clients.

pub mod api;
pub mod front;
pub mod note;
pub mod page;
pub mod patient;
