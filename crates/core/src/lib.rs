//! Domain logic shared by the Paestro Google Workspace service.
//!
//! Everything here is pure (no I/O): the error taxonomy, shared type
//! aliases, coach-identifier validation, Google OAuth authorization-URL
//! construction, and People API response parsing.

pub mod coach;
pub mod contacts;
pub mod error;
pub mod oauth;
pub mod roles;
pub mod types;
