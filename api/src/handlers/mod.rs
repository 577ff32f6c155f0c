//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod accounts;
pub mod validation;

pub use accounts::{create_account, delete_account, fetch_account, update_account};
