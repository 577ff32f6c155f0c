//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod accounts_service;

pub use accounts_service::AccountsService;
