//! SeaORM entities
//!
//! Row models for the `customers` and `accounts` tables. The schema lives in
//! `migrations/`; these definitions must stay in sync with it.

pub mod accounts;
pub mod customers;
