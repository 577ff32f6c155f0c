//! Domain layer
//!
//! Customers, accounts and the ports the lifecycle service depends on.
//! - `entities`: Domain models and their invariants
//! - `ports`: Trait definitions for persistence, transactions and time

pub mod entities;
pub mod ports;
