//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod audited;
pub mod clock;
pub mod postgres;

pub use audited::{Audited, Auditor};
pub use clock::SystemClock;
pub use postgres::PostgresUnitOfWork;
