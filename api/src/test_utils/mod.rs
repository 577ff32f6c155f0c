//! Test utilities
//!
//! In-memory repositories, a unit of work over them, and fixtures.
//!
//! The repositories reject duplicate mobile numbers and second accounts just
//! like the unique indexes in the schema, so the conflict paths of the
//! service get exercised without a database.

pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
