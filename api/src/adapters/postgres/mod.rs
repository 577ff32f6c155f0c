//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod account_repo;
pub mod customer_repo;
pub mod unit_of_work;


pub use account_repo::PostgresAccountRepository;
pub use customer_repo::PostgresCustomerRepository;
pub use unit_of_work::PostgresUnitOfWork;

use chrono::{DateTime, Utc};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{DbErr, SqlErr};

use crate::error::DomainError;

fn to_db_time(dt: DateTime<Utc>) -> DateTimeWithTimeZone {
    dt.fixed_offset()
}

/// Translate a failed insert/update into a domain error
///
/// Unique index violations become `conflict()`, an update that matched no
/// row becomes `missing()`, anything else is a database failure.
fn map_write_err(
    err: DbErr,
    conflict: impl FnOnce() -> DomainError,
    missing: impl FnOnce() -> DomainError,
) -> DomainError {
    if matches!(err, DbErr::RecordNotUpdated) {
        return missing();
    }
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => conflict(),
        _ => DomainError::Database(err.to_string()),
    }
}
