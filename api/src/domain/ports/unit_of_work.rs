//! Unit of work port
//!
//! A `TransactionScope` hands out repositories bound to one store
//! transaction. Writes made through them become visible together on
//! `commit`; dropping the scope without committing discards them.

use async_trait::async_trait;

use super::repositories::{AccountRepository, CustomerRepository};
use crate::error::DomainError;

/// Opens transaction scopes
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    type Scope: TransactionScope;

    /// Start a new transaction
    async fn begin(&self) -> Result<Self::Scope, DomainError>;
}

/// Repositories sharing one open transaction
#[async_trait]
pub trait TransactionScope: Send + Sync + Sized {
    type Customers: CustomerRepository;
    type Accounts: AccountRepository;

    fn customers(&self) -> &Self::Customers;

    fn accounts(&self) -> &Self::Accounts;

    /// Make every write in this scope durable
    async fn commit(self) -> Result<(), DomainError>;
}
