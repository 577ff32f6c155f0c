//! PostgreSQL adapter for UnitOfWork
//!
//! Each scope wraps one `DatabaseTransaction`. SeaORM rolls the transaction
//! back when it is dropped uncommitted, so an early `?` return in a service
//! discards everything written so far.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use super::{PostgresAccountRepository, PostgresCustomerRepository};
use crate::adapters::{Audited, Auditor};
use crate::domain::ports::{TransactionScope, UnitOfWork};
use crate::error::DomainError;

/// Opens audited PostgreSQL transaction scopes
pub struct PostgresUnitOfWork {
    db: DatabaseConnection,
    auditor: Auditor,
}

impl PostgresUnitOfWork {
    pub fn new(db: DatabaseConnection, auditor: Auditor) -> Self {
        Self { db, auditor }
    }
}

#[async_trait]
impl UnitOfWork for PostgresUnitOfWork {
    type Scope = PostgresScope;

    async fn begin(&self) -> Result<PostgresScope, DomainError> {
        let txn = Arc::new(
            self.db
                .begin()
                .await
                .map_err(|e| DomainError::Database(e.to_string()))?,
        );

        Ok(PostgresScope {
            customers: Audited::new(
                PostgresCustomerRepository::new(txn.clone()),
                self.auditor.clone(),
            ),
            accounts: Audited::new(
                PostgresAccountRepository::new(txn.clone()),
                self.auditor.clone(),
            ),
            txn,
        })
    }
}

/// Customer and account repositories bound to one transaction
pub struct PostgresScope {
    txn: Arc<DatabaseTransaction>,
    customers: Audited<PostgresCustomerRepository<DatabaseTransaction>>,
    accounts: Audited<PostgresAccountRepository<DatabaseTransaction>>,
}

#[async_trait]
impl TransactionScope for PostgresScope {
    type Customers = Audited<PostgresCustomerRepository<DatabaseTransaction>>;
    type Accounts = Audited<PostgresAccountRepository<DatabaseTransaction>>;

    fn customers(&self) -> &Self::Customers {
        &self.customers
    }

    fn accounts(&self) -> &Self::Accounts {
        &self.accounts
    }

    async fn commit(self) -> Result<(), DomainError> {
        let PostgresScope {
            txn,
            customers,
            accounts,
        } = self;
        // The repositories hold the other handles to the transaction
        drop(customers);
        drop(accounts);

        let txn = Arc::try_unwrap(txn).map_err(|_| {
            DomainError::Database("transaction is still in use at commit".to_string())
        })?;
        txn.commit()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))
    }
}
