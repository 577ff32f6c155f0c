//! PostgreSQL adapter for AccountRepository

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    Set,
};

use super::{map_write_err, to_db_time};
use crate::domain::entities::{Account, AccountNumber, AuditInfo, CustomerId, NewAccount};
use crate::domain::ports::AccountRepository;
use crate::entity::accounts;
use crate::error::DomainError;

/// PostgreSQL implementation of AccountRepository
///
/// Runs on whatever connection it is given: the pool, or a
/// `DatabaseTransaction` shared with the other repositories of a scope.
pub struct PostgresAccountRepository<C = DatabaseConnection> {
    db: Arc<C>,
}

impl<C: ConnectionTrait> PostgresAccountRepository<C> {
    pub fn new(db: Arc<C>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<C> AccountRepository for PostgresAccountRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_by_customer_id(
        &self,
        customer_id: &CustomerId,
    ) -> Result<Option<Account>, DomainError> {
        let result = accounts::Entity::find()
            .filter(accounts::Column::CustomerId.eq(customer_id.0))
            .one(&*self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_id(
        &self,
        account_number: &AccountNumber,
    ) -> Result<Option<Account>, DomainError> {
        let result = accounts::Entity::find_by_id(account_number.0)
            .one(&*self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn create(&self, account: &NewAccount) -> Result<Account, DomainError> {
        let model = accounts::ActiveModel {
            account_number: Set(account.account_number.0),
            customer_id: Set(account.customer_id.0),
            account_type: Set(account.account_type.clone()),
            branch_address: Set(account.branch_address.clone()),
            created_at: Set(account.audit.created_at.map(to_db_time)),
            created_by: Set(account.audit.created_by.clone()),
            ..Default::default()
        };

        let result = model.insert(&*self.db).await.map_err(|e| {
            map_write_err(
                e,
                || {
                    DomainError::AlreadyExists(format!(
                        "Account {} or an account for customer {} already exists",
                        account.account_number, account.customer_id
                    ))
                },
                || DomainError::Database("account insert matched no row".to_string()),
            )
        })?;

        Ok(result.into())
    }

    async fn save(&self, account: &Account) -> Result<Account, DomainError> {
        let result = accounts::ActiveModel {
            account_number: Set(account.account_number.0),
            customer_id: Set(account.customer_id.0),
            account_type: Set(account.account_type.clone()),
            branch_address: Set(account.branch_address.clone()),
            updated_at: Set(account.audit.updated_at.map(to_db_time)),
            updated_by: Set(account.audit.updated_by.clone()),
            ..Default::default()
        }
        .update(&*self.db)
        .await
        .map_err(|e| {
            map_write_err(
                e,
                || {
                    DomainError::AlreadyExists(format!(
                        "Customer {} already owns an account",
                        account.customer_id
                    ))
                },
                || DomainError::not_found("Account", "AccountNumber", account.account_number),
            )
        })?;

        Ok(result.into())
    }

    async fn delete_by_customer_id(&self, customer_id: &CustomerId) -> Result<(), DomainError> {
        accounts::Entity::delete_many()
            .filter(accounts::Column::CustomerId.eq(customer_id.0))
            .exec(&*self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<accounts::Model> for Account {
    fn from(model: accounts::Model) -> Self {
        Account {
            account_number: AccountNumber(model.account_number),
            customer_id: CustomerId(model.customer_id),
            account_type: model.account_type,
            branch_address: model.branch_address,
            audit: AuditInfo {
                created_at: model.created_at.map(|dt| dt.with_timezone(&Utc)),
                created_by: model.created_by,
                updated_at: model.updated_at.map(|dt| dt.with_timezone(&Utc)),
                updated_by: model.updated_by,
            },
        }
    }
}
