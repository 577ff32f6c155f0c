//! PostgreSQL adapter for CustomerRepository

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    Set,
};

use super::{map_write_err, to_db_time};
use crate::domain::entities::{AuditInfo, Customer, CustomerId, NewCustomer};
use crate::domain::ports::CustomerRepository;
use crate::entity::customers;
use crate::error::DomainError;

/// PostgreSQL implementation of CustomerRepository
///
/// Runs on whatever connection it is given: the pool, or a
/// `DatabaseTransaction` shared with the other repositories of a scope.
pub struct PostgresCustomerRepository<C = DatabaseConnection> {
    db: Arc<C>,
}

impl<C: ConnectionTrait> PostgresCustomerRepository<C> {
    pub fn new(db: Arc<C>) -> Self {
        Self { db }
    }
}

fn mobile_number_taken(mobile_number: &str) -> DomainError {
    DomainError::AlreadyExists(format!(
        "Customer already registered with given mobileNumber {}",
        mobile_number
    ))
}

#[async_trait]
impl<C> CustomerRepository for PostgresCustomerRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_by_mobile_number(
        &self,
        mobile_number: &str,
    ) -> Result<Option<Customer>, DomainError> {
        let result = customers::Entity::find()
            .filter(customers::Column::MobileNumber.eq(mobile_number))
            .one(&*self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, DomainError> {
        let result = customers::Entity::find_by_id(id.0)
            .one(&*self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn create(&self, customer: &NewCustomer) -> Result<Customer, DomainError> {
        let model = customers::ActiveModel {
            name: Set(customer.name.clone()),
            email: Set(customer.email.clone()),
            mobile_number: Set(customer.mobile_number.clone()),
            created_at: Set(customer.audit.created_at.map(to_db_time)),
            created_by: Set(customer.audit.created_by.clone()),
            ..Default::default()
        };

        let result = model.insert(&*self.db).await.map_err(|e| {
            map_write_err(e, || mobile_number_taken(&customer.mobile_number), || {
                DomainError::Database("customer insert matched no row".to_string())
            })
        })?;

        Ok(result.into())
    }

    async fn save(&self, customer: &Customer) -> Result<Customer, DomainError> {
        let result = customers::ActiveModel {
            customer_id: Set(customer.id.0),
            name: Set(customer.name.clone()),
            email: Set(customer.email.clone()),
            mobile_number: Set(customer.mobile_number.clone()),
            updated_at: Set(customer.audit.updated_at.map(to_db_time)),
            updated_by: Set(customer.audit.updated_by.clone()),
            ..Default::default()
        }
        .update(&*self.db)
        .await
        .map_err(|e| {
            map_write_err(e, || mobile_number_taken(&customer.mobile_number), || {
                DomainError::not_found("Customer", "CustomerID", customer.id)
            })
        })?;

        Ok(result.into())
    }

    async fn delete_by_id(&self, id: &CustomerId) -> Result<(), DomainError> {
        customers::Entity::delete_by_id(id.0)
            .exec(&*self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<customers::Model> for Customer {
    fn from(model: customers::Model) -> Self {
        Customer {
            id: CustomerId(model.customer_id),
            name: model.name,
            email: model.email,
            mobile_number: model.mobile_number,
            audit: AuditInfo {
                created_at: model.created_at.map(|dt| dt.with_timezone(&Utc)),
                created_by: model.created_by,
                updated_at: model.updated_at.map(|dt| dt.with_timezone(&Utc)),
                updated_by: model.updated_by,
            },
        }
    }
}
