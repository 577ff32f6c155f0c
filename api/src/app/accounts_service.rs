//! Accounts service
//!
//! Create, fetch, update and delete a customer together with their account.
//!
//! Each use case runs inside one transaction scope. The customer and account
//! writes of an operation commit together; any error returned before the
//! commit drops the scope and the store discards the partial work.

use std::sync::Arc;

use crate::domain::entities::{CustomerDetails, NewAccount, NewCustomer};
use crate::domain::ports::{AccountRepository, CustomerRepository, TransactionScope, UnitOfWork};
use crate::error::{AppError, DomainError};

/// Service orchestrating the customer/account lifecycle
pub struct AccountsService<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> AccountsService<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// Register a customer and open their savings account
    ///
    /// The existence check is an early exit only. Two concurrent requests can
    /// both pass it; the unique index on the mobile number then rejects the
    /// second insert with the same `AlreadyExists` error.
    pub async fn create_account(&self, details: &CustomerDetails) -> Result<(), AppError> {
        let scope = self.uow.begin().await?;

        if scope
            .customers()
            .find_by_mobile_number(&details.mobile_number)
            .await?
            .is_some()
        {
            return Err(AppError::Domain(DomainError::AlreadyExists(format!(
                "Customer already registered with given mobileNumber {}",
                details.mobile_number
            ))));
        }

        let customer = scope
            .customers()
            .create(&NewCustomer::new(
                details.name.clone(),
                details.email.clone(),
                details.mobile_number.clone(),
            ))
            .await?;

        // The customer is new, so a conflict here is an account number
        // collision, not something the client can fix
        let account = scope
            .accounts()
            .create(&NewAccount::savings(customer.id))
            .await
            .map_err(|e| match e {
                DomainError::AlreadyExists(msg) => DomainError::Database(msg),
                other => other,
            })?;

        scope.commit().await?;

        tracing::info!(
            customer_id = %customer.id,
            account_number = %account.account_number,
            "Opened account"
        );

        Ok(())
    }

    /// Look up a customer and their account by mobile number
    pub async fn fetch_account(&self, mobile_number: &str) -> Result<CustomerDetails, AppError> {
        // Read-only; the scope is dropped without committing
        let scope = self.uow.begin().await?;

        let customer = scope
            .customers()
            .find_by_mobile_number(mobile_number)
            .await?
            .ok_or_else(|| DomainError::not_found("Customer", "mobileNumber", mobile_number))?;

        // Every customer owns an account; a miss here means the pair is broken
        let account = scope
            .accounts()
            .find_by_customer_id(&customer.id)
            .await?
            .ok_or_else(|| DomainError::not_found("Account", "customerId", customer.id))?;

        Ok(CustomerDetails::new(customer, account))
    }

    /// Update account type/branch address and customer name/email
    ///
    /// The mobile number and both ids are never changed. Returns `false`
    /// without touching the store when no account details were supplied.
    pub async fn update_account(&self, details: &CustomerDetails) -> Result<bool, AppError> {
        let Some(account_details) = &details.account else {
            return Ok(false);
        };

        let scope = self.uow.begin().await?;

        let mut account = scope
            .accounts()
            .find_by_id(&account_details.account_number)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(
                    "Account",
                    "AccountNumber",
                    account_details.account_number,
                )
            })?;

        let mut customer = scope
            .customers()
            .find_by_id(&account.customer_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Customer", "CustomerID", account.customer_id))?;

        account.account_type = account_details.account_type.clone();
        account.branch_address = account_details.branch_address.clone();
        scope.accounts().save(&account).await?;

        customer.name = details.name.clone();
        customer.email = details.email.clone();
        scope.customers().save(&customer).await?;

        scope.commit().await?;

        tracing::info!(
            customer_id = %customer.id,
            account_number = %account.account_number,
            "Updated account"
        );

        Ok(true)
    }

    /// Delete a customer and their account, account first
    ///
    /// Always `true` on success; a `false` outcome is reserved for stores
    /// that can report a delete which silently did not apply.
    pub async fn delete_account(&self, mobile_number: &str) -> Result<bool, AppError> {
        let scope = self.uow.begin().await?;

        let customer = scope
            .customers()
            .find_by_mobile_number(mobile_number)
            .await?
            .ok_or_else(|| DomainError::not_found("Customer", "mobileNumber", mobile_number))?;

        scope.accounts().delete_by_customer_id(&customer.id).await?;
        scope.customers().delete_by_id(&customer.id).await?;

        scope.commit().await?;

        tracing::info!(customer_id = %customer.id, "Deleted customer and account");

        Ok(true)
    }
}
