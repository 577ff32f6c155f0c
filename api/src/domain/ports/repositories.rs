//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).
//!
//! Lookups never fail on absence: a missing record is `Ok(None)`.
//! Errors are reserved for storage failures and constraint violations.

use async_trait::async_trait;

use crate::domain::entities::{
    Account, AccountNumber, Customer, CustomerId, NewAccount, NewCustomer,
};
use crate::error::DomainError;

/// Repository for Customer entities
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Find a customer by mobile number
    async fn find_by_mobile_number(
        &self,
        mobile_number: &str,
    ) -> Result<Option<Customer>, DomainError>;

    /// Find a customer by ID
    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, DomainError>;

    /// Insert a new customer. The store assigns the ID.
    ///
    /// Fails with `AlreadyExists` if the mobile number is taken.
    async fn create(&self, customer: &NewCustomer) -> Result<Customer, DomainError>;

    /// Persist changes to an existing customer
    async fn save(&self, customer: &Customer) -> Result<Customer, DomainError>;

    /// Delete a customer
    async fn delete_by_id(&self, id: &CustomerId) -> Result<(), DomainError>;
}

/// Repository for Account entities
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find the account owned by a customer
    async fn find_by_customer_id(
        &self,
        customer_id: &CustomerId,
    ) -> Result<Option<Account>, DomainError>;

    /// Find an account by account number
    async fn find_by_id(
        &self,
        account_number: &AccountNumber,
    ) -> Result<Option<Account>, DomainError>;

    /// Open a new account
    ///
    /// Fails with `AlreadyExists` if the account number is taken or the
    /// customer already owns an account.
    async fn create(&self, account: &NewAccount) -> Result<Account, DomainError>;

    /// Persist changes to an existing account
    async fn save(&self, account: &Account) -> Result<Account, DomainError>;

    /// Delete the account owned by a customer
    async fn delete_by_customer_id(&self, customer_id: &CustomerId) -> Result<(), DomainError>;
}
