//! Audit-stamping repository wrapper
//!
//! `Audited<R>` sits in front of any repository and fills in the audit
//! fields before every write, using the injected actor and clock. Reads pass
//! straight through.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::{
    Account, AccountNumber, AuditInfo, Customer, CustomerId, NewAccount, NewCustomer,
};
use crate::domain::ports::{AccountRepository, Clock, CustomerRepository};
use crate::error::DomainError;

/// Who is writing, and how to tell the time
#[derive(Clone)]
pub struct Auditor {
    actor: String,
    clock: Arc<dyn Clock>,
}

impl Auditor {
    pub fn new(actor: impl Into<String>, clock: Arc<dyn Clock>) -> Self {
        Self {
            actor: actor.into(),
            clock,
        }
    }

    fn created(&self, audit: &mut AuditInfo) {
        audit.stamp_created(&self.actor, self.clock.now());
    }

    fn updated(&self, audit: &mut AuditInfo) {
        audit.stamp_updated(&self.actor, self.clock.now());
    }
}

/// Repository wrapper that stamps audit metadata on create and save
pub struct Audited<R> {
    inner: R,
    auditor: Auditor,
}

impl<R> Audited<R> {
    pub fn new(inner: R, auditor: Auditor) -> Self {
        Self { inner, auditor }
    }

    #[cfg(test)]
    pub fn inner(&self) -> &R {
        &self.inner
    }
}

#[async_trait]
impl<R: CustomerRepository> CustomerRepository for Audited<R> {
    async fn find_by_mobile_number(
        &self,
        mobile_number: &str,
    ) -> Result<Option<Customer>, DomainError> {
        self.inner.find_by_mobile_number(mobile_number).await
    }

    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, DomainError> {
        self.inner.find_by_id(id).await
    }

    async fn create(&self, customer: &NewCustomer) -> Result<Customer, DomainError> {
        let mut stamped = customer.clone();
        self.auditor.created(&mut stamped.audit);
        self.inner.create(&stamped).await
    }

    async fn save(&self, customer: &Customer) -> Result<Customer, DomainError> {
        let mut stamped = customer.clone();
        self.auditor.updated(&mut stamped.audit);
        self.inner.save(&stamped).await
    }

    async fn delete_by_id(&self, id: &CustomerId) -> Result<(), DomainError> {
        self.inner.delete_by_id(id).await
    }
}

#[async_trait]
impl<R: AccountRepository> AccountRepository for Audited<R> {
    async fn find_by_customer_id(
        &self,
        customer_id: &CustomerId,
    ) -> Result<Option<Account>, DomainError> {
        self.inner.find_by_customer_id(customer_id).await
    }

    async fn find_by_id(
        &self,
        account_number: &AccountNumber,
    ) -> Result<Option<Account>, DomainError> {
        self.inner.find_by_id(account_number).await
    }

    async fn create(&self, account: &NewAccount) -> Result<Account, DomainError> {
        let mut stamped = account.clone();
        self.auditor.created(&mut stamped.audit);
        self.inner.create(&stamped).await
    }

    async fn save(&self, account: &Account) -> Result<Account, DomainError> {
        let mut stamped = account.clone();
        self.auditor.updated(&mut stamped.audit);
        self.inner.save(&stamped).await
    }

    async fn delete_by_customer_id(&self, customer_id: &CustomerId) -> Result<(), DomainError> {
        self.inner.delete_by_customer_id(customer_id).await
    }
}
