//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and count writes so tests can verify behavior.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use crate::adapters::{Audited, Auditor};
use crate::config::DEFAULT_AUDIT_ACTOR;
use crate::domain::entities::{
    Account, AccountNumber, Customer, CustomerId, NewAccount, NewCustomer,
};
use crate::domain::ports::{
    AccountRepository, Clock, CustomerRepository, TransactionScope, UnitOfWork,
};
use crate::error::DomainError;

fn store_failure() -> DomainError {
    DomainError::Database("connection refused".to_string())
}

// ============================================================================
// In-Memory Customer Repository
// ============================================================================

pub struct InMemoryCustomerRepository {
    customers: Arc<RwLock<HashMap<CustomerId, Customer>>>,
    next_id: AtomicI64,
    creates: AtomicUsize,
    saves: AtomicUsize,
    /// Lookups by mobile number always miss, as if another request had
    /// inserted the row after our read
    hide_lookups: bool,
    /// Every write fails with a database error
    fail_writes: bool,
}

impl Default for InMemoryCustomerRepository {
    fn default() -> Self {
        Self {
            customers: Arc::default(),
            next_id: AtomicI64::new(1),
            creates: AtomicUsize::new(0),
            saves: AtomicUsize::new(0),
            hide_lookups: false,
            fail_writes: false,
        }
    }
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a customer for testing
    pub fn with_customer(self, customer: Customer) -> Self {
        self.next_id.fetch_max(customer.id.0 + 1, Ordering::Relaxed);
        self.customers
            .write()
            .unwrap()
            .insert(customer.id, customer);
        self
    }

    pub fn hiding_lookups(mut self) -> Self {
        self.hide_lookups = true;
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Number of stored customers
    pub fn count(&self) -> usize {
        self.customers.read().unwrap().len()
    }

    /// Number of `create` calls, successful or not
    pub fn create_count(&self) -> usize {
        self.creates.load(Ordering::Relaxed)
    }

    /// Number of `save` calls, successful or not
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::Relaxed)
    }

    fn snapshot(&self) -> HashMap<CustomerId, Customer> {
        self.customers.read().unwrap().clone()
    }

    fn restore(&self, customers: HashMap<CustomerId, Customer>) {
        *self.customers.write().unwrap() = customers;
    }

    fn mobile_taken_by_other(
        customers: &HashMap<CustomerId, Customer>,
        mobile_number: &str,
        except: Option<CustomerId>,
    ) -> bool {
        customers
            .values()
            .any(|c| c.mobile_number == mobile_number && Some(c.id) != except)
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_mobile_number(
        &self,
        mobile_number: &str,
    ) -> Result<Option<Customer>, DomainError> {
        if self.hide_lookups {
            return Ok(None);
        }
        let customers = self.customers.read().unwrap();
        Ok(customers
            .values()
            .find(|c| c.mobile_number == mobile_number)
            .cloned())
    }

    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, DomainError> {
        let customers = self.customers.read().unwrap();
        Ok(customers.get(id).cloned())
    }

    async fn create(&self, new_customer: &NewCustomer) -> Result<Customer, DomainError> {
        self.creates.fetch_add(1, Ordering::Relaxed);
        if self.fail_writes {
            return Err(store_failure());
        }

        let mut customers = self.customers.write().unwrap();
        if Self::mobile_taken_by_other(&customers, &new_customer.mobile_number, None) {
            return Err(DomainError::AlreadyExists(format!(
                "Customer already registered with given mobileNumber {}",
                new_customer.mobile_number
            )));
        }

        let customer = Customer {
            id: CustomerId(self.next_id.fetch_add(1, Ordering::Relaxed)),
            name: new_customer.name.clone(),
            email: new_customer.email.clone(),
            mobile_number: new_customer.mobile_number.clone(),
            audit: new_customer.audit.clone(),
        };
        customers.insert(customer.id, customer.clone());

        Ok(customer)
    }

    async fn save(&self, customer: &Customer) -> Result<Customer, DomainError> {
        self.saves.fetch_add(1, Ordering::Relaxed);
        if self.fail_writes {
            return Err(store_failure());
        }

        let mut customers = self.customers.write().unwrap();
        let Some(existing) = customers.get(&customer.id) else {
            return Err(DomainError::not_found("Customer", "CustomerID", customer.id));
        };
        if Self::mobile_taken_by_other(&customers, &customer.mobile_number, Some(customer.id)) {
            return Err(DomainError::AlreadyExists(format!(
                "Customer already registered with given mobileNumber {}",
                customer.mobile_number
            )));
        }

        // Creation audit fields are not updatable, mirroring the real columns
        let mut saved = customer.clone();
        saved.audit.created_at = existing.audit.created_at;
        saved.audit.created_by = existing.audit.created_by.clone();
        customers.insert(saved.id, saved.clone());

        Ok(saved)
    }

    async fn delete_by_id(&self, id: &CustomerId) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(store_failure());
        }
        self.customers.write().unwrap().remove(id);
        Ok(())
    }
}

// ============================================================================
// In-Memory Account Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<AccountNumber, Account>>>,
    creates: AtomicUsize,
    saves: AtomicUsize,
    fail_writes: bool,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an account for testing
    pub fn with_account(self, account: Account) -> Self {
        self.accounts
            .write()
            .unwrap()
            .insert(account.account_number, account);
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Number of stored accounts
    pub fn count(&self) -> usize {
        self.accounts.read().unwrap().len()
    }

    /// Number of `create` calls, successful or not
    pub fn create_count(&self) -> usize {
        self.creates.load(Ordering::Relaxed)
    }

    /// Number of `save` calls, successful or not
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::Relaxed)
    }

    fn snapshot(&self) -> HashMap<AccountNumber, Account> {
        self.accounts.read().unwrap().clone()
    }

    fn restore(&self, accounts: HashMap<AccountNumber, Account>) {
        *self.accounts.write().unwrap() = accounts;
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_customer_id(
        &self,
        customer_id: &CustomerId,
    ) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().unwrap();
        Ok(accounts
            .values()
            .find(|a| a.customer_id == *customer_id)
            .cloned())
    }

    async fn find_by_id(
        &self,
        account_number: &AccountNumber,
    ) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().unwrap();
        Ok(accounts.get(account_number).cloned())
    }

    async fn create(&self, new_account: &NewAccount) -> Result<Account, DomainError> {
        self.creates.fetch_add(1, Ordering::Relaxed);
        if self.fail_writes {
            return Err(store_failure());
        }

        let mut accounts = self.accounts.write().unwrap();
        if accounts.contains_key(&new_account.account_number)
            || accounts
                .values()
                .any(|a| a.customer_id == new_account.customer_id)
        {
            return Err(DomainError::AlreadyExists(format!(
                "Account {} or an account for customer {} already exists",
                new_account.account_number, new_account.customer_id
            )));
        }

        let account = Account {
            account_number: new_account.account_number,
            customer_id: new_account.customer_id,
            account_type: new_account.account_type.clone(),
            branch_address: new_account.branch_address.clone(),
            audit: new_account.audit.clone(),
        };
        accounts.insert(account.account_number, account.clone());

        Ok(account)
    }

    async fn save(&self, account: &Account) -> Result<Account, DomainError> {
        self.saves.fetch_add(1, Ordering::Relaxed);
        if self.fail_writes {
            return Err(store_failure());
        }

        let mut accounts = self.accounts.write().unwrap();
        let Some(existing) = accounts.get(&account.account_number) else {
            return Err(DomainError::not_found(
                "Account",
                "AccountNumber",
                account.account_number,
            ));
        };

        let mut saved = account.clone();
        saved.audit.created_at = existing.audit.created_at;
        saved.audit.created_by = existing.audit.created_by.clone();
        accounts.insert(saved.account_number, saved.clone());

        Ok(saved)
    }

    async fn delete_by_customer_id(&self, customer_id: &CustomerId) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(store_failure());
        }
        self.accounts
            .write()
            .unwrap()
            .retain(|_, a| a.customer_id != *customer_id);
        Ok(())
    }
}

// ============================================================================
// In-Memory Unit of Work
// ============================================================================

/// Unit of work over the in-memory repositories
///
/// Writes go straight to the shared maps. Each scope takes a snapshot when it
/// begins and puts it back when dropped uncommitted, which is how the
/// database behaves for a single request at a time.
pub struct InMemoryUnitOfWork {
    customers: Arc<Audited<InMemoryCustomerRepository>>,
    accounts: Arc<Audited<InMemoryAccountRepository>>,
    commits: Arc<AtomicUsize>,
    fail_commits: bool,
}

impl InMemoryUnitOfWork {
    pub fn new(customers: InMemoryCustomerRepository, accounts: InMemoryAccountRepository) -> Self {
        Self::with_clock(
            customers,
            accounts,
            Arc::new(FixedClock::new(Utc::now())),
        )
    }

    /// Build with a specific audit clock
    pub fn with_clock(
        customers: InMemoryCustomerRepository,
        accounts: InMemoryAccountRepository,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let auditor = Auditor::new(DEFAULT_AUDIT_ACTOR, clock);
        Self {
            customers: Arc::new(Audited::new(customers, auditor.clone())),
            accounts: Arc::new(Audited::new(accounts, auditor)),
            commits: Arc::new(AtomicUsize::new(0)),
            fail_commits: false,
        }
    }

    /// Every commit fails with a database error and the scope rolls back
    pub fn failing_commits(mut self) -> Self {
        self.fail_commits = true;
        self
    }

    pub fn customers(&self) -> &InMemoryCustomerRepository {
        self.customers.inner()
    }

    pub fn accounts(&self) -> &InMemoryAccountRepository {
        self.accounts.inner()
    }

    /// Number of successful commits
    pub fn commit_count(&self) -> usize {
        self.commits.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    type Scope = InMemoryScope;

    async fn begin(&self) -> Result<InMemoryScope, DomainError> {
        let undo = (
            self.customers().snapshot(),
            self.accounts().snapshot(),
        );
        Ok(InMemoryScope {
            customers: self.customers.clone(),
            accounts: self.accounts.clone(),
            commits: self.commits.clone(),
            fail_commit: self.fail_commits,
            undo: Some(undo),
        })
    }
}

type Snapshot = (
    HashMap<CustomerId, Customer>,
    HashMap<AccountNumber, Account>,
);

pub struct InMemoryScope {
    customers: Arc<Audited<InMemoryCustomerRepository>>,
    accounts: Arc<Audited<InMemoryAccountRepository>>,
    commits: Arc<AtomicUsize>,
    fail_commit: bool,
    /// State at `begin`; `None` once committed
    undo: Option<Snapshot>,
}

#[async_trait]
impl TransactionScope for InMemoryScope {
    type Customers = Audited<InMemoryCustomerRepository>;
    type Accounts = Audited<InMemoryAccountRepository>;

    fn customers(&self) -> &Self::Customers {
        &self.customers
    }

    fn accounts(&self) -> &Self::Accounts {
        &self.accounts
    }

    async fn commit(mut self) -> Result<(), DomainError> {
        if self.fail_commit {
            return Err(store_failure());
        }
        self.undo = None;
        self.commits.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

impl Drop for InMemoryScope {
    fn drop(&mut self) {
        if let Some((customers, accounts)) = self.undo.take() {
            self.customers.inner().restore(customers);
            self.accounts.inner().restore(accounts);
        }
    }
}

// ============================================================================
// Fixed Clock
// ============================================================================

/// Clock that returns a settable instant
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap() = now;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}
