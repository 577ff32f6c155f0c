//! Account domain entity
//!
//! Each customer owns exactly one account. The account holds the owner's id
//! but does not control the customer's lifecycle.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::audit::AuditInfo;
use super::customer::CustomerId;

/// Account type assigned to every newly opened account
pub const DEFAULT_ACCOUNT_TYPE: &str = "Savings";

/// Branch address assigned to every newly opened account
pub const DEFAULT_BRANCH_ADDRESS: &str = "123 Main Street, New York";

/// Range from which new account numbers are drawn. Always ten digits.
pub const ACCOUNT_NUMBER_RANGE: Range<i64> = 1_000_000_000..1_900_000_000;

/// Account number, the account's primary key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountNumber(pub i64);

impl AccountNumber {
    /// Draw a random account number from [`ACCOUNT_NUMBER_RANGE`]
    pub fn generate() -> Self {
        use rand::Rng;

        Self(rand::thread_rng().gen_range(ACCOUNT_NUMBER_RANGE))
    }
}

impl std::fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored account
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    pub account_number: AccountNumber,
    pub customer_id: CustomerId,
    pub account_type: String,
    pub branch_address: String,
    pub audit: AuditInfo,
}

/// Data needed to open a new account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub account_number: AccountNumber,
    pub customer_id: CustomerId,
    pub account_type: String,
    pub branch_address: String,
    pub audit: AuditInfo,
}

impl NewAccount {
    /// A default savings account for the given customer
    pub fn savings(customer_id: CustomerId) -> Self {
        Self {
            account_number: AccountNumber::generate(),
            customer_id,
            account_type: DEFAULT_ACCOUNT_TYPE.to_string(),
            branch_address: DEFAULT_BRANCH_ADDRESS.to_string(),
            audit: AuditInfo::default(),
        }
    }
}
