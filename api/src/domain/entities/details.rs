//! Combined customer + account view
//!
//! What the lifecycle service hands out on fetch and takes in on create and
//! update. Ids and audit metadata are deliberately absent.

use super::account::{Account, AccountNumber};
use super::customer::Customer;

/// Customer fields together with the customer's account, if known
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDetails {
    pub name: String,
    pub email: String,
    pub mobile_number: String,
    pub account: Option<AccountDetails>,
}

/// Account fields of the combined view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountDetails {
    pub account_number: AccountNumber,
    pub account_type: String,
    pub branch_address: String,
}

impl CustomerDetails {
    pub fn new(customer: Customer, account: Account) -> Self {
        Self {
            name: customer.name,
            email: customer.email,
            mobile_number: customer.mobile_number,
            account: Some(account.into()),
        }
    }
}

impl From<Account> for AccountDetails {
    fn from(account: Account) -> Self {
        Self {
            account_number: account.account_number,
            account_type: account.account_type,
            branch_address: account.branch_address,
        }
    }
}
