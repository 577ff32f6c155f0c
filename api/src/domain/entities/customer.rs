//! Customer domain entity
//!
//! A bank customer, identified externally by their mobile number.

use serde::{Deserialize, Serialize};

use super::audit::AuditInfo;

/// Number of digits in a mobile number
pub const MOBILE_NUMBER_LEN: usize = 10;

/// Store-assigned identifier for a customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CustomerId(pub i64);

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    /// Natural key, unique across all customers
    pub mobile_number: String,
    pub audit: AuditInfo,
}

/// Data needed to create a new customer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub mobile_number: String,
    pub audit: AuditInfo,
}

impl NewCustomer {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        mobile_number: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            mobile_number: mobile_number.into(),
            audit: AuditInfo::default(),
        }
    }
}

/// Check that a mobile number is exactly [`MOBILE_NUMBER_LEN`] ASCII digits
pub fn is_valid_mobile_number(mobile_number: &str) -> bool {
    mobile_number.len() == MOBILE_NUMBER_LEN && mobile_number.bytes().all(|b| b.is_ascii_digit())
}
