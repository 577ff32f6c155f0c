//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod account;
pub mod audit;
pub mod customer;
pub mod details;

pub use account::{Account, AccountNumber, NewAccount};
pub use audit::AuditInfo;
pub use customer::{is_valid_mobile_number, Customer, CustomerId, NewCustomer};
pub use details::{AccountDetails, CustomerDetails};
