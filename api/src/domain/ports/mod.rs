//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod clock;
pub mod repositories;
pub mod unit_of_work;

pub use clock::Clock;
pub use repositories::{AccountRepository, CustomerRepository};
pub use unit_of_work::{TransactionScope, UnitOfWork};
