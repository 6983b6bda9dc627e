//! # CURD Testkit
//!
//! Test utilities shared by the CURD crates: entity builders with sensible
//! defaults, canned store fixtures, and proptest generators that maintain
//! the entities' validity invariants.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod builders;
mod fixtures;
pub mod generators;

pub use builders::{CheeseBuilder, CustomerBuilder, OrderBuilder};
pub use fixtures::{typical_customers, typical_inventory};
