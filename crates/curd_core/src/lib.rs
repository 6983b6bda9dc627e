//! # CURD Core
//!
//! In-memory relational store and fuzzy matching engine for a small cheese
//! inventory operation.
//!
//! This crate provides:
//! - Immutable entity value types (customers, cheese units, orders) with
//!   validated fields
//! - Monotonic per-kind identifier allocation
//! - A composable predicate algebra for multi-keyword, multi-field "find"
//!   queries, including predicates that join orders to their customers
//! - The [`Inventory`] store, which owns the entity collections and enforces
//!   cross-entity invariants on every mutation

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod entity;
mod error;
mod id;
pub mod predicate;
mod store;

pub use entity::{
    Address, Cheese, CheeseDetails, CheeseType, Customer, CustomerDetails, Email, Name, Order,
    OrderDetails, Phone, Quantity, Tag,
};
pub use error::{CurdError, CurdResult, Rule};
pub use id::{CheeseId, CustomerId, EntityKind, IdAllocator, OrderId};
pub use store::Inventory;
