//! Predicates over orders, including joins to the referenced customer.

use crate::entity::{Customer, Order};
use crate::id::CustomerId;
use crate::predicate::{
    FieldPredicate, MatchAll, SingleFieldPredicate, StatusPredicate,
};
use std::collections::HashMap;

/// Always-true predicate used to list all orders.
pub const SHOW_ALL_ORDERS: MatchAll = MatchAll;

/// Keyword predicate over the order's requested cheese type.
pub fn by_cheese_type<I, S>(keywords: I) -> SingleFieldPredicate<Order>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    SingleFieldPredicate::new("cheese type", keywords, |o: &Order| {
        o.cheese_type().name().to_string()
    })
}

/// Predicate on the completion status of an order.
pub fn by_completion(complete: bool) -> StatusPredicate<Order> {
    let description = if complete {
        "completed orders"
    } else {
        "incomplete orders"
    };
    StatusPredicate::new(description, complete, Order::is_complete)
}

/// A predicate over orders that resolves the referenced customer through a
/// snapshot and delegates to a customer predicate.
///
/// The snapshot is a value copy taken at construction time; customers edited
/// afterwards are invisible to it, so callers take a fresh snapshot per
/// query. An order whose customer is absent from the snapshot does not
/// match and scores 0; under the store invariants that should not happen,
/// but it must not fail the query.
pub struct OrderCustomerPredicate {
    customers: HashMap<CustomerId, Customer>,
    inner: SingleFieldPredicate<Customer>,
}

impl OrderCustomerPredicate {
    fn new(customers: Vec<Customer>, inner: SingleFieldPredicate<Customer>) -> Self {
        Self {
            customers: customers.into_iter().map(|c| (c.id(), c)).collect(),
            inner,
        }
    }

    fn resolve(&self, order: &Order) -> Option<&Customer> {
        self.customers.get(&order.customer_id())
    }
}

impl FieldPredicate<Order> for OrderCustomerPredicate {
    fn matches(&self, order: &Order) -> bool {
        self.resolve(order).is_some_and(|c| self.inner.matches(c))
    }

    fn score(&self, order: &Order) -> f64 {
        self.resolve(order).map_or(0.0, |c| self.inner.score(c))
    }

    fn describe(&self) -> String {
        format!("customer {}", self.inner.describe())
    }
}

/// Keyword predicate over the name of the customer the order references.
pub fn by_customer_name<I, S>(keywords: I, customers: Vec<Customer>) -> OrderCustomerPredicate
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    OrderCustomerPredicate::new(customers, super::customers::by_name(keywords))
}

/// Keyword predicate over the phone of the customer the order references.
pub fn by_customer_phone<I, S>(keywords: I, customers: Vec<Customer>) -> OrderCustomerPredicate
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    OrderCustomerPredicate::new(customers, super::customers::by_phone(keywords))
}
