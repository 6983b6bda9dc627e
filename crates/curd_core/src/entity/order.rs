//! The order entity.

use crate::entity::fields::{CheeseType, Quantity};
use crate::error::{CurdError, CurdResult, Rule};
use crate::id::{CheeseId, CustomerId, EntityKind, OrderId};
use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::fmt;

/// The identity-free data of an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDetails {
    /// The customer the order is for.
    pub customer_id: CustomerId,
    /// The requested variety of cheese.
    pub cheese_type: CheeseType,
    /// How many units were requested.
    pub quantity: Quantity,
    /// When the order was placed.
    pub order_date: NaiveDate,
}

/// An immutable order record.
///
/// An order is complete iff its completed date is present. The assigned
/// cheese set never exceeds the requested quantity; the store enforces that
/// every member references an existing, matching, assigned cheese.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: OrderId,
    customer_id: CustomerId,
    cheese_type: CheeseType,
    quantity: Quantity,
    order_date: NaiveDate,
    completed_date: Option<NaiveDate>,
    cheeses: BTreeSet<CheeseId>,
}

impl Order {
    /// Creates a fresh, incomplete order with no cheeses assigned.
    #[must_use]
    pub fn new(id: OrderId, details: OrderDetails) -> Self {
        Self {
            id,
            customer_id: details.customer_id,
            cheese_type: details.cheese_type,
            quantity: details.quantity,
            order_date: details.order_date,
            completed_date: None,
            cheeses: BTreeSet::new(),
        }
    }

    /// Recreates an order from persisted state.
    ///
    /// Checks the local invariants: the assigned set may not exceed the
    /// requested quantity, and a completed order must be fully assigned with
    /// a completion date strictly after the order date.
    pub fn restore(
        id: OrderId,
        details: OrderDetails,
        completed_date: Option<NaiveDate>,
        cheeses: BTreeSet<CheeseId>,
    ) -> CurdResult<Self> {
        if cheeses.len() as u32 > details.quantity.get() {
            return Err(CurdError::constraint(
                EntityKind::Order,
                id.get(),
                Rule::QuantityFilled,
            ));
        }
        if let Some(completed) = completed_date {
            if completed <= details.order_date {
                return Err(CurdError::constraint(
                    EntityKind::Order,
                    id.get(),
                    Rule::CompletionDate,
                ));
            }
            if cheeses.len() as u32 != details.quantity.get() {
                return Err(CurdError::constraint(
                    EntityKind::Order,
                    id.get(),
                    Rule::UnderAssigned,
                ));
            }
        }
        Ok(Self {
            id,
            customer_id: details.customer_id,
            cheese_type: details.cheese_type,
            quantity: details.quantity,
            order_date: details.order_date,
            completed_date,
            cheeses,
        })
    }

    /// Returns the identifier.
    #[must_use]
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Returns the identifier of the customer the order is for.
    #[must_use]
    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    /// Returns the requested cheese type.
    #[must_use]
    pub fn cheese_type(&self) -> &CheeseType {
        &self.cheese_type
    }

    /// Returns the requested quantity.
    #[must_use]
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Returns the order date.
    #[must_use]
    pub fn order_date(&self) -> NaiveDate {
        self.order_date
    }

    /// Returns the completed date, if the order is complete.
    #[must_use]
    pub fn completed_date(&self) -> Option<NaiveDate> {
        self.completed_date
    }

    /// Returns the identifiers of the cheeses assigned to this order.
    #[must_use]
    pub fn cheeses(&self) -> &BTreeSet<CheeseId> {
        &self.cheeses
    }

    /// Returns true when the order is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_date.is_some()
    }

    /// Returns true when as many cheeses are assigned as were requested.
    #[must_use]
    pub fn has_full_assignment(&self) -> bool {
        self.cheeses.len() as u32 == self.quantity.get()
    }

    /// Returns the identity-free data of this order.
    #[must_use]
    pub fn details(&self) -> OrderDetails {
        OrderDetails {
            customer_id: self.customer_id,
            cheese_type: self.cheese_type.clone(),
            quantity: self.quantity,
            order_date: self.order_date,
        }
    }

    /// Returns this order with `cheese` added to its assigned set.
    #[must_use]
    pub fn with_cheese(&self, cheese: CheeseId) -> Self {
        let mut next = self.clone();
        next.cheeses.insert(cheese);
        next
    }

    /// Returns this order marked complete on `date`.
    #[must_use]
    pub fn completed(&self, date: NaiveDate) -> Self {
        let mut next = self.clone();
        next.completed_date = Some(date);
        next
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x{} ordered {} ({})",
            self.cheese_type,
            self.quantity,
            self.order_date,
            match self.completed_date {
                Some(date) => format!("completed {date}"),
                None => "incomplete".to_string(),
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn details(quantity: u32) -> OrderDetails {
        OrderDetails {
            customer_id: CustomerId::new(1),
            cheese_type: CheeseType::Brie,
            quantity: Quantity::new(quantity).unwrap(),
            order_date: date(2021, 3, 1),
        }
    }

    fn cheese_ids(ids: &[u64]) -> BTreeSet<CheeseId> {
        ids.iter().copied().map(CheeseId::new).collect()
    }

    #[test]
    fn new_orders_are_incomplete_and_empty() {
        let order = Order::new(OrderId::new(1), details(2));
        assert!(!order.is_complete());
        assert!(order.cheeses().is_empty());
        assert!(!order.has_full_assignment());
    }

    #[test]
    fn restore_rejects_overfull_assignment() {
        let err = Order::restore(OrderId::new(1), details(1), None, cheese_ids(&[5, 6]))
            .unwrap_err();
        assert_eq!(err.rule(), Some(Rule::QuantityFilled));
    }

    #[test]
    fn restore_rejects_completion_on_or_before_order_date() {
        let err = Order::restore(
            OrderId::new(1),
            details(1),
            Some(date(2021, 3, 1)),
            cheese_ids(&[5]),
        )
        .unwrap_err();
        assert_eq!(err.rule(), Some(Rule::CompletionDate));
    }

    #[test]
    fn restore_rejects_complete_but_underassigned() {
        let err = Order::restore(
            OrderId::new(1),
            details(2),
            Some(date(2021, 3, 2)),
            cheese_ids(&[5]),
        )
        .unwrap_err();
        assert_eq!(err.rule(), Some(Rule::UnderAssigned));
    }

    #[test]
    fn copy_with_change_preserves_identity() {
        let order = Order::new(OrderId::new(3), details(2));
        let with = order.with_cheese(CheeseId::new(9));
        assert_eq!(with.id(), order.id());
        assert!(with.cheeses().contains(&CheeseId::new(9)));
        assert!(order.cheeses().is_empty());

        let done = with.with_cheese(CheeseId::new(10)).completed(date(2021, 4, 1));
        assert!(done.is_complete());
        assert_eq!(done.completed_date(), Some(date(2021, 4, 1)));
    }
}
