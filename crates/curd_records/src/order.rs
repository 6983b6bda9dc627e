//! The persisted order record.

use crate::{format_date, parse_date, RecordError, RecordResult};
use curd_core::{CheeseId, CheeseType, CustomerId, Order, OrderDetails, OrderId, Quantity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Flat form of an [`Order`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Identifier.
    pub id: u64,
    /// Identifier of the customer the order is for.
    pub customer_id: u64,
    /// Requested variety name.
    pub cheese_type: String,
    /// Requested quantity.
    pub quantity: u32,
    /// Order date, `%Y-%m-%d`.
    pub order_date: String,
    /// Completion date, present iff the order is complete.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<String>,
    /// Identifiers of the assigned cheeses.
    #[serde(default)]
    pub cheeses: Vec<u64>,
}

impl From<&Order> for OrderRecord {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id().get(),
            customer_id: order.customer_id().get(),
            cheese_type: order.cheese_type().name().to_string(),
            quantity: order.quantity().get(),
            order_date: format_date(order.order_date()),
            completed_date: order.completed_date().map(format_date),
            cheeses: order.cheeses().iter().map(|c| c.get()).collect(),
        }
    }
}

impl OrderRecord {
    /// Validates the record and converts it into an [`Order`].
    pub fn try_into_order(self) -> RecordResult<Order> {
        if self.id == 0 {
            return Err(RecordError::invalid_field("order", "id", "must be positive"));
        }
        if self.customer_id == 0 {
            return Err(RecordError::invalid_field(
                "order",
                "customer id",
                "must be positive",
            ));
        }
        let details = OrderDetails {
            customer_id: CustomerId::new(self.customer_id),
            cheese_type: CheeseType::parse(&self.cheese_type)?,
            quantity: Quantity::new(self.quantity)?,
            order_date: parse_date("order", "order date", &self.order_date)?,
        };
        let completed_date = self
            .completed_date
            .as_deref()
            .map(|d| parse_date("order", "completed date", d))
            .transpose()?;
        let cheeses: BTreeSet<CheeseId> = self.cheeses.iter().copied().map(CheeseId::new).collect();
        if cheeses.len() != self.cheeses.len() {
            return Err(RecordError::invalid_field(
                "order",
                "cheeses",
                "duplicate cheese identifier",
            ));
        }
        Ok(Order::restore(
            OrderId::new(self.id),
            details,
            completed_date,
            cheeses,
        )?)
    }
}
