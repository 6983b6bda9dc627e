//! Whole-store archive conversion.

use crate::{CheeseRecord, CustomerRecord, OrderRecord, RecordResult};
use curd_core::Inventory;
use serde::{Deserialize, Serialize};

/// The persisted form of a whole store: every entity as a flat record.
///
/// Converting an archive back into an [`Inventory`] re-validates every field
/// and every cross-entity invariant, and reseeds the identifier allocator,
/// so a loaded store behaves exactly like the one that was saved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Archive {
    /// Customer records.
    #[serde(default)]
    pub customers: Vec<CustomerRecord>,
    /// Cheese records.
    #[serde(default)]
    pub cheeses: Vec<CheeseRecord>,
    /// Order records.
    #[serde(default)]
    pub orders: Vec<OrderRecord>,
}

impl Archive {
    /// Captures the current contents of a store.
    #[must_use]
    pub fn from_inventory(inventory: &Inventory) -> Self {
        Self {
            customers: inventory.customers().iter().map(CustomerRecord::from).collect(),
            cheeses: inventory.cheeses().iter().map(CheeseRecord::from).collect(),
            orders: inventory.orders().iter().map(OrderRecord::from).collect(),
        }
    }

    /// Validates every record and rebuilds the store.
    pub fn try_into_inventory(self) -> RecordResult<Inventory> {
        let customers = self
            .customers
            .into_iter()
            .map(CustomerRecord::try_into_customer)
            .collect::<RecordResult<Vec<_>>>()?;
        let cheeses = self
            .cheeses
            .into_iter()
            .map(CheeseRecord::try_into_cheese)
            .collect::<RecordResult<Vec<_>>>()?;
        let orders = self
            .orders
            .into_iter()
            .map(OrderRecord::try_into_order)
            .collect::<RecordResult<Vec<_>>>()?;
        Ok(Inventory::from_parts(customers, cheeses, orders)?)
    }

    /// Renders the archive as pretty-printed JSON.
    pub fn to_json(&self) -> RecordResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses an archive from JSON text.
    pub fn from_json(text: &str) -> RecordResult<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
