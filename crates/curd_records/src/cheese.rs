//! The persisted cheese record.

use crate::{format_date, parse_date, RecordError, RecordResult};
use curd_core::{Cheese, CheeseDetails, CheeseId, CheeseType};
use serde::{Deserialize, Serialize};

/// Flat form of a [`Cheese`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheeseRecord {
    /// Identifier.
    pub id: u64,
    /// Variety name.
    pub cheese_type: String,
    /// Manufacture date, `%Y-%m-%d`.
    pub manufacture_date: String,
    /// Maturity date, if tracked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maturity_date: Option<String>,
    /// Expiry date, if tracked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    /// Whether the unit is assigned to an order.
    #[serde(default)]
    pub assigned: bool,
}

impl From<&Cheese> for CheeseRecord {
    fn from(cheese: &Cheese) -> Self {
        Self {
            id: cheese.id().get(),
            cheese_type: cheese.cheese_type().name().to_string(),
            manufacture_date: format_date(cheese.manufacture_date()),
            maturity_date: cheese.maturity_date().map(format_date),
            expiry_date: cheese.expiry_date().map(format_date),
            assigned: cheese.is_assigned(),
        }
    }
}

impl CheeseRecord {
    /// Validates the record and converts it into a [`Cheese`].
    pub fn try_into_cheese(self) -> RecordResult<Cheese> {
        if self.id == 0 {
            return Err(RecordError::invalid_field("cheese", "id", "must be positive"));
        }
        let details = CheeseDetails {
            cheese_type: CheeseType::parse(&self.cheese_type)?,
            manufacture_date: parse_date("cheese", "manufacture date", &self.manufacture_date)?,
            maturity_date: self
                .maturity_date
                .as_deref()
                .map(|d| parse_date("cheese", "maturity date", d))
                .transpose()?,
            expiry_date: self
                .expiry_date
                .as_deref()
                .map(|d| parse_date("cheese", "expiry date", d))
                .transpose()?,
        };
        Ok(Cheese::restore(CheeseId::new(self.id), details, self.assigned)?)
    }
}
