//! The cheese unit entity.

use crate::entity::fields::CheeseType;
use crate::error::{CurdError, CurdResult};
use crate::id::CheeseId;
use chrono::NaiveDate;
use std::fmt;

/// The identity-free data of a cheese unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheeseDetails {
    /// The variety of cheese.
    pub cheese_type: CheeseType,
    /// When the unit was manufactured.
    pub manufacture_date: NaiveDate,
    /// When the unit reaches maturity, if tracked.
    pub maturity_date: Option<NaiveDate>,
    /// When the unit expires, if tracked.
    pub expiry_date: Option<NaiveDate>,
}

impl CheeseDetails {
    /// Checks the date ordering rules.
    ///
    /// Maturity and expiry may not precede the manufacture date; a unit
    /// cannot have elapsed before it was made.
    pub fn validate(&self) -> CurdResult<()> {
        if let Some(maturity) = self.maturity_date {
            if maturity < self.manufacture_date {
                return Err(CurdError::validation(
                    "maturity date",
                    "must not precede the manufacture date",
                ));
            }
        }
        if let Some(expiry) = self.expiry_date {
            if expiry < self.manufacture_date {
                return Err(CurdError::validation(
                    "expiry date",
                    "must not precede the manufacture date",
                ));
            }
        }
        Ok(())
    }
}

/// An immutable cheese unit.
///
/// The identifier and type never change after creation. Assignment to an
/// order is recorded by replacing the value with [`Cheese::assign_to_order`];
/// the store keeps the flag consistent with the orders that reference the
/// unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cheese {
    id: CheeseId,
    cheese_type: CheeseType,
    manufacture_date: NaiveDate,
    maturity_date: Option<NaiveDate>,
    expiry_date: Option<NaiveDate>,
    assigned: bool,
}

impl Cheese {
    /// Creates an unassigned cheese from an allocated identifier and details.
    pub fn new(id: CheeseId, details: CheeseDetails) -> CurdResult<Self> {
        Self::restore(id, details, false)
    }

    /// Recreates a cheese from persisted state, including its assignment
    /// flag.
    pub fn restore(id: CheeseId, details: CheeseDetails, assigned: bool) -> CurdResult<Self> {
        details.validate()?;
        Ok(Self {
            id,
            cheese_type: details.cheese_type,
            manufacture_date: details.manufacture_date,
            maturity_date: details.maturity_date,
            expiry_date: details.expiry_date,
            assigned,
        })
    }

    /// Returns the identifier.
    #[must_use]
    pub fn id(&self) -> CheeseId {
        self.id
    }

    /// Returns the cheese type.
    #[must_use]
    pub fn cheese_type(&self) -> &CheeseType {
        &self.cheese_type
    }

    /// Returns the manufacture date.
    #[must_use]
    pub fn manufacture_date(&self) -> NaiveDate {
        self.manufacture_date
    }

    /// Returns the maturity date, if tracked.
    #[must_use]
    pub fn maturity_date(&self) -> Option<NaiveDate> {
        self.maturity_date
    }

    /// Returns the expiry date, if tracked.
    #[must_use]
    pub fn expiry_date(&self) -> Option<NaiveDate> {
        self.expiry_date
    }

    /// Returns true when the unit is assigned to an order.
    #[must_use]
    pub fn is_assigned(&self) -> bool {
        self.assigned
    }

    /// Returns true when the unit is of `cheese_type`.
    #[must_use]
    pub fn is_same_type(&self, cheese_type: &CheeseType) -> bool {
        self.cheese_type == *cheese_type
    }

    /// Returns the identity-free data of this unit.
    #[must_use]
    pub fn details(&self) -> CheeseDetails {
        CheeseDetails {
            cheese_type: self.cheese_type.clone(),
            manufacture_date: self.manufacture_date,
            maturity_date: self.maturity_date,
            expiry_date: self.expiry_date,
        }
    }

    /// Returns this unit marked assigned, same identifier and data.
    #[must_use]
    pub fn assign_to_order(&self) -> Self {
        Self {
            assigned: true,
            ..self.clone()
        }
    }

    /// Returns this unit marked unassigned, same identifier and data.
    #[must_use]
    pub fn unassign(&self) -> Self {
        Self {
            assigned: false,
            ..self.clone()
        }
    }
}

impl fmt::Display for Cheese {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (made {}, {})",
            self.cheese_type,
            self.manufacture_date,
            if self.assigned { "assigned" } else { "in stock" }
        )
    }
}
