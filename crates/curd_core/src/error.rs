//! Error types for the CURD core.

use crate::id::EntityKind;
use thiserror::Error;

/// Result type for core operations.
pub type CurdResult<T> = Result<T, CurdError>;

/// Cross-entity rules a store mutation can violate.
///
/// Every [`CurdError::Constraint`] names the rule that was breached, so the
/// command layer can render a precise message without string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rule {
    /// A customer with the same name, phone, email, and address exists.
    #[error("duplicate customer")]
    DuplicateCustomer,

    /// Two entities of the same kind carry the same identifier.
    #[error("duplicate identifier")]
    DuplicateId,

    /// An order references a customer that does not exist.
    #[error("order references an unknown customer")]
    UnknownCustomer,

    /// An order references a cheese that does not exist.
    #[error("order references an unknown cheese")]
    UnknownCheese,

    /// The customer is still referenced by at least one order.
    #[error("customer is still referenced by an order")]
    CustomerInUse,

    /// The cheese is assigned to an order and cannot be deleted.
    #[error("cheese is assigned to an order")]
    CheeseAssigned,

    /// The cheese is already assigned to an order.
    #[error("cheese is already assigned")]
    AlreadyAssigned,

    /// The cheese type does not match the order's requested type.
    #[error("cheese type does not match the order")]
    TypeMismatch,

    /// The order already holds as many cheeses as it requested.
    #[error("order already holds its requested quantity")]
    QuantityFilled,

    /// The order holds fewer cheeses than it requested.
    #[error("order has fewer cheeses assigned than requested")]
    UnderAssigned,

    /// The order is already marked complete.
    #[error("order is already complete")]
    AlreadyComplete,

    /// A completion date must be strictly after the order date.
    #[error("completion date is not after the order date")]
    CompletionDate,

    /// A cheese's assignment flag disagrees with the orders referencing it.
    #[error("assignment flag does not agree with order references")]
    AssignmentMismatch,
}

/// Errors that can occur in CURD core operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurdError {
    /// A field value failed validation at the parsing boundary.
    #[error("invalid {field}: {message}")]
    Validation {
        /// The field that was malformed.
        field: &'static str,
        /// What was wrong with it.
        message: String,
    },

    /// A store mutation would violate a cross-entity rule.
    ///
    /// The store is left unchanged whenever this is returned.
    #[error("{rule}: {kind} {id}")]
    Constraint {
        /// Kind of the entity the rule concerns.
        kind: EntityKind,
        /// Identifier of the entity the rule concerns.
        id: u64,
        /// The rule that was breached.
        rule: Rule,
    },

    /// An identifier did not resolve to a stored entity.
    #[error("no {kind} with id {id}")]
    NotFound {
        /// Kind that was looked up.
        kind: EntityKind,
        /// The identifier that did not resolve.
        id: u64,
    },
}

impl CurdError {
    /// Creates a validation error.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Creates a constraint violation error.
    pub fn constraint(kind: EntityKind, id: u64, rule: Rule) -> Self {
        Self::Constraint { kind, id, rule }
    }

    /// Creates a not-found error.
    pub fn not_found(kind: EntityKind, id: u64) -> Self {
        Self::NotFound { kind, id }
    }

    /// Returns the breached rule for constraint violations.
    pub fn rule(&self) -> Option<Rule> {
        match self {
            Self::Constraint { rule, .. } => Some(*rule),
            _ => None,
        }
    }
}
