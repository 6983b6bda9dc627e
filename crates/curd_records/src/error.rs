//! Error types for record conversion.

use curd_core::CurdError;
use thiserror::Error;

/// Result type for record operations.
pub type RecordResult<T> = Result<T, RecordError>;

/// Errors raised while converting records to entities.
#[derive(Debug, Error)]
pub enum RecordError {
    /// A record field was malformed.
    #[error("{entity} record: invalid {field}: {message}")]
    InvalidField {
        /// Which record kind carried the field.
        entity: &'static str,
        /// The offending field.
        field: &'static str,
        /// What was wrong with it.
        message: String,
    },

    /// A field value or cross-entity rule was rejected by the core.
    ///
    /// Duplicate identifiers and dangling references detected while
    /// rebuilding the store surface here.
    #[error(transparent)]
    Core(#[from] CurdError),

    /// The archive text was not valid JSON for the expected schema.
    #[error("malformed archive: {0}")]
    Json(#[from] serde_json::Error),
}

impl RecordError {
    /// Creates an invalid-field error.
    pub fn invalid_field(
        entity: &'static str,
        field: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidField {
            entity,
            field,
            message: message.into(),
        }
    }
}
