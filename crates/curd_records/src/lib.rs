//! # CURD Records
//!
//! Flat, schema-validated record forms for the CURD entities, and the
//! [`Archive`] that converts a whole store to and from them.
//!
//! Records are the persistence boundary: outward conversion is lossless and
//! infallible; inward conversion re-validates every field and every
//! cross-entity reference before anything is admitted to the store, and
//! reseeds the identifier allocator from the highest identifier found per
//! kind. Actual file I/O belongs to the calling application; this crate
//! stops at JSON text.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod archive;
mod cheese;
mod customer;
mod error;
mod order;

pub use archive::Archive;
pub use cheese::CheeseRecord;
pub use customer::CustomerRecord;
pub use error::{RecordError, RecordResult};
pub use order::OrderRecord;

/// The date format used in persisted records.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub(crate) fn parse_date(
    entity: &'static str,
    field: &'static str,
    value: &str,
) -> RecordResult<chrono::NaiveDate> {
    chrono::NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
        RecordError::invalid_field(entity, field, format!("not a {DATE_FORMAT} date: {value:?}"))
    })
}

pub(crate) fn format_date(value: chrono::NaiveDate) -> String {
    value.format(DATE_FORMAT).to_string()
}
