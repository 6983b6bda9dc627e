//! The persisted customer record.

use crate::{RecordError, RecordResult};
use curd_core::{Address, Customer, CustomerDetails, CustomerId, Email, Name, Phone, Tag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Flat form of a [`Customer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    /// Identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Phone number.
    pub phone: String,
    /// Email address.
    pub email: String,
    /// Postal address.
    pub address: String,
    /// Free-text tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<&Customer> for CustomerRecord {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id().get(),
            name: customer.name().as_str().to_string(),
            phone: customer.phone().as_str().to_string(),
            email: customer.email().as_str().to_string(),
            address: customer.address().as_str().to_string(),
            tags: customer.tags().iter().map(|t| t.as_str().to_string()).collect(),
        }
    }
}

impl CustomerRecord {
    /// Validates the record and converts it into a [`Customer`].
    pub fn try_into_customer(self) -> RecordResult<Customer> {
        if self.id == 0 {
            return Err(RecordError::invalid_field(
                "customer",
                "id",
                "must be positive",
            ));
        }
        let mut tags = BTreeSet::new();
        for tag in &self.tags {
            tags.insert(Tag::parse(tag)?);
        }
        Ok(Customer::new(
            CustomerId::new(self.id),
            CustomerDetails {
                name: Name::parse(&self.name)?,
                phone: Phone::parse(&self.phone)?,
                email: Email::parse(&self.email)?,
                address: Address::parse(&self.address)?,
                tags,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> CustomerRecord {
        CustomerRecord {
            id: 1,
            name: "Amy Bee".to_string(),
            phone: "94351253".to_string(),
            email: "amy@example.com".to_string(),
            address: "Blk 30 Geylang Street".to_string(),
            tags: vec!["regular".to_string()],
        }
    }

    #[test]
    fn valid_record_converts() {
        let customer = record().try_into_customer().unwrap();
        assert_eq!(customer.id().get(), 1);
        assert_eq!(customer.name().as_str(), "Amy Bee");
        assert_eq!(customer.tags().len(), 1);
    }

    #[test]
    fn zero_id_is_rejected() {
        let mut bad = record();
        bad.id = 0;
        assert!(bad.try_into_customer().is_err());
    }

    #[test]
    fn malformed_fields_are_rejected() {
        let mut bad = record();
        bad.phone = "12".to_string();
        assert!(bad.try_into_customer().is_err());

        let mut bad = record();
        bad.email = "not-an-email".to_string();
        assert!(bad.try_into_customer().is_err());

        let mut bad = record();
        bad.tags = vec!["two words".to_string()];
        assert!(bad.try_into_customer().is_err());
    }

    #[test]
    fn missing_tags_default_to_empty() {
        let json = r#"{"id":2,"name":"Bob Choo","phone":"98765432",
                       "email":"bob@example.com","address":"Blk 123"}"#;
        let record: CustomerRecord = serde_json::from_str(json).unwrap();
        assert!(record.try_into_customer().unwrap().tags().is_empty());
    }

    #[test]
    fn missing_required_field_fails_at_the_schema() {
        let json = r#"{"id":2,"name":"Bob Choo"}"#;
        assert!(serde_json::from_str::<CustomerRecord>(json).is_err());
    }
}
