//! The customer entity.

use crate::entity::fields::{Address, Email, Name, Phone, Tag};
use crate::id::CustomerId;
use std::collections::BTreeSet;
use std::fmt;

/// The identity-free data of a customer, as received from the command layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDetails {
    /// Display name.
    pub name: Name,
    /// Phone number.
    pub phone: Phone,
    /// Email address.
    pub email: Email,
    /// Postal address.
    pub address: Address,
    /// Free-text tags.
    pub tags: BTreeSet<Tag>,
}

/// An immutable customer record.
///
/// Edits go through the store and produce a replacement value with the same
/// identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id: CustomerId,
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: BTreeSet<Tag>,
}

impl Customer {
    /// Creates a customer from an allocated identifier and validated details.
    #[must_use]
    pub fn new(id: CustomerId, details: CustomerDetails) -> Self {
        Self {
            id,
            name: details.name,
            phone: details.phone,
            email: details.email,
            address: details.address,
            tags: details.tags,
        }
    }

    /// Returns the identifier.
    #[must_use]
    pub fn id(&self) -> CustomerId {
        self.id
    }

    /// Returns the name.
    #[must_use]
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Returns the phone number.
    #[must_use]
    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Returns the postal address.
    #[must_use]
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Returns the tags.
    #[must_use]
    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Returns the identity-free data of this customer.
    #[must_use]
    pub fn details(&self) -> CustomerDetails {
        CustomerDetails {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            tags: self.tags.clone(),
        }
    }

    /// Returns true when `other` counts as the same customer.
    ///
    /// Two customers are the same iff name, phone, email, and address are
    /// all equal; identifier and tags do not participate. This is the
    /// duplicate notion the store enforces on add and edit.
    #[must_use]
    pub fn is_same_customer(&self, other: &Customer) -> bool {
        self.matches_details(&other.details())
    }

    /// Returns true when this customer's identity fields equal `details`.
    #[must_use]
    pub fn matches_details(&self, details: &CustomerDetails) -> bool {
        self.name == details.name
            && self.phone == details.phone
            && self.email == details.email
            && self.address == details.address
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}",
            self.name, self.phone, self.email, self.address
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(name: &str, phone: &str) -> CustomerDetails {
        CustomerDetails {
            name: Name::parse(name).unwrap(),
            phone: Phone::parse(phone).unwrap(),
            email: Email::parse("amy@example.com").unwrap(),
            address: Address::parse("Blk 30 Geylang Street").unwrap(),
            tags: BTreeSet::new(),
        }
    }

    #[test]
    fn same_customer_ignores_id_and_tags() {
        let a = Customer::new(CustomerId::new(1), details("Amy Bee", "94351253"));
        let mut with_tags = details("Amy Bee", "94351253");
        with_tags.tags.insert(Tag::parse("vip").unwrap());
        let b = Customer::new(CustomerId::new(2), with_tags);
        assert!(a.is_same_customer(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn different_phone_is_a_different_customer() {
        let a = Customer::new(CustomerId::new(1), details("Amy Bee", "94351253"));
        let b = Customer::new(CustomerId::new(2), details("Amy Bee", "87654321"));
        assert!(!a.is_same_customer(&b));
    }
}
