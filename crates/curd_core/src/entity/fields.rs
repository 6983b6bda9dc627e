//! Validated field value types shared by the entities.
//!
//! Each type parses from raw text exactly once, at the boundary that received
//! the text; the store never re-validates field contents.

use crate::error::{CurdError, CurdResult};
use std::fmt;

/// A person's display name: alphanumeric characters and spaces, non-empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(String);

impl Name {
    /// Parses a name, trimming surrounding whitespace.
    pub fn parse(value: &str) -> CurdResult<Self> {
        let value = value.trim();
        if value.is_empty() {
            return Err(CurdError::validation("name", "must not be empty"));
        }
        if !value.chars().all(|c| c.is_alphanumeric() || c == ' ') {
            return Err(CurdError::validation(
                "name",
                "only alphanumeric characters and spaces are allowed",
            ));
        }
        Ok(Self(value.to_string()))
    }

    /// Returns the name as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A phone number: digits only, at least three of them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Phone(String);

impl Phone {
    /// Parses a phone number, trimming surrounding whitespace.
    pub fn parse(value: &str) -> CurdResult<Self> {
        let value = value.trim();
        if value.len() < 3 || !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(CurdError::validation("phone", "at least 3 digits, digits only"));
        }
        Ok(Self(value.to_string()))
    }

    /// Returns the phone number as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An email address of the form `local@domain`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Email(String);

impl Email {
    /// Parses an email address, trimming surrounding whitespace.
    ///
    /// The local part must be non-empty; the domain must consist of
    /// non-empty dot-separated labels.
    pub fn parse(value: &str) -> CurdResult<Self> {
        let value = value.trim();
        let Some((local, domain)) = value.split_once('@') else {
            return Err(CurdError::validation("email", "missing '@'"));
        };
        if local.is_empty() || local.chars().any(char::is_whitespace) {
            return Err(CurdError::validation("email", "malformed local part"));
        }
        if domain.is_empty()
            || domain.contains('@')
            || domain.split('.').any(|label| {
                label.is_empty() || label.chars().any(char::is_whitespace)
            })
        {
            return Err(CurdError::validation("email", "malformed domain"));
        }
        Ok(Self(value.to_string()))
    }

    /// Returns the address as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A postal address: any non-empty text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(String);

impl Address {
    /// Parses an address, trimming surrounding whitespace.
    pub fn parse(value: &str) -> CurdResult<Self> {
        let value = value.trim();
        if value.is_empty() {
            return Err(CurdError::validation("address", "must not be empty"));
        }
        Ok(Self(value.to_string()))
    }

    /// Returns the address as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A free-text tag: one alphanumeric word.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(String);

impl Tag {
    /// Parses a tag, trimming surrounding whitespace.
    pub fn parse(value: &str) -> CurdResult<Self> {
        let value = value.trim();
        if value.is_empty() || !value.chars().all(char::is_alphanumeric) {
            return Err(CurdError::validation("tag", "one alphanumeric word"));
        }
        Ok(Self(value.to_string()))
    }

    /// Returns the tag as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A requested order quantity: a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(u32);

impl Quantity {
    /// Creates a quantity, rejecting zero.
    pub fn new(value: u32) -> CurdResult<Self> {
        if value == 0 {
            return Err(CurdError::validation("quantity", "must be positive"));
        }
        Ok(Self(value))
    }

    /// Returns the raw quantity.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A kind of cheese: one of the common varieties, or a validated free-form
/// name.
///
/// Parsing maps the fixed set case-insensitively, so `"brie"` and `"Brie"`
/// are the same type. Free-form names keep their spelling as entered and
/// compare exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CheeseType {
    /// Brie.
    Brie,
    /// Camembert.
    Camembert,
    /// Cheddar.
    Cheddar,
    /// Feta.
    Feta,
    /// Gouda.
    Gouda,
    /// Mozzarella.
    Mozzarella,
    /// Parmesan.
    Parmesan,
    /// Any other variety, validated as alphanumeric words and spaces.
    Other(String),
}

impl CheeseType {
    /// Parses a cheese type.
    pub fn parse(value: &str) -> CurdResult<Self> {
        let value = value.trim();
        if value.is_empty() {
            return Err(CurdError::validation("cheese type", "must not be empty"));
        }
        let known = match value.to_lowercase().as_str() {
            "brie" => Some(Self::Brie),
            "camembert" => Some(Self::Camembert),
            "cheddar" => Some(Self::Cheddar),
            "feta" => Some(Self::Feta),
            "gouda" => Some(Self::Gouda),
            "mozzarella" => Some(Self::Mozzarella),
            "parmesan" => Some(Self::Parmesan),
            _ => None,
        };
        if let Some(known) = known {
            return Ok(known);
        }
        if !value.chars().all(|c| c.is_alphanumeric() || c == ' ') {
            return Err(CurdError::validation(
                "cheese type",
                "only alphanumeric characters and spaces are allowed",
            ));
        }
        Ok(Self::Other(value.to_string()))
    }

    /// Returns the canonical display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Brie => "Brie",
            Self::Camembert => "Camembert",
            Self::Cheddar => "Cheddar",
            Self::Feta => "Feta",
            Self::Gouda => "Gouda",
            Self::Mozzarella => "Mozzarella",
            Self::Parmesan => "Parmesan",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for CheeseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
