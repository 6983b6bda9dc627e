//! Entity builders with sensible defaults.
//!
//! Builders construct entity values directly, with explicit identifiers,
//! for tests that need full control. Tests exercising allocation go through
//! [`curd_core::Inventory`] instead.

use chrono::NaiveDate;
use curd_core::{
    Address, Cheese, CheeseDetails, CheeseId, CheeseType, Customer, CustomerDetails, CustomerId,
    Email, Name, Order, OrderDetails, OrderId, Phone, Quantity, Tag,
};
use std::collections::BTreeSet;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// Builds [`Customer`] values for tests.
#[derive(Debug, Clone)]
pub struct CustomerBuilder {
    id: u64,
    name: String,
    phone: String,
    email: String,
    address: String,
    tags: Vec<String>,
}

impl CustomerBuilder {
    /// Creates a builder with default customer data.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self {
            id,
            name: "Alice Pauline".to_string(),
            phone: "94351253".to_string(),
            email: "alice@example.com".to_string(),
            address: "123 Jurong West Ave 6".to_string(),
            tags: Vec::new(),
        }
    }

    /// Sets the name.
    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Sets the phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = phone.to_string();
        self
    }

    /// Sets the email address.
    #[must_use]
    pub fn with_email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    /// Sets the postal address.
    #[must_use]
    pub fn with_address(mut self, address: &str) -> Self {
        self.address = address.to_string();
        self
    }

    /// Sets the tags.
    #[must_use]
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| (*t).to_string()).collect();
        self
    }

    /// Builds the customer details without an identifier.
    #[must_use]
    pub fn details(&self) -> CustomerDetails {
        CustomerDetails {
            name: Name::parse(&self.name).expect("valid test name"),
            phone: Phone::parse(&self.phone).expect("valid test phone"),
            email: Email::parse(&self.email).expect("valid test email"),
            address: Address::parse(&self.address).expect("valid test address"),
            tags: self
                .tags
                .iter()
                .map(|t| Tag::parse(t).expect("valid test tag"))
                .collect::<BTreeSet<_>>(),
        }
    }

    /// Builds the customer.
    #[must_use]
    pub fn build(&self) -> Customer {
        Customer::new(CustomerId::new(self.id), self.details())
    }
}

/// Builds [`Cheese`] values for tests.
#[derive(Debug, Clone)]
pub struct CheeseBuilder {
    id: u64,
    cheese_type: CheeseType,
    manufacture_date: NaiveDate,
    maturity_date: Option<NaiveDate>,
    expiry_date: Option<NaiveDate>,
    assigned: bool,
}

impl CheeseBuilder {
    /// Creates a builder for an unassigned Brie made in early 2021.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self {
            id,
            cheese_type: CheeseType::Brie,
            manufacture_date: date(2021, 1, 10),
            maturity_date: None,
            expiry_date: None,
            assigned: false,
        }
    }

    /// Sets the cheese type.
    #[must_use]
    pub fn with_type(mut self, cheese_type: CheeseType) -> Self {
        self.cheese_type = cheese_type;
        self
    }

    /// Sets the manufacture date.
    #[must_use]
    pub fn made_on(mut self, date: NaiveDate) -> Self {
        self.manufacture_date = date;
        self
    }

    /// Sets the maturity date.
    #[must_use]
    pub fn matures_on(mut self, date: NaiveDate) -> Self {
        self.maturity_date = Some(date);
        self
    }

    /// Sets the expiry date.
    #[must_use]
    pub fn expires_on(mut self, date: NaiveDate) -> Self {
        self.expiry_date = Some(date);
        self
    }

    /// Marks the cheese as assigned to an order.
    #[must_use]
    pub fn assigned(mut self) -> Self {
        self.assigned = true;
        self
    }

    /// Builds the cheese details without an identifier.
    #[must_use]
    pub fn details(&self) -> CheeseDetails {
        CheeseDetails {
            cheese_type: self.cheese_type.clone(),
            manufacture_date: self.manufacture_date,
            maturity_date: self.maturity_date,
            expiry_date: self.expiry_date,
        }
    }

    /// Builds the cheese.
    #[must_use]
    pub fn build(&self) -> Cheese {
        Cheese::restore(CheeseId::new(self.id), self.details(), self.assigned)
            .expect("valid test cheese")
    }
}

/// Builds [`Order`] values for tests.
#[derive(Debug, Clone)]
pub struct OrderBuilder {
    id: u64,
    customer_id: u64,
    cheese_type: CheeseType,
    quantity: u32,
    order_date: NaiveDate,
    completed_date: Option<NaiveDate>,
    cheeses: Vec<u64>,
}

impl OrderBuilder {
    /// Creates a builder for an incomplete single-Brie order.
    #[must_use]
    pub fn new(id: u64, customer_id: u64) -> Self {
        Self {
            id,
            customer_id,
            cheese_type: CheeseType::Brie,
            quantity: 1,
            order_date: date(2021, 3, 1),
            completed_date: None,
            cheeses: Vec::new(),
        }
    }

    /// Sets the requested cheese type.
    #[must_use]
    pub fn with_type(mut self, cheese_type: CheeseType) -> Self {
        self.cheese_type = cheese_type;
        self
    }

    /// Sets the requested quantity.
    #[must_use]
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the order date.
    #[must_use]
    pub fn ordered_on(mut self, date: NaiveDate) -> Self {
        self.order_date = date;
        self
    }

    /// Marks the order complete on `date`.
    #[must_use]
    pub fn completed_on(mut self, date: NaiveDate) -> Self {
        self.completed_date = Some(date);
        self
    }

    /// Sets the assigned cheese identifiers.
    #[must_use]
    pub fn with_cheeses(mut self, cheeses: &[u64]) -> Self {
        self.cheeses = cheeses.to_vec();
        self
    }

    /// Builds the order details without an identifier.
    #[must_use]
    pub fn details(&self) -> OrderDetails {
        OrderDetails {
            customer_id: CustomerId::new(self.customer_id),
            cheese_type: self.cheese_type.clone(),
            quantity: Quantity::new(self.quantity).expect("valid test quantity"),
            order_date: self.order_date,
        }
    }

    /// Builds the order.
    #[must_use]
    pub fn build(&self) -> Order {
        Order::restore(
            OrderId::new(self.id),
            self.details(),
            self.completed_date,
            self.cheeses.iter().copied().map(CheeseId::new).collect(),
        )
        .expect("valid test order")
    }
}
