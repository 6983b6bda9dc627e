//! Property-based test generators using proptest.
//!
//! Strategies produce values through the same parsing constructors the
//! production code uses, so every generated value is valid by construction.

use chrono::{Duration, NaiveDate};
use curd_core::{
    Address, Cheese, CheeseDetails, CheeseId, CheeseType, Customer, CustomerDetails, CustomerId,
    Email, Name, Order, OrderDetails, OrderId, Phone, Quantity, Tag,
};
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Strategy for valid names.
pub fn name_strategy() -> impl Strategy<Value = Name> {
    prop::string::string_regex("[A-Za-z][A-Za-z0-9]{0,8}( [A-Za-z0-9]{1,8}){0,2}")
        .expect("valid regex")
        .prop_map(|s| Name::parse(&s).expect("generated name is valid"))
}

/// Strategy for valid phone numbers.
pub fn phone_strategy() -> impl Strategy<Value = Phone> {
    prop::string::string_regex("[0-9]{3,10}")
        .expect("valid regex")
        .prop_map(|s| Phone::parse(&s).expect("generated phone is valid"))
}

/// Strategy for valid email addresses.
pub fn email_strategy() -> impl Strategy<Value = Email> {
    prop::string::string_regex("[a-z]{1,8}(\\.[a-z]{1,4})?@[a-z]{1,8}\\.(com|org|net)")
        .expect("valid regex")
        .prop_map(|s| Email::parse(&s).expect("generated email is valid"))
}

/// Strategy for valid postal addresses.
pub fn address_strategy() -> impl Strategy<Value = Address> {
    prop::string::string_regex("[A-Za-z0-9][A-Za-z0-9 ,#-]{0,25}")
        .expect("valid regex")
        .prop_map(|s| Address::parse(&s).expect("generated address is valid"))
}

/// Strategy for valid tags.
pub fn tag_strategy() -> impl Strategy<Value = Tag> {
    prop::string::string_regex("[a-zA-Z0-9]{1,10}")
        .expect("valid regex")
        .prop_map(|s| Tag::parse(&s).expect("generated tag is valid"))
}

/// Strategy for cheese types, mixing the fixed set and free-form names.
pub fn cheese_type_strategy() -> impl Strategy<Value = CheeseType> {
    prop_oneof![
        Just(CheeseType::Brie),
        Just(CheeseType::Camembert),
        Just(CheeseType::Cheddar),
        Just(CheeseType::Feta),
        Just(CheeseType::Gouda),
        Just(CheeseType::Mozzarella),
        Just(CheeseType::Parmesan),
        prop::string::string_regex("[A-Za-z]{3,10}( [A-Za-z]{3,10})?")
            .expect("valid regex")
            .prop_map(|s| CheeseType::parse(&s).expect("generated cheese type is valid")),
    ]
}

/// Strategy for calendar dates between 2018 and 2025.
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2018i32..2026, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| {
        NaiveDate::from_ymd_opt(y, m, d).expect("generated date is valid")
    })
}

/// Strategy for whole customers with identifiers in 1..10000.
pub fn customer_strategy() -> impl Strategy<Value = Customer> {
    (
        1u64..10_000,
        name_strategy(),
        phone_strategy(),
        email_strategy(),
        address_strategy(),
        prop::collection::btree_set(tag_strategy(), 0..4),
    )
        .prop_map(|(id, name, phone, email, address, tags)| {
            Customer::new(
                CustomerId::new(id),
                CustomerDetails {
                    name,
                    phone,
                    email,
                    address,
                    tags,
                },
            )
        })
}

/// Strategy for whole cheeses with identifiers in 1..10000.
///
/// Maturity and expiry, when present, land on or after the manufacture
/// date, as the entity requires.
pub fn cheese_strategy() -> impl Strategy<Value = Cheese> {
    (
        1u64..10_000,
        cheese_type_strategy(),
        date_strategy(),
        prop::option::of(0i64..400),
        prop::option::of(0i64..700),
        any::<bool>(),
    )
        .prop_map(|(id, cheese_type, made, maturity_days, expiry_days, assigned)| {
            Cheese::restore(
                CheeseId::new(id),
                CheeseDetails {
                    cheese_type,
                    manufacture_date: made,
                    maturity_date: maturity_days.map(|d| made + Duration::days(d)),
                    expiry_date: expiry_days.map(|d| made + Duration::days(d)),
                },
                assigned,
            )
            .expect("generated cheese is valid")
        })
}

/// Strategy for whole orders with identifiers in 1..10000.
///
/// Completed orders carry a full assigned set and a completion date after
/// the order date; incomplete orders carry a partial set.
pub fn order_strategy() -> impl Strategy<Value = Order> {
    (
        1u64..10_000,
        1u64..10_000,
        cheese_type_strategy(),
        1u32..=5,
        date_strategy(),
        prop::option::of(1i64..200),
        prop::collection::btree_set(1u64..100_000, 0..5),
    )
        .prop_map(
            |(id, customer, cheese_type, quantity, ordered, completed_days, cheese_pool)| {
                let assigned: BTreeSet<CheeseId> = cheese_pool
                    .into_iter()
                    .take(if completed_days.is_some() {
                        quantity as usize
                    } else {
                        (quantity as usize).saturating_sub(1)
                    })
                    .map(CheeseId::new)
                    .collect();
                // A completed order needs exactly `quantity` cheeses; retry-free
                // generation just drops the completion when the pool was short.
                let completed = completed_days
                    .filter(|_| assigned.len() == quantity as usize)
                    .map(|d| ordered + Duration::days(d));
                Order::restore(
                    OrderId::new(id),
                    OrderDetails {
                        customer_id: CustomerId::new(customer),
                        cheese_type,
                        quantity: Quantity::new(quantity).expect("positive quantity"),
                        order_date: ordered,
                    },
                    completed,
                    assigned,
                )
                .expect("generated order is valid")
            },
        )
}
