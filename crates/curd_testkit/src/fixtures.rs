//! Canned store fixtures.

use crate::{CheeseBuilder, CustomerBuilder, OrderBuilder};
use chrono::NaiveDate;
use curd_core::{CheeseType, Customer, Inventory};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

/// Returns the customers used by [`typical_inventory`], with identifiers
/// 1 through 4.
#[must_use]
pub fn typical_customers() -> Vec<Customer> {
    vec![
        CustomerBuilder::new(1)
            .with_name("Amy Bee")
            .with_phone("94351253")
            .with_email("amy.bee@example.com")
            .with_address("Blk 30 Geylang Street 29")
            .with_tags(&["regular"])
            .build(),
        CustomerBuilder::new(2)
            .with_name("Bob Choo")
            .with_phone("98765432")
            .with_email("bob@cheese-works.com")
            .with_address("Blk 123 Bobby Street 3")
            .build(),
        CustomerBuilder::new(3)
            .with_name("Elle Meyer")
            .with_phone("94824224")
            .with_email("elle@example.com")
            .with_address("Michegan Ave")
            .build(),
        CustomerBuilder::new(4)
            .with_name("Daniel Meier")
            .with_phone("87652533")
            .with_email("daniel@example.com")
            .with_address("10th Street")
            .with_tags(&["wholesale"])
            .build(),
    ]
}

/// Builds a small populated store: four customers, five cheeses, and three
/// orders, one of them completed.
///
/// Cheese 1 (Brie) is assigned to order 1; cheese 3 (Gouda) is assigned to
/// the completed order 2. Cheeses 2, 4, and 5 are in stock.
#[must_use]
pub fn typical_inventory() -> Inventory {
    let customers = typical_customers();
    let cheeses = vec![
        CheeseBuilder::new(1).assigned().build(),
        CheeseBuilder::new(2).made_on(date(2021, 2, 1)).build(),
        CheeseBuilder::new(3)
            .with_type(CheeseType::Gouda)
            .assigned()
            .build(),
        CheeseBuilder::new(4)
            .with_type(CheeseType::Gouda)
            .expires_on(date(2022, 2, 1))
            .build(),
        CheeseBuilder::new(5)
            .with_type(CheeseType::Camembert)
            .matures_on(date(2021, 6, 1))
            .build(),
    ];
    let orders = vec![
        OrderBuilder::new(1, 1).with_cheeses(&[1]).build(),
        OrderBuilder::new(2, 2)
            .with_type(CheeseType::Gouda)
            .ordered_on(date(2021, 2, 10))
            .completed_on(date(2021, 2, 20))
            .with_cheeses(&[3])
            .build(),
        OrderBuilder::new(3, 3)
            .with_type(CheeseType::Camembert)
            .with_quantity(2)
            .build(),
    ];
    Inventory::from_parts(customers, cheeses, orders).expect("typical fixture is consistent")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typical_inventory_is_consistent() {
        let store = typical_inventory();
        assert!(store.verify().is_ok());
        assert_eq!(store.customers().len(), 4);
        assert_eq!(store.cheeses().len(), 5);
        assert_eq!(store.orders().len(), 3);
    }
}
