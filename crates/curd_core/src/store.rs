//! The relational store owning the entity collections.
//!
//! [`Inventory`] is the sole owner and sole mutator of the customer, cheese,
//! and order collections. Every mutation validates against current state and
//! either commits fully or returns a typed failure leaving the store
//! unchanged. Reads hand out value snapshots; external components never hold
//! a live alias into the collections.

use crate::entity::{
    Cheese, CheeseDetails, Customer, CustomerDetails, Order, OrderDetails,
};
use crate::error::{CurdError, CurdResult, Rule};
use crate::id::{CheeseId, CustomerId, EntityKind, IdAllocator, OrderId};
use crate::predicate::FieldPredicate;
use chrono::NaiveDate;
use std::cmp::Ordering;
use tracing::debug;

/// The in-memory relational store.
///
/// Collections keep insertion order; filtered views preserve it unless
/// ranking is requested. Identifiers are issued by an allocator owned by the
/// store and seeded from persisted data on restore, so no identifier of a
/// kind is ever issued twice in a process.
#[derive(Debug, Default)]
pub struct Inventory {
    customers: Vec<Customer>,
    cheeses: Vec<Cheese>,
    orders: Vec<Order>,
    ids: IdAllocator,
}

impl Inventory {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a store from previously persisted entities.
    ///
    /// Verifies every cross-entity invariant (identifier uniqueness,
    /// duplicate customers, reference resolution, assignment consistency,
    /// completion rules) before admitting anything, then seeds the
    /// identifier allocator past the highest identifier of each kind.
    pub fn from_parts(
        customers: Vec<Customer>,
        cheeses: Vec<Cheese>,
        orders: Vec<Order>,
    ) -> CurdResult<Self> {
        let mut store = Self {
            customers,
            cheeses,
            orders,
            ids: IdAllocator::new(),
        };
        store.verify()?;
        let highest_customer = store.customers.iter().map(|c| c.id().get()).max().unwrap_or(0);
        let highest_cheese = store.cheeses.iter().map(|c| c.id().get()).max().unwrap_or(0);
        let highest_order = store.orders.iter().map(|o| o.id().get()).max().unwrap_or(0);
        store.ids.seed(EntityKind::Customer, highest_customer);
        store.ids.seed(EntityKind::Cheese, highest_cheese);
        store.ids.seed(EntityKind::Order, highest_order);
        debug!(
            customers = store.customers.len(),
            cheeses = store.cheeses.len(),
            orders = store.orders.len(),
            "restored inventory"
        );
        Ok(store)
    }

    // ---- customers ----

    /// Returns a snapshot of all customers in insertion order.
    #[must_use]
    pub fn customers(&self) -> Vec<Customer> {
        self.customers.clone()
    }

    /// Looks up a customer by identifier.
    #[must_use]
    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id() == id)
    }

    /// Adds a customer, allocating its identifier.
    ///
    /// Rejects a duplicate of an existing customer (same name, phone, email,
    /// and address).
    pub fn add_customer(&mut self, details: CustomerDetails) -> CurdResult<CustomerId> {
        if let Some(existing) = self.find_duplicate_customer(&details, None) {
            return Err(CurdError::constraint(
                EntityKind::Customer,
                existing.get(),
                Rule::DuplicateCustomer,
            ));
        }
        let id = CustomerId::new(self.ids.next(EntityKind::Customer));
        self.customers.push(Customer::new(id, details));
        debug!(customer = %id, "added customer");
        self.assert_consistent();
        Ok(id)
    }

    /// Replaces a customer's data, preserving identifier and position.
    pub fn replace_customer(&mut self, id: CustomerId, details: CustomerDetails) -> CurdResult<()> {
        let index = self
            .customers
            .iter()
            .position(|c| c.id() == id)
            .ok_or_else(|| CurdError::not_found(EntityKind::Customer, id.get()))?;
        if let Some(existing) = self.find_duplicate_customer(&details, Some(id)) {
            return Err(CurdError::constraint(
                EntityKind::Customer,
                existing.get(),
                Rule::DuplicateCustomer,
            ));
        }
        self.customers[index] = Customer::new(id, details);
        debug!(customer = %id, "replaced customer");
        self.assert_consistent();
        Ok(())
    }

    /// Deletes a customer.
    ///
    /// Rejects the deletion while any order still references the customer.
    pub fn delete_customer(&mut self, id: CustomerId) -> CurdResult<Customer> {
        let index = self
            .customers
            .iter()
            .position(|c| c.id() == id)
            .ok_or_else(|| CurdError::not_found(EntityKind::Customer, id.get()))?;
        if self.orders.iter().any(|o| o.customer_id() == id) {
            return Err(CurdError::constraint(
                EntityKind::Customer,
                id.get(),
                Rule::CustomerInUse,
            ));
        }
        let removed = self.customers.remove(index);
        debug!(customer = %id, "deleted customer");
        self.assert_consistent();
        Ok(removed)
    }

    /// Returns customers matching `predicate`, in insertion order.
    #[must_use]
    pub fn filtered_customers(&self, predicate: &dyn FieldPredicate<Customer>) -> Vec<Customer> {
        filtered(&self.customers, predicate)
    }

    /// Returns customers matching `predicate`, best score first.
    ///
    /// Ties keep their insertion order.
    #[must_use]
    pub fn find_customers(&self, predicate: &dyn FieldPredicate<Customer>) -> Vec<Customer> {
        ranked(&self.customers, predicate)
    }

    // ---- cheeses ----

    /// Returns a snapshot of all cheeses in insertion order.
    #[must_use]
    pub fn cheeses(&self) -> Vec<Cheese> {
        self.cheeses.clone()
    }

    /// Looks up a cheese by identifier.
    #[must_use]
    pub fn cheese(&self, id: CheeseId) -> Option<&Cheese> {
        self.cheeses.iter().find(|c| c.id() == id)
    }

    /// Adds a cheese unit, allocating its identifier.
    pub fn add_cheese(&mut self, details: CheeseDetails) -> CurdResult<CheeseId> {
        details.validate()?;
        let id = CheeseId::new(self.ids.next(EntityKind::Cheese));
        self.cheeses.push(Cheese::new(id, details)?);
        debug!(cheese = %id, "added cheese");
        self.assert_consistent();
        Ok(id)
    }

    /// Replaces a cheese's data, preserving identifier, assignment flag, and
    /// position.
    ///
    /// A cheese assigned to an order keeps serving that order, so its type
    /// may not change while assigned.
    pub fn replace_cheese(&mut self, id: CheeseId, details: CheeseDetails) -> CurdResult<()> {
        let index = self
            .cheeses
            .iter()
            .position(|c| c.id() == id)
            .ok_or_else(|| CurdError::not_found(EntityKind::Cheese, id.get()))?;
        let current = &self.cheeses[index];
        if current.is_assigned() && !current.is_same_type(&details.cheese_type) {
            return Err(CurdError::constraint(
                EntityKind::Cheese,
                id.get(),
                Rule::TypeMismatch,
            ));
        }
        self.cheeses[index] = Cheese::restore(id, details, current.is_assigned())?;
        debug!(cheese = %id, "replaced cheese");
        self.assert_consistent();
        Ok(())
    }

    /// Deletes a cheese.
    ///
    /// Rejects the deletion while the cheese is assigned to an order.
    pub fn delete_cheese(&mut self, id: CheeseId) -> CurdResult<Cheese> {
        let index = self
            .cheeses
            .iter()
            .position(|c| c.id() == id)
            .ok_or_else(|| CurdError::not_found(EntityKind::Cheese, id.get()))?;
        if self.cheeses[index].is_assigned() {
            return Err(CurdError::constraint(
                EntityKind::Cheese,
                id.get(),
                Rule::CheeseAssigned,
            ));
        }
        let removed = self.cheeses.remove(index);
        debug!(cheese = %id, "deleted cheese");
        self.assert_consistent();
        Ok(removed)
    }

    /// Returns cheeses matching `predicate`, in insertion order.
    #[must_use]
    pub fn filtered_cheeses(&self, predicate: &dyn FieldPredicate<Cheese>) -> Vec<Cheese> {
        filtered(&self.cheeses, predicate)
    }

    /// Returns cheeses matching `predicate`, best score first.
    #[must_use]
    pub fn find_cheeses(&self, predicate: &dyn FieldPredicate<Cheese>) -> Vec<Cheese> {
        ranked(&self.cheeses, predicate)
    }

    // ---- orders ----

    /// Returns a snapshot of all orders in insertion order.
    #[must_use]
    pub fn orders(&self) -> Vec<Order> {
        self.orders.clone()
    }

    /// Looks up an order by identifier.
    #[must_use]
    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.id() == id)
    }

    /// Adds an order, allocating its identifier.
    ///
    /// Rejects an order whose customer does not exist.
    pub fn add_order(&mut self, details: OrderDetails) -> CurdResult<OrderId> {
        if self.customer(details.customer_id).is_none() {
            return Err(CurdError::constraint(
                EntityKind::Customer,
                details.customer_id.get(),
                Rule::UnknownCustomer,
            ));
        }
        let id = OrderId::new(self.ids.next(EntityKind::Order));
        self.orders.push(Order::new(id, details));
        debug!(order = %id, "added order");
        self.assert_consistent();
        Ok(id)
    }

    /// Replaces an order's data, preserving identifier, completion state,
    /// and the assigned cheese set.
    ///
    /// The new quantity may not drop below the number of cheeses already
    /// assigned, and the type may not change while cheeses are assigned.
    pub fn replace_order(&mut self, id: OrderId, details: OrderDetails) -> CurdResult<()> {
        let index = self
            .orders
            .iter()
            .position(|o| o.id() == id)
            .ok_or_else(|| CurdError::not_found(EntityKind::Order, id.get()))?;
        if self.customer(details.customer_id).is_none() {
            return Err(CurdError::constraint(
                EntityKind::Customer,
                details.customer_id.get(),
                Rule::UnknownCustomer,
            ));
        }
        let current = &self.orders[index];
        if !current.cheeses().is_empty() && *current.cheese_type() != details.cheese_type {
            return Err(CurdError::constraint(
                EntityKind::Order,
                id.get(),
                Rule::TypeMismatch,
            ));
        }
        let replacement = Order::restore(
            id,
            details,
            current.completed_date(),
            current.cheeses().clone(),
        )?;
        self.orders[index] = replacement;
        debug!(order = %id, "replaced order");
        self.assert_consistent();
        Ok(())
    }

    /// Deletes an order.
    ///
    /// The cheeses it had assigned revert to unassigned so they can be
    /// reassigned or deleted.
    pub fn delete_order(&mut self, id: OrderId) -> CurdResult<Order> {
        let index = self
            .orders
            .iter()
            .position(|o| o.id() == id)
            .ok_or_else(|| CurdError::not_found(EntityKind::Order, id.get()))?;
        let removed = self.orders.remove(index);
        for cheese in self.cheeses.iter_mut() {
            if removed.cheeses().contains(&cheese.id()) {
                *cheese = cheese.unassign();
            }
        }
        debug!(order = %id, "deleted order");
        self.assert_consistent();
        Ok(removed)
    }

    /// Assigns a cheese to an order.
    ///
    /// Rejects the assignment if the cheese is already assigned, its type
    /// does not match the order's requested type, or the order already holds
    /// its requested quantity. On success the cheese's flag and the order's
    /// assigned set change together.
    pub fn assign_cheese(&mut self, order_id: OrderId, cheese_id: CheeseId) -> CurdResult<()> {
        let order_index = self
            .orders
            .iter()
            .position(|o| o.id() == order_id)
            .ok_or_else(|| CurdError::not_found(EntityKind::Order, order_id.get()))?;
        let cheese_index = self
            .cheeses
            .iter()
            .position(|c| c.id() == cheese_id)
            .ok_or_else(|| CurdError::not_found(EntityKind::Cheese, cheese_id.get()))?;

        {
            let order = &self.orders[order_index];
            let cheese = &self.cheeses[cheese_index];
            if cheese.is_assigned() {
                return Err(CurdError::constraint(
                    EntityKind::Cheese,
                    cheese_id.get(),
                    Rule::AlreadyAssigned,
                ));
            }
            if !cheese.is_same_type(order.cheese_type()) {
                return Err(CurdError::constraint(
                    EntityKind::Cheese,
                    cheese_id.get(),
                    Rule::TypeMismatch,
                ));
            }
            if order.cheeses().len() as u32 >= order.quantity().get() {
                return Err(CurdError::constraint(
                    EntityKind::Order,
                    order_id.get(),
                    Rule::QuantityFilled,
                ));
            }
        }

        let assigned = self.cheeses[cheese_index].assign_to_order();
        self.cheeses[cheese_index] = assigned;
        let updated = self.orders[order_index].with_cheese(cheese_id);
        self.orders[order_index] = updated;
        debug!(order = %order_id, cheese = %cheese_id, "assigned cheese to order");
        self.assert_consistent();
        Ok(())
    }

    /// Marks an order complete on `date`.
    ///
    /// Rejects completion if the order is already complete, has fewer
    /// cheeses assigned than requested, or `date` is not strictly after the
    /// order date.
    pub fn complete_order(&mut self, order_id: OrderId, date: NaiveDate) -> CurdResult<()> {
        let index = self
            .orders
            .iter()
            .position(|o| o.id() == order_id)
            .ok_or_else(|| CurdError::not_found(EntityKind::Order, order_id.get()))?;
        let order = &self.orders[index];
        if order.is_complete() {
            return Err(CurdError::constraint(
                EntityKind::Order,
                order_id.get(),
                Rule::AlreadyComplete,
            ));
        }
        if !order.has_full_assignment() {
            return Err(CurdError::constraint(
                EntityKind::Order,
                order_id.get(),
                Rule::UnderAssigned,
            ));
        }
        if date <= order.order_date() {
            return Err(CurdError::constraint(
                EntityKind::Order,
                order_id.get(),
                Rule::CompletionDate,
            ));
        }
        let updated = order.completed(date);
        self.orders[index] = updated;
        debug!(order = %order_id, %date, "completed order");
        self.assert_consistent();
        Ok(())
    }

    /// Returns orders matching `predicate`, in insertion order.
    #[must_use]
    pub fn filtered_orders(&self, predicate: &dyn FieldPredicate<Order>) -> Vec<Order> {
        filtered(&self.orders, predicate)
    }

    /// Returns orders matching `predicate`, best score first.
    #[must_use]
    pub fn find_orders(&self, predicate: &dyn FieldPredicate<Order>) -> Vec<Order> {
        ranked(&self.orders, predicate)
    }

    // ---- consistency ----

    /// Checks every cross-entity invariant of the current contents.
    ///
    /// Mutations perform targeted checks before committing; this is the full
    /// single-source-of-truth verification, used on restore and in debug
    /// assertions after every mutation.
    pub fn verify(&self) -> CurdResult<()> {
        self.verify_unique_ids()?;
        self.verify_customers()?;
        self.verify_orders()?;
        self.verify_assignment_flags()
    }

    fn verify_unique_ids(&self) -> CurdResult<()> {
        for (index, customer) in self.customers.iter().enumerate() {
            if self.customers[..index].iter().any(|c| c.id() == customer.id()) {
                return Err(CurdError::constraint(
                    EntityKind::Customer,
                    customer.id().get(),
                    Rule::DuplicateId,
                ));
            }
        }
        for (index, cheese) in self.cheeses.iter().enumerate() {
            if self.cheeses[..index].iter().any(|c| c.id() == cheese.id()) {
                return Err(CurdError::constraint(
                    EntityKind::Cheese,
                    cheese.id().get(),
                    Rule::DuplicateId,
                ));
            }
        }
        for (index, order) in self.orders.iter().enumerate() {
            if self.orders[..index].iter().any(|o| o.id() == order.id()) {
                return Err(CurdError::constraint(
                    EntityKind::Order,
                    order.id().get(),
                    Rule::DuplicateId,
                ));
            }
        }
        Ok(())
    }

    fn verify_customers(&self) -> CurdResult<()> {
        for (index, customer) in self.customers.iter().enumerate() {
            if self.customers[..index]
                .iter()
                .any(|c| c.is_same_customer(customer))
            {
                return Err(CurdError::constraint(
                    EntityKind::Customer,
                    customer.id().get(),
                    Rule::DuplicateCustomer,
                ));
            }
        }
        Ok(())
    }

    fn verify_orders(&self) -> CurdResult<()> {
        for order in &self.orders {
            if self.customer(order.customer_id()).is_none() {
                return Err(CurdError::constraint(
                    EntityKind::Customer,
                    order.customer_id().get(),
                    Rule::UnknownCustomer,
                ));
            }
            if order.cheeses().len() as u32 > order.quantity().get() {
                return Err(CurdError::constraint(
                    EntityKind::Order,
                    order.id().get(),
                    Rule::QuantityFilled,
                ));
            }
            if order.is_complete() && !order.has_full_assignment() {
                return Err(CurdError::constraint(
                    EntityKind::Order,
                    order.id().get(),
                    Rule::UnderAssigned,
                ));
            }
            if let Some(completed) = order.completed_date() {
                if completed <= order.order_date() {
                    return Err(CurdError::constraint(
                        EntityKind::Order,
                        order.id().get(),
                        Rule::CompletionDate,
                    ));
                }
            }
            for cheese_id in order.cheeses() {
                let Some(cheese) = self.cheese(*cheese_id) else {
                    return Err(CurdError::constraint(
                        EntityKind::Cheese,
                        cheese_id.get(),
                        Rule::UnknownCheese,
                    ));
                };
                if !cheese.is_same_type(order.cheese_type()) {
                    return Err(CurdError::constraint(
                        EntityKind::Cheese,
                        cheese_id.get(),
                        Rule::TypeMismatch,
                    ));
                }
            }
        }
        Ok(())
    }

    fn verify_assignment_flags(&self) -> CurdResult<()> {
        for cheese in &self.cheeses {
            let referencing = self
                .orders
                .iter()
                .filter(|o| o.cheeses().contains(&cheese.id()))
                .count();
            let consistent = if cheese.is_assigned() {
                referencing == 1
            } else {
                referencing == 0
            };
            if !consistent {
                return Err(CurdError::constraint(
                    EntityKind::Cheese,
                    cheese.id().get(),
                    Rule::AssignmentMismatch,
                ));
            }
        }
        Ok(())
    }

    fn find_duplicate_customer(
        &self,
        details: &CustomerDetails,
        skip: Option<CustomerId>,
    ) -> Option<CustomerId> {
        self.customers
            .iter()
            .find(|c| Some(c.id()) != skip && c.matches_details(details))
            .map(Customer::id)
    }

    #[cfg(debug_assertions)]
    fn assert_consistent(&self) {
        if let Err(err) = self.verify() {
            panic!("store invariant violated after mutation: {err}");
        }
    }

    #[cfg(not(debug_assertions))]
    fn assert_consistent(&self) {}
}

fn filtered<T: Clone>(items: &[T], predicate: &dyn FieldPredicate<T>) -> Vec<T> {
    items
        .iter()
        .filter(|item| predicate.matches(item))
        .cloned()
        .collect()
}

fn ranked<T: Clone>(items: &[T], predicate: &dyn FieldPredicate<T>) -> Vec<T> {
    let mut hits: Vec<(f64, &T)> = items
        .iter()
        .filter(|item| predicate.matches(item))
        .map(|item| (predicate.score(item), item))
        .collect();
    // Stable sort: ties keep their original relative order.
    hits.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    hits.into_iter().map(|(_, item)| item.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Address, CheeseType, Email, Name, Phone, Quantity, Tag};
    use std::collections::BTreeSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn customer_details(name: &str, phone: &str) -> CustomerDetails {
        CustomerDetails {
            name: Name::parse(name).unwrap(),
            phone: Phone::parse(phone).unwrap(),
            email: Email::parse("c@example.com").unwrap(),
            address: Address::parse("Blk 30").unwrap(),
            tags: BTreeSet::new(),
        }
    }

    fn brie_details() -> CheeseDetails {
        CheeseDetails {
            cheese_type: CheeseType::Brie,
            manufacture_date: date(2021, 1, 1),
            maturity_date: None,
            expiry_date: None,
        }
    }

    fn order_details(customer: CustomerId, quantity: u32) -> OrderDetails {
        OrderDetails {
            customer_id: customer,
            cheese_type: CheeseType::Brie,
            quantity: Quantity::new(quantity).unwrap(),
            order_date: date(2021, 3, 1),
        }
    }

    #[test]
    fn add_allocates_increasing_ids() {
        let mut store = Inventory::new();
        let a = store.add_customer(customer_details("Amy Bee", "94351253")).unwrap();
        let b = store.add_customer(customer_details("Bob Choo", "87654321")).unwrap();
        assert!(b.get() > a.get());
        assert_eq!(store.customers().len(), 2);
    }

    #[test]
    fn duplicate_customer_add_is_rejected() {
        let mut store = Inventory::new();
        store.add_customer(customer_details("Amy Bee", "94351253")).unwrap();
        let mut dup = customer_details("Amy Bee", "94351253");
        dup.tags.insert(Tag::parse("vip").unwrap());
        let err = store.add_customer(dup).unwrap_err();
        assert_eq!(err.rule(), Some(Rule::DuplicateCustomer));
        assert_eq!(store.customers().len(), 1);
    }

    #[test]
    fn replace_customer_keeps_identity_and_position() {
        let mut store = Inventory::new();
        let a = store.add_customer(customer_details("Amy Bee", "94351253")).unwrap();
        let b = store.add_customer(customer_details("Bob Choo", "87654321")).unwrap();
        store
            .replace_customer(a, customer_details("Amy Lee", "94351253"))
            .unwrap();
        let customers = store.customers();
        assert_eq!(customers[0].id(), a);
        assert_eq!(customers[0].name().as_str(), "Amy Lee");
        assert_eq!(customers[1].id(), b);
    }

    #[test]
    fn replace_customer_rejects_duplicate_of_another() {
        let mut store = Inventory::new();
        store.add_customer(customer_details("Amy Bee", "94351253")).unwrap();
        let b = store.add_customer(customer_details("Bob Choo", "87654321")).unwrap();
        let err = store
            .replace_customer(b, customer_details("Amy Bee", "94351253"))
            .unwrap_err();
        assert_eq!(err.rule(), Some(Rule::DuplicateCustomer));
    }

    #[test]
    fn replace_customer_to_itself_is_allowed() {
        let mut store = Inventory::new();
        let a = store.add_customer(customer_details("Amy Bee", "94351253")).unwrap();
        store
            .replace_customer(a, customer_details("Amy Bee", "94351253"))
            .unwrap();
    }

    #[test]
    fn delete_customer_referenced_by_order_fails() {
        let mut store = Inventory::new();
        let amy = store.add_customer(customer_details("Amy Bee", "94351253")).unwrap();
        store.add_order(order_details(amy, 1)).unwrap();
        let err = store.delete_customer(amy).unwrap_err();
        assert_eq!(err.rule(), Some(Rule::CustomerInUse));
        assert_eq!(store.customers().len(), 1);
    }

    #[test]
    fn delete_unreferenced_customer_succeeds() {
        let mut store = Inventory::new();
        let amy = store.add_customer(customer_details("Amy Bee", "94351253")).unwrap();
        let bob = store.add_customer(customer_details("Bob Choo", "87654321")).unwrap();
        let removed = store.delete_customer(amy).unwrap();
        assert_eq!(removed.id(), amy);
        let rest = store.customers();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].id(), bob);
    }

    #[test]
    fn add_order_requires_existing_customer() {
        let mut store = Inventory::new();
        let err = store.add_order(order_details(CustomerId::new(99), 1)).unwrap_err();
        assert_eq!(err.rule(), Some(Rule::UnknownCustomer));
        assert!(store.orders().is_empty());
    }

    #[test]
    fn delete_assigned_cheese_fails() {
        let mut store = Inventory::new();
        let amy = store.add_customer(customer_details("Amy Bee", "94351253")).unwrap();
        let order = store.add_order(order_details(amy, 1)).unwrap();
        let cheese = store.add_cheese(brie_details()).unwrap();
        store.assign_cheese(order, cheese).unwrap();
        let err = store.delete_cheese(cheese).unwrap_err();
        assert_eq!(err.rule(), Some(Rule::CheeseAssigned));
        assert_eq!(store.cheeses().len(), 1);
    }

    #[test]
    fn assign_rejects_type_mismatch() {
        let mut store = Inventory::new();
        let amy = store.add_customer(customer_details("Amy Bee", "94351253")).unwrap();
        let order = store.add_order(order_details(amy, 1)).unwrap();
        let gouda = store
            .add_cheese(CheeseDetails {
                cheese_type: CheeseType::Gouda,
                ..brie_details()
            })
            .unwrap();
        let err = store.assign_cheese(order, gouda).unwrap_err();
        assert_eq!(err.rule(), Some(Rule::TypeMismatch));
        assert!(!store.cheese(gouda).unwrap().is_assigned());
    }

    #[test]
    fn assign_rejects_already_assigned_cheese() {
        let mut store = Inventory::new();
        let amy = store.add_customer(customer_details("Amy Bee", "94351253")).unwrap();
        let first = store.add_order(order_details(amy, 1)).unwrap();
        let second = store.add_order(order_details(amy, 1)).unwrap();
        let cheese = store.add_cheese(brie_details()).unwrap();
        store.assign_cheese(first, cheese).unwrap();
        let err = store.assign_cheese(second, cheese).unwrap_err();
        assert_eq!(err.rule(), Some(Rule::AlreadyAssigned));
    }

    #[test]
    fn assign_rejects_filled_order() {
        let mut store = Inventory::new();
        let amy = store.add_customer(customer_details("Amy Bee", "94351253")).unwrap();
        let order = store.add_order(order_details(amy, 1)).unwrap();
        let a = store.add_cheese(brie_details()).unwrap();
        let b = store.add_cheese(brie_details()).unwrap();
        store.assign_cheese(order, a).unwrap();
        let err = store.assign_cheese(order, b).unwrap_err();
        assert_eq!(err.rule(), Some(Rule::QuantityFilled));
    }

    #[test]
    fn complete_requires_full_assignment_and_later_date() {
        let mut store = Inventory::new();
        let amy = store.add_customer(customer_details("Amy Bee", "94351253")).unwrap();
        let order = store.add_order(order_details(amy, 2)).unwrap();
        let a = store.add_cheese(brie_details()).unwrap();
        store.assign_cheese(order, a).unwrap();

        let err = store.complete_order(order, date(2021, 3, 5)).unwrap_err();
        assert_eq!(err.rule(), Some(Rule::UnderAssigned));

        let b = store.add_cheese(brie_details()).unwrap();
        store.assign_cheese(order, b).unwrap();

        let err = store.complete_order(order, date(2021, 3, 1)).unwrap_err();
        assert_eq!(err.rule(), Some(Rule::CompletionDate));

        store.complete_order(order, date(2021, 3, 5)).unwrap();
        assert!(store.order(order).unwrap().is_complete());

        let err = store.complete_order(order, date(2021, 3, 6)).unwrap_err();
        assert_eq!(err.rule(), Some(Rule::AlreadyComplete));
    }

    #[test]
    fn delete_order_unassigns_its_cheeses() {
        let mut store = Inventory::new();
        let amy = store.add_customer(customer_details("Amy Bee", "94351253")).unwrap();
        let order = store.add_order(order_details(amy, 1)).unwrap();
        let cheese = store.add_cheese(brie_details()).unwrap();
        store.assign_cheese(order, cheese).unwrap();
        assert!(store.cheese(cheese).unwrap().is_assigned());

        store.delete_order(order).unwrap();
        assert!(!store.cheese(cheese).unwrap().is_assigned());
        store.delete_cheese(cheese).unwrap();
    }

    #[test]
    fn replace_order_cannot_shrink_below_assigned() {
        let mut store = Inventory::new();
        let amy = store.add_customer(customer_details("Amy Bee", "94351253")).unwrap();
        let order = store.add_order(order_details(amy, 2)).unwrap();
        let a = store.add_cheese(brie_details()).unwrap();
        let b = store.add_cheese(brie_details()).unwrap();
        store.assign_cheese(order, a).unwrap();
        store.assign_cheese(order, b).unwrap();

        let err = store.replace_order(order, order_details(amy, 1)).unwrap_err();
        assert_eq!(err.rule(), Some(Rule::QuantityFilled));
        assert_eq!(store.order(order).unwrap().quantity().get(), 2);
    }

    #[test]
    fn replace_order_cannot_change_type_with_assignments() {
        let mut store = Inventory::new();
        let amy = store.add_customer(customer_details("Amy Bee", "94351253")).unwrap();
        let order = store.add_order(order_details(amy, 2)).unwrap();
        let a = store.add_cheese(brie_details()).unwrap();
        store.assign_cheese(order, a).unwrap();

        let err = store
            .replace_order(
                order,
                OrderDetails {
                    cheese_type: CheeseType::Gouda,
                    ..order_details(amy, 2)
                },
            )
            .unwrap_err();
        assert_eq!(err.rule(), Some(Rule::TypeMismatch));
    }

    #[test]
    fn from_parts_reseeds_the_allocator() {
        let customers = vec![Customer::new(
            CustomerId::new(7),
            customer_details("Amy Bee", "94351253"),
        )];
        let mut store = Inventory::from_parts(customers, Vec::new(), Vec::new()).unwrap();
        let next = store.add_customer(customer_details("Bob Choo", "87654321")).unwrap();
        assert!(next.get() > 7);
    }

    #[test]
    fn from_parts_rejects_dangling_order() {
        let orders = vec![Order::new(
            OrderId::new(1),
            order_details(CustomerId::new(42), 1),
        )];
        let err = Inventory::from_parts(Vec::new(), Vec::new(), orders).unwrap_err();
        assert_eq!(err.rule(), Some(Rule::UnknownCustomer));
    }

    #[test]
    fn from_parts_rejects_duplicate_ids() {
        let customers = vec![
            Customer::new(CustomerId::new(1), customer_details("Amy Bee", "94351253")),
            Customer::new(CustomerId::new(1), customer_details("Bob Choo", "87654321")),
        ];
        let err = Inventory::from_parts(customers, Vec::new(), Vec::new()).unwrap_err();
        assert_eq!(err.rule(), Some(Rule::DuplicateId));
    }

    #[test]
    fn from_parts_rejects_flag_disagreement() {
        let cheeses = vec![Cheese::restore(CheeseId::new(1), brie_details(), true).unwrap()];
        let err = Inventory::from_parts(Vec::new(), cheeses, Vec::new()).unwrap_err();
        assert_eq!(err.rule(), Some(Rule::AssignmentMismatch));
    }

    #[test]
    fn not_found_for_unknown_ids() {
        let mut store = Inventory::new();
        let err = store.delete_customer(CustomerId::new(1)).unwrap_err();
        assert!(matches!(err, CurdError::NotFound { .. }));
        let err = store.complete_order(OrderId::new(1), date(2021, 3, 5)).unwrap_err();
        assert!(matches!(err, CurdError::NotFound { .. }));
    }
}
