//! Predicates over customers.

use crate::entity::Customer;
use crate::predicate::{split_email_words, MatchAll, SingleFieldPredicate};

/// Always-true predicate used to list all customers.
pub const SHOW_ALL_CUSTOMERS: MatchAll = MatchAll;

/// Keyword predicate over the customer's name.
pub fn by_name<I, S>(keywords: I) -> SingleFieldPredicate<Customer>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    SingleFieldPredicate::new("name", keywords, |c: &Customer| c.name().as_str().to_string())
}

/// Keyword predicate over the customer's phone number.
pub fn by_phone<I, S>(keywords: I) -> SingleFieldPredicate<Customer>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    SingleFieldPredicate::new("phone", keywords, |c: &Customer| {
        c.phone().as_str().to_string()
    })
}

/// Keyword predicate over the customer's email address.
///
/// The address is split on its punctuation so that keywords match its
/// sub-parts as independent words.
pub fn by_email<I, S>(keywords: I) -> SingleFieldPredicate<Customer>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    SingleFieldPredicate::new("email", keywords, |c: &Customer| {
        split_email_words(c.email().as_str())
    })
}

/// Keyword predicate over the customer's postal address.
pub fn by_address<I, S>(keywords: I) -> SingleFieldPredicate<Customer>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    SingleFieldPredicate::new("address", keywords, |c: &Customer| {
        c.address().as_str().to_string()
    })
}

/// Keyword predicate over the customer's tags, matched as one word each.
pub fn by_tag<I, S>(keywords: I) -> SingleFieldPredicate<Customer>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    SingleFieldPredicate::new("tags", keywords, |c: &Customer| {
        c.tags()
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    })
}
