//! Predicates over cheese units.

use crate::entity::Cheese;
use crate::predicate::{MatchAll, SingleFieldPredicate, StatusPredicate};

/// Always-true predicate used to list all cheeses.
pub const SHOW_ALL_CHEESES: MatchAll = MatchAll;

/// Keyword predicate over the cheese's type name.
pub fn by_type<I, S>(keywords: I) -> SingleFieldPredicate<Cheese>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    SingleFieldPredicate::new("cheese type", keywords, |c: &Cheese| {
        c.cheese_type().name().to_string()
    })
}

/// Predicate on the assignment status of a cheese.
pub fn by_assignment(assigned: bool) -> StatusPredicate<Cheese> {
    let description = if assigned {
        "assigned cheeses"
    } else {
        "unassigned cheeses"
    };
    StatusPredicate::new(description, assigned, Cheese::is_assigned)
}
