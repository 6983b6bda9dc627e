//! Composable fuzzy-matching predicates.
//!
//! A [`FieldPredicate`] both filters and ranks: `matches` decides membership
//! in a filtered view, while `score` is defined for every record (even
//! non-matching ones) so callers can report "no exact match, but here is the
//! closest". Single-field predicates test whether every query keyword is a
//! case-insensitive prefix of some whitespace-delimited word of the projected
//! field; composites AND their components and average their scores.
//!
//! Evaluation is a scan, O(words x keywords) per record; there is no index.

pub mod cheeses;
pub mod customers;
pub mod orders;

/// A filtering and ranking predicate over one entity kind.
pub trait FieldPredicate<T> {
    /// Returns true when the entity satisfies the predicate.
    fn matches(&self, entity: &T) -> bool;

    /// Similarity score in `[0, 1]`; 0 means no similarity.
    ///
    /// Defined even when [`FieldPredicate::matches`] is false. Exact-length
    /// keyword hits score at least as high as longer prefix hits, and
    /// matching more keywords never scores lower than matching fewer.
    fn score(&self, entity: &T) -> f64;

    /// Human-facing description, rendered in "N records found matching ..."
    /// messages.
    fn describe(&self) -> String;
}

/// Normalizes raw keywords: trim, case-fold, split on whitespace, and drop
/// empty or duplicate tokens, preserving first-seen order.
pub fn normalize_keywords<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut keywords: Vec<String> = Vec::new();
    for chunk in raw {
        for token in chunk.as_ref().split_whitespace() {
            let token = token.to_lowercase();
            if !keywords.contains(&token) {
                keywords.push(token);
            }
        }
    }
    keywords
}

/// Replaces the characters significant to email syntax (`@ . - _`) with
/// spaces, so that sub-parts of an address match as independent words.
///
/// Applied to the projected field value only, never to the keywords.
#[must_use]
pub fn split_email_words(value: &str) -> String {
    value.replace(['@', '.', '-', '_'], " ")
}

fn field_words(value: &str) -> Vec<String> {
    value.split_whitespace().map(str::to_lowercase).collect()
}

/// A fuzzy keyword predicate over one projected field of an entity.
pub struct SingleFieldPredicate<T> {
    label: &'static str,
    keywords: Vec<String>,
    project: Box<dyn Fn(&T) -> String>,
}

impl<T> SingleFieldPredicate<T> {
    /// Creates a predicate from a field label, raw keywords, and a field
    /// projection. Keywords are normalized here, once.
    pub fn new<I, S, F>(label: &'static str, keywords: I, project: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&T) -> String + 'static,
    {
        Self {
            label,
            keywords: normalize_keywords(keywords),
            project: Box::new(project),
        }
    }

    /// Returns the normalized keywords.
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl<T> FieldPredicate<T> for SingleFieldPredicate<T> {
    fn matches(&self, entity: &T) -> bool {
        let words = field_words(&(self.project)(entity));
        self.keywords
            .iter()
            .all(|keyword| words.iter().any(|word| word.starts_with(keyword)))
    }

    fn score(&self, entity: &T) -> f64 {
        if self.keywords.is_empty() {
            return 1.0;
        }
        let words = field_words(&(self.project)(entity));
        let total: f64 = self
            .keywords
            .iter()
            .map(|keyword| {
                let keyword_len = keyword.chars().count() as f64;
                words
                    .iter()
                    .filter(|word| word.starts_with(keyword))
                    .map(|word| keyword_len / word.chars().count() as f64)
                    .fold(0.0, f64::max)
            })
            .sum();
        total / self.keywords.len() as f64
    }

    fn describe(&self) -> String {
        format!("{} matching \"{}\"", self.label, self.keywords.join(" "))
    }
}

/// An ordered conjunction of predicates over the same entity kind.
///
/// Matches when every component matches (zero components match everything);
/// scores as the arithmetic mean of component scores.
pub struct CompositePredicate<T> {
    components: Vec<Box<dyn FieldPredicate<T>>>,
}

impl<T> CompositePredicate<T> {
    /// Creates a composite with no components, which matches every record.
    #[must_use]
    pub fn match_all() -> Self {
        Self {
            components: Vec::new(),
        }
    }

    /// Returns the number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns true when there are no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl<T> FieldPredicate<T> for CompositePredicate<T> {
    fn matches(&self, entity: &T) -> bool {
        self.components.iter().all(|p| p.matches(entity))
    }

    fn score(&self, entity: &T) -> f64 {
        if self.components.is_empty() {
            return 1.0;
        }
        let total: f64 = self.components.iter().map(|p| p.score(entity)).sum();
        total / self.components.len() as f64
    }

    fn describe(&self) -> String {
        if self.components.is_empty() {
            return "all records".to_string();
        }
        self.components
            .iter()
            .map(|p| p.describe())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Accumulates components and yields an immutable [`CompositePredicate`].
///
/// Composing zero predicates yields a working match-all composite.
pub struct CompositePredicateBuilder<T> {
    components: Vec<Box<dyn FieldPredicate<T>>>,
}

impl<T> CompositePredicateBuilder<T> {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
        }
    }

    /// Adds a component predicate.
    #[must_use]
    pub fn compose(mut self, predicate: impl FieldPredicate<T> + 'static) -> Self {
        self.components.push(Box::new(predicate));
        self
    }

    /// Builds the composite.
    #[must_use]
    pub fn build(self) -> CompositePredicate<T> {
        CompositePredicate {
            components: self.components,
        }
    }
}

impl<T> Default for CompositePredicateBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The distinguished always-true predicate: matches every record of any
/// entity kind with a perfect score.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchAll;

impl<T> FieldPredicate<T> for MatchAll {
    fn matches(&self, _entity: &T) -> bool {
        true
    }

    fn score(&self, _entity: &T) -> f64 {
        1.0
    }

    fn describe(&self) -> String {
        "all records".to_string()
    }
}

/// A predicate over a boolean property of an entity, such as an order's
/// completion status. Scores 1 on match and 0 otherwise.
pub struct StatusPredicate<T> {
    description: String,
    wanted: bool,
    status: fn(&T) -> bool,
}

impl<T> StatusPredicate<T> {
    /// Creates a status predicate from a description, the wanted status, and
    /// the property accessor.
    #[must_use]
    pub fn new(description: impl Into<String>, wanted: bool, status: fn(&T) -> bool) -> Self {
        Self {
            description: description.into(),
            wanted,
            status,
        }
    }
}

impl<T> FieldPredicate<T> for StatusPredicate<T> {
    fn matches(&self, entity: &T) -> bool {
        (self.status)(entity) == self.wanted
    }

    fn score(&self, entity: &T) -> f64 {
        if self.matches(entity) {
            1.0
        } else {
            0.0
        }
    }

    fn describe(&self) -> String {
        self.description.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_predicate(keywords: &[&str]) -> SingleFieldPredicate<String> {
        SingleFieldPredicate::new("name", keywords.iter().copied(), |s: &String| s.clone())
    }

    #[test]
    fn normalize_folds_trims_and_dedupes() {
        let keywords = normalize_keywords(["  Jo  ", "ann", "JO", ""]);
        assert_eq!(keywords, vec!["jo", "ann"]);
    }

    #[test]
    fn normalize_splits_multi_word_chunks() {
        let keywords = normalize_keywords(["amy bee"]);
        assert_eq!(keywords, vec!["amy", "bee"]);
    }

    #[test]
    fn keyword_is_a_prefix_of_a_whole_word() {
        let p = name_predicate(&["jo"]);
        assert!(p.matches(&"John Tan".to_string()));
        // "Jo" is itself a word, so the prefix test passes.
        assert!(p.matches(&"Ann Jo".to_string()));
        // Internal substring is not a word prefix.
        assert!(!p.matches(&"Daniel".to_string()));
    }

    #[test]
    fn all_keywords_must_match() {
        let p = name_predicate(&["jo", "tan"]);
        assert!(p.matches(&"John Tan".to_string()));
        assert!(!p.matches(&"John Lee".to_string()));
    }

    #[test]
    fn no_keywords_matches_everything() {
        let p = name_predicate(&[]);
        assert!(p.matches(&"anything".to_string()));
        assert_eq!(p.score(&"anything".to_string()), 1.0);
    }

    #[test]
    fn unmatched_keywords_score_zero() {
        let p = name_predicate(&["xyz"]);
        assert!(!p.matches(&"John Tan".to_string()));
        assert_eq!(p.score(&"John Tan".to_string()), 0.0);
    }

    #[test]
    fn exact_length_outranks_longer_prefix() {
        let p = name_predicate(&["jo"]);
        let exact = p.score(&"Jo".to_string());
        let longer = p.score(&"John".to_string());
        assert_eq!(exact, 1.0);
        assert!(longer < exact);
        assert!(longer > 0.0);
    }

    #[test]
    fn best_word_wins_per_keyword() {
        let p = name_predicate(&["jo"]);
        // "Jo" scores 1.0, "Jonathan" scores 0.25; the best is kept.
        assert_eq!(p.score(&"Jonathan Jo".to_string()), 1.0);
    }

    #[test]
    fn more_matched_keywords_never_rank_lower() {
        let p = name_predicate(&["jo", "tan"]);
        let both = p.score(&"Jo Tan".to_string());
        let one = p.score(&"Jo Lee".to_string());
        assert!(both > one);
    }

    #[test]
    fn email_words_split_on_special_characters() {
        assert_eq!(split_email_words("amy.bee@example.com"), "amy bee example com");
        let p = SingleFieldPredicate::new("email", ["bee"], |s: &String| split_email_words(s));
        assert!(p.matches(&"amy.bee@example.com".to_string()));
        assert!(!p.matches(&"amyandbee@example.com".to_string()));
    }

    #[test]
    fn empty_composite_matches_all_with_perfect_score() {
        let p: CompositePredicate<String> = CompositePredicateBuilder::new().build();
        assert!(p.is_empty());
        assert!(p.matches(&"anything".to_string()));
        assert_eq!(p.score(&"anything".to_string()), 1.0);
        assert_eq!(p.describe(), "all records");
    }

    #[test]
    fn composite_ands_components_and_averages_scores() {
        let p = CompositePredicateBuilder::new()
            .compose(name_predicate(&["jo"]))
            .compose(name_predicate(&["xyz"]))
            .build();
        assert_eq!(p.len(), 2);
        assert!(!p.matches(&"Jo".to_string()));
        // "jo" scores 1.0, "xyz" scores 0.0: mean 0.5.
        assert_eq!(p.score(&"Jo".to_string()), 0.5);
    }

    #[test]
    fn match_all_is_total() {
        let p = MatchAll;
        assert!(FieldPredicate::<String>::matches(&p, &"x".to_string()));
        assert_eq!(FieldPredicate::<String>::score(&p, &"x".to_string()), 1.0);
    }

    #[test]
    fn status_predicate_is_binary() {
        let p: StatusPredicate<String> =
            StatusPredicate::new("non-empty strings", true, |s: &String| !s.is_empty());
        assert!(p.matches(&"x".to_string()));
        assert!(!p.matches(&String::new()));
        assert_eq!(p.score(&String::new()), 0.0);
    }
}
