//! Case-insensitive exact topic matching.
//!
//! # Responsibility
//! - Filter a quote source by topic and truncate to a limit.
//! - Reject blank user input before it reaches the matcher.
//!
//! # Invariants
//! - Matching is exact after lowercasing both sides; no trimming or
//!   partial matching happens inside [`find_by_topic`].
//! - Results keep the source's insertion order.
//! - Result length never exceeds `limit`; `limit == 0` yields nothing.

use crate::model::quote::Quote;
use crate::store::quote_store::QuoteSource;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Number of quotes returned when the caller does not pick a limit.
pub const DEFAULT_RESULT_LIMIT: usize = 3;

/// Boundary error for user-supplied topic input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Input is empty after trimming surrounding whitespace.
    EmptyTopic,
}

impl Display for QueryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTopic => write!(f, "topic cannot be empty"),
        }
    }
}

impl Error for QueryError {}

/// Topic lookup options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicQuery {
    /// Topic to match, compared case-insensitively.
    pub topic: String,
    /// Maximum number of quotes to return.
    pub limit: usize,
}

impl TopicQuery {
    /// Creates a query with [`DEFAULT_RESULT_LIMIT`].
    ///
    /// The topic is used verbatim; use [`TopicQuery::parse`] for raw input.
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            limit: DEFAULT_RESULT_LIMIT,
        }
    }

    /// Parses user-entered text into a query.
    ///
    /// # Errors
    /// Returns [`QueryError::EmptyTopic`] when `raw` is blank.
    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(QueryError::EmptyTopic);
        }
        Ok(Self::new(trimmed))
    }

    /// Overrides the result limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// Returns up to `query.limit` quotes filed under `query.topic`.
///
/// Never fails: an unknown topic produces an empty list.
pub fn find_by_topic<'a, S>(source: &'a S, query: &TopicQuery) -> Vec<&'a Quote>
where
    S: QuoteSource + ?Sized,
{
    let hits = source
        .quotes()
        .iter()
        .filter(|quote| quote.matches_topic(&query.topic))
        .take(query.limit)
        .collect::<Vec<_>>();

    debug!(
        "event=topic_query module=search status=ok topic_len={} limit={} hits={}",
        query.topic.chars().count(),
        query.limit,
        hits.len()
    );
    hits
}

#[cfg(test)]
mod tests {
    use super::{find_by_topic, QueryError, TopicQuery, DEFAULT_RESULT_LIMIT};
    use crate::store::quote_store::QuoteStore;

    fn wisdom_store() -> QuoteStore {
        let mut builder = QuoteStore::builder();
        builder.push("wisdom", "w1").unwrap();
        builder.push("life", "l1").unwrap();
        builder.push("wisdom", "w2").unwrap();
        builder.push("wisdom", "w3").unwrap();
        builder.build()
    }

    #[test]
    fn new_uses_default_limit() {
        assert_eq!(TopicQuery::new("life").limit, DEFAULT_RESULT_LIMIT);
    }

    #[test]
    fn parse_trims_and_rejects_blank_input() {
        assert_eq!(TopicQuery::parse("  life \t").unwrap().topic, "life");
        assert_eq!(TopicQuery::parse("   ").unwrap_err(), QueryError::EmptyTopic);
        assert_eq!(TopicQuery::parse("").unwrap_err(), QueryError::EmptyTopic);
    }

    #[test]
    fn returns_matches_in_insertion_order() {
        let store = wisdom_store();
        let texts = find_by_topic(&store, &TopicQuery::new("wisdom"))
            .into_iter()
            .map(|q| q.text())
            .collect::<Vec<_>>();
        assert_eq!(texts, vec!["w1", "w2", "w3"]);
    }

    #[test]
    fn limit_truncates_and_zero_returns_nothing() {
        let store = wisdom_store();
        let two = find_by_topic(&store, &TopicQuery::new("wisdom").with_limit(2));
        assert_eq!(
            two.iter().map(|q| q.text()).collect::<Vec<_>>(),
            vec!["w1", "w2"]
        );
        assert!(find_by_topic(&store, &TopicQuery::new("wisdom").with_limit(0)).is_empty());
    }

    #[test]
    fn matcher_does_not_trim_or_match_partially() {
        let store = wisdom_store();
        assert!(find_by_topic(&store, &TopicQuery::new(" wisdom")).is_empty());
        assert!(find_by_topic(&store, &TopicQuery::new("wis")).is_empty());
        assert!(find_by_topic(&store, &TopicQuery::new("nonexistent")).is_empty());
    }
}
