//! Quote lookup use-case service.
//!
//! # Responsibility
//! - Provide stable lookup entry points for session and FFI callers.
//! - Delegate data access to a [`QuoteSource`] implementation.
//!
//! # Invariants
//! - Service calls are pure reads; repeated calls return identical results.

use crate::model::quote::Quote;
use crate::search::topic::{find_by_topic, TopicQuery};
use crate::store::quote_store::{QuoteSource, QuoteStore};

/// Use-case wrapper for topic lookups.
#[derive(Debug, Clone)]
pub struct QuoteService<S: QuoteSource> {
    source: S,
}

impl<S: QuoteSource> QuoteService<S> {
    /// Creates a service over the provided source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Runs a prepared topic query.
    pub fn find(&self, query: &TopicQuery) -> Vec<&Quote> {
        find_by_topic(&self.source, query)
    }

    /// Returns up to `limit` quotes filed under `topic`.
    ///
    /// `topic` must already be trimmed by the caller.
    pub fn find_by_topic(&self, topic: &str, limit: usize) -> Vec<&Quote> {
        self.find(&TopicQuery::new(topic).with_limit(limit))
    }

    /// Returns distinct topics in first-occurrence order.
    pub fn all_topics(&self) -> Vec<&str> {
        self.source.all_topics()
    }
}

impl QuoteService<&'static QuoteStore> {
    /// Creates a service over the built-in dataset.
    pub fn builtin() -> Self {
        Self::new(QuoteStore::builtin())
    }
}
