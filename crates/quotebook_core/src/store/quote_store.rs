//! Immutable quote store and its builder.
//!
//! # Responsibility
//! - Keep quotes in insertion order.
//! - Derive the distinct topic list for quick-select surfaces.
//!
//! # Invariants
//! - Insertion order is preserved and is the only ordering exposed.
//! - Duplicate records are kept as independent entries.

use crate::model::quote::{Quote, QuoteValidationError};
use std::collections::HashSet;

/// Read-only access to an ordered quote dataset.
///
/// Services are generic over this trait so they stay independent from how
/// the dataset was built.
pub trait QuoteSource {
    /// Returns every quote in insertion order.
    fn quotes(&self) -> &[Quote];

    /// Returns distinct topics in first-occurrence order.
    fn all_topics(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.quotes()
            .iter()
            .map(Quote::topic)
            .filter(|topic| seen.insert(*topic))
            .collect()
    }
}

/// Fixed, ordered collection of quotes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteStore {
    quotes: Vec<Quote>,
}

impl QuoteStore {
    /// Starts an empty builder.
    pub fn builder() -> QuoteStoreBuilder {
        QuoteStoreBuilder::default()
    }

    /// Number of stored quotes.
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Returns whether the store holds no quotes.
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

impl QuoteSource for QuoteStore {
    fn quotes(&self) -> &[Quote] {
        &self.quotes
    }
}

impl<S: QuoteSource + ?Sized> QuoteSource for &S {
    fn quotes(&self) -> &[Quote] {
        (**self).quotes()
    }
}

/// Append-only builder for [`QuoteStore`].
#[derive(Debug, Default)]
pub struct QuoteStoreBuilder {
    quotes: Vec<Quote>,
}

impl QuoteStoreBuilder {
    /// Validates and appends one record.
    ///
    /// # Errors
    /// Returns the [`QuoteValidationError`] raised by [`Quote::new`]; the
    /// builder is left unchanged in that case.
    pub fn push(
        &mut self,
        topic: impl AsRef<str>,
        text: impl Into<String>,
    ) -> Result<&mut Self, QuoteValidationError> {
        self.quotes.push(Quote::new(topic, text)?);
        Ok(self)
    }

    /// Appends an already validated quote.
    pub fn push_quote(&mut self, quote: Quote) -> &mut Self {
        self.quotes.push(quote);
        self
    }

    /// Freezes the collected records into a store.
    pub fn build(self) -> QuoteStore {
        QuoteStore {
            quotes: self.quotes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{QuoteSource, QuoteStore};
    use crate::model::quote::QuoteValidationError;

    #[test]
    fn builder_preserves_insertion_order_and_duplicates() {
        let mut builder = QuoteStore::builder();
        builder
            .push("life", "first")
            .unwrap()
            .push("Life", "first")
            .unwrap()
            .push("wisdom", "second")
            .unwrap();
        let store = builder.build();

        assert_eq!(store.len(), 3);
        let texts = store.quotes().iter().map(|q| q.text()).collect::<Vec<_>>();
        assert_eq!(texts, vec!["first", "first", "second"]);
        assert_eq!(store.quotes()[0], store.quotes()[1]);
    }

    #[test]
    fn builder_rejects_invalid_record_without_appending() {
        let mut builder = QuoteStore::builder();
        builder.push("life", "kept").unwrap();
        let err = builder.push("", "dropped").unwrap_err();
        assert_eq!(err, QuoteValidationError::EmptyTopic);
        assert_eq!(builder.build().len(), 1);
    }

    #[test]
    fn all_topics_uses_first_occurrence_order() {
        let mut builder = QuoteStore::builder();
        for (topic, text) in [("b", "1"), ("a", "2"), ("B", "3"), ("c", "4"), ("a", "5")] {
            builder.push(topic, text).unwrap();
        }
        let store = builder.build();
        assert_eq!(store.all_topics(), vec!["b", "a", "c"]);
    }

    #[test]
    fn empty_store_has_no_topics() {
        let store = QuoteStore::default();
        assert!(store.is_empty());
        assert!(store.all_topics().is_empty());
    }
}
