//! Quote domain model.
//!
//! # Responsibility
//! - Define the immutable `{topic, text}` record.
//! - Normalize and validate record fields at construction time.
//!
//! # Invariants
//! - `topic` is trimmed, lowercase and non-empty.
//! - `text` is non-empty after trimming.
//! - Fields are private; there is no mutation API.

use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation errors raised when constructing a [`Quote`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteValidationError {
    /// Topic label is empty after trimming.
    EmptyTopic,
    /// Quote body is empty after trimming.
    EmptyText,
}

impl Display for QuoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTopic => write!(f, "quote topic cannot be empty"),
            Self::EmptyText => write!(f, "quote text cannot be empty"),
        }
    }
}

impl Error for QuoteValidationError {}

/// A quotation body labelled with a single topic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Quote {
    topic: String,
    text: String,
}

impl Quote {
    /// Creates a quote, lowercasing the topic label.
    ///
    /// Surrounding whitespace is stripped from `topic`; `text` is kept as
    /// given but must contain at least one non-whitespace character.
    ///
    /// # Errors
    /// - [`QuoteValidationError::EmptyTopic`] when `topic` is blank.
    /// - [`QuoteValidationError::EmptyText`] when `text` is blank.
    pub fn new(
        topic: impl AsRef<str>,
        text: impl Into<String>,
    ) -> Result<Self, QuoteValidationError> {
        let topic = topic.as_ref().trim();
        if topic.is_empty() {
            return Err(QuoteValidationError::EmptyTopic);
        }
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuoteValidationError::EmptyText);
        }

        Ok(Self {
            topic: topic.to_lowercase(),
            text,
        })
    }

    /// Lowercase topic label.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Quotation body.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns whether this quote is filed under `topic`, ignoring case.
    pub fn matches_topic(&self, topic: &str) -> bool {
        self.topic == topic.to_lowercase()
    }
}
