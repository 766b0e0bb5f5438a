//! Topic lookup entry points.
//!
//! # Responsibility
//! - Resolve a topic string to a bounded, ordered list of quotes.
//! - Own the call-boundary validation for user-entered topics.

pub mod topic;
