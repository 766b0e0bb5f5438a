//! Domain model for the quote browser.
//!
//! # Responsibility
//! - Define the canonical quote record shared by store, search and session.
//!
//! # Invariants
//! - A `Quote` is immutable once constructed.
//! - Topics are stored lowercase; text is never blank.

pub mod quote;
