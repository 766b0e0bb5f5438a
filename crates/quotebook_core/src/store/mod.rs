//! In-memory quote storage.
//!
//! # Responsibility
//! - Hold the static quote dataset for the lifetime of the process.
//! - Expose read-only access through the `QuoteSource` seam.
//!
//! # Invariants
//! - Records are appended only through `QuoteStoreBuilder`.
//! - A built store is never mutated.

pub mod builtin;
pub mod quote_store;
