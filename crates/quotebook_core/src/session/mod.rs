//! Caller-owned browse state.
//!
//! # Responsibility
//! - Track topic input, latest results and whether a search has run.
//! - Map that state to a render-ready view for any presentation layer.

pub mod browse;
