//! Core domain logic for Quotebook.
//! This crate is the single source of truth for quote lookup invariants.

pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod session;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::quote::{Quote, QuoteValidationError};
pub use search::topic::{find_by_topic, QueryError, TopicQuery, DEFAULT_RESULT_LIMIT};
pub use service::quote_service::QuoteService;
pub use session::browse::{BrowseSession, BrowseView};
pub use store::quote_store::{QuoteSource, QuoteStore, QuoteStoreBuilder};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
