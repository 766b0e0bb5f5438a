//! FFI use-case API for UI-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Keep error semantics simple for UI integration.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Blank topics are rejected here and never reach core lookup.

use log::debug;
use quotebook_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Quote, QuoteService, TopicQuery, DEFAULT_RESULT_LIMIT,
};

const RESULT_LIMIT_MAX: u32 = 10;

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One quote as rendered by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteItem {
    /// Lowercase topic label.
    pub topic: String,
    /// Quotation body.
    pub text: String,
}

/// Response envelope for topic lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteSearchResponse {
    /// Matches in store order; empty when nothing matched or input was blank.
    pub items: Vec<QuoteItem>,
    /// Human-readable message for the result header.
    pub message: String,
    /// Effective applied limit.
    pub applied_limit: u32,
    /// `false` when the input was blank and no lookup ran.
    pub searched: bool,
}

/// Lists quick-select topics in first-occurrence order.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn list_topics() -> Vec<String> {
    QuoteService::builtin()
        .all_topics()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Finds quotes for a typed or quick-selected topic.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - `limit = None` applies the default of 3; larger values are clamped.
/// - `limit = Some(0)` returns no items and says so in `message`.
/// - Blank topics return `searched = false` without running a lookup.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn find_quotes(topic: String, limit: Option<u32>) -> QuoteSearchResponse {
    let applied_limit = normalize_limit(limit);
    let query = match TopicQuery::parse(&topic) {
        Ok(query) => query.with_limit(applied_limit as usize),
        Err(err) => {
            debug!("event=ffi_find_quotes module=ffi status=skipped reason=\"{err}\"");
            return QuoteSearchResponse {
                items: Vec::new(),
                message: "Enter a topic to search.".to_string(),
                applied_limit,
                searched: false,
            };
        }
    };

    let service = QuoteService::builtin();
    let items = service
        .find(&query)
        .into_iter()
        .map(to_quote_item)
        .collect::<Vec<_>>();
    let message = if applied_limit == 0 {
        format!("Limit is 0; no quotes shown for \"{}\"", query.topic)
    } else if items.is_empty() {
        format!("No quotes found for \"{}\"", query.topic)
    } else {
        format!("Quotes about \"{}\"", query.topic)
    };

    QuoteSearchResponse {
        items,
        message,
        applied_limit,
        searched: true,
    }
}

fn normalize_limit(limit: Option<u32>) -> u32 {
    match limit {
        Some(value) if value > RESULT_LIMIT_MAX => RESULT_LIMIT_MAX,
        Some(value) => value,
        None => DEFAULT_RESULT_LIMIT as u32,
    }
}

fn to_quote_item(quote: &Quote) -> QuoteItem {
    QuoteItem {
        topic: quote.topic().to_owned(),
        text: quote.text().to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::{core_version, find_quotes, init_logging, list_topics, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn list_topics_returns_builtin_categories() {
        assert_eq!(
            list_topics(),
            vec!["inspiration", "success", "life", "motivation", "wisdom"]
        );
    }

    #[test]
    fn find_quotes_applies_default_limit_and_trims_topic() {
        let response = find_quotes("  Success ".to_string(), None);
        assert!(response.searched);
        assert_eq!(response.applied_limit, 3);
        assert_eq!(response.items.len(), 3);
        assert!(response.items.iter().all(|item| item.topic == "success"));
        assert_eq!(response.message, "Quotes about \"Success\"");
    }

    #[test]
    fn find_quotes_clamps_limit_and_honors_small_limits() {
        assert_eq!(find_quotes("life".to_string(), Some(42)).applied_limit, 10);
        assert_eq!(find_quotes("life".to_string(), Some(1)).items.len(), 1);
    }

    #[test]
    fn find_quotes_with_zero_limit_mentions_limit() {
        let response = find_quotes("life".to_string(), Some(0));
        assert!(response.searched);
        assert!(response.items.is_empty());
        assert_eq!(response.applied_limit, 0);
        assert_eq!(response.message, "Limit is 0; no quotes shown for \"life\"");
    }

    #[test]
    fn find_quotes_reports_no_results_and_blank_input() {
        let missing = find_quotes("nonexistent".to_string(), None);
        assert!(missing.searched);
        assert!(missing.items.is_empty());
        assert_eq!(missing.message, "No quotes found for \"nonexistent\"");

        let blank = find_quotes("   ".to_string(), None);
        assert!(!blank.searched);
        assert!(blank.items.is_empty());
    }
}
