//! Browse session state machine.
//!
//! # Invariants
//! - `searched` is `false` until the first accepted submit or quick-select.
//! - Blank submits never touch results or the `searched` flag.
//! - `clear` restores the initial state.

use crate::model::quote::Quote;
use crate::search::topic::TopicQuery;
use crate::service::quote_service::QuoteService;
use crate::store::quote_store::QuoteSource;
use log::debug;

/// Render-ready projection of a [`BrowseSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseView<'a> {
    /// No search performed yet.
    Idle,
    /// A search ran and matched nothing.
    NoResults {
        /// Topic as entered by the user.
        topic: &'a str,
    },
    /// A search ran and matched at least one quote.
    Results {
        /// Topic as entered by the user.
        topic: &'a str,
        /// Matches in store order.
        quotes: &'a [Quote],
    },
}

/// Local UI state of a single quote browser.
#[derive(Debug, Clone)]
pub struct BrowseSession<S: QuoteSource> {
    service: QuoteService<S>,
    input: String,
    results: Vec<Quote>,
    searched: bool,
}

impl<S: QuoteSource> BrowseSession<S> {
    /// Creates an idle session.
    pub fn new(service: QuoteService<S>) -> Self {
        Self {
            service,
            input: String::new(),
            results: Vec::new(),
            searched: false,
        }
    }

    /// Current topic input, untrimmed.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replaces the topic input without searching.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Latest results.
    pub fn results(&self) -> &[Quote] {
        &self.results
    }

    /// Whether any search has run since creation or the last clear.
    pub fn searched(&self) -> bool {
        self.searched
    }

    /// Runs a search for the current input.
    ///
    /// Returns `false` and leaves state untouched when the input is blank.
    pub fn submit(&mut self) -> bool {
        match TopicQuery::parse(&self.input) {
            Ok(query) => {
                self.apply(&query);
                true
            }
            Err(err) => {
                debug!("event=browse_submit module=session status=skipped reason=\"{err}\"");
                false
            }
        }
    }

    /// Sets the input to `topic` and searches immediately.
    pub fn select_topic(&mut self, topic: &str) {
        self.input = topic.to_string();
        self.apply(&TopicQuery::new(topic));
    }

    /// Resets input, results and the searched flag.
    pub fn clear(&mut self) {
        self.input.clear();
        self.results.clear();
        self.searched = false;
    }

    /// Topics offered for quick-select.
    pub fn suggested_topics(&self) -> Vec<&str> {
        self.service.all_topics()
    }

    /// Projects the state into what a presentation layer should render.
    pub fn view(&self) -> BrowseView<'_> {
        if !self.searched {
            BrowseView::Idle
        } else if self.results.is_empty() {
            BrowseView::NoResults { topic: &self.input }
        } else {
            BrowseView::Results {
                topic: &self.input,
                quotes: &self.results,
            }
        }
    }

    fn apply(&mut self, query: &TopicQuery) {
        self.results = self
            .service
            .find(query)
            .into_iter()
            .cloned()
            .collect();
        self.searched = true;
        debug!(
            "event=browse_search module=session status=ok hits={}",
            self.results.len()
        );
    }
}
