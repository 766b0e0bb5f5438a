//! Built-in quote dataset.
//!
//! # Invariants
//! - Initialized lazily on first access, exactly once per process.
//! - Five topics, three quotes each, in the order listed below.

use crate::model::quote::Quote;
use crate::store::quote_store::QuoteStore;
use log::{debug, error};
use once_cell::sync::Lazy;

const BUILTIN_QUOTES: &[(&str, &str)] = &[
    (
        "inspiration",
        "The best way to get started is to quit talking and begin doing.",
    ),
    (
        "inspiration",
        "Don't let yesterday take up too much of today.",
    ),
    (
        "inspiration",
        "It's not whether you get knocked down, it's whether you get up.",
    ),
    (
        "success",
        "Success is not in what you have, but who you are.",
    ),
    (
        "success",
        "Success is walking from failure to failure with no loss of enthusiasm.",
    ),
    (
        "success",
        "The road to success and the road to failure are almost exactly the same.",
    ),
    (
        "life",
        "Life is what happens when you're busy making other plans.",
    ),
    ("life", "Get busy living or get busy dying."),
    (
        "life",
        "You only live once, but if you do it right, once is enough.",
    ),
    (
        "motivation",
        "The only way to do great work is to love what you do.",
    ),
    ("motivation", "Believe you can and you're halfway there."),
    (
        "motivation",
        "Don't watch the clock; do what it does. Keep going.",
    ),
    (
        "wisdom",
        "The only true wisdom is in knowing you know nothing.",
    ),
    ("wisdom", "Knowledge speaks, but wisdom listens."),
    (
        "wisdom",
        "The more you learn, the more you realize how much you don't know.",
    ),
];

static BUILTIN_STORE: Lazy<QuoteStore> = Lazy::new(|| {
    let mut builder = QuoteStore::builder();
    for (index, (topic, text)) in BUILTIN_QUOTES.iter().enumerate() {
        match Quote::new(topic, *text) {
            Ok(quote) => {
                builder.push_quote(quote);
            }
            Err(err) => {
                error!("event=store_init module=store status=error index={index} error={err}");
            }
        }
    }
    let store = builder.build();
    debug!(
        "event=store_init module=store status=ok quotes={}",
        store.len()
    );
    store
});

impl QuoteStore {
    /// Returns the process-wide built-in dataset.
    pub fn builtin() -> &'static QuoteStore {
        &BUILTIN_STORE
    }
}
