//! Flutter-facing FFI bindings for Quotebook core.

pub mod api;
