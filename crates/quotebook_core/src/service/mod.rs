//! Core use-case services.
//!
//! # Responsibility
//! - Wrap quote sources into use-case level APIs.
//! - Keep UI/FFI layers decoupled from how the dataset is built.

pub mod quote_service;
