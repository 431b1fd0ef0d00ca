//! Cross-cutting concerns shared by every screen
//!
//! - `config` - API endpoint configuration
//! - `error` - HTTP adapter error taxonomy
//! - `format` - display date formatting
//! - `logging` - wasm/native log macros
//! - `notify` - toast notifications
//! - `session` - injectable session state
//! - `components` - shared chrome and form scaffolding

pub mod components;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod notify;
pub mod session;
