//! sozo-web
//!
//! Browser frontend (WASM) for the Sozo blog platform.
//! - `apps` - feature applications (profile edit flow)
//! - `core` - session, notifications, config, errors, shared components
//! - `routes` - client-side route table
//!
//! All business logic (form reducer, validation, payload diffing, flows)
//! is target-independent and tested on the native host; only the thin view
//! layer touches the DOM.

pub mod app;
pub mod apps;
pub mod core;
pub mod routes;

pub use app::App;
