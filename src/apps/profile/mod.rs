//! Profile application
//!
//! The authenticated profile-edit flow: wire types, form reducer, load and
//! submit orchestration, the HTTP adapter, and the page component.

pub mod api;
pub mod components;
pub mod flow;
pub mod state;
pub mod types;
