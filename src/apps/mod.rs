//! Feature applications
//!
//! Each app owns one resource and its screens. Only the profile app is
//! built out so far; the remaining dashboard screens mount placeholders
//! from the router.

pub mod profile;
