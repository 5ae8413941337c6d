//! Domain building blocks for the portfolio service.
//!
//! This crate has no I/O: identity and timestamp types, the shared error
//! type, the partial-update wrapper, and field validation for contacts and
//! projects. Both the store crate and the HTTP crate depend on it.

pub mod contact;
pub mod error;
pub mod patch;
pub mod project;
pub mod types;
pub mod validation;

/// Upper bound on records returned by any list operation.
pub const MAX_LIST_RESULTS: i64 = 1000;
