//! Caller-supplied character exclusions.
//!
//! A restriction set names symbols that must never appear in generated
//! output. Emptying a class the mask references is a policy error,
//! caught by validation before any sampling begins rather than
//! discovered through retry exhaustion.

mod filter;

pub use filter::{RestrictionError, RestrictionSet};
