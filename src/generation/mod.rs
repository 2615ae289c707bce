//! Password generation.
//!
//! [`GenerationRequest`] captures what the caller wants (length, count,
//! mask, restriction, minimum entropy) and [`PasswordGenerator`] turns
//! a validated request into passwords by sampling each mask position
//! from its class pool.

mod generator;
mod request;

pub use generator::{GenerateError, PasswordGenerator};
pub use request::{GenerationRequest, RequestError, DEFAULT_COUNT, DEFAULT_LENGTH};
