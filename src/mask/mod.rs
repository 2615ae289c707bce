//! Mask parsing into per-position directives.
//!
//! A mask is a string with one character per password position, each
//! naming the class that position must draw from. Compilation is pure:
//! it validates length and symbols, and performs no sampling.

mod compile;
mod directive;

pub use compile::{Mask, MaskError};
pub use directive::MaskDirective;
