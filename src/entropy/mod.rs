//! Entropy estimation for mask-driven generation.
//!
//! Reports the information content of a generation policy as the sum
//! of per-position `log2(allowed)` bits, where `allowed` counts the
//! characters of each position's class that survive the restriction.

mod estimate;

pub use estimate::{EntropyError, EntropyEstimator, EntropyReport};
