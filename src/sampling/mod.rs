//! Uniform character draws from directive pools.
//!
//! One ChaCha20 stream, seeded from OS entropy at process start, backs
//! every draw in a run. Restricted characters are rejected and redrawn
//! under a bounded retry cap, the crate's only liveness guard.

mod sampler;
mod source;

pub use sampler::{CharacterSampler, SampleError, MAX_SAMPLE_ATTEMPTS};
pub use source::RandomSource;
