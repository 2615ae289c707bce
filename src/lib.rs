//! Mask-Driven Password Generation Library
//!
//! Generates random passwords over a printable-ASCII character
//! universe, with a per-position mask grammar, character restrictions,
//! and exact entropy accounting.
//!
//! # Architecture
//!
//! The system follows an explicit data flow:
//!
//! ```text
//! request → mask + restriction → sampling → passwords
//!                   ↓
//!           entropy (estimation)
//! ```
//!
//! # Design Principles
//!
//! - **Mask-driven**: every position names its character class, `*` meaning any
//! - **Uniform draws**: rejection sampling over pools, never modulo bias
//! - **Fail-early**: impossible policies are rejected before a single draw
//! - **Deterministic when seeded**: ChaCha20 stream, injectable for tests
//!
//! # Example
//!
//! ```
//! use pgen::{GenerationRequest, PasswordGenerator, RandomSource};
//!
//! // Seeded source for reproducible output
//! let mut generator = PasswordGenerator::with_source(RandomSource::from_seed([7u8; 32]));
//!
//! let request = GenerationRequest::new(12, 3).with_mask("llllLLdds***");
//!
//! let passwords = generator.generate(&request).unwrap();
//! assert_eq!(passwords.len(), 3);
//!
//! let report = generator.estimate(&request).unwrap();
//! assert!(report.bits() > 50.0);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod alphabet;
pub mod config;
pub mod entropy;
pub mod generation;
pub mod mask;
pub mod restriction;
pub mod sampling;

// Re-export commonly used types at crate root
pub use alphabet::{CharClass, CharacterUniverse};
pub use config::FileConfig;
pub use entropy::{EntropyEstimator, EntropyReport};
pub use generation::{GenerationRequest, PasswordGenerator};
pub use mask::{Mask, MaskDirective};
pub use restriction::RestrictionSet;
pub use sampling::{CharacterSampler, RandomSource};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
