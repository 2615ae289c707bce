//! Bounded rejection sampling over class pools.

use crate::alphabet::CharacterUniverse;
use crate::mask::MaskDirective;
use crate::restriction::RestrictionSet;
use rand::Rng;
use rand_core::RngCore;
use thiserror::Error;

/// Retry cap for rejection sampling.
///
/// A heavily restricted class makes most draws invalid; the cap turns
/// an otherwise unbounded redraw loop into a terminal error naming the
/// class. Pre-validated restrictions cannot reach it.
pub const MAX_SAMPLE_ATTEMPTS: u32 = 1000;

/// Errors raised while drawing characters.
#[derive(Debug, Error)]
pub enum SampleError {
    /// Every draw over the class hit a restricted character.
    #[error("no allowed {class} character after {attempts} attempts")]
    RestrictionExhausted {
        /// The class whose draws were exhausted.
        class: MaskDirective,
        /// Draws made before giving up.
        attempts: u32,
    },
}

/// Draws uniformly random characters from directive pools.
///
/// Each draw picks a uniform index over the directive's pool (`rand`'s
/// uniform sampler is internally bias-free) and redraws while the
/// result is restricted, up to the retry cap.
pub struct CharacterSampler<'a> {
    universe: &'a CharacterUniverse,
    max_attempts: u32,
}

impl<'a> CharacterSampler<'a> {
    /// Creates a sampler over the universe with the default retry cap.
    pub fn new(universe: &'a CharacterUniverse) -> Self {
        Self {
            universe,
            max_attempts: MAX_SAMPLE_ATTEMPTS,
        }
    }

    /// Creates a sampler with a custom retry cap (floored at 1).
    pub fn with_max_attempts(universe: &'a CharacterUniverse, max_attempts: u32) -> Self {
        Self {
            universe,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Samples one character satisfying the directive and restriction.
    pub fn sample<R: RngCore>(
        &self,
        directive: MaskDirective,
        restriction: &RestrictionSet,
        rng: &mut R,
    ) -> Result<char, SampleError> {
        let pool = self.universe.members(directive);

        for _ in 0..self.max_attempts {
            let symbol = pool[rng.gen_range(0..pool.len())];
            if restriction.is_allowed(symbol) {
                return Ok(symbol);
            }
        }

        Err(SampleError::RestrictionExhausted {
            class: directive,
            attempts: self.max_attempts,
        })
    }
}
