//! Per-position entropy accounting.

use crate::alphabet::CharacterUniverse;
use crate::mask::{Mask, MaskDirective};
use crate::restriction::RestrictionSet;
use thiserror::Error;

/// Errors raised while estimating entropy.
#[derive(Debug, Error)]
pub enum EntropyError {
    /// A position's class has no characters left under the restriction.
    #[error("no allowed {class} characters remain at position {position}")]
    DegenerateClass {
        /// The class with an empty allowed set.
        class: MaskDirective,
        /// Zero-based mask position where it occurred.
        position: usize,
    },
}

/// Entropy of a generation policy, with an optional required minimum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntropyReport {
    bits: f64,
    minimum: Option<f64>,
}

impl EntropyReport {
    fn new(bits: f64) -> Self {
        Self {
            bits,
            minimum: None,
        }
    }

    /// Total entropy in bits.
    pub fn bits(&self) -> f64 {
        self.bits
    }

    /// The required minimum, if one was attached.
    pub fn minimum(&self) -> Option<f64> {
        self.minimum
    }

    /// Attaches a required minimum to compare against.
    pub fn with_minimum(mut self, minimum: f64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Whether the estimate meets the minimum. Trivially true when no
    /// minimum is attached.
    pub fn meets_minimum(&self) -> bool {
        self.minimum.map_or(true, |minimum| self.bits >= minimum)
    }
}

impl std::fmt::Display for EntropyReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.minimum {
            Some(minimum) => write!(
                f,
                "{:.2} bits (minimum {:.2}: {})",
                self.bits,
                minimum,
                if self.meets_minimum() {
                    "met"
                } else {
                    "not met"
                }
            ),
            None => write!(f, "{:.2} bits", self.bits),
        }
    }
}

/// Computes the entropy a policy yields per generated password.
///
/// Every position contributes `log2` of its allowed-character count,
/// so the total is exact for independent uniform draws rather than a
/// heuristic strength score.
pub struct EntropyEstimator<'a> {
    universe: &'a CharacterUniverse,
}

impl<'a> EntropyEstimator<'a> {
    /// Creates an estimator over the universe.
    pub fn new(universe: &'a CharacterUniverse) -> Self {
        Self { universe }
    }

    /// Estimates the entropy of one password drawn under the policy.
    pub fn estimate(
        &self,
        mask: &Mask,
        restriction: &RestrictionSet,
    ) -> Result<EntropyReport, EntropyError> {
        let mut bits = 0.0f64;

        for (position, &directive) in mask.directives().iter().enumerate() {
            let allowed = self
                .universe
                .members(directive)
                .iter()
                .filter(|&&symbol| restriction.is_allowed(symbol))
                .count();

            if allowed == 0 {
                return Err(EntropyError::DegenerateClass {
                    class: directive,
                    position,
                });
            }

            bits += (allowed as f64).log2();
        }

        Ok(EntropyReport::new(bits))
    }
}
