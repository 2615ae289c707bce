//! Mask-driven password generation.

use crate::alphabet::CharacterUniverse;
use crate::entropy::{EntropyError, EntropyEstimator, EntropyReport};
use crate::generation::request::{GenerationRequest, RequestError};
use crate::mask::{Mask, MaskError};
use crate::restriction::{RestrictionError, RestrictionSet};
use crate::sampling::{CharacterSampler, RandomSource, SampleError};
use std::time::Instant;
use thiserror::Error;

/// Errors raised while generating passwords.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The request's numeric parameters were invalid.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] RequestError),
    /// The mask failed to compile against the request.
    #[error("{0}")]
    Mask(#[from] MaskError),
    /// The restriction left a referenced class empty.
    #[error("{0}")]
    Restriction(#[from] RestrictionError),
    /// A draw loop exhausted its retry cap.
    #[error("{0}")]
    Sampling(#[from] SampleError),
    /// Entropy estimation found a degenerate position.
    #[error("{0}")]
    Entropy(#[from] EntropyError),
}

/// Generates passwords by sampling each mask position from its class.
///
/// The generator owns its random source so successive batches continue
/// one stream. Construct with [`PasswordGenerator::with_source`] and a
/// fixed seed to reproduce output.
pub struct PasswordGenerator {
    universe: CharacterUniverse,
    rng: RandomSource,
}

impl PasswordGenerator {
    /// Creates a generator over the default universe, seeded from the
    /// operating system.
    pub fn new() -> Self {
        Self::with_source(RandomSource::from_os_entropy())
    }

    /// Creates a generator over the default universe with the given
    /// random source.
    pub fn with_source(rng: RandomSource) -> Self {
        Self {
            universe: CharacterUniverse::default(),
            rng,
        }
    }

    /// Creates a generator over a custom universe.
    pub fn with_universe(universe: CharacterUniverse, rng: RandomSource) -> Self {
        Self { universe, rng }
    }

    /// The character universe this generator samples from.
    pub fn universe(&self) -> &CharacterUniverse {
        &self.universe
    }

    /// Generates the requested batch of passwords.
    ///
    /// The policy is checked up front; a restriction that empties a
    /// referenced class fails here rather than mid-batch.
    pub fn generate(&mut self, request: &GenerationRequest) -> Result<Vec<String>, GenerateError> {
        let (mask, restriction) = self.compile_policy(request)?;
        restriction.validate_against(&self.universe, &mask)?;

        let sampler = CharacterSampler::new(&self.universe);
        let started = Instant::now();
        let mut passwords = Vec::with_capacity(request.count);

        for _ in 0..request.count {
            let mut password = String::with_capacity(request.length);
            for &directive in mask.directives() {
                password.push(sampler.sample(directive, &restriction, &mut self.rng)?);
            }
            passwords.push(password);
        }

        tracing::debug!(
            count = request.count,
            length = request.length,
            elapsed_us = started.elapsed().as_micros() as u64,
            "generated password batch"
        );

        Ok(passwords)
    }

    /// Estimates the entropy one password drawn under the request
    /// would carry, without consuming randomness.
    pub fn estimate(&self, request: &GenerationRequest) -> Result<EntropyReport, GenerateError> {
        let (mask, restriction) = self.compile_policy(request)?;
        let estimator = EntropyEstimator::new(&self.universe);
        let mut report = estimator.estimate(&mask, &restriction)?;

        if let Some(minimum) = request.minimum_entropy {
            report = report.with_minimum(minimum);
        }

        Ok(report)
    }

    fn compile_policy(
        &self,
        request: &GenerationRequest,
    ) -> Result<(Mask, RestrictionSet), GenerateError> {
        request.validate()?;

        let mask = match &request.mask {
            Some(text) => Mask::compile(text, request.length)?,
            None => Mask::any(request.length),
        };
        let restriction = match &request.restricted {
            Some(excluded) => RestrictionSet::from_excluded(excluded),
            None => RestrictionSet::new(),
        };

        Ok((mask, restriction))
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::MaskDirective;
    use proptest::prelude::*;

    fn seeded_generator(seed: u8) -> PasswordGenerator {
        PasswordGenerator::with_source(RandomSource::from_seed([seed; 32]))
    }

    #[test]
    fn test_default_request_yields_one_password_of_eight() {
        let mut generator = seeded_generator(0x01);
        let passwords = generator.generate(&GenerationRequest::default()).unwrap();
        assert_eq!(passwords.len(), 1);
        assert_eq!(passwords[0].chars().count(), 8);
    }

    #[test]
    fn test_batch_honors_count_and_length() {
        let mut generator = seeded_generator(0x02);
        let passwords = generator.generate(&GenerationRequest::new(12, 5)).unwrap();
        assert_eq!(passwords.len(), 5);
        for password in &passwords {
            assert_eq!(password.chars().count(), 12);
        }
    }

    #[test]
    fn test_mask_positions_sample_their_classes() {
        let mut generator = seeded_generator(0x03);
        let request = GenerationRequest::new(6, 20).with_mask("lLds*?");
        let passwords = generator.generate(&request).unwrap();

        for password in &passwords {
            let symbols: Vec<char> = password.chars().collect();
            assert!(symbols[0].is_ascii_lowercase());
            assert!(symbols[1].is_ascii_uppercase());
            assert!(symbols[2].is_ascii_digit());
            assert!(!symbols[3].is_alphanumeric());
            assert!(generator.universe().contains(symbols[4]));
            assert!(!symbols[5].is_alphanumeric());
        }
    }

    #[test]
    fn test_restricted_characters_absent_from_output() {
        let mut generator = seeded_generator(0x04);
        let request = GenerationRequest::new(16, 30).with_restricted("aeiouAEIOU");
        let passwords = generator.generate(&request).unwrap();

        for password in &passwords {
            assert!(!password.chars().any(|symbol| "aeiouAEIOU".contains(symbol)));
        }
    }

    #[test]
    fn test_mask_length_mismatch_reports_both_lengths() {
        let mut generator = seeded_generator(0x05);
        let request = GenerationRequest::new(5, 1).with_mask("abc");
        let result = generator.generate(&request);

        assert!(matches!(
            result,
            Err(GenerateError::Mask(MaskError::LengthMismatch {
                mask_length: 3,
                expected: 5,
            }))
        ));
    }

    #[test]
    fn test_invalid_mask_symbol_reports_position() {
        let mut generator = seeded_generator(0x06);
        let request = GenerationRequest::new(3, 1).with_mask("la9");
        let result = generator.generate(&request);

        assert!(matches!(
            result,
            Err(GenerateError::Mask(MaskError::InvalidSymbol {
                symbol: '9',
                position: 2,
            }))
        ));
    }

    #[test]
    fn test_emptied_class_fails_before_sampling() {
        let mut generator = seeded_generator(0x07);
        let request = GenerationRequest::new(4, 1)
            .with_mask("llLl")
            .with_restricted("ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        let result = generator.generate(&request);

        assert!(matches!(
            result,
            Err(GenerateError::Restriction(RestrictionError::EmptyClass {
                class: MaskDirective::Uppercase,
            }))
        ));
        // The stream was never consumed.
        let mut untouched = seeded_generator(0x07);
        assert_eq!(
            generator.generate(&GenerationRequest::new(8, 1)).unwrap(),
            untouched.generate(&GenerationRequest::new(8, 1)).unwrap()
        );
    }

    #[test]
    fn test_estimate_reports_degenerate_class() {
        let generator = seeded_generator(0x08);
        let request = GenerationRequest::new(2, 1)
            .with_mask("dL")
            .with_restricted("ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        let result = generator.estimate(&request);

        assert!(matches!(
            result,
            Err(GenerateError::Entropy(EntropyError::DegenerateClass {
                class: MaskDirective::Uppercase,
                position: 1,
            }))
        ));
    }

    #[test]
    fn test_estimate_four_digits_misses_minimum_fourteen() {
        let generator = seeded_generator(0x09);
        let request = GenerationRequest::new(4, 1)
            .with_mask("dddd")
            .with_minimum_entropy(14.0);
        let report = generator.estimate(&request).unwrap();

        assert!((report.bits() - 4.0 * 10f64.log2()).abs() < 1e-9);
        assert!(!report.meets_minimum());
    }

    #[test]
    fn test_zero_length_rejected_as_invalid_request() {
        let mut generator = seeded_generator(0x0a);
        let result = generator.generate(&GenerationRequest::new(0, 1));
        assert!(matches!(
            result,
            Err(GenerateError::InvalidRequest(RequestError::LengthZero))
        ));
    }

    #[test]
    fn test_same_seed_reproduces_batch() {
        let request = GenerationRequest::new(10, 4).with_mask("lLds*?lLds");
        let first = seeded_generator(0x0b).generate(&request).unwrap();
        let second = seeded_generator(0x0b).generate(&request).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let request = GenerationRequest::new(16, 1);
        let first = seeded_generator(0x0c).generate(&request).unwrap();
        let second = seeded_generator(0x0d).generate(&request).unwrap();
        assert_ne!(first, second);
    }

    proptest! {
        #[test]
        fn prop_masked_output_stays_in_class(
            mask in "[*alLds?]{1,40}",
            seed in any::<[u8; 32]>(),
        ) {
            let mut generator =
                PasswordGenerator::with_source(RandomSource::from_seed(seed));
            let length = mask.chars().count();
            let request = GenerationRequest::new(length, 1).with_mask(mask.as_str());
            let passwords = generator.generate(&request).unwrap();

            prop_assert_eq!(passwords[0].chars().count(), length);
            for (mask_symbol, symbol) in mask.chars().zip(passwords[0].chars()) {
                let directive = MaskDirective::from_symbol(mask_symbol).unwrap();
                prop_assert!(generator.universe().members(directive).contains(&symbol));
            }
        }

        #[test]
        fn prop_restricted_symbols_never_appear(
            restricted in "[a-z0-9]{0,10}",
            seed in any::<[u8; 32]>(),
        ) {
            let mut generator =
                PasswordGenerator::with_source(RandomSource::from_seed(seed));
            let request = GenerationRequest::new(20, 1).with_restricted(restricted.as_str());
            let passwords = generator.generate(&request).unwrap();

            for symbol in passwords[0].chars() {
                prop_assert!(!restricted.contains(symbol));
            }
        }

        #[test]
        fn prop_estimate_matches_position_sum(length in 1usize..30) {
            let generator = PasswordGenerator::with_source(
                RandomSource::from_seed([0x5au8; 32]),
            );
            let report = generator
                .estimate(&GenerationRequest::new(length, 1))
                .unwrap();
            let expected = length as f64 * 95f64.log2();
            prop_assert!((report.bits() - expected).abs() < 1e-9);
        }
    }
}
