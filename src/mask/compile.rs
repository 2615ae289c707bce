//! Mask compilation and validation.

use super::MaskDirective;
use std::fmt;
use thiserror::Error;

/// Errors raised while compiling a mask.
#[derive(Debug, Error)]
pub enum MaskError {
    /// The mask does not have one character per password position.
    #[error("mask length {mask_length} does not match requested password length {expected}")]
    LengthMismatch {
        /// Number of characters in the mask text.
        mask_length: usize,
        /// Requested password length.
        expected: usize,
    },
    /// A mask character is not part of the grammar.
    #[error("invalid mask symbol {symbol:?} at position {position}")]
    InvalidSymbol {
        /// The offending character.
        symbol: char,
        /// Zero-based position within the mask.
        position: usize,
    },
}

/// A compiled mask: one directive per password position, in order.
///
/// Compiling the same text twice yields structurally identical
/// directive sequences; there is no hidden state.
#[derive(Debug, Clone)]
pub struct Mask {
    text: String,
    directives: Vec<MaskDirective>,
}

impl Mask {
    /// Compiles mask text against the requested password length.
    ///
    /// The length check runs first, then each character is mapped to
    /// its directive; the first invalid character fails compilation.
    pub fn compile(text: &str, expected_length: usize) -> Result<Self, MaskError> {
        let symbols: Vec<char> = text.chars().collect();
        if symbols.len() != expected_length {
            return Err(MaskError::LengthMismatch {
                mask_length: symbols.len(),
                expected: expected_length,
            });
        }

        let directives = symbols
            .iter()
            .enumerate()
            .map(|(position, &symbol)| {
                MaskDirective::from_symbol(symbol)
                    .ok_or(MaskError::InvalidSymbol { symbol, position })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            text: text.to_owned(),
            directives,
        })
    }

    /// The synthesized all-`*` mask used when no mask is supplied.
    pub fn any(length: usize) -> Self {
        Self {
            text: "*".repeat(length),
            directives: vec![MaskDirective::Any; length],
        }
    }

    /// The per-position directives, in mask order.
    pub fn directives(&self) -> &[MaskDirective] {
        &self.directives
    }

    /// The mask text this was compiled from.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.directives.len()
    }

    /// True for a zero-length mask.
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
