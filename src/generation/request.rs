//! Generation request parameters and validation.

use thiserror::Error;

/// Password length used when the caller gives none.
pub const DEFAULT_LENGTH: usize = 8;

/// Password count used when the caller gives none.
pub const DEFAULT_COUNT: usize = 1;

/// Errors raised while validating a request.
#[derive(Debug, Error)]
pub enum RequestError {
    /// Requested password length was zero.
    #[error("password length must be at least 1")]
    LengthZero,
    /// Requested password count was zero.
    #[error("password count must be at least 1")]
    CountZero,
}

/// Parameters for one generation run.
///
/// A request without a mask samples every position from the full
/// character universe, matching a mask of all `*`.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Length of each password in characters.
    pub length: usize,
    /// Number of passwords to produce.
    pub count: usize,
    /// Per-position mask text, if any.
    pub mask: Option<String>,
    /// Characters to exclude from every position, if any.
    pub restricted: Option<String>,
    /// Required minimum entropy in bits, if any.
    pub minimum_entropy: Option<f64>,
}

impl GenerationRequest {
    /// Creates a request for `count` passwords of `length` characters.
    pub fn new(length: usize, count: usize) -> Self {
        Self {
            length,
            count,
            mask: None,
            restricted: None,
            minimum_entropy: None,
        }
    }

    /// Sets the per-position mask.
    pub fn with_mask(mut self, mask: impl Into<String>) -> Self {
        self.mask = Some(mask.into());
        self
    }

    /// Sets the excluded characters.
    pub fn with_restricted(mut self, restricted: impl Into<String>) -> Self {
        self.restricted = Some(restricted.into());
        self
    }

    /// Sets the required minimum entropy in bits.
    pub fn with_minimum_entropy(mut self, bits: f64) -> Self {
        self.minimum_entropy = Some(bits);
        self
    }

    /// Checks the numeric parameters.
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.length == 0 {
            return Err(RequestError::LengthZero);
        }
        if self.count == 0 {
            return Err(RequestError::CountZero);
        }
        Ok(())
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH, DEFAULT_COUNT)
    }
}
