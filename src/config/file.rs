//! Load and validate configuration from a TOML file.

use crate::generation::{GenerationRequest, DEFAULT_COUNT, DEFAULT_LENGTH};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configured password length was zero.
    #[error("generation.length must be at least 1")]
    InvalidLength,
    /// Configured password count was zero.
    #[error("generation.count must be at least 1")]
    InvalidCount,
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    FileRead(String),
    /// The file was not valid TOML for this schema.
    #[error("failed to parse config file: {0}")]
    Parse(String),
}

/// Top-level configuration file contents.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    /// Generation defaults applied before command-line overrides.
    #[serde(default)]
    pub generation: GenerationConfig,
}

/// The `[generation]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Length of each password in characters.
    pub length: usize,
    /// Number of passwords to produce.
    pub count: usize,
    /// Per-position mask text.
    pub mask: Option<String>,
    /// Characters to exclude from every position.
    pub restricted: Option<String>,
    /// Required minimum entropy in bits.
    pub min_entropy: Option<f64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            count: DEFAULT_COUNT,
            mask: None,
            restricted: None,
            min_entropy: None,
        }
    }
}

impl FileConfig {
    /// Loads configuration from a TOML file and validates it.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::FileRead(e.to_string()))?;
        let config: Self = toml::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;

        tracing::debug!(
            path = %path.display(),
            length = config.generation.length,
            count = config.generation.count,
            "loaded configuration file"
        );

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.generation.length == 0 {
            return Err(ConfigError::InvalidLength);
        }
        if self.generation.count == 0 {
            return Err(ConfigError::InvalidCount);
        }
        Ok(())
    }

    /// Converts the configured defaults into a generation request.
    pub fn to_request(&self) -> GenerationRequest {
        let mut request = GenerationRequest::new(self.generation.length, self.generation.count);
        if let Some(mask) = &self.generation.mask {
            request = request.with_mask(mask.clone());
        }
        if let Some(restricted) = &self.generation.restricted {
            request = request.with_restricted(restricted.clone());
        }
        if let Some(minimum) = self.generation.min_entropy {
            request = request.with_minimum_entropy(minimum);
        }
        request
    }
}
