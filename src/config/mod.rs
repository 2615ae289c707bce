//! TOML file configuration.

mod file;

pub use file::{ConfigError, FileConfig, GenerationConfig};
