//! Mask-Driven Password Generation CLI
//!
//! Command-line interface around the generation core: flags and an
//! optional TOML configuration file merge into one request, the policy
//! entropy is checked against the requested minimum, and passwords are
//! written one per line to stdout.

use clap::Parser;
use pgen::{
    config::FileConfig,
    generation::{GenerateError, GenerationRequest, PasswordGenerator},
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pgen", version, about = "Mask-driven password generator")]
struct Cli {
    /// Length of each password in characters.
    #[arg(short = 'l', long)]
    length: Option<usize>,

    /// Number of passwords to generate.
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Per-position mask: `*` or `a` any, `l` lowercase, `L` uppercase,
    /// `d` digit, `s` symbol, `?` symbol including whitespace.
    #[arg(short = 'm', long)]
    mask: Option<String>,

    /// Characters that must not appear in any password.
    #[arg(short = 'r', long)]
    restricted: Option<String>,

    /// Minimum acceptable entropy in bits; refuse to generate below it.
    #[arg(long)]
    min_entropy: Option<f64>,

    /// TOML configuration file supplying defaults for the flags above.
    #[arg(short = 'f', long)]
    config_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // Logging goes to stderr; stdout carries only passwords.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut request = match &cli.config_file {
        Some(path) => match FileConfig::from_file(path) {
            Ok(config) => config.to_request(),
            Err(e) => {
                eprintln!("pgen: {}", e);
                std::process::exit(2);
            }
        },
        None => GenerationRequest::default(),
    };

    // Command-line flags override file values.
    if let Some(length) = cli.length {
        request.length = length;
    }
    if let Some(count) = cli.count {
        request.count = count;
    }
    if let Some(mask) = cli.mask {
        request.mask = Some(mask);
    }
    if let Some(restricted) = cli.restricted {
        request.restricted = Some(restricted);
    }
    if let Some(minimum) = cli.min_entropy {
        request.minimum_entropy = Some(minimum);
    }

    let mut generator = PasswordGenerator::new();

    let report = match generator.estimate(&request) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("pgen: {}", e);
            std::process::exit(exit_code(&e));
        }
    };

    if request.minimum_entropy.is_some() {
        eprintln!("entropy: {}", report);
        if !report.meets_minimum() {
            eprintln!("pgen: policy entropy is below the requested minimum");
            std::process::exit(3);
        }
    }

    match generator.generate(&request) {
        Ok(passwords) => {
            for password in &passwords {
                println!("{}", password);
            }
        }
        Err(e) => {
            eprintln!("pgen: {}", e);
            std::process::exit(exit_code(&e));
        }
    }
}

/// One exit-code family per error kind: 2 validation, 3 policy, 4 sampling.
fn exit_code(error: &GenerateError) -> i32 {
    match error {
        GenerateError::InvalidRequest(_) | GenerateError::Mask(_) => 2,
        GenerateError::Restriction(_) | GenerateError::Entropy(_) => 3,
        GenerateError::Sampling(_) => 4,
    }
}
