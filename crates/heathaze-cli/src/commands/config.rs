//! Config command implementation
//!
//! Prints the default noise image configuration as JSON.

use anyhow::{Context, Result};
use heathaze_noise::NoiseImageConfig;
use std::process::ExitCode;

/// Run the config command
pub fn run() -> Result<ExitCode> {
    println!("{}", render()?);
    Ok(ExitCode::SUCCESS)
}

fn render() -> Result<String> {
    serde_json::to_string_pretty(&NoiseImageConfig::default())
        .context("Failed to serialize default config")
}
