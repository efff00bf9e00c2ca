//! Generate command implementation
//!
//! Builds a noise image and writes it as a PNG.

use anyhow::{Context, Result};
use colored::Colorize;
use heathaze_noise::png::{hash_png, write_image_to_writer, PngConfig};
use heathaze_noise::{DeterministicRng, NoiseImage, NoiseImageConfig};
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use tracing::info;

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub grid_width: Option<u32>,
    pub grid_height: Option<u32>,
    pub samples_per_node: Option<u32>,
    pub channels: Option<usize>,
    pub seed: Option<u32>,
}

/// Machine-readable summary printed with `--json`.
#[derive(Debug, Serialize)]
struct GenerateReport<'a> {
    output: &'a str,
    width: u32,
    height: u32,
    channels: usize,
    seed: u32,
    hash: String,
}

/// Run the generate command
///
/// # Arguments
/// * `config_path` - Optional JSON config file
/// * `overrides` - Flag values layered over the config
/// * `output` - Output PNG path
/// * `json` - Print a JSON report instead of colored text
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    config_path: Option<&str>,
    overrides: &Overrides,
    output: &str,
    json: bool,
) -> Result<ExitCode> {
    let mut config = resolve_config(config_path, overrides)?;

    // Record the seed actually used so the output can be reproduced.
    let seed = *config.seed.get_or_insert_with(DeterministicRng::entropy_seed);
    config.validate().context("Invalid noise config")?;

    if !json {
        println!(
            "{} {}x{} grid, {} samples/node, {} channels, seed {}",
            "Generating:".cyan().bold(),
            config.grid_width,
            config.grid_height,
            config.samples_per_node,
            config.channels,
            seed
        );
    }

    let image = NoiseImage::generate(&config).context("Failed to generate noise image")?;

    let mut data = Vec::new();
    write_image_to_writer(&image, &mut data, &PngConfig::default())
        .context("Failed to encode PNG")?;
    let hash = hash_png(&data);

    if let Some(parent) = Path::new(output).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }
    fs::write(output, &data).with_context(|| format!("Failed to write to: {}", output))?;
    info!(output, hash = %hash, "wrote noise image");

    if json {
        let report = GenerateReport {
            output,
            width: image.width(),
            height: image.height(),
            channels: image.channels(),
            seed,
            hash,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        );
    } else {
        println!(
            "{} {}x{} written to: {}",
            "SUCCESS".green().bold(),
            image.width(),
            image.height(),
            output
        );
        println!("  {} {}", "hash:".dimmed(), hash);
    }

    Ok(ExitCode::SUCCESS)
}

/// Load the config file (or defaults) and apply the flag overrides.
pub fn resolve_config(config_path: Option<&str>, overrides: &Overrides) -> Result<NoiseImageConfig> {
    let mut config = match config_path {
        Some(path) => NoiseImageConfig::from_path(Path::new(path))
            .with_context(|| format!("Failed to load config: {}", path))?,
        None => NoiseImageConfig::default(),
    };

    if let Some(v) = overrides.grid_width {
        config.grid_width = v;
    }
    if let Some(v) = overrides.grid_height {
        config.grid_height = v;
    }
    if let Some(v) = overrides.samples_per_node {
        config.samples_per_node = v;
    }
    if let Some(v) = overrides.channels {
        config.channels = v;
    }
    if overrides.seed.is_some() {
        config.seed = overrides.seed;
    }

    Ok(config)
}
