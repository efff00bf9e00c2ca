//! Sample command implementation
//!
//! Builds a single noise field and prints its value at the given points.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use heathaze_noise::{Noise2D, PerlinNoise2D};
use serde::Serialize;
use std::process::ExitCode;

#[derive(Debug, Serialize, PartialEq)]
struct SampleRow {
    x: f64,
    y: f64,
    value: f64,
}

/// Run the sample command
///
/// # Arguments
/// * `width`, `height` - Gradient grid dimensions
/// * `seed` - Field seed
/// * `points` - Points as `x,y` strings
/// * `json` - Print a JSON array instead of colored text
pub fn run(width: u32, height: u32, seed: u32, points: &[String], json: bool) -> Result<ExitCode> {
    let field = PerlinNoise2D::seeded(width, height, seed).context("Failed to build noise field")?;

    let rows = points
        .iter()
        .map(|p| {
            let (x, y) = parse_point(p)?;
            Ok(SampleRow {
                x,
                y,
                value: field.sample(x, y),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).context("Failed to serialize samples")?
        );
    } else {
        for row in &rows {
            println!(
                "{} ({}, {}) = {}",
                "sample".cyan().bold(),
                row.x,
                row.y,
                format!("{:+.6}", row.value).bold()
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Parse an `x,y` pair.
pub fn parse_point(text: &str) -> Result<(f64, f64)> {
    let Some((x, y)) = text.split_once(',') else {
        bail!("Expected a point as x,y, got: {}", text);
    };
    let x: f64 = x
        .trim()
        .parse()
        .with_context(|| format!("Invalid x coordinate in: {}", text))?;
    let y: f64 = y
        .trim()
        .parse()
        .with_context(|| format!("Invalid y coordinate in: {}", text))?;
    if !x.is_finite() || !y.is_finite() {
        bail!("Point must be finite: {}", text);
    }
    Ok((x, y))
}
