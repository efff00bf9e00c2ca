//! Noise image configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::NoiseError;

/// Channel counts a noise image may have.
pub const SUPPORTED_CHANNELS: [usize; 2] = [3, 4];

/// Description of a noise image to generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoiseImageConfig {
    /// Gradient grid nodes along x; the texture's noise period horizontally.
    #[serde(default = "default_grid_size")]
    pub grid_width: u32,
    /// Gradient grid nodes along y.
    #[serde(default = "default_grid_size")]
    pub grid_height: u32,
    /// Pixels per gradient cell along each axis.
    #[serde(default = "default_samples_per_node")]
    pub samples_per_node: u32,
    /// Number of independent noise channels (3 = RGB, 4 = RGBA).
    #[serde(default = "default_channels")]
    pub channels: usize,
    /// Base seed. Each channel derives its own seed from it. Entropy when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
}

pub(crate) fn default_grid_size() -> u32 {
    16
}

pub(crate) fn default_samples_per_node() -> u32 {
    16
}

pub(crate) fn default_channels() -> usize {
    4
}

impl Default for NoiseImageConfig {
    fn default() -> Self {
        Self {
            grid_width: default_grid_size(),
            grid_height: default_grid_size(),
            samples_per_node: default_samples_per_node(),
            channels: default_channels(),
            seed: None,
        }
    }
}

impl NoiseImageConfig {
    /// Parse a config from JSON text.
    pub fn from_json(text: &str) -> Result<Self, NoiseError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a JSON config file.
    pub fn from_path(path: &Path) -> Result<Self, NoiseError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Output image size `(width, height)` in pixels.
    pub fn image_size(&self) -> Result<(u32, u32), NoiseError> {
        image_size(self.grid_width, self.grid_height, self.samples_per_node)
    }

    /// Check every field against the rules for building an image.
    pub fn validate(&self) -> Result<(), NoiseError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(NoiseError::InvalidDimensions {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        if self.samples_per_node == 0 {
            return Err(NoiseError::InvalidSamplesPerNode(self.samples_per_node));
        }
        if !SUPPORTED_CHANNELS.contains(&self.channels) {
            return Err(NoiseError::InvalidChannelCount(self.channels));
        }
        self.image_size()?;
        Ok(())
    }
}

/// Pixel size of an image covering a `grid_width x grid_height` lattice.
pub(crate) fn image_size(
    grid_width: u32,
    grid_height: u32,
    samples_per_node: u32,
) -> Result<(u32, u32), NoiseError> {
    let too_large = || NoiseError::ImageTooLarge {
        width: grid_width as u64 * samples_per_node as u64,
        height: grid_height as u64 * samples_per_node as u64,
    };
    let width = grid_width.checked_mul(samples_per_node).ok_or_else(too_large)?;
    let height = grid_height.checked_mul(samples_per_node).ok_or_else(too_large)?;
    Ok((width, height))
}
