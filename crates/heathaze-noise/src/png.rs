//! Deterministic PNG writer for noise images.
//!
//! Uses fixed compression settings so a seeded noise image always encodes to
//! the same bytes.

use std::io::Write;
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

use crate::image::NoiseImage;

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// PNG export configuration.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level.
    pub compression: Compression,
    /// Row filter.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

impl PngConfig {
    /// Create config optimized for file size.
    pub fn best_compression() -> Self {
        Self {
            compression: Compression::Best,
            filter: FilterType::Paeth,
        }
    }

    /// Create config optimized for speed.
    pub fn fast() -> Self {
        Self {
            compression: Compression::Fast,
            filter: FilterType::NoFilter,
        }
    }
}

/// PNG color type for an image's channel count.
fn color_type(image: &NoiseImage) -> Result<ColorType, PngError> {
    match image.channels() {
        3 => Ok(ColorType::Rgb),
        4 => Ok(ColorType::Rgba),
        n => Err(PngError::InvalidDimensions(format!(
            "cannot encode a {}-channel noise image",
            n
        ))),
    }
}

/// Write a noise image to a PNG file.
pub fn write_image(image: &NoiseImage, path: &Path, config: &PngConfig) -> Result<(), PngError> {
    let file = std::fs::File::create(path)?;
    let mut writer = std::io::BufWriter::new(file);

    write_image_to_writer(image, &mut writer, config)?;
    writer.flush()?;
    Ok(())
}

/// Write a noise image to any writer.
///
/// Three-channel images are written as RGB, four-channel images as RGBA.
pub fn write_image_to_writer<W: Write>(
    image: &NoiseImage,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    let color = color_type(image)?;

    let mut encoder = Encoder::new(writer, image.width(), image.height());
    encoder.set_color(color);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    // The png crate doesn't add timestamps by default
    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&image.to_bytes())?;
    png_writer.finish()?;

    Ok(())
}

/// Compute the BLAKE3 hash of PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Encode to a `Vec<u8>` and return it with its hash.
pub fn write_image_to_vec_with_hash(
    image: &NoiseImage,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_image_to_writer(image, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}
