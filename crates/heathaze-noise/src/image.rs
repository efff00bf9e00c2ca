//! Multi-channel noise images.
//!
//! A [`NoiseImage`] holds one independent noise field per color channel,
//! sampled on a dense regular grid and mapped from `[-1, 1]` to `[0, 1]`.
//! Because each field is periodic over its lattice and the image covers
//! exactly one period, the image tiles seamlessly on both axes.

use rayon::prelude::*;
use tracing::debug;

use crate::config::{image_size, NoiseImageConfig, SUPPORTED_CHANNELS};
use crate::error::NoiseError;
use crate::noise::{lerp, tile_coord, Noise2D, PerlinNoise2D};
use crate::rng::DeterministicRng;

/// A packed noise texture, one plane per channel.
#[derive(Debug, Clone)]
pub struct NoiseImage {
    width: u32,
    height: u32,
    samples_per_node: u32,
    /// One row-major plane per channel, values in [0, 1].
    planes: Vec<Vec<f64>>,
}

impl NoiseImage {
    /// Pack the given fields into an image, one channel per field.
    ///
    /// The image is `field.width() * samples_per_node` pixels wide and
    /// `field.height() * samples_per_node` pixels tall.
    pub fn from_fields(
        fields: &[PerlinNoise2D],
        samples_per_node: u32,
    ) -> Result<Self, NoiseError> {
        if samples_per_node == 0 {
            return Err(NoiseError::InvalidSamplesPerNode(samples_per_node));
        }
        if !SUPPORTED_CHANNELS.contains(&fields.len()) {
            return Err(NoiseError::InvalidChannelCount(fields.len()));
        }

        let expected = (fields[0].width(), fields[0].height());
        if let Some(field) = fields
            .iter()
            .find(|f| (f.width(), f.height()) != expected)
        {
            return Err(NoiseError::MismatchedFields {
                expected,
                actual: (field.width(), field.height()),
            });
        }

        let (width, height) = image_size(expected.0, expected.1, samples_per_node)?;
        let step = 1.0 / samples_per_node as f64;

        let planes = fields
            .par_iter()
            .map(|field| {
                let mut plane = Vec::with_capacity(width as usize * height as usize);
                for row in 0..height {
                    let y = row as f64 * step;
                    for col in 0..width {
                        plane.push(field.sample_01(col as f64 * step, y));
                    }
                }
                plane
            })
            .collect();

        debug!(
            width,
            height,
            channels = fields.len(),
            samples_per_node,
            "packed noise image"
        );

        Ok(Self {
            width,
            height,
            samples_per_node,
            planes,
        })
    }

    /// Build the fields a config describes and pack them.
    ///
    /// With a seed, channel `c` uses `derive_channel_seed(seed, c)`; without
    /// one, every channel is seeded from entropy.
    pub fn generate(config: &NoiseImageConfig) -> Result<Self, NoiseError> {
        config.validate()?;

        let fields = (0..config.channels as u32)
            .map(|channel| match config.seed {
                Some(seed) => PerlinNoise2D::seeded(
                    config.grid_width,
                    config.grid_height,
                    DeterministicRng::derive_channel_seed(seed, channel),
                ),
                None => PerlinNoise2D::from_entropy(config.grid_width, config.grid_height),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_fields(&fields, config.samples_per_node)
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of channels (3 or 4).
    pub fn channels(&self) -> usize {
        self.planes.len()
    }

    /// Pixels per gradient cell.
    pub fn samples_per_node(&self) -> u32 {
        self.samples_per_node
    }

    /// Value of `channel` at pixel `(x, y)`, in [0, 1].
    #[inline]
    pub fn get(&self, x: u32, y: u32, channel: usize) -> f64 {
        let idx = y as usize * self.width as usize + x as usize;
        self.planes[channel][idx]
    }

    /// Value of `channel` with wrapping pixel coordinates.
    #[inline]
    pub fn get_wrapped(&self, x: i64, y: i64, channel: usize) -> f64 {
        let wx = x.rem_euclid(self.width as i64) as u32;
        let wy = y.rem_euclid(self.height as i64) as u32;
        self.get(wx, wy, channel)
    }

    /// All channels of a pixel. Missing alpha reads as 1.0.
    pub fn pixel(&self, x: u32, y: u32) -> [f64; 4] {
        let mut out = [0.0, 0.0, 0.0, 1.0];
        for (channel, slot) in out.iter_mut().enumerate().take(self.channels()) {
            *slot = self.get(x, y, channel);
        }
        out
    }

    /// Bilinear sample with repeat addressing at normalized `(u, v)`.
    ///
    /// Texel centers sit at `(i + 0.5) / width`, and `u = 1.0` reads the same
    /// as `u = 0.0`. Missing alpha reads as 1.0.
    pub fn sample_repeat(&self, u: f64, v: f64) -> [f64; 4] {
        let x = tile_coord(u, 1.0) * self.width as f64 - 0.5;
        let y = tile_coord(v, 1.0) * self.height as f64 - 0.5;

        let x0 = x.floor() as i64;
        let y0 = y.floor() as i64;
        let fx = x - x.floor();
        let fy = y - y.floor();

        let mut out = [0.0, 0.0, 0.0, 1.0];
        for (channel, slot) in out.iter_mut().enumerate().take(self.channels()) {
            let c00 = self.get_wrapped(x0, y0, channel);
            let c10 = self.get_wrapped(x0 + 1, y0, channel);
            let c01 = self.get_wrapped(x0, y0 + 1, channel);
            let c11 = self.get_wrapped(x0 + 1, y0 + 1, channel);
            *slot = lerp(lerp(c00, c10, fx), lerp(c01, c11, fx), fy);
        }
        out
    }

    /// Borrow a channel plane (row-major, values in [0, 1]).
    pub fn plane(&self, channel: usize) -> &[f64] {
        &self.planes[channel]
    }

    /// Convert to interleaved 8-bit bytes, `channels()` bytes per pixel.
    pub fn to_bytes(&self) -> Vec<u8> {
        let pixels = self.width as usize * self.height as usize;
        let mut bytes = Vec::with_capacity(pixels * self.channels());
        for idx in 0..pixels {
            for plane in &self.planes {
                bytes.push(to_u8(plane[idx]));
            }
        }
        bytes
    }
}

/// Map a [0, 1] channel value to a byte.
#[inline]
pub fn to_u8(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::FixedAngles;

    fn fields(count: usize, size: u32) -> Vec<PerlinNoise2D> {
        (0..count as u32)
            .map(|c| PerlinNoise2D::seeded(size, size, 100 + c).unwrap())
            .collect()
    }

    #[test]
    fn test_image_dimensions() {
        let image = NoiseImage::from_fields(&fields(3, 2), 4).unwrap();
        assert_eq!(image.width(), 8);
        assert_eq!(image.height(), 8);
        assert_eq!(image.channels(), 3);
        assert_eq!(image.to_bytes().len(), 8 * 8 * 3);
    }

    #[test]
    fn test_pixel_matches_field_sample() {
        let fs = fields(4, 3);
        let image = NoiseImage::from_fields(&fs, 5).unwrap();
        let expected = fs[2].sample(7.0 / 5.0, 11.0 / 5.0) / 2.0 + 0.5;
        assert!((image.get(7, 11, 2) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_lattice_pixels_are_mid_gray() {
        let image = NoiseImage::from_fields(&fields(3, 2), 4).unwrap();
        for y in (0..8).step_by(4) {
            for x in (0..8).step_by(4) {
                assert!((image.get(x, y, 0) - 0.5).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_rejects_bad_channel_count() {
        assert!(matches!(
            NoiseImage::from_fields(&fields(2, 2), 4),
            Err(NoiseError::InvalidChannelCount(2))
        ));
        assert!(matches!(
            NoiseImage::from_fields(&fields(5, 2), 4),
            Err(NoiseError::InvalidChannelCount(5))
        ));
    }

    #[test]
    fn test_rejects_zero_samples_per_node() {
        assert!(matches!(
            NoiseImage::from_fields(&fields(3, 2), 0),
            Err(NoiseError::InvalidSamplesPerNode(0))
        ));
    }

    #[test]
    fn test_rejects_mismatched_fields() {
        let mut fs = fields(2, 2);
        fs.push(PerlinNoise2D::new(3, 2, &mut FixedAngles::new(vec![0.0])).unwrap());
        assert!(matches!(
            NoiseImage::from_fields(&fs, 2),
            Err(NoiseError::MismatchedFields { .. })
        ));
    }

    #[test]
    fn test_three_channel_pixel_has_opaque_alpha() {
        let image = NoiseImage::from_fields(&fields(3, 2), 2).unwrap();
        assert_eq!(image.pixel(1, 1)[3], 1.0);
        assert_eq!(image.sample_repeat(0.3, 0.6)[3], 1.0);
    }

    #[test]
    fn test_sample_repeat_hits_texel_centers() {
        let image = NoiseImage::from_fields(&fields(4, 2), 4).unwrap();
        let u = (3.0 + 0.5) / 8.0;
        let v = (5.0 + 0.5) / 8.0;
        let sampled = image.sample_repeat(u, v);
        for c in 0..4 {
            assert!((sampled[c] - image.get(3, 5, c)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_sample_repeat_wraps() {
        let image = NoiseImage::from_fields(&fields(3, 2), 4).unwrap();
        let a = image.sample_repeat(0.0, 0.25);
        let b = image.sample_repeat(1.0, 1.25);
        let c = image.sample_repeat(-2.0, 0.25);
        for ch in 0..3 {
            assert!((a[ch] - b[ch]).abs() < 1e-12);
            assert!((a[ch] - c[ch]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_generate_seeded_is_reproducible() {
        let config = NoiseImageConfig {
            grid_width: 4,
            grid_height: 2,
            samples_per_node: 3,
            channels: 4,
            seed: Some(9),
        };
        let a = NoiseImage::generate(&config).unwrap();
        let b = NoiseImage::generate(&config).unwrap();
        assert_eq!(a.to_bytes(), b.to_bytes());
        assert_eq!((a.width(), a.height()), (12, 6));
    }

    #[test]
    fn test_generate_channels_are_independent() {
        let config = NoiseImageConfig {
            grid_width: 4,
            grid_height: 4,
            samples_per_node: 4,
            channels: 3,
            seed: Some(1),
        };
        let image = NoiseImage::generate(&config).unwrap();
        assert_ne!(image.plane(0), image.plane(1));
        assert_ne!(image.plane(1), image.plane(2));
    }

    #[test]
    fn test_get_indexes_last_pixel() {
        let image = NoiseImage::from_fields(&fields(3, 3), 5).unwrap();
        let last = image.plane(1)[(15 * 15) - 1];
        assert_eq!(image.get(14, 14, 1), last);
        assert_eq!(image.get_wrapped(-1, -1, 1), last);
    }

    #[test]
    fn test_to_u8_mapping() {
        assert_eq!(to_u8(0.0), 0);
        assert_eq!(to_u8(0.5), 128);
        assert_eq!(to_u8(1.0), 255);
        assert_eq!(to_u8(1.7), 255);
        assert_eq!(to_u8(-0.2), 0);
    }
}
