//! Texture-coordinate displacement driven by a noise image.
//!
//! This is the CPU form of the lookup the heat haze fragment stage performs:
//! the noise texture is read with repeat addressing at a coordinate that
//! scrolls over time, its red and green channels become an offset vector, and
//! the destination coordinate is pushed by that offset.

use serde::{Deserialize, Serialize};

use crate::image::NoiseImage;

/// Parameters of the displacement lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DistortionParams {
    /// Maximum offset in normalized texture units.
    #[serde(default = "default_intensity")]
    pub intensity: f64,
    /// Noise scroll velocity in normalized texture units per second.
    #[serde(default = "default_scroll")]
    pub scroll: [f64; 2],
    /// Fade the offset out toward the top edge (`v = 0`).
    #[serde(default)]
    pub evaporation: bool,
}

fn default_intensity() -> f64 {
    0.01
}

fn default_scroll() -> [f64; 2] {
    [0.0, 0.1]
}

impl Default for DistortionParams {
    fn default() -> Self {
        Self {
            intensity: default_intensity(),
            scroll: default_scroll(),
            evaporation: false,
        }
    }
}

impl DistortionParams {
    /// Offset applied at destination coordinate `uv` at `time` seconds.
    pub fn offset(&self, noise: &NoiseImage, uv: [f64; 2], time: f64) -> [f64; 2] {
        let [r, g, _, _] = noise.sample_repeat(
            uv[0] + self.scroll[0] * time,
            uv[1] + self.scroll[1] * time,
        );

        let mut scale = self.intensity;
        if self.evaporation {
            scale *= uv[1].clamp(0.0, 1.0);
        }

        [(r * 2.0 - 1.0) * scale, (g * 2.0 - 1.0) * scale]
    }

    /// Source coordinate read for destination coordinate `uv` at `time`.
    pub fn displaced_uv(&self, noise: &NoiseImage, uv: [f64; 2], time: f64) -> [f64; 2] {
        let [dx, dy] = self.offset(noise, uv, time);
        [uv[0] + dx, uv[1] + dy]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NoiseImageConfig;

    fn noise() -> NoiseImage {
        NoiseImage::generate(&NoiseImageConfig {
            grid_width: 4,
            grid_height: 4,
            samples_per_node: 8,
            channels: 4,
            seed: Some(21),
        })
        .unwrap()
    }

    #[test]
    fn test_zero_intensity_is_identity() {
        let params = DistortionParams {
            intensity: 0.0,
            ..DistortionParams::default()
        };
        let noise = noise();
        assert_eq!(params.displaced_uv(&noise, [0.3, 0.7], 2.5), [0.3, 0.7]);
    }

    #[test]
    fn test_offset_bounded_by_intensity() {
        let params = DistortionParams {
            intensity: 0.05,
            ..DistortionParams::default()
        };
        let noise = noise();
        for i in 0..50 {
            let uv = [i as f64 / 50.0, (i * 7 % 50) as f64 / 50.0];
            let [dx, dy] = params.offset(&noise, uv, i as f64 * 0.1);
            assert!(dx.abs() <= 0.05 + 1e-12);
            assert!(dy.abs() <= 0.05 + 1e-12);
        }
    }

    #[test]
    fn test_evaporation_vanishes_at_top_edge() {
        let params = DistortionParams {
            intensity: 0.5,
            evaporation: true,
            ..DistortionParams::default()
        };
        let noise = noise();
        assert_eq!(params.offset(&noise, [0.4, 0.0], 1.0), [0.0, 0.0]);
    }

    #[test]
    fn test_evaporation_scales_linearly() {
        let plain = DistortionParams {
            intensity: 0.2,
            ..DistortionParams::default()
        };
        let evaporating = DistortionParams {
            evaporation: true,
            ..plain
        };
        let noise = noise();
        let uv = [0.6, 0.25];
        let full = plain.offset(&noise, uv, 0.0);
        let faded = evaporating.offset(&noise, uv, 0.0);
        assert!((faded[0] - full[0] * 0.25).abs() < 1e-12);
        assert!((faded[1] - full[1] * 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_scrolling_one_full_period_repeats() {
        let params = DistortionParams {
            intensity: 0.1,
            scroll: [0.25, 0.5],
            evaporation: false,
        };
        let noise = noise();
        let uv = [0.15, 0.35];
        let start = params.offset(&noise, uv, 0.0);
        let later = params.offset(&noise, uv, 4.0);
        assert!((start[0] - later[0]).abs() < 1e-9);
        assert!((start[1] - later[1]).abs() < 1e-9);
    }
}
