//! Heat haze noise generation.
//!
//! This crate builds the tileable distortion textures behind a heat haze
//! effect. The core is [`PerlinNoise2D`], a cyclical gradient-noise field over
//! a wrap-around grid of unit gradients. Several independent fields are packed
//! into a [`NoiseImage`], one per color channel, which a shading stage reads
//! with repeat addressing while scrolling it over time.
//!
//! # Example
//!
//! ```
//! use heathaze_noise::{Noise2D, NoiseImage, NoiseImageConfig, PerlinNoise2D};
//!
//! let field = PerlinNoise2D::seeded(4, 4, 7).unwrap();
//! let v = field.sample(1.25, 3.5);
//! assert!((-1.0..=1.0).contains(&v));
//! assert!((field.sample(5.25, -0.5) - v).abs() < 1e-9);
//!
//! let image = NoiseImage::generate(&NoiseImageConfig {
//!     grid_width: 2,
//!     grid_height: 2,
//!     samples_per_node: 4,
//!     channels: 3,
//!     seed: Some(1),
//! })
//! .unwrap();
//! assert_eq!((image.width(), image.height()), (8, 8));
//! ```
//!
//! # Periodicity
//!
//! - `sample(x + k * width, y) == sample(x, y)` for every integer `k`
//! - negative coordinates wrap like positive ones
//! - every integer lattice point samples to exactly zero

pub mod config;
pub mod distortion;
pub mod error;
pub mod image;
pub mod noise;
pub mod png;
pub mod rng;

pub use config::NoiseImageConfig;
pub use distortion::DistortionParams;
pub use error::NoiseError;
pub use image::NoiseImage;
pub use noise::{AngleSource, FixedAngles, Noise2D, PerlinNoise2D, RandomAngles};
pub use crate::png::{PngConfig, PngError};
pub use rng::DeterministicRng;
