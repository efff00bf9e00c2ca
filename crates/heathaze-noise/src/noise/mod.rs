//! Cyclical gradient noise.
//!
//! Noise fields here are periodic over their lattice, so any image sampled
//! from one full period tiles without seams.

pub mod gradient;
mod perlin;

pub use gradient::{AngleSource, FixedAngles, RandomAngles};
pub use perlin::PerlinNoise2D;

/// Trait for 2D noise generators.
pub trait Noise2D {
    /// Sample the noise at a given 2D coordinate.
    /// Returns a value in the range [-1, 1].
    fn sample(&self, x: f64, y: f64) -> f64;

    /// Sample the noise and normalize to [0, 1] range.
    fn sample_01(&self, x: f64, y: f64) -> f64 {
        self.sample(x, y) * 0.5 + 0.5
    }
}

/// Wrap an integer lattice coordinate into `[0, period)`.
///
/// Negative coordinates wrap the same way positive ones do, so `-1` maps to
/// `period - 1`.
#[inline]
pub fn wrap_index(coord: i64, period: u32) -> usize {
    coord.rem_euclid(period as i64) as usize
}

/// Wrap an already-floored coordinate into `[0, period)` without going
/// through a fixed-width integer first.
///
/// Works for any finite value, including magnitudes past `i64::MAX`.
#[inline]
pub fn wrap_floor(floored: f64, period: u32) -> usize {
    let wrapped = floored.rem_euclid(period as f64) as usize;
    wrapped % period as usize
}

/// Make a continuous coordinate tileable by wrapping into `[0, period)`.
#[inline]
pub fn tile_coord(coord: f64, period: f64) -> f64 {
    coord - (coord / period).floor() * period
}

/// Smooth interpolation (smoothstep), `t² · (3 − 2t)`.
#[inline]
pub fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Linear interpolation.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}
