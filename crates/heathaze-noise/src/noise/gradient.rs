//! Sources of gradient angles.
//!
//! A field draws one angle per lattice cell when it is built. Production code
//! uses [`RandomAngles`]; tests can pin exact gradients with [`FixedAngles`].

use std::f64::consts::TAU;

use crate::rng::DeterministicRng;

/// Supplies gradient angles in radians, expected in `[0, 2π)`.
pub trait AngleSource {
    /// Return the next angle.
    fn next_angle(&mut self) -> f64;
}

/// Uniformly distributed angles from a PCG32 stream.
#[derive(Clone)]
pub struct RandomAngles {
    rng: DeterministicRng,
}

impl RandomAngles {
    /// Reproducible angles for a fixed seed.
    pub fn seeded(seed: u32) -> Self {
        Self {
            rng: DeterministicRng::new(seed),
        }
    }

    /// Angles seeded from system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: DeterministicRng::from_entropy(),
        }
    }
}

impl AngleSource for RandomAngles {
    fn next_angle(&mut self) -> f64 {
        self.rng.gen_range(0.0..TAU)
    }
}

/// Cycles through a fixed list of angles.
#[derive(Debug, Clone)]
pub struct FixedAngles {
    angles: Vec<f64>,
    cursor: usize,
}

impl FixedAngles {
    /// Create a source that repeats `angles` in order.
    ///
    /// An empty list yields `0.0` forever.
    pub fn new(angles: impl Into<Vec<f64>>) -> Self {
        Self {
            angles: angles.into(),
            cursor: 0,
        }
    }
}

impl AngleSource for FixedAngles {
    fn next_angle(&mut self) -> f64 {
        if self.angles.is_empty() {
            return 0.0;
        }
        let angle = self.angles[self.cursor];
        self.cursor = (self.cursor + 1) % self.angles.len();
        angle
    }
}

impl<S: AngleSource + ?Sized> AngleSource for &mut S {
    fn next_angle(&mut self) -> f64 {
        (**self).next_angle()
    }
}
