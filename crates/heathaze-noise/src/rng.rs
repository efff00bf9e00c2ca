//! Deterministic RNG wrapper using PCG32.
//!
//! Gradient angles for every noise field are drawn through this module so that
//! a fixed seed always reproduces the same field.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Wrapper around PCG32 for reproducible random number generation.
#[derive(Clone)]
pub struct DeterministicRng {
    inner: Pcg32,
}

impl DeterministicRng {
    /// Create a new RNG from a 32-bit seed.
    ///
    /// The seed is expanded to 64 bits by duplicating the bits.
    pub fn new(seed: u32) -> Self {
        let seed64 = (seed as u64) | ((seed as u64) << 32);
        Self {
            inner: Pcg32::seed_from_u64(seed64),
        }
    }

    /// Create an RNG seeded from system entropy.
    pub fn from_entropy() -> Self {
        Self {
            inner: Pcg32::from_entropy(),
        }
    }

    /// Draw a fresh 32-bit seed from system entropy.
    pub fn entropy_seed() -> u32 {
        rand::thread_rng().gen::<u32>()
    }

    /// Derive a seed for a specific image channel using BLAKE3.
    ///
    /// Channels built from one base seed get independent fields.
    pub fn derive_channel_seed(base_seed: u32, channel: u32) -> u32 {
        let mut input = Vec::with_capacity(8);
        input.extend_from_slice(&base_seed.to_le_bytes());
        input.extend_from_slice(&channel.to_le_bytes());
        let hash = blake3::hash(&input);
        let bytes = hash.as_bytes();
        u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    /// Generate a random value in the given range.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.inner.gen_range(range)
    }
}
