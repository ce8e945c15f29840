//! Token-placement RNG.
//!
//! Token layout is deliberately non-reproducible in normal play: every
//! (re)generation draws fresh jitter from an entropy-seeded `SmallRng`.
//! Tests and scripted runs inject a seed instead, which makes the jitter and
//! the random removals of a density change fully deterministic.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// RNG owned by a session and used for token jitter and random removal.
#[derive(Debug)]
pub struct FieldRng(SmallRng);

impl FieldRng {
    /// Deterministic RNG for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        FieldRng(SmallRng::seed_from_u64(seed))
    }

    /// Entropy-seeded RNG for normal play.
    pub fn from_entropy() -> Self {
        FieldRng(SmallRng::from_entropy())
    }

    /// `seeded(seed)` when a seed is supplied, `from_entropy()` otherwise.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seeded(s),
            None    => Self::from_entropy(),
        }
    }

    /// Uniform jitter in `[-half_width, half_width)`.
    ///
    /// Returns `0.0` for a non-positive `half_width` instead of panicking on
    /// an empty range.
    #[inline]
    pub fn jitter(&mut self, half_width: f32) -> f32 {
        if half_width <= 0.0 {
            return 0.0;
        }
        self.0.gen_range(-half_width..half_width)
    }

    /// Uniform index in `0..len`, or `None` when `len == 0`.
    #[inline]
    pub fn index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.0.gen_range(0..len))
    }
}
