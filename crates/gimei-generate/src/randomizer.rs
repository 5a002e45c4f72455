use std::sync::Mutex;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform draws used by every selection.
///
/// Implementations must return values in `[0, 1)`. Selection clamps anything
/// outside that range, but a conforming source keeps the distribution uniform.
pub trait Randomizer {
    fn rnd(&self) -> f64;
}

impl<F> Randomizer for F
where
    F: Fn() -> f64,
{
    fn rnd(&self) -> f64 {
        self()
    }
}

/// Thread-local `rand` generator; the default source.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandomizer;

impl Randomizer for ThreadRandomizer {
    fn rnd(&self) -> f64 {
        rand::random::<f64>()
    }
}

/// Returns the same value on every draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRandomizer(pub f64);

impl Randomizer for FixedRandomizer {
    fn rnd(&self) -> f64 {
        self.0
    }
}

/// Reproducible source backed by ChaCha8 and seeded from a `u64`.
///
/// Draws are serialized through a mutex so one instance can be shared across
/// threads; the sequence is then interleaved between callers.
#[derive(Debug)]
pub struct SeededRandomizer {
    seed: u64,
    rng: Mutex<ChaCha8Rng>,
}

impl SeededRandomizer {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Randomizer for SeededRandomizer {
    fn rnd(&self) -> f64 {
        // A panic while holding the lock cannot leave the RNG half-updated.
        let mut rng = match self.rng.lock() {
            Ok(rng) => rng,
            Err(poisoned) => poisoned.into_inner(),
        };
        rng.random::<f64>()
    }
}

impl Clone for SeededRandomizer {
    /// Clones restart from the original seed.
    fn clone(&self) -> Self {
        Self::new(self.seed)
    }
}
