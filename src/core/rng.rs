//! Deterministic random number generation for dealing.
//!
//! Same seed, same deal: every game the engine starts can be reproduced
//! from the seed recorded in its configuration.
//!
//! ```
//! use dominoes_engine::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.index_up_to(27), b.index_up_to(27));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `[0, upper]`, both ends inclusive.
    pub fn index_up_to(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..=upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.index_up_to(1000), rng2.index_up_to(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.index_up_to(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.index_up_to(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_index_stays_in_bounds() {
        let mut rng = GameRng::new(7);
        for upper in 0..30 {
            for _ in 0..20 {
                assert!(rng.index_up_to(upper) <= upper);
            }
        }
        assert_eq!(rng.index_up_to(0), 0);
    }

    #[test]
    fn test_seed_is_kept() {
        assert_eq!(GameRng::new(99).seed(), 99);
    }
}
