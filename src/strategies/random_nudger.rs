use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::entities::Word;
use crate::strategies::Nudger;

/// Uniform random delta drawn from a window that widens with the attempt
/// index. Seeded, so runs are reproducible.
pub struct RandomNudger {
    /// SmallRng is a fast, non-cryptographic PRNG <https://rust-random.github.io/book/guide-rngs.html>
    rng: SmallRng,
}

impl RandomNudger {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Nudger for RandomNudger {
    fn nudge(&mut self, _word: &Word, attempt: usize) -> (f32, f32) {
        let half = 1.0 + attempt as f32 / 2.0;

        (
            self.rng.random_range(-half..=half),
            self.rng.random_range(-half..=half),
        )
    }
}
