//! Seedable random source shared by every stochastic operation.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic RNG from a seed.
///
/// The same seed yields the same sequence, which is what makes a whole
/// mining run reproducible.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
