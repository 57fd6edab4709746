//! Random source construction.
//!
//! Every stochastic step in the solver draws from an explicitly passed
//! generator. This module builds the default one.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a seeded generator. Equal seeds produce equal streams.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from `seed`, or from OS entropy when `None`.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}
