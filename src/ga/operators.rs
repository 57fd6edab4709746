//! Binary genetic operators.
//!
//! Initialization, crossover and mutation for bit-string genomes. Each
//! operator takes the random source explicitly, so a seeded generator makes
//! every call reproducible.
//!
//! # Operators
//!
//! - [`random_genome`]: independent fair coin per gene
//! - [`single_point_crossover`]: one cut strictly inside the genome
//! - [`crossover_at`]: the same recombination with a caller-chosen cut
//! - [`bit_flip_mutation`]: flip each gene independently with probability `p`
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (the canonical simple GA)

use super::types::Genome;
use rand::Rng;

// ============================================================================
// Initialization
// ============================================================================

/// A genome of length `len` with independent uniformly random genes.
///
/// No feasibility filtering is applied.
pub fn random_genome<R: Rng>(len: usize, rng: &mut R) -> Genome {
    Genome::new((0..len).map(|_| rng.random_bool(0.5)).collect())
}

/// `size` independent random genomes of length `len`.
pub fn random_population<R: Rng>(size: usize, len: usize, rng: &mut R) -> Vec<Genome> {
    (0..size).map(|_| random_genome(len, rng)).collect()
}

// ============================================================================
// Crossover
// ============================================================================

/// Single-point crossover producing one child.
///
/// The cut is drawn uniformly from `1..len`, so both parents always
/// contribute at least one gene. The child takes `parent1` before the cut
/// and `parent2` from the cut onward.
///
/// # Panics
/// Panics if the parents differ in length or are shorter than 2 genes.
pub fn single_point_crossover<R: Rng>(parent1: &Genome, parent2: &Genome, rng: &mut R) -> Genome {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n >= 2, "single-point crossover needs at least 2 genes");

    let cut = rng.random_range(1..n);
    crossover_at(parent1, parent2, cut)
}

/// Recombines at a fixed cut: `parent1[..cut] ++ parent2[cut..]`.
///
/// ```
/// use u_knapsack::ga::{operators::crossover_at, Genome};
///
/// let a: Genome = "1111".parse().unwrap();
/// let b: Genome = "0000".parse().unwrap();
/// assert_eq!(crossover_at(&a, &b, 2).to_string(), "1100");
/// ```
///
/// # Panics
/// Panics if the parents differ in length or `cut` is not in `1..len`.
pub fn crossover_at(parent1: &Genome, parent2: &Genome, cut: usize) -> Genome {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(
        cut >= 1 && cut < n,
        "cut point {cut} must lie strictly inside 0..{n}"
    );

    let mut genes = Vec::with_capacity(n);
    genes.extend_from_slice(&parent1.genes()[..cut]);
    genes.extend_from_slice(&parent2.genes()[cut..]);
    Genome::new(genes)
}

// ============================================================================
// Mutation
// ============================================================================

/// Flips each gene independently with probability `rate`.
///
/// Only ever applied to a freshly produced child, never to a parent that
/// is still in the population.
///
/// # Panics
/// Panics if `rate` is outside `[0, 1]`.
pub fn bit_flip_mutation<R: Rng>(genome: &mut Genome, rate: f64, rng: &mut R) {
    assert!(
        (0.0..=1.0).contains(&rate),
        "mutation rate must lie in [0, 1], got {rate}"
    );
    for gene in genome.genes_mut() {
        if rng.random_bool(rate) {
            *gene = !*gene;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
