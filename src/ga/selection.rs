//! Parent selection strategies.
//!
//! Selection decides which genomes reproduce. All strategies here
//! **maximize** fitness and sample with replacement, so the same genome may
//! be picked as both parents.
//!
//! # References
//!
//! - Goldberg (1989), roulette wheel selection
//! - Baker (1985), "Adaptive Selection Methods for Genetic Algorithms"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::Rng;
use tracing::trace;

/// Selection strategy for choosing parents.
///
/// # Examples
///
/// ```
/// use u_knapsack::ga::Selection;
///
/// // Fitness-proportionate, the default
/// let sel = Selection::default();
/// assert_eq!(sel, Selection::Roulette);
///
/// // Tournament with size 3
/// let sel = Selection::Tournament(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// Probability of selection is `fitness_i / sum(fitness)`. Zero-fitness
    /// genomes are never picked unless the whole population scores zero, in
    /// which case every genome is equally likely.
    ///
    /// # Complexity
    /// O(n) per selection
    #[default]
    Roulette,

    /// Tournament selection: draw `k` genomes uniformly, keep the fittest.
    ///
    /// Ties go to the earliest draw.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),

    /// Linear rank selection.
    ///
    /// Genomes are ordered by fitness (best first); the genome at rank `r`
    /// gets weight `n - r`. Insensitive to the scale of fitness values.
    ///
    /// # Complexity
    /// O(n log n) per selection
    Rank,
}

impl Selection {
    /// Selects one parent index given the fitness of every genome.
    ///
    /// # Panics
    /// Panics if `fitness` is empty.
    pub fn select<R: Rng>(&self, fitness: &[f64], rng: &mut R) -> usize {
        assert!(!fitness.is_empty(), "cannot select from empty population");

        match self {
            Selection::Roulette => roulette(fitness, rng),
            Selection::Tournament(k) => tournament(fitness, *k, rng),
            Selection::Rank => rank(fitness, rng),
        }
    }

    /// Selects two parent indices independently (with replacement).
    ///
    /// # Panics
    /// Panics if `fitness` is empty.
    pub fn select_pair<R: Rng>(&self, fitness: &[f64], rng: &mut R) -> (usize, usize) {
        let first = self.select(fitness, rng);
        let second = self.select(fitness, rng);
        (first, second)
    }
}

/// Roulette wheel over fitness scaled by the maximum, uniform when every
/// fitness is zero.
///
/// Scaling keeps the wheel total at most `n`, so it stays finite however
/// large individual fitness values are.
fn roulette<R: Rng>(fitness: &[f64], rng: &mut R) -> usize {
    let n = fitness.len();
    if n == 1 {
        return 0;
    }

    let max = fitness.iter().fold(0.0f64, |m, &f| m.max(f));
    if max <= 0.0 {
        trace!(population = n, "all fitness zero, selecting uniformly");
        return rng.random_range(0..n);
    }
    if max.is_infinite() {
        // Only the unbounded genomes carry weight.
        let top: Vec<usize> = (0..n).filter(|&i| fitness[i] == max).collect();
        return top[rng.random_range(0..top.len())];
    }

    let total: f64 = fitness.iter().map(|&f| f.max(0.0) / max).sum();
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    let mut last_positive = 0;
    for (i, &f) in fitness.iter().enumerate() {
        let w = f.max(0.0) / max;
        if w > 0.0 {
            last_positive = i;
        }
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }

    // Rounding can leave `cumulative` a hair below `threshold`.
    last_positive
}

/// Tournament of `k` uniform draws; the first best draw wins.
fn tournament<R: Rng>(fitness: &[f64], k: usize, rng: &mut R) -> usize {
    let k = k.max(1);
    let n = fitness.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if fitness[idx] > fitness[best_idx] {
            best_idx = idx;
        }
    }
    best_idx
}

/// Linear ranking: best gets weight `n`, worst gets weight 1.
fn rank<R: Rng>(fitness: &[f64], rng: &mut R) -> usize {
    let n = fitness.len();
    if n == 1 {
        return 0;
    }

    // Stable sort keeps input order among equal fitness.
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        fitness[b]
            .partial_cmp(&fitness[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let total = (n * (n + 1)) as f64 / 2.0;
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (rank, &idx) in order.iter().enumerate() {
        cumulative += (n - rank) as f64;
        if cumulative > threshold {
            return idx;
        }
    }

    order[n - 1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn counts(sel: Selection, fitness: &[f64], draws: usize, seed: u64) -> Vec<usize> {
        let mut rng = create_rng(seed);
        let mut counts = vec![0; fitness.len()];
        for _ in 0..draws {
            counts[sel.select(fitness, &mut rng)] += 1;
        }
        counts
    }

    #[test]
    fn test_roulette_is_proportional() {
        let c = counts(Selection::Roulette, &[1.0, 3.0], 20_000, 42);
        let share = c[1] as f64 / 20_000.0;
        assert!(
            (0.72..0.78).contains(&share),
            "expected ~75% for the 3:1 genome, got {share}"
        );
    }

    #[test]
    fn test_roulette_never_picks_zero_fitness() {
        let c = counts(Selection::Roulette, &[0.0, 5.0, 0.0, 2.0], 10_000, 42);
        assert_eq!(c[0], 0);
        assert_eq!(c[2], 0);
        assert!(c[1] > c[3]);
    }

    #[test]
    fn test_roulette_huge_fitness_never_picks_zero() {
        // The raw sum overflows to infinity; scaled weights do not.
        let c = counts(
            Selection::Roulette,
            &[f64::MAX, f64::MAX, 0.0, 0.0],
            10_000,
            42,
        );
        assert_eq!(c[2], 0, "zero-fitness genome selected: {c:?}");
        assert_eq!(c[3], 0, "zero-fitness genome selected: {c:?}");
        assert!(c[0] > 4_000 && c[1] > 4_000, "expected an even split: {c:?}");
    }

    #[test]
    fn test_roulette_infinite_fitness_wins() {
        let c = counts(Selection::Roulette, &[5.0, f64::INFINITY, 0.0], 1_000, 42);
        assert_eq!(c, vec![0, 1_000, 0]);
    }

    #[test]
    fn test_roulette_all_zero_is_uniform() {
        let c = counts(Selection::Roulette, &[0.0; 4], 20_000, 42);
        for &x in &c {
            assert!(x > 4_000, "expected uniform fallback, got {c:?}");
        }
    }

    #[test]
    fn test_select_pair_all_zero_returns_valid_indices() {
        let mut rng = create_rng(3);
        for _ in 0..1_000 {
            let (a, b) = Selection::Roulette.select_pair(&[0.0, 0.0, 0.0], &mut rng);
            assert!(a < 3 && b < 3);
        }
    }

    #[test]
    fn test_select_pair_allows_self_pairing() {
        let mut rng = create_rng(42);
        let (a, b) = Selection::Roulette.select_pair(&[0.0, 9.0, 0.0], &mut rng);
        assert_eq!((a, b), (1, 1));
    }

    #[test]
    fn test_tournament_favors_best() {
        let c = counts(Selection::Tournament(4), &[1.0, 5.0, 10.0, 8.0], 10_000, 42);
        assert!(
            c[2] > 6_000,
            "expected best to win >60% of tournaments, got {c:?}"
        );
    }

    #[test]
    fn test_tournament_size_one_is_uniform() {
        let c = counts(Selection::Tournament(1), &[1.0, 5.0, 10.0, 8.0], 10_000, 42);
        for &x in &c {
            assert!(x > 1_500, "expected uniform, got {c:?}");
        }
    }

    #[test]
    fn test_rank_favors_best() {
        let c = counts(Selection::Rank, &[1.0, 100.0, 50.0, 80.0], 10_000, 42);
        assert!(c[1] > c[0], "best should beat worst: {c:?}");
    }

    #[test]
    fn test_rank_ignores_scale() {
        // Same order, wildly different magnitudes: same weights.
        let a = counts(Selection::Rank, &[1.0, 2.0], 10_000, 9);
        let b = counts(Selection::Rank, &[1.0, 2_000_000.0], 10_000, 9);
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_individual() {
        let mut rng = create_rng(42);
        assert_eq!(Selection::Roulette.select(&[0.0], &mut rng), 0);
        assert_eq!(Selection::Tournament(3).select(&[4.0], &mut rng), 0);
        assert_eq!(Selection::Rank.select(&[4.0], &mut rng), 0);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let mut rng = create_rng(42);
        Selection::Roulette.select(&[], &mut rng);
    }
}
