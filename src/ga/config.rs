//! Solver configuration.
//!
//! [`KnapsackConfig`] holds the instance and every parameter that controls
//! the evolutionary loop.

use super::problem::Knapsack;
use super::selection::Selection;
use super::types::Item;
use crate::error::{ConfigError, Result};

/// Configuration for one knapsack run.
///
/// Setters store exactly what they are given. Out-of-range values are not
/// clamped; [`validate`](Self::validate) rejects them instead.
///
/// # Defaults
///
/// ```
/// use u_knapsack::ga::{KnapsackConfig, Selection};
///
/// let config = KnapsackConfig::default();
/// assert_eq!(config.population_size, 20);
/// assert_eq!(config.generations, 50);
/// assert_eq!(config.selection, Selection::Roulette);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_knapsack::ga::{Item, KnapsackConfig};
///
/// let items = vec![Item::new(2.0, 3.0), Item::new(3.0, 4.0), Item::new(4.0, 5.0)];
/// let config = KnapsackConfig::new(items, 5.0)
///     .with_population_size(40)
///     .with_generations(100)
///     .with_mutation_rate(0.02)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KnapsackConfig {
    /// Items to choose from. Gene `i` refers to `items[i]`.
    pub items: Vec<Item>,

    /// Maximum total weight of a feasible selection.
    pub capacity: f64,

    /// Number of genomes per generation. Must be positive and even:
    /// each generation is filled by `population_size / 2` parent pairs.
    pub population_size: usize,

    /// Number of generations to run.
    pub generations: usize,

    /// Per-gene flip probability applied to every child (0.0–1.0).
    pub mutation_rate: f64,

    /// Parent selection strategy.
    pub selection: Selection,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a fresh seed from OS entropy.
    pub seed: Option<u64>,

    /// Whether to evaluate fitness in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature. Results are identical
    /// either way.
    pub parallel: bool,
}

impl Default for KnapsackConfig {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            capacity: 0.0,
            population_size: 20,
            generations: 50,
            mutation_rate: 0.01,
            selection: Selection::default(),
            seed: None,
            parallel: false,
        }
    }
}

impl KnapsackConfig {
    /// Creates a configuration for `items` under `capacity` with default
    /// evolutionary parameters.
    pub fn new(items: Vec<Item>, capacity: f64) -> Self {
        Self {
            items,
            capacity,
            ..Self::default()
        }
    }

    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    pub fn with_capacity(mut self, capacity: f64) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the per-gene mutation probability.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel fitness evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// The knapsack instance described by this configuration.
    pub fn knapsack(&self) -> Knapsack {
        Knapsack::new(self.items.clone(), self.capacity)
    }

    /// Validates the configuration.
    ///
    /// Checks run in a fixed order and the first failure is returned.
    pub fn validate(&self) -> Result<()> {
        if self.items.is_empty() {
            return Err(ConfigError::EmptyItems);
        }
        if self.items.len() < 2 {
            return Err(ConfigError::GenomeTooShort(self.items.len()));
        }
        for (index, item) in self.items.iter().enumerate() {
            if !item.weight.is_finite() || item.weight < 0.0 {
                return Err(ConfigError::InvalidItemWeight {
                    index,
                    weight: item.weight,
                });
            }
            if !item.value.is_finite() || item.value < 0.0 {
                return Err(ConfigError::InvalidItemValue {
                    index,
                    value: item.value,
                });
            }
        }
        // Fitness of the all-ones genome must stay finite.
        if !self.items.iter().map(|i| i.value).sum::<f64>().is_finite() {
            return Err(ConfigError::TotalValueOverflow);
        }
        if !self.capacity.is_finite() || self.capacity < 0.0 {
            return Err(ConfigError::InvalidCapacity(self.capacity));
        }
        if self.population_size == 0 {
            return Err(ConfigError::ZeroPopulation);
        }
        if self.population_size % 2 != 0 {
            return Err(ConfigError::OddPopulation(self.population_size));
        }
        if self.generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::InvalidMutationRate(self.mutation_rate));
        }
        if self.selection == Selection::Tournament(0) {
            return Err(ConfigError::ZeroTournamentSize);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<Item> {
        vec![
            Item::new(2.0, 3.0),
            Item::new(3.0, 4.0),
            Item::new(4.0, 5.0),
            Item::new(5.0, 6.0),
        ]
    }

    fn valid() -> KnapsackConfig {
        KnapsackConfig::new(items(), 5.0)
    }

    #[test]
    fn test_default_config() {
        let config = KnapsackConfig::default();
        assert!(config.items.is_empty());
        assert_eq!(config.capacity, 0.0);
        assert_eq!(config.population_size, 20);
        assert_eq!(config.generations, 50);
        assert!((config.mutation_rate - 0.01).abs() < 1e-15);
        assert_eq!(config.selection, Selection::Roulette);
        assert!(config.seed.is_none());
        assert!(!config.parallel);
    }

    #[test]
    fn test_builder_pattern() {
        let config = KnapsackConfig::default()
            .with_items(items())
            .with_capacity(9.0)
            .with_population_size(30)
            .with_generations(200)
            .with_mutation_rate(0.05)
            .with_selection(Selection::Rank)
            .with_seed(7)
            .with_parallel(true);

        assert_eq!(config.items.len(), 4);
        assert_eq!(config.capacity, 9.0);
        assert_eq!(config.population_size, 30);
        assert_eq!(config.generations, 200);
        assert!((config.mutation_rate - 0.05).abs() < 1e-15);
        assert_eq!(config.selection, Selection::Rank);
        assert_eq!(config.seed, Some(7));
        assert!(config.parallel);
    }

    #[test]
    fn test_setters_do_not_clamp() {
        let config = valid().with_mutation_rate(1.5);
        assert_eq!(config.mutation_rate, 1.5);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidMutationRate(1.5))
        );
    }

    #[test]
    fn test_validate_ok() {
        assert!(valid().validate().is_ok());
        assert!(valid().with_mutation_rate(0.0).validate().is_ok());
        assert!(valid().with_mutation_rate(1.0).validate().is_ok());
        assert!(valid().with_capacity(0.0).validate().is_ok());
    }

    #[test]
    fn test_validate_empty_items() {
        assert_eq!(
            KnapsackConfig::default().validate(),
            Err(ConfigError::EmptyItems)
        );
    }

    #[test]
    fn test_validate_single_item() {
        let config = KnapsackConfig::new(vec![Item::new(1.0, 1.0)], 5.0);
        assert_eq!(config.validate(), Err(ConfigError::GenomeTooShort(1)));
    }

    #[test]
    fn test_validate_bad_items() {
        let mut bad = items();
        bad[1].weight = -1.0;
        assert_eq!(
            valid().with_items(bad).validate(),
            Err(ConfigError::InvalidItemWeight {
                index: 1,
                weight: -1.0
            })
        );

        let mut bad = items();
        bad[3].value = f64::INFINITY;
        assert!(matches!(
            valid().with_items(bad).validate(),
            Err(ConfigError::InvalidItemValue { index: 3, .. })
        ));
    }

    #[test]
    fn test_validate_total_value_overflow() {
        let huge = vec![Item::new(1.0, 1e308); 3];
        assert_eq!(
            valid().with_items(huge).validate(),
            Err(ConfigError::TotalValueOverflow)
        );

        // Each value alone is fine; only the sum is rejected.
        let big = vec![Item::new(1.0, 1e308), Item::new(1.0, 1e307)];
        assert!(valid().with_items(big).validate().is_ok());
    }

    #[test]
    fn test_validate_capacity() {
        assert_eq!(
            valid().with_capacity(-1.0).validate(),
            Err(ConfigError::InvalidCapacity(-1.0))
        );
        assert!(matches!(
            valid().with_capacity(f64::NAN).validate(),
            Err(ConfigError::InvalidCapacity(_))
        ));
    }

    #[test]
    fn test_validate_population() {
        assert_eq!(
            valid().with_population_size(0).validate(),
            Err(ConfigError::ZeroPopulation)
        );
        assert_eq!(
            valid().with_population_size(21).validate(),
            Err(ConfigError::OddPopulation(21))
        );
        assert!(valid().with_population_size(2).validate().is_ok());
    }

    #[test]
    fn test_validate_zero_generations() {
        assert_eq!(
            valid().with_generations(0).validate(),
            Err(ConfigError::ZeroGenerations)
        );
    }

    #[test]
    fn test_validate_mutation_rate() {
        assert_eq!(
            valid().with_mutation_rate(-0.1).validate(),
            Err(ConfigError::InvalidMutationRate(-0.1))
        );
        assert!(matches!(
            valid().with_mutation_rate(f64::NAN).validate(),
            Err(ConfigError::InvalidMutationRate(_))
        ));
    }

    #[test]
    fn test_validate_tournament_size() {
        assert_eq!(
            valid()
                .with_selection(Selection::Tournament(0))
                .validate(),
            Err(ConfigError::ZeroTournamentSize)
        );
        assert!(valid()
            .with_selection(Selection::Tournament(2))
            .validate()
            .is_ok());
    }

    #[test]
    fn test_knapsack_mirrors_config() {
        let k = valid().knapsack();
        assert_eq!(k.items(), items().as_slice());
        assert_eq!(k.capacity(), 5.0);
        assert_eq!(k.genome_len(), 4);
    }
}
