//! Knapsack instance and fitness evaluation.
//!
//! Fitness is the total packed value when the packed weight fits the
//! capacity, and zero otherwise. Infeasible genomes are not repaired or
//! removed; they stay in the population and simply score nothing.

use super::types::{Genome, Item};

/// A knapsack instance: the ordered items and the weight capacity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Knapsack {
    items: Vec<Item>,
    capacity: f64,
}

/// Everything needed to report on one genome.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assessment {
    pub total_weight: f64,
    pub total_value: f64,
    pub fitness: f64,
    pub feasible: bool,

    /// Indices of packed items, ascending.
    pub selected: Vec<usize>,
}

impl Knapsack {
    pub fn new(items: Vec<Item>, capacity: f64) -> Self {
        Self { items, capacity }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Genome length for this instance.
    pub fn genome_len(&self) -> usize {
        self.items.len()
    }

    /// Sum of the weights of packed items.
    ///
    /// # Panics
    /// Panics if `genome.len() != self.genome_len()`. The same holds for
    /// every method here that takes a genome.
    pub fn total_weight(&self, genome: &Genome) -> f64 {
        self.packed(genome).map(|item| item.weight).sum()
    }

    /// Sum of the values of packed items.
    pub fn total_value(&self, genome: &Genome) -> f64 {
        self.packed(genome).map(|item| item.value).sum()
    }

    pub fn is_feasible(&self, genome: &Genome) -> bool {
        self.total_weight(genome) <= self.capacity
    }

    /// Fitness of `genome`: total value if it fits, `0.0` otherwise.
    ///
    /// Pure and deterministic. An all-zero genome is feasible with fitness 0.
    ///
    /// # Panics
    /// Panics if `genome.len() != self.genome_len()`.
    pub fn fitness(&self, genome: &Genome) -> f64 {
        let (weight, value) = self
            .packed(genome)
            .fold((0.0, 0.0), |(w, v), item| (w + item.weight, v + item.value));
        if weight > self.capacity {
            0.0
        } else {
            value
        }
    }

    /// Weight, value, fitness and packed indices of `genome`.
    pub fn assess(&self, genome: &Genome) -> Assessment {
        let total_weight = self.total_weight(genome);
        let total_value = self.total_value(genome);
        let feasible = total_weight <= self.capacity;
        Assessment {
            total_weight,
            total_value,
            fitness: if feasible { total_value } else { 0.0 },
            feasible,
            selected: genome.selected().collect(),
        }
    }

    /// Evaluates every genome, in order.
    ///
    /// With the `parallel` feature and `parallel == true`, evaluation is
    /// spread over rayon's pool. The output is identical either way.
    pub fn evaluate_all(&self, genomes: &[Genome], parallel: bool) -> Vec<f64> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            if parallel {
                return genomes.par_iter().map(|g| self.fitness(g)).collect();
            }
        }
        #[cfg(not(feature = "parallel"))]
        let _ = parallel;

        genomes.iter().map(|g| self.fitness(g)).collect()
    }

    fn packed<'a>(&'a self, genome: &'a Genome) -> impl Iterator<Item = &'a Item> + 'a {
        assert_eq!(
            genome.len(),
            self.items.len(),
            "genome length must equal item count"
        );
        self.items
            .iter()
            .zip(genome.genes())
            .filter_map(|(item, &on)| on.then_some(item))
    }
}
