//! Generational loop execution.
//!
//! [`KnapsackSolver`] drives the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation → replace.
//!
//! Replacement is total. Every generation is built only from children of the
//! previous one, so the fittest genome of a generation survives only if it
//! is bred again. The returned best is the fittest member of the **final**
//! population; the per-generation trace keeps earlier bests for inspection.

use super::config::KnapsackConfig;
use super::operators::{bit_flip_mutation, random_population, single_point_crossover};
use super::population::Population;
use super::problem::Knapsack;
use super::types::Genome;
use crate::error::Result;
use crate::random::rng_from_seed;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Best genome of one generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationRecord {
    /// 1-based generation number.
    pub generation: usize,

    /// Fittest member of that generation (first one on ties).
    pub best: Genome,

    /// Fitness of `best`.
    pub fitness: f64,
}

/// Result of a knapsack run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackResult {
    /// Fittest member of the final population.
    pub best: Genome,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// One record per completed generation, in order.
    pub records: Vec<GenerationRecord>,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,
}

impl KnapsackResult {
    /// The fittest record across the whole trace (earliest on ties).
    ///
    /// Without elitism this can beat [`best`](Self::best): a genome found in
    /// an early generation may have been lost by the end of the run.
    pub fn best_ever(&self) -> Option<&GenerationRecord> {
        let mut best: Option<&GenerationRecord> = None;
        for record in &self.records {
            match best {
                Some(b) if record.fitness <= b.fitness => {}
                _ => best = Some(record),
            }
        }
        best
    }
}

/// Genetic-algorithm solver for one knapsack configuration.
///
/// # Usage
///
/// ```
/// use u_knapsack::ga::{Item, KnapsackConfig, KnapsackSolver};
///
/// let items = vec![
///     Item::new(2.0, 3.0),
///     Item::new(3.0, 4.0),
///     Item::new(4.0, 5.0),
///     Item::new(5.0, 6.0),
/// ];
/// let config = KnapsackConfig::new(items, 5.0).with_seed(42);
/// let solver = KnapsackSolver::new(config).unwrap();
///
/// let mut progress = Vec::new();
/// let result = solver.run_with_progress(|pct| progress.push(pct));
///
/// assert_eq!(result.records.len(), 50);
/// assert_eq!(progress.last(), Some(&100.0));
/// ```
#[derive(Debug, Clone)]
pub struct KnapsackSolver {
    config: KnapsackConfig,
    knapsack: Knapsack,
}

impl KnapsackSolver {
    /// Validates `config` and builds a solver for it.
    ///
    /// Nothing runs until one of the `run*` methods is called.
    pub fn new(config: KnapsackConfig) -> Result<Self> {
        config.validate()?;
        let knapsack = config.knapsack();
        Ok(Self { config, knapsack })
    }

    pub fn config(&self) -> &KnapsackConfig {
        &self.config
    }

    pub fn knapsack(&self) -> &Knapsack {
        &self.knapsack
    }

    /// Runs to completion with the configured seed and no progress callback.
    pub fn run(&self) -> KnapsackResult {
        self.run_with_progress(|_| {})
    }

    /// Runs to completion, calling `progress` once per generation with the
    /// completed percentage. Values strictly increase and end at `100.0`.
    pub fn run_with_progress<F: FnMut(f64)>(&self, progress: F) -> KnapsackResult {
        let mut rng = rng_from_seed(self.config.seed);
        self.evolve(&mut rng, progress, None)
    }

    /// Runs with a caller-supplied random source, ignoring the configured
    /// seed.
    pub fn run_with_rng<R: Rng, F: FnMut(f64)>(&self, rng: &mut R, progress: F) -> KnapsackResult {
        self.evolve(rng, progress, None)
    }

    /// Runs with a cancellation flag checked between generations.
    ///
    /// Once the flag is set the run stops before starting the next
    /// generation and returns the best of the current population with
    /// `cancelled = true`. Setting the flag before the call still runs
    /// the initial population, but no generation.
    pub fn run_with_cancel<F: FnMut(f64)>(
        &self,
        progress: F,
        cancel: Arc<AtomicBool>,
    ) -> KnapsackResult {
        let mut rng = rng_from_seed(self.config.seed);
        self.evolve(&mut rng, progress, Some(&*cancel))
    }

    /// Random, evaluated initial population.
    pub fn initial_population<R: Rng>(&self, rng: &mut R) -> Population {
        let members = random_population(
            self.config.population_size,
            self.knapsack.genome_len(),
            rng,
        );
        Population::evaluate(members, &self.knapsack, self.config.parallel)
    }

    /// Breeds the next generation from `population`.
    ///
    /// For each of `len / 2` parent pairs, the first child is
    /// `crossover(p1, p2)` and the second `crossover(p2, p1)`, each mutated
    /// independently. The result has exactly as many members as the input.
    /// Every child is a newly built genome and `population` is left as it was.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn next_generation<R: Rng>(&self, population: &Population, rng: &mut R) -> Population {
        let members = population.members();
        let mut next = Vec::with_capacity(members.len());

        for _ in 0..members.len() / 2 {
            let (i, j) = self.config.selection.select_pair(population.fitness(), rng);
            let (p1, p2) = (&members[i], &members[j]);

            let mut child1 = single_point_crossover(p1, p2, rng);
            bit_flip_mutation(&mut child1, self.config.mutation_rate, rng);
            let mut child2 = single_point_crossover(p2, p1, rng);
            bit_flip_mutation(&mut child2, self.config.mutation_rate, rng);

            next.push(child1);
            next.push(child2);
        }

        Population::evaluate(next, &self.knapsack, self.config.parallel)
    }

    fn evolve<R: Rng, F: FnMut(f64)>(
        &self,
        rng: &mut R,
        mut progress: F,
        cancel: Option<&AtomicBool>,
    ) -> KnapsackResult {
        let total = self.config.generations;
        info!(
            items = self.knapsack.genome_len(),
            capacity = self.knapsack.capacity(),
            population = self.config.population_size,
            generations = total,
            mutation_rate = self.config.mutation_rate,
            selection = ?self.config.selection,
            "starting knapsack run"
        );

        let mut population = self.initial_population(rng);
        let mut records = Vec::with_capacity(total);
        let mut cancelled = false;

        for gen in 1..=total {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                cancelled = true;
                break;
            }

            population = self.next_generation(&population, rng);

            let (best, fitness) = best_of(&population);
            debug!(generation = gen, best_fitness = fitness, best = %best, "generation complete");
            records.push(GenerationRecord {
                generation: gen,
                best: best.clone(),
                fitness,
            });

            progress(gen as f64 / total as f64 * 100.0);
        }

        let (best, best_fitness) = best_of(&population);
        let best = best.clone();
        let generations = records.len();

        if cancelled {
            warn!(generations, best_fitness, "knapsack run cancelled");
        } else {
            info!(generations, best_fitness, best = %best, "knapsack run finished");
        }

        KnapsackResult {
            best,
            best_fitness,
            records,
            generations,
            cancelled,
        }
    }
}

/// Fittest member of a population produced by this solver.
fn best_of(population: &Population) -> (&Genome, f64) {
    population.best().expect("population must not be empty")
}

// ============================================================================
// Tests
// ============================================================================
