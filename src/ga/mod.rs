//! Genetic algorithm for the 0/1 knapsack problem.
//!
//! A candidate solution is a [`Genome`]: one inclusion bit per [`Item`].
//! Genomes that exceed the capacity score zero; all others score their
//! total value. The [`KnapsackSolver`] evolves a fixed-size population by
//! fitness-weighted parent selection, single-point crossover and bit-flip
//! mutation, replacing the whole population every generation.
//!
//! # Key Types
//!
//! - [`KnapsackConfig`]: Instance and algorithm parameters (builder, validation)
//! - [`KnapsackSolver`]: Executes the generational loop
//! - [`KnapsackResult`]: Final best genome plus the per-generation trace
//! - [`Knapsack`]: Fitness evaluation and per-genome [`Assessment`]
//!
//! # Submodules
//!
//! - [`operators`]: Initialization, crossover and mutation on bit strings
//!
//! # Example
//!
//! ```
//! use u_knapsack::ga::{Item, KnapsackConfig, KnapsackSolver};
//!
//! let items = vec![
//!     Item::new(2.0, 3.0),
//!     Item::new(3.0, 4.0),
//!     Item::new(4.0, 5.0),
//!     Item::new(5.0, 6.0),
//! ];
//! let solver = KnapsackSolver::new(KnapsackConfig::new(items, 5.0).with_seed(1)).unwrap();
//! let result = solver.run();
//!
//! let report = solver.knapsack().assess(&result.best);
//! assert!(report.total_weight <= 5.0 || result.best_fitness == 0.0);
//! ```
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Martello & Toth (1990), *Knapsack Problems: Algorithms and Computer Implementations*

mod config;
pub mod operators;
mod population;
mod problem;
mod runner;
mod selection;
mod types;

pub use config::KnapsackConfig;
pub use population::Population;
pub use problem::{Assessment, Knapsack};
pub use runner::{GenerationRecord, KnapsackResult, KnapsackSolver};
pub use selection::Selection;
pub use types::{Genome, Item};
