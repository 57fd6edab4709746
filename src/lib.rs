//! Evolutionary solver for the 0/1 knapsack problem.
//!
//! Chooses a subset of weighted, valued items under a weight capacity so as
//! to maximize total value, using a generational genetic algorithm instead
//! of exact dynamic programming. Results are good but not guaranteed
//! optimal.
//!
//! - [`ga`]: Items, genomes, fitness, operators and the generational loop
//! - [`random`]: Seedable random sources for reproducible runs
//! - [`error`]: Configuration errors reported before a run starts
//!
//! # Cargo Features
//!
//! - `parallel`: Evaluate population fitness with rayon
//! - `serde`: `Serialize`/`Deserialize` for configs, genomes and results
//! - `wasm`: Export `wasm::solve_knapsack` through wasm-bindgen
//!
//! # Architecture
//!
//! This crate sits at Layer 2 (Algorithms) in the U-Engine ecosystem. It
//! has no presentation concerns: item entry, progress display and result
//! rendering belong to the caller, which observes a run only through the
//! progress callback and the returned [`ga::KnapsackResult`].

pub mod error;
pub mod ga;
pub mod random;
#[cfg(feature = "wasm")]
pub mod wasm;
