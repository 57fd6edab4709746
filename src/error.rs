//! Error types.
//!
//! Every invalid run parameter is reported as a [`ConfigError`] before the
//! generational loop starts. The loop itself has no failure modes.

use thiserror::Error;

/// Result alias for configuration checks.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// A run configuration that the solver refuses to execute.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("item list is empty")]
    EmptyItems,

    #[error("at least 2 items are required for single-point crossover, got {0}")]
    GenomeTooShort(usize),

    #[error("item {index} has invalid weight {weight} (must be finite and non-negative)")]
    InvalidItemWeight { index: usize, weight: f64 },

    #[error("item {index} has invalid value {value} (must be finite and non-negative)")]
    InvalidItemValue { index: usize, value: f64 },

    #[error("total item value overflows f64")]
    TotalValueOverflow,

    #[error("capacity must be finite and non-negative, got {0}")]
    InvalidCapacity(f64),

    #[error("population_size must be positive")]
    ZeroPopulation,

    #[error("population_size must be even so parents pair up exactly, got {0}")]
    OddPopulation(usize),

    #[error("generations must be at least 1")]
    ZeroGenerations,

    #[error("mutation_rate must lie in [0, 1], got {0}")]
    InvalidMutationRate(f64),

    #[error("tournament size must be at least 1")]
    ZeroTournamentSize,
}

/// A bit string that does not describe a genome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenomeParseError {
    #[error("genome string is empty")]
    Empty,

    #[error("invalid gene {found:?} at position {position} (expected '0' or '1')")]
    InvalidGene { position: usize, found: char },
}
