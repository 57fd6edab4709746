//! An evaluated generation.

use super::problem::Knapsack;
use super::types::Genome;

/// The genomes of one generation together with their fitness.
///
/// `fitness()[i]` is the fitness of `members()[i]`. A population is built
/// once per generation and never edited; the next generation is a new value.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    members: Vec<Genome>,
    fitness: Vec<f64>,
}

impl Population {
    /// Evaluates `members` against `knapsack`.
    pub fn evaluate(members: Vec<Genome>, knapsack: &Knapsack, parallel: bool) -> Self {
        let fitness = knapsack.evaluate_all(&members, parallel);
        Self { members, fitness }
    }

    pub fn members(&self) -> &[Genome] {
        &self.members
    }

    pub fn fitness(&self) -> &[f64] {
        &self.fitness
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, genome: &Genome) -> bool {
        self.members.contains(genome)
    }

    /// Index of the fittest member; the first one wins ties.
    pub fn best_index(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, &f) in self.fitness.iter().enumerate() {
            match best {
                Some(b) if f <= self.fitness[b] => {}
                _ => best = Some(i),
            }
        }
        best
    }

    /// The fittest member and its fitness; the first one wins ties.
    pub fn best(&self) -> Option<(&Genome, f64)> {
        self.best_index()
            .map(|i| (&self.members[i], self.fitness[i]))
    }
}
