//! Core data types: items and genomes.
//!
//! An [`Item`] is one candidate for the knapsack. A [`Genome`] is one
//! candidate solution: a fixed-length inclusion vector with one gene per
//! item.

use crate::error::GenomeParseError;
use std::fmt;
use std::str::FromStr;

/// An item that may be packed.
///
/// Items are supplied as an ordered sequence; gene `i` of every genome refers
/// to item `i` of that sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Weight counted against the capacity when the item is included.
    pub weight: f64,

    /// Value gained when the item is included.
    pub value: f64,
}

impl Item {
    pub fn new(weight: f64, value: f64) -> Self {
        Self { weight, value }
    }
}

impl From<(f64, f64)> for Item {
    fn from((weight, value): (f64, f64)) -> Self {
        Self::new(weight, value)
    }
}

/// A candidate solution: `genes[i] == true` means item `i` is packed.
///
/// The length is fixed for the whole run and always equals the item count.
/// Genomes are produced by initialization, crossover and mutation; they are
/// never resized.
///
/// The textual form is a bit string, one character per gene:
///
/// ```
/// use u_knapsack::ga::Genome;
///
/// let g: Genome = "1100".parse().unwrap();
/// assert_eq!(g.len(), 4);
/// assert_eq!(g.selected().collect::<Vec<_>>(), vec![0, 1]);
/// assert_eq!(g.to_string(), "1100");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Genome {
    genes: Vec<bool>,
}

impl Genome {
    pub fn new(genes: Vec<bool>) -> Self {
        Self { genes }
    }

    /// A genome that packs nothing. Always feasible.
    pub fn empty(len: usize) -> Self {
        Self {
            genes: vec![false; len],
        }
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    pub(crate) fn genes_mut(&mut self) -> &mut [bool] {
        &mut self.genes
    }

    /// Whether item `index` is packed.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn includes(&self, index: usize) -> bool {
        self.genes[index]
    }

    /// Indices of packed items, ascending.
    pub fn selected(&self) -> impl Iterator<Item = usize> + '_ {
        self.genes
            .iter()
            .enumerate()
            .filter_map(|(i, &on)| on.then_some(i))
    }

    /// Number of packed items.
    pub fn count_selected(&self) -> usize {
        self.genes.iter().filter(|&&on| on).count()
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &gene in &self.genes {
            f.write_str(if gene { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Genome {
    type Err = GenomeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(GenomeParseError::Empty);
        }
        let genes = s
            .chars()
            .enumerate()
            .map(|(position, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                found => Err(GenomeParseError::InvalidGene { position, found }),
            })
            .collect::<Result<Vec<bool>, _>>()?;
        Ok(Self { genes })
    }
}
