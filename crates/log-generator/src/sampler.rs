//! Categorical sampler over a fixed set of weighted outcomes.

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;

/// Error raised for a malformed weight table.
#[derive(Debug, thiserror::Error)]
pub enum SamplerError {
    /// No outcomes given
    #[error("outcome list is empty")]
    Empty,

    /// Outcome and weight lists differ in length
    #[error("{outcomes} outcomes but {weights} weights")]
    LengthMismatch { outcomes: usize, weights: usize },

    /// Every weight is zero
    #[error("all weights are zero")]
    AllZero,

    /// Rejected by the underlying weighted index
    #[error("invalid weights: {0}")]
    Weights(#[from] rand::distr::weighted::Error),
}

/// Draws one outcome with probability `weight[i] / sum(weights)`.
///
/// Zero weights are allowed; such outcomes are never returned.
#[derive(Debug, Clone)]
pub struct WeightedChoice<T> {
    outcomes: Vec<T>,
    index: WeightedIndex<u32>,
}

impl<T> WeightedChoice<T> {
    /// Build a sampler from parallel outcome and weight lists.
    pub fn new(outcomes: Vec<T>, weights: &[u32]) -> Result<Self, SamplerError> {
        if outcomes.is_empty() {
            return Err(SamplerError::Empty);
        }
        if outcomes.len() != weights.len() {
            return Err(SamplerError::LengthMismatch {
                outcomes: outcomes.len(),
                weights: weights.len(),
            });
        }
        if weights.iter().all(|w| *w == 0) {
            return Err(SamplerError::AllZero);
        }

        let index = WeightedIndex::new(weights)?;
        Ok(Self { outcomes, index })
    }

    /// Draw one outcome.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &T {
        &self.outcomes[self.index.sample(rng)]
    }
}

impl<T: Clone> WeightedChoice<T> {
    /// Build a sampler from `(outcome, weight)` pairs.
    pub fn from_pairs(pairs: &[(T, u32)]) -> Result<Self, SamplerError> {
        let outcomes = pairs.iter().map(|(o, _)| o.clone()).collect();
        let weights: Vec<u32> = pairs.iter().map(|(_, w)| *w).collect();
        Self::new(outcomes, &weights)
    }

    /// Build a sampler from a compile-time weight table.
    ///
    /// # Panics
    ///
    /// Panics if the table is malformed. Static tables are fixed at build
    /// time, so this only fires on a programming error.
    pub fn from_static(table: &'static [(T, u32)]) -> Self {
        match Self::from_pairs(table) {
            Ok(choice) => choice,
            Err(e) => panic!("malformed static weight table: {e}"),
        }
    }
}
