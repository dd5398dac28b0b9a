//! Incumbent seeding.
//!
//! Produces the first feasible tour before branch and bound starts, so
//! that pruning is effective from the root.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{nearest_neighbor, random_tour};
use crate::clock::Deadline;
use crate::distance::CostMatrix;
use crate::error::{Result, TspError};
use crate::models::Tour;
use crate::random::create_rng;

/// How the initial feasible tour is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SeedStrategy {
    /// Greedy nearest neighbor, retrying other start cities on dead ends.
    #[default]
    NearestNeighbor,
    /// Random permutations until one is feasible.
    RandomPermutation,
}

/// Configuration for incumbent seeding.
///
/// The seeding heuristic has its own time allowance, separate from the
/// search budget of whatever consumes the seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Construction strategy.
    pub strategy: SeedStrategy,

    /// Time allowance in seconds. `f64::INFINITY` = unlimited.
    pub time_limit: f64,

    /// First start city tried by nearest neighbor.
    pub start_city: usize,

    /// Cap on permutations drawn by the random strategy.
    pub max_random_attempts: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            strategy: SeedStrategy::default(),
            time_limit: 60.0,
            start_city: 0,
            max_random_attempts: 1_000_000,
            seed: None,
        }
    }
}

impl SeedConfig {
    pub fn with_strategy(mut self, strategy: SeedStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_time_limit(mut self, secs: f64) -> Self {
        self.time_limit = secs;
        self
    }

    pub fn with_start_city(mut self, city: usize) -> Self {
        self.start_city = city;
        self
    }

    pub fn with_max_random_attempts(mut self, n: usize) -> Self {
        self.max_random_attempts = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.time_limit.is_nan() || self.time_limit <= 0.0 {
            return Err(TspError::InvalidConfig(format!(
                "seed time_limit must be positive, got {}",
                self.time_limit
            )));
        }
        if self.max_random_attempts == 0 {
            return Err(TspError::InvalidConfig(
                "max_random_attempts must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Result of incumbent seeding.
#[derive(Debug, Clone)]
pub struct SeedOutcome {
    /// The feasible tour found, if any.
    pub tour: Option<Tour>,

    /// Start cities tried (nearest neighbor) or permutations drawn (random).
    pub attempts: usize,

    /// Strategy that was used.
    pub strategy: SeedStrategy,

    /// Time spent seeding.
    pub elapsed: Duration,
}

impl SeedOutcome {
    /// Cost of the seed tour, `f64::INFINITY` if none was found.
    pub fn cost(&self) -> f64 {
        self.tour.as_ref().map_or(f64::INFINITY, Tour::cost)
    }
}

/// Builds an initial feasible tour with the configured strategy.
///
/// An infeasible instance is not an error: the outcome then has no tour.
pub fn seed_tour(matrix: &CostMatrix, config: &SeedConfig) -> Result<SeedOutcome> {
    config.validate()?;
    if config.start_city >= matrix.size() {
        return Err(TspError::InvalidConfig(format!(
            "start_city {} out of range 0..{}",
            config.start_city,
            matrix.size()
        )));
    }

    let deadline = Deadline::from_secs(config.time_limit);
    let (tour, attempts) = match config.strategy {
        SeedStrategy::NearestNeighbor => {
            let outcome = nearest_neighbor(matrix, config.start_city, &deadline);
            (outcome.tour, outcome.starts_tried)
        }
        SeedStrategy::RandomPermutation => {
            let mut rng = create_rng(config.seed);
            let outcome = random_tour(matrix, &deadline, config.max_random_attempts, &mut rng);
            (outcome.tour, outcome.attempts)
        }
    };

    Ok(SeedOutcome {
        tour,
        attempts,
        strategy: config.strategy,
        elapsed: deadline.elapsed(),
    })
}
