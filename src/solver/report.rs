//! Uniform solver report.

use std::time::Duration;

use serde::Serialize;

use crate::bnb::BnbResult;
use crate::models::Tour;
use crate::sa::AnnealingResult;

/// Summary returned by every [`Solver`](super::Solver) entry point.
///
/// The search-specific fields are `None` for algorithms that do not
/// maintain a search tree.
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    /// Cost of the returned tour, `f64::INFINITY` if none was found.
    pub cost: f64,

    /// Wall-clock time, seeding included.
    pub elapsed: Duration,

    /// Algorithm-specific count: permutations tried, start cities tried,
    /// incumbent improvements or candidate evaluations.
    pub count: usize,

    /// The best tour found.
    pub tour: Option<Tour>,

    /// Largest queue size (branch and bound only).
    pub max_queue: Option<usize>,

    /// Search nodes created (branch and bound only).
    pub total: Option<usize>,

    /// Search nodes pruned (branch and bound only).
    pub pruned: Option<usize>,

    /// Whether the search space was exhausted (branch and bound only).
    pub exhaustive: Option<bool>,
}

impl SolveReport {
    pub(crate) fn constructive(tour: Option<Tour>, count: usize, elapsed: Duration) -> Self {
        Self {
            cost: tour.as_ref().map_or(f64::INFINITY, Tour::cost),
            elapsed,
            count,
            tour,
            max_queue: None,
            total: None,
            pruned: None,
            exhaustive: None,
        }
    }

    /// Returns `true` if a finite tour was found.
    pub fn is_feasible(&self) -> bool {
        self.cost.is_finite()
    }
}

impl From<BnbResult> for SolveReport {
    fn from(result: BnbResult) -> Self {
        Self {
            cost: result.best_cost,
            elapsed: result.elapsed,
            count: result.improvements,
            tour: result.best,
            max_queue: Some(result.max_queue_size),
            total: Some(result.nodes_created),
            pruned: Some(result.nodes_pruned),
            exhaustive: Some(result.exhaustive),
        }
    }
}

impl From<AnnealingResult> for SolveReport {
    fn from(result: AnnealingResult) -> Self {
        Self {
            cost: result.best_cost,
            elapsed: result.elapsed,
            count: result.evaluations,
            tour: Some(result.best),
            max_queue: None,
            total: None,
            pruned: None,
            exhaustive: None,
        }
    }
}
