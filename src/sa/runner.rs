//! Annealing execution loop.

use std::time::Duration;

use log::{debug, info};
use rand::Rng;
use serde::Serialize;

use super::config::AnnealingConfig;
use crate::clock::Deadline;
use crate::error::{Result, TspError};
use crate::models::{validate_permutation, CostModel, Tour};
use crate::random::create_rng;

/// Result of an annealing run.
#[derive(Debug, Clone, Serialize)]
pub struct AnnealingResult {
    /// The best tour seen during the run, rotated to start where the seed
    /// started. Never worse than the seed.
    pub best: Tour,

    /// Cost of the best tour.
    pub best_cost: f64,

    /// Cost of the seed tour.
    pub seed_cost: f64,

    /// Number of candidate tours evaluated.
    pub evaluations: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of moves that lowered the current cost.
    pub improving_moves: usize,

    /// Number of times the best tour was replaced.
    pub best_improvements: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    /// Wall-clock time of the run.
    pub elapsed: Duration,

    /// `true` if the time budget ended the run before the temperature
    /// reached its floor.
    pub timed_out: bool,
}

/// Refines a tour by simulated annealing over segment reversals.
///
/// Each iteration reverses a random contiguous block of the current tour
/// (length in `[2, N-1]`) and applies the Metropolis criterion: cheaper
/// candidates are always accepted, others with probability
/// `exp(-delta / T)`. The temperature is multiplied by `alpha` after every
/// iteration.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::CostMatrix;
/// use u_tsp::models::Tour;
/// use u_tsp::sa::{AnnealingConfig, Annealer};
///
/// let m = CostMatrix::from_rows(&[
///     vec![0.0, 10.0, 15.0, 20.0],
///     vec![10.0, 0.0, 35.0, 25.0],
///     vec![15.0, 35.0, 0.0, 30.0],
///     vec![20.0, 25.0, 30.0, 0.0],
/// ]).unwrap();
/// let seed = Tour::new(vec![0, 2, 1, 3], &m).unwrap();
/// let result = Annealer::refine(&m, &seed, &AnnealingConfig::default().with_seed(1)).unwrap();
/// assert!(result.best_cost <= seed.cost());
/// ```
pub struct Annealer;

impl Annealer {
    /// Runs annealing from `seed` on the instance described by `model`.
    ///
    /// Fails if the configuration is invalid or `seed` is not a permutation
    /// of the model's cities. Tours of fewer than three cities have no
    /// non-trivial segment to reverse and are returned unchanged.
    pub fn refine<M: CostModel + ?Sized>(
        model: &M,
        seed: &Tour,
        config: &AnnealingConfig,
    ) -> Result<AnnealingResult> {
        config.validate()?;
        let n = model.num_cities();
        if n < 2 {
            return Err(TspError::TooFewCities { count: n });
        }
        validate_permutation(seed.order(), n)?;

        let deadline = Deadline::from_secs(config.time_limit);
        let mut rng = create_rng(config.seed);

        let mut current = seed.order().to_vec();
        let mut current_cost = model.tour_cost(&current);
        let seed_cost = current_cost;
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.starting_temperature(n);
        let mut evaluations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut best_improvements = 0usize;
        let mut timed_out = false;

        info!(
            "annealing: {n} cities, seed cost {seed_cost:.3}, T0 {temperature:.3}, alpha {}",
            config.alpha
        );

        if n >= 3 {
            while temperature > config.min_temperature {
                if deadline.expired() {
                    timed_out = true;
                    break;
                }

                let len = rng.random_range(2..n);
                let start = rng.random_range(0..=n - len);
                let mut candidate = current.clone();
                candidate[start..start + len].reverse();
                let candidate_cost = model.tour_cost(&candidate);
                evaluations += 1;

                let delta = candidate_cost - current_cost;
                let accept = if delta < 0.0 {
                    improving_moves += 1;
                    true
                } else {
                    // NaN (both tours infeasible) never passes.
                    let probability = (-delta / temperature).exp();
                    rng.random_range(0.0..1.0) < probability
                };

                if accept {
                    current = candidate;
                    current_cost = candidate_cost;
                    accepted_moves += 1;

                    if current_cost < best_cost {
                        best.clone_from(&current);
                        best_cost = current_cost;
                        best_improvements += 1;
                        debug!("annealing: best {best_cost:.3} at T {temperature:.3e}");
                    }
                }

                temperature *= config.alpha;
            }
        }

        let mut best = Tour::from_parts(best, best_cost);
        if let Some(&first) = seed.order().first() {
            best.rotate_to(first);
        }
        let elapsed = deadline.elapsed();

        info!(
            "annealing: cost {best_cost:.3} (seed {seed_cost:.3}), {evaluations} evaluations, \
             {accepted_moves} accepted, timed_out={timed_out}, {:.3}s",
            elapsed.as_secs_f64()
        );

        Ok(AnnealingResult {
            best,
            best_cost,
            seed_cost,
            evaluations,
            accepted_moves,
            improving_moves,
            best_improvements,
            final_temperature: temperature,
            elapsed,
            timed_out,
        })
    }
}
