//! Random-permutation tours.
//!
//! Draws uniformly random permutations until one has finite cost. Cheap
//! and unbiased, but the first feasible tour is usually far from optimal;
//! kept as a baseline and as a fallback when greedy construction fails.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::clock::Deadline;
use crate::distance::CostMatrix;
use crate::models::{CostModel, Tour};

/// Result of a random-permutation search.
#[derive(Debug, Clone)]
pub struct RandomTourOutcome {
    /// The first feasible tour drawn, if any.
    pub tour: Option<Tour>,

    /// Number of permutations tried.
    pub attempts: usize,
}

/// Draws random permutations until one is feasible, `max_attempts`
/// permutations were tried, or the deadline expires.
///
/// At least one permutation is always drawn.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use u_tsp::clock::Deadline;
/// use u_tsp::distance::CostMatrix;
/// use u_tsp::constructive::random_tour;
///
/// let m = CostMatrix::from_rows(&[
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 3.0],
///     vec![2.0, 3.0, 0.0],
/// ]).unwrap();
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
/// let outcome = random_tour(&m, &Deadline::unlimited(), 100, &mut rng);
/// assert_eq!(outcome.attempts, 1);
/// assert_eq!(outcome.tour.unwrap().cost(), 6.0);
/// ```
pub fn random_tour<R: Rng>(
    matrix: &CostMatrix,
    deadline: &Deadline,
    max_attempts: usize,
    rng: &mut R,
) -> RandomTourOutcome {
    let n = matrix.size();
    let mut order: Vec<usize> = (0..n).collect();
    let mut attempts = 0;

    loop {
        order.shuffle(rng);
        attempts += 1;

        let cost = matrix.tour_cost(&order);
        if cost.is_finite() {
            debug!("random tour: cost {cost:.3} after {attempts} attempt(s)");
            return RandomTourOutcome {
                tour: Some(Tour::from_parts(order, cost)),
                attempts,
            };
        }
        if attempts >= max_attempts || deadline.expired() {
            break;
        }
    }

    debug!("random tour: no feasible permutation in {attempts} attempt(s)");
    RandomTourOutcome {
        tour: None,
        attempts,
    }
}
