//! Branch-and-bound execution loop.

use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use log::{debug, info, trace, warn};
use serde::Serialize;

use super::config::BnbConfig;
use super::incumbent::Incumbent;
use super::node::SearchNode;
use crate::clock::Deadline;
use crate::constructive::seed_tour;
use crate::distance::CostMatrix;
use crate::error::{Result, TspError};
use crate::models::{CostModel, Tour};

/// Result of a branch-and-bound run.
#[derive(Debug, Clone, Serialize)]
pub struct BnbResult {
    /// The best tour found, including the seed if nothing beat it.
    pub best: Option<Tour>,

    /// Cost of the best tour, `f64::INFINITY` if none was found.
    pub best_cost: f64,

    /// Cost of the seed tour.
    pub seed_cost: f64,

    /// Total wall-clock time, seeding included.
    pub elapsed: Duration,

    /// Time spent building the seed tour.
    pub seed_elapsed: Duration,

    /// Number of times a complete tour replaced the incumbent.
    pub improvements: usize,

    /// Search nodes created, root included.
    pub nodes_created: usize,

    /// Nodes discarded because their bound could not beat the incumbent,
    /// whether at creation or when popped.
    pub nodes_pruned: usize,

    /// The part of `nodes_pruned` discarded when popped: nodes queued
    /// before the incumbent improved past their bound.
    pub pruned_on_pop: usize,

    /// Children discarded because the queue memory budget was exhausted.
    pub nodes_dropped: usize,

    /// Complete tours popped from the queue.
    pub leaves_reached: usize,

    /// Largest number of queued nodes observed.
    pub max_queue_size: usize,

    /// `true` if the search space was fully explored, which makes
    /// `best` optimal (when it exists).
    pub exhaustive: bool,
}

/// Executes the reduced-matrix branch-and-bound search.
///
/// # Algorithm
///
/// 1. Seed the incumbent with a fast feasible tour (own time allowance).
/// 2. Reduce the full cost matrix; its reduction is the root bound.
/// 3. Repeatedly pop the node with the smallest priority key. Nodes whose
///    bound cannot beat the incumbent are pruned; complete tours are
///    offered to the incumbent; other nodes are expanded into one child
///    per reachable unvisited city, each with its own re-reduced matrix.
/// 4. Stop when the queue is empty (exhaustive) or the deadline expires.
///
/// # Examples
///
/// ```
/// use u_tsp::bnb::{BnbConfig, BnbSolver};
/// use u_tsp::distance::CostMatrix;
///
/// let m = CostMatrix::from_rows(&[
///     vec![0.0, 10.0, 15.0, 20.0],
///     vec![10.0, 0.0, 35.0, 25.0],
///     vec![15.0, 35.0, 0.0, 30.0],
///     vec![20.0, 25.0, 30.0, 0.0],
/// ]).unwrap();
/// let result = BnbSolver::solve(&m, &BnbConfig::default()).unwrap();
/// assert_eq!(result.best_cost, 80.0);
/// assert!(result.exhaustive);
/// ```
pub struct BnbSolver;

impl BnbSolver {
    /// Solves the instance described by `model`.
    ///
    /// Fails fast on malformed input (fewer than two cities, NaN or
    /// negative costs) or invalid configuration. Infeasible instances and
    /// expired deadlines are reported through the result.
    pub fn solve<M: CostModel + ?Sized>(model: &M, config: &BnbConfig) -> Result<BnbResult> {
        config.validate()?;
        let n = model.num_cities();
        if n < 2 {
            return Err(TspError::TooFewCities { count: n });
        }
        let matrix = CostMatrix::from_model(model)?;
        Self::run(&matrix, config)
    }

    fn run(matrix: &CostMatrix, config: &BnbConfig) -> Result<BnbResult> {
        let n = matrix.size();
        let start_city = config.start_city;
        if start_city >= n {
            return Err(TspError::InvalidConfig(format!(
                "start_city {start_city} out of range 0..{n}"
            )));
        }

        let started = Instant::now();
        info!("branch and bound: {n} cities, time limit {}s", config.time_limit);

        let seed = seed_tour(matrix, &config.seed)?;
        let seed_cost = seed.cost();
        let mut seed_tour = seed.tour;
        if let Some(tour) = seed_tour.as_mut() {
            tour.rotate_to(start_city);
        }
        debug!(
            "branch and bound: seed cost {seed_cost:.3} via {:?} ({} attempt(s))",
            seed.strategy, seed.attempts
        );
        let mut incumbent = Incumbent::seeded(seed_tour);

        let deadline = Deadline::from_secs(config.time_limit);
        let ordering = config.ordering;
        let root = SearchNode::root(matrix.clone(), start_city, &ordering);
        debug!("branch and bound: root bound {:.3}", root.bound());

        let mut queue: BinaryHeap<SearchNode> = BinaryHeap::new();
        let mut queued_cells = 0usize;
        let mut nodes_created = 1usize;
        let mut nodes_pruned = 0usize;
        let mut pruned_on_pop = 0usize;
        let mut nodes_dropped = 0usize;
        let mut leaves_reached = 0usize;
        let mut interrupted = false;

        if incumbent.prunes(root.bound()) {
            nodes_pruned += 1;
        } else {
            queued_cells += root.matrix().cells();
            queue.push(root);
        }
        let mut max_queue_size = queue.len();

        loop {
            if deadline.expired() {
                interrupted = !queue.is_empty();
                break;
            }
            let Some(node) = queue.pop() else {
                break;
            };
            queued_cells -= node.matrix().cells();

            // The incumbent may have improved while this node was queued.
            if incumbent.prunes(node.bound()) {
                nodes_pruned += 1;
                pruned_on_pop += 1;
                trace!("pruned node {} at pop (bound {:.3})", node.id(), node.bound());
                continue;
            }

            if node.is_leaf() {
                leaves_reached += 1;
                let order = node.into_path();
                let cost = matrix.tour_cost(&order);
                if incumbent.offer(Tour::from_parts(order, cost)) {
                    debug!(
                        "branch and bound: improved to {cost:.3} after {nodes_created} nodes ({:.3}s)",
                        started.elapsed().as_secs_f64()
                    );
                }
                continue;
            }

            // Only reachable cities are checked against the deadline, so an
            // interruption always leaves a real child unexplored.
            for to in node.successors() {
                if deadline.expired() {
                    interrupted = true;
                    break;
                }
                let Some(child) = node.child(to, nodes_created, &ordering) else {
                    continue;
                };
                nodes_created += 1;

                if incumbent.prunes(child.bound()) {
                    nodes_pruned += 1;
                    trace!("pruned node {} at creation (bound {:.3})", child.id(), child.bound());
                    continue;
                }

                let cells = child.matrix().cells();
                if queued_cells + cells > config.max_queue_cells {
                    if nodes_dropped == 0 {
                        warn!(
                            "branch and bound: queue memory budget of {} cells exhausted; discarding children",
                            config.max_queue_cells
                        );
                    }
                    nodes_dropped += 1;
                    continue;
                }

                queued_cells += cells;
                queue.push(child);
                max_queue_size = max_queue_size.max(queue.len());
            }

            if interrupted {
                break;
            }
        }

        let exhaustive = !interrupted && nodes_dropped == 0;
        let improvements = incumbent.improvements();
        let best = incumbent.into_tour();
        let best_cost = best.as_ref().map_or(f64::INFINITY, Tour::cost);
        let elapsed = started.elapsed();

        info!(
            "branch and bound: cost {best_cost:.3}, {improvements} improvement(s), {nodes_created} created, \
             {nodes_pruned} pruned, max queue {max_queue_size}, exhaustive={exhaustive}, {:.3}s",
            elapsed.as_secs_f64()
        );

        Ok(BnbResult {
            best,
            best_cost,
            seed_cost,
            elapsed,
            seed_elapsed: seed.elapsed,
            improvements,
            nodes_created,
            nodes_pruned,
            pruned_on_pop,
            nodes_dropped,
            leaves_reached,
            max_queue_size,
            exhaustive,
        })
    }
}
