//! One-stop solver facade.
//!
//! [`Solver`] validates an instance once and then runs any of the crate's
//! algorithms on it, reporting each run as a [`SolveReport`].

mod report;

pub use report::SolveReport;

use log::info;

use crate::bnb::{BnbConfig, BnbSolver};
use crate::clock::Deadline;
use crate::constructive::{nearest_neighbor, random_tour, seed_tour, SeedConfig};
use crate::distance::CostMatrix;
use crate::error::{Result, TspError};
use crate::models::CostModel;
use crate::random::create_rng;
use crate::sa::{Annealer, AnnealingConfig};

/// A validated TSP instance with every solving strategy attached.
///
/// # Examples
///
/// ```
/// use u_tsp::bnb::BnbConfig;
/// use u_tsp::scenario::{Scenario, ScenarioConfig};
/// use u_tsp::solver::Solver;
///
/// let scenario = Scenario::generate(&ScenarioConfig::new(8).with_seed(3)).unwrap();
/// let solver = Solver::new(&scenario).unwrap();
///
/// let greedy = solver.greedy(1.0).unwrap();
/// let exact = solver.branch_and_bound(&BnbConfig::default()).unwrap();
/// assert!(exact.cost <= greedy.cost);
/// assert_eq!(exact.exhaustive, Some(true));
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    matrix: CostMatrix,
}

impl Solver {
    /// Builds the cost matrix of `model`.
    ///
    /// Fails on fewer than two cities or on NaN/negative costs.
    pub fn new<M: CostModel + ?Sized>(model: &M) -> Result<Self> {
        Self::from_matrix(CostMatrix::from_model(model)?)
    }

    /// Wraps an existing cost matrix.
    pub fn from_matrix(matrix: CostMatrix) -> Result<Self> {
        if matrix.size() < 2 {
            return Err(TspError::TooFewCities {
                count: matrix.size(),
            });
        }
        Ok(Self { matrix })
    }

    /// The instance's cost matrix.
    pub fn matrix(&self) -> &CostMatrix {
        &self.matrix
    }

    pub fn num_cities(&self) -> usize {
        self.matrix.size()
    }

    /// Draws random permutations until one is feasible or `time_limit`
    /// seconds pass. `count` is the number of permutations drawn.
    pub fn random_tour(&self, time_limit: f64) -> Result<SolveReport> {
        check_time_limit(time_limit)?;
        let deadline = Deadline::from_secs(time_limit);
        let mut rng = create_rng(None);
        let outcome = random_tour(&self.matrix, &deadline, usize::MAX, &mut rng);
        let report = SolveReport::constructive(outcome.tour, outcome.attempts, deadline.elapsed());
        info!("random tour: cost {:.3}, {} attempt(s)", report.cost, report.count);
        Ok(report)
    }

    /// Greedy nearest neighbor from city 0, falling back to later start
    /// cities on dead ends. `count` is the number of start cities tried.
    pub fn greedy(&self, time_limit: f64) -> Result<SolveReport> {
        check_time_limit(time_limit)?;
        let deadline = Deadline::from_secs(time_limit);
        let outcome = nearest_neighbor(&self.matrix, 0, &deadline);
        let report =
            SolveReport::constructive(outcome.tour, outcome.starts_tried, deadline.elapsed());
        info!("greedy: cost {:.3}, {} start(s)", report.cost, report.count);
        Ok(report)
    }

    /// Reduced-matrix branch and bound. `count` is the number of incumbent
    /// improvements; the search fields are filled in.
    pub fn branch_and_bound(&self, config: &BnbConfig) -> Result<SolveReport> {
        BnbSolver::solve(&self.matrix, config).map(SolveReport::from)
    }

    /// Seeds a tour with `seed` and refines it by simulated annealing.
    /// `count` is the number of candidate evaluations.
    ///
    /// If seeding finds no feasible tour, the report carries no tour and
    /// infinite cost.
    pub fn anneal(&self, config: &AnnealingConfig, seed: &SeedConfig) -> Result<SolveReport> {
        config.validate()?;
        let seeded = seed_tour(&self.matrix, seed)?;
        let Some(tour) = seeded.tour else {
            info!("anneal: no feasible seed after {} attempt(s)", seeded.attempts);
            return Ok(SolveReport::constructive(None, 0, seeded.elapsed));
        };

        let result = Annealer::refine(&self.matrix, &tour, config)?;
        let mut report = SolveReport::from(result);
        report.elapsed += seeded.elapsed;
        Ok(report)
    }
}

fn check_time_limit(time_limit: f64) -> Result<()> {
    if time_limit.is_nan() || time_limit <= 0.0 {
        return Err(TspError::InvalidConfig(format!(
            "time_limit must be positive, got {time_limit}"
        )));
    }
    Ok(())
}
