//! Best solution so far (BSSF).

use crate::models::Tour;

/// Holds the best complete tour found so far.
///
/// Only strictly better tours replace the current one. In a parallel search
/// this is the single piece of shared state; here it is owned by the
/// search loop.
///
/// # Examples
///
/// ```
/// use u_tsp::bnb::Incumbent;
/// use u_tsp::distance::CostMatrix;
/// use u_tsp::models::Tour;
///
/// let m = CostMatrix::filled(3, 1.0);
/// let mut inc = Incumbent::empty();
/// assert!(inc.cost().is_infinite());
/// assert!(inc.offer(Tour::new(vec![0, 1, 2], &m).unwrap()));
/// assert!(!inc.offer(Tour::new(vec![0, 2, 1], &m).unwrap()));
/// assert_eq!(inc.improvements(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Incumbent {
    tour: Option<Tour>,
    improvements: usize,
}

impl Incumbent {
    /// An incumbent with no tour and infinite cost.
    pub fn empty() -> Self {
        Self::default()
    }

    /// An incumbent seeded with an initial tour.
    ///
    /// The seed is not counted as an improvement.
    pub fn seeded(tour: Option<Tour>) -> Self {
        Self {
            tour,
            improvements: 0,
        }
    }

    /// Cost of the current tour, `f64::INFINITY` if there is none.
    pub fn cost(&self) -> f64 {
        self.tour.as_ref().map_or(f64::INFINITY, Tour::cost)
    }

    /// The current tour, if any.
    pub fn tour(&self) -> Option<&Tour> {
        self.tour.as_ref()
    }

    /// Number of times an offered tour replaced the incumbent.
    pub fn improvements(&self) -> usize {
        self.improvements
    }

    /// Returns `true` if a node with this lower bound cannot beat the
    /// incumbent.
    pub fn prunes(&self, bound: f64) -> bool {
        bound >= self.cost()
    }

    /// Replaces the incumbent if `tour` is strictly cheaper.
    ///
    /// Returns whether the tour was accepted.
    pub fn offer(&mut self, tour: Tour) -> bool {
        if tour.cost() < self.cost() {
            self.tour = Some(tour);
            self.improvements += 1;
            true
        } else {
            false
        }
    }

    /// Consumes the incumbent and returns its tour.
    pub fn into_tour(self) -> Option<Tour> {
        self.tour
    }
}
