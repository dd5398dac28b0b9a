//! Tour type.

use serde::{Deserialize, Serialize};

use super::CostModel;
use crate::error::{Result, TspError};

/// A closed tour: every city exactly once, with an implicit return edge
/// from the last city to the first.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::CostMatrix;
/// use u_tsp::models::Tour;
///
/// let m = CostMatrix::from_rows(&[
///     vec![0.0, 1.0, 4.0],
///     vec![1.0, 0.0, 2.0],
///     vec![4.0, 2.0, 0.0],
/// ]).unwrap();
/// let tour = Tour::new(vec![0, 1, 2], &m).unwrap();
/// assert_eq!(tour.cost(), 7.0);
/// assert!(Tour::new(vec![0, 0, 2], &m).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    order: Vec<usize>,
    cost: f64,
}

impl Tour {
    /// Builds a tour after checking that `order` is a permutation of all
    /// cities in `model`.
    ///
    /// The cost may be `f64::INFINITY` when the tour uses an unreachable edge.
    pub fn new<M: CostModel + ?Sized>(order: Vec<usize>, model: &M) -> Result<Self> {
        validate_permutation(&order, model.num_cities())?;
        let cost = model.tour_cost(&order);
        Ok(Self { order, cost })
    }

    /// Builds a tour from an order already known to be a permutation.
    pub(crate) fn from_parts(order: Vec<usize>, cost: f64) -> Self {
        debug_assert!(validate_permutation(&order, order.len()).is_ok());
        Self { order, cost }
    }

    /// City indices in visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Total cost including the return edge.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Returns `true` if every edge in the tour is reachable.
    pub fn is_feasible(&self) -> bool {
        self.cost.is_finite()
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the tour visits no cities.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Directed edges of the closed tour, including the return edge.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.order.len();
        (0..n).map(move |i| (self.order[i], self.order[(i + 1) % n]))
    }

    /// Rotates the order so that it starts at `city`. Cost is unchanged.
    ///
    /// Does nothing if `city` is not part of the tour.
    pub fn rotate_to(&mut self, city: usize) {
        if let Some(pos) = self.order.iter().position(|&c| c == city) {
            self.order.rotate_left(pos);
        }
    }

    /// Consumes the tour and returns its order.
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }
}

/// Checks that `order` holds each of `0..n` exactly once.
pub(crate) fn validate_permutation(order: &[usize], n: usize) -> Result<()> {
    if order.len() != n {
        return Err(TspError::InvalidTour(format!(
            "expected {n} cities, got {}",
            order.len()
        )));
    }
    let mut seen = vec![false; n];
    for &city in order {
        if city >= n {
            return Err(TspError::InvalidTour(format!(
                "city {city} out of range 0..{n}"
            )));
        }
        if seen[city] {
            return Err(TspError::InvalidTour(format!("city {city} visited twice")));
        }
        seen[city] = true;
    }
    Ok(())
}
