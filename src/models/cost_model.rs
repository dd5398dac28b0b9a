//! Cost model trait.

use super::City;

/// A finite, ordered set of cities with a pairwise travel cost.
///
/// Costs may be asymmetric and may be `f64::INFINITY` for unreachable
/// pairs. `cost(i, i)` is expected to be `0`. Solvers never call `cost`
/// with indices outside `0..num_cities()`.
///
/// # Examples
///
/// ```
/// use u_tsp::models::CostModel;
///
/// struct Ring(usize);
///
/// impl CostModel for Ring {
///     fn num_cities(&self) -> usize { self.0 }
///     fn cost(&self, from: usize, to: usize) -> f64 {
///         if from == to { 0.0 } else if (from + 1) % self.0 == to { 1.0 } else { 10.0 }
///     }
/// }
///
/// let ring = Ring(4);
/// assert_eq!(ring.tour_cost(&[0, 1, 2, 3]), 4.0);
/// ```
pub trait CostModel {
    /// Number of cities.
    fn num_cities(&self) -> usize;

    /// Travel cost from city `from` to city `to`.
    fn cost(&self, from: usize, to: usize) -> f64;

    /// Cost of the closed cycle visiting `order` and returning to its start.
    ///
    /// Returns `0` for an empty sequence.
    fn tour_cost(&self, order: &[usize]) -> f64 {
        match (order.first(), order.last()) {
            (Some(&first), Some(&last)) => {
                let open: f64 = order.windows(2).map(|w| self.cost(w[0], w[1])).sum();
                open + self.cost(last, first)
            }
            _ => 0.0,
        }
    }
}

impl CostModel for [City] {
    fn num_cities(&self) -> usize {
        self.len()
    }

    fn cost(&self, from: usize, to: usize) -> f64 {
        self[from].cost_to(&self[to])
    }
}

impl CostModel for Vec<City> {
    fn num_cities(&self) -> usize {
        self.len()
    }

    fn cost(&self, from: usize, to: usize) -> f64 {
        self[from].cost_to(&self[to])
    }
}

impl<M: CostModel + ?Sized> CostModel for &M {
    fn num_cities(&self) -> usize {
        (**self).num_cities()
    }

    fn cost(&self, from: usize, to: usize) -> f64 {
        (**self).cost(from, to)
    }
}
