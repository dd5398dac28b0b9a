//! Dense cost matrix.

use crate::error::{Result, TspError};
use crate::models::CostModel;

/// A dense n×n cost matrix stored in row-major order.
///
/// Entries are non-negative reals or `f64::INFINITY` (unreachable).
/// Supports construction from any [`CostModel`] and from explicit data.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::distance::CostMatrix;
///
/// let cities = vec![
///     City::new(0.0, 0.0),
///     City::new(3.0, 4.0),
///     City::new(6.0, 8.0),
/// ];
/// let m = CostMatrix::from_model(&cities).unwrap();
/// assert!((m.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(m.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    data: Vec<f64>,
    size: usize,
}

impl CostMatrix {
    /// Creates a cost matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self::filled(size, 0.0)
    }

    /// Creates a cost matrix with every entry set to `value`.
    pub fn filled(size: usize, value: f64) -> Self {
        Self {
            data: vec![value; size * size],
            size,
        }
    }

    /// Snapshots the costs of a model into a matrix.
    ///
    /// Fails if any cost is NaN or negative.
    pub fn from_model<M: CostModel + ?Sized>(model: &M) -> Result<Self> {
        let n = model.num_cities();
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                data.push(model.cost(i, j));
            }
        }
        Self::from_data(n, data)
    }

    /// Creates a cost matrix from an explicit row-major n×n grid.
    ///
    /// Fails if the data length doesn't match `size * size`, or if any
    /// entry is NaN or negative.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != size * size {
            return Err(TspError::DimensionMismatch {
                expected: size * size,
                actual: data.len(),
            });
        }
        if let Some(pos) = data.iter().position(|v| v.is_nan() || *v < 0.0) {
            return Err(TspError::InvalidCost {
                from: pos / size,
                to: pos % size,
                value: data[pos],
            });
        }
        Ok(Self { data, size })
    }

    /// Creates a cost matrix from a slice of rows.
    ///
    /// Every row must have exactly as many entries as there are rows.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for row in rows {
            if row.len() != size {
                return Err(TspError::DimensionMismatch {
                    expected: size,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Self::from_data(size, data)
    }

    /// Returns the cost from city `from` to city `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the cost from city `from` to city `to`.
    #[inline]
    pub fn set(&mut self, from: usize, to: usize, cost: f64) {
        self.data[from * self.size + to] = cost;
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of stored cells (`size * size`).
    pub fn cells(&self) -> usize {
        self.data.len()
    }

    /// The outgoing costs of city `from`.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    pub(crate) fn row_mut(&mut self, from: usize) -> &mut [f64] {
        &mut self.data[from * self.size..(from + 1) * self.size]
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    ///
    /// Two infinite entries compare equal.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                let (a, b) = (self.get(i, j), self.get(j, i));
                if a == b {
                    continue;
                }
                if (a - b).abs() > tol || a.is_infinite() || b.is_infinite() {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the reachable candidate nearest to `from`.
    ///
    /// Returns `None` if `candidates` is empty or all of them are unreachable.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .filter(|&c| self.get(from, c).is_finite())
            .min_by(|&a, &b| self.get(from, a).total_cmp(&self.get(from, b)))
    }
}

impl CostModel for CostMatrix {
    fn num_cities(&self) -> usize {
        self.size
    }

    fn cost(&self, from: usize, to: usize) -> f64 {
        self.get(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::City;

    fn sample_cities() -> Vec<City> {
        vec![
            City::new(0.0, 0.0),
            City::new(3.0, 4.0),
            City::new(0.0, 8.0),
        ]
    }

    #[test]
    fn test_from_model() {
        let m = CostMatrix::from_model(&sample_cities()).expect("valid");
        assert_eq!(m.size(), 3);
        assert!((m.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((m.get(0, 2) - 8.0).abs() < 1e-10);
        assert!((m.get(0, 0)).abs() < 1e-10);
    }

    #[test]
    fn test_symmetric() {
        let m = CostMatrix::from_model(&sample_cities()).expect("valid");
        assert!(m.is_symmetric(1e-10));
    }

    #[test]
    fn test_from_data() {
        let m = CostMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).expect("valid");
        assert_eq!(m.get(0, 1), 5.0);
        assert_eq!(m.get(1, 0), 5.0);
    }

    #[test]
    fn test_from_data_invalid_size() {
        let err = CostMatrix::from_data(2, vec![0.0, 1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            TspError::DimensionMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_from_data_rejects_nan_and_negative() {
        let err = CostMatrix::from_data(2, vec![0.0, f64::NAN, 1.0, 0.0]).unwrap_err();
        assert!(matches!(err, TspError::InvalidCost { from: 0, to: 1, .. }));
        let err = CostMatrix::from_data(2, vec![0.0, 1.0, -1.0, 0.0]).unwrap_err();
        assert!(matches!(err, TspError::InvalidCost { from: 1, to: 0, .. }));
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = CostMatrix::from_rows(&[vec![0.0, 1.0], vec![1.0]]).unwrap_err();
        assert!(matches!(err, TspError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_infinity_is_valid() {
        let m = CostMatrix::from_rows(&[vec![0.0, f64::INFINITY], vec![1.0, 0.0]]).expect("valid");
        assert!(m.get(0, 1).is_infinite());
        assert!(!m.is_symmetric(1e-10));
    }

    #[test]
    fn test_set_get_row() {
        let mut m = CostMatrix::new(3);
        m.set(0, 1, 42.0);
        assert_eq!(m.get(0, 1), 42.0);
        assert_eq!(m.get(1, 0), 0.0);
        assert_eq!(m.row(0), &[0.0, 42.0, 0.0]);
        assert_eq!(m.cells(), 9);
    }

    #[test]
    fn test_nearest_neighbor() {
        let mut m = CostMatrix::from_model(&sample_cities()).expect("valid");
        assert_eq!(m.nearest_neighbor(0, &[1, 2]), Some(1));
        assert_eq!(m.nearest_neighbor(0, &[2]), Some(2));
        assert_eq!(m.nearest_neighbor(0, &[]), None);

        m.set(0, 1, f64::INFINITY);
        m.set(0, 2, f64::INFINITY);
        assert_eq!(m.nearest_neighbor(0, &[1, 2]), None);
    }
}
