//! Row/column reduction of cost matrices.
//!
//! # Algorithm
//!
//! Every tour leaves each city exactly once and enters each city exactly
//! once, so subtracting a constant from a whole row (or column) lowers the
//! cost of every tour by exactly that constant. Subtracting each row's
//! minimum, then each column's minimum, yields a matrix whose entries are
//! all non-negative and whose removed total is a lower bound on any tour.
//!
//! `f64::INFINITY` is absorbing: `inf - m == inf`, and rows or columns that
//! are entirely unreachable contribute nothing.
//!
//! # Complexity
//!
//! O(n²) per reduction.
//!
//! # Reference
//!
//! Little, Murty, Sweeney & Karel (1963). "An algorithm for the traveling
//! salesman problem", *Operations Research* 11(6), 972-989.

use super::CostMatrix;

impl CostMatrix {
    /// Reduces the matrix in place and returns the total amount removed.
    ///
    /// After the call every row and every column holding at least one
    /// finite entry has minimum `0`. Reducing an already reduced matrix
    /// returns `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::distance::CostMatrix;
    ///
    /// let inf = f64::INFINITY;
    /// let mut m = CostMatrix::from_rows(&[
    ///     vec![inf, 3.0, 5.0],
    ///     vec![4.0, inf, 6.0],
    ///     vec![7.0, 9.0, inf],
    /// ]).unwrap();
    /// // rows: 3 + 4 + 7, then column 2 still has minimum 2
    /// assert_eq!(m.reduce(), 16.0);
    /// assert!(m.is_reduced());
    /// assert_eq!(m.reduce(), 0.0);
    /// ```
    pub fn reduce(&mut self) -> f64 {
        self.reduce_rows() + self.reduce_columns()
    }

    fn reduce_rows(&mut self) -> f64 {
        let mut total = 0.0;
        for i in 0..self.size() {
            let row = self.row_mut(i);
            let min = row_min(row);
            if min.is_finite() && min > 0.0 {
                for v in row.iter_mut() {
                    *v -= min;
                }
                total += min;
            }
        }
        total
    }

    fn reduce_columns(&mut self) -> f64 {
        let n = self.size();
        let mut mins = vec![f64::INFINITY; n];
        for i in 0..n {
            for (min, &v) in mins.iter_mut().zip(self.row(i)) {
                if v < *min {
                    *min = v;
                }
            }
        }

        let mut total = 0.0;
        for &min in &mins {
            if min.is_finite() {
                total += min;
            }
        }
        if total == 0.0 {
            return 0.0;
        }

        for i in 0..n {
            for (v, &min) in self.row_mut(i).iter_mut().zip(&mins) {
                if min.is_finite() {
                    *v -= min;
                }
            }
        }
        total
    }

    /// Commits the edge `from -> to`.
    ///
    /// No other edge may leave `from` or enter `to`, and the reverse edge
    /// `to -> from` would close a premature two-city cycle, so all of them
    /// become unreachable.
    pub fn close_edge(&mut self, from: usize, to: usize) {
        let n = self.size();
        for v in self.row_mut(from) {
            *v = f64::INFINITY;
        }
        for i in 0..n {
            self.set(i, to, f64::INFINITY);
        }
        self.set(to, from, f64::INFINITY);
    }

    /// Marks every self-loop `i -> i` as unreachable.
    pub fn forbid_self_loops(&mut self) {
        for i in 0..self.size() {
            self.set(i, i, f64::INFINITY);
        }
    }

    /// Returns `true` if every row and column with a finite entry has
    /// minimum `0`.
    pub fn is_reduced(&self) -> bool {
        let n = self.size();
        let rows_ok = (0..n).all(|i| {
            let m = row_min(self.row(i));
            m.is_infinite() || m == 0.0
        });
        let cols_ok = (0..n).all(|j| {
            let m = (0..n).map(|i| self.get(i, j)).fold(f64::INFINITY, f64::min);
            m.is_infinite() || m == 0.0
        });
        rows_ok && cols_ok
    }
}

fn row_min(row: &[f64]) -> f64 {
    row.iter().copied().fold(f64::INFINITY, f64::min)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INF: f64 = f64::INFINITY;

    fn classic() -> CostMatrix {
        let mut m = CostMatrix::from_rows(&[
            vec![0.0, 10.0, 15.0, 20.0],
            vec![10.0, 0.0, 35.0, 25.0],
            vec![15.0, 35.0, 0.0, 30.0],
            vec![20.0, 25.0, 30.0, 0.0],
        ])
        .expect("valid");
        m.forbid_self_loops();
        m
    }

    #[test]
    fn test_reduce_classic() {
        let mut m = classic();
        // rows: 10 + 10 + 15 + 20 = 55; columns after that: 0, 0, 5, 10
        assert_eq!(m.reduce(), 70.0);
        assert!(m.is_reduced());
        assert_eq!(m.get(0, 1), 0.0);
        assert_eq!(m.get(1, 2), 20.0);
    }

    #[test]
    fn test_reduce_idempotent() {
        let mut m = classic();
        m.reduce();
        let snapshot = m.clone();
        assert_eq!(m.reduce(), 0.0);
        assert_eq!(m, snapshot);
    }

    #[test]
    fn test_infinite_rows_contribute_nothing() {
        let mut m = CostMatrix::from_rows(&[
            vec![INF, INF, INF],
            vec![2.0, INF, 3.0],
            vec![4.0, 6.0, INF],
        ])
        .expect("valid");
        // rows: 0 + 2 + 4; columns: 0, 2, 1
        assert_eq!(m.reduce(), 9.0);
        assert!(m.row(0).iter().all(|v| v.is_infinite()));
        assert!(m.is_reduced());
    }

    #[test]
    fn test_all_infinite_matrix() {
        let mut m = CostMatrix::filled(3, INF);
        assert_eq!(m.reduce(), 0.0);
        assert!(m.is_reduced());
    }

    #[test]
    fn test_close_edge() {
        let mut m = classic();
        m.close_edge(0, 2);
        assert!(m.row(0).iter().all(|v| v.is_infinite()));
        assert!((0..4).all(|i| m.get(i, 2).is_infinite()));
        assert!(m.get(2, 0).is_infinite());
        assert_eq!(m.get(1, 3), 25.0);
        assert_eq!(m.get(3, 0), 20.0);
    }

    #[test]
    fn test_not_reduced() {
        let m = classic();
        assert!(!m.is_reduced());
    }
}
