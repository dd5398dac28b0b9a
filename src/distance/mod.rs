//! Cost matrices and reduction.
//!
//! Provides a dense cost matrix and the row/column reduction that the
//! branch-and-bound driver uses to compute admissible lower bounds.

mod matrix;
mod reduction;

pub use matrix::CostMatrix;
