//! # u-tsp
//!
//! Traveling salesman optimization library: exact reduced-matrix branch and
//! bound with a wall-clock budget, fast seeding heuristics, and a simulated
//! annealing refiner. Costs may be asymmetric and edges unreachable
//! (`f64::INFINITY`).
//!
//! ## Modules
//!
//! - [`models`] — Domain types (City, Tour, CostModel trait)
//! - [`distance`] — Cost matrix and row/column reduction
//! - [`scenario`] — Random instance generator (easy, normal, hard)
//! - [`constructive`] — Seeding heuristics (Nearest Neighbor, random permutation)
//! - [`bnb`] — Best-first branch and bound with pruning against the incumbent
//! - [`sa`] — Simulated annealing over segment reversals
//! - [`solver`] — Facade running every algorithm with a uniform report
//! - [`clock`] — Wall-clock deadlines

pub mod bnb;
pub mod clock;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod models;
pub mod sa;
pub mod scenario;
pub mod solver;

mod random;

pub use error::{Result, TspError};
