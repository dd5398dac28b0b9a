//! Simulated annealing refinement of tours.
//!
//! Starts from a feasible tour and perturbs it by reversing random
//! segments. Worse tours are accepted with a probability that shrinks as
//! the temperature cools, which lets the search escape local optima early
//! on and settle later.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod runner;

pub use config::AnnealingConfig;
pub use runner::{AnnealingResult, Annealer};
