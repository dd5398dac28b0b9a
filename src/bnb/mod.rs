//! Reduced-matrix branch and bound.
//!
//! A best-first search over partial tours. Each node carries a reduced
//! cost matrix whose accumulated reduction is a lower bound on every tour
//! extending the node's path; nodes that cannot beat the best tour found so
//! far are pruned.
//!
//! Node lifecycle: root, then repeatedly one of leaf found, pruned, or
//! expanded, until the queue is empty or the deadline expires.
//!
//! # References
//!
//! - Little, Murty, Sweeney & Karel (1963), "An Algorithm for the Traveling
//!   Salesman Problem"
//! - Land & Doig (1960), "An Automatic Method of Solving Discrete
//!   Programming Problems"

mod config;
mod incumbent;
mod node;
mod runner;

pub use config::{BnbConfig, NodeOrdering};
pub use incumbent::Incumbent;
pub use node::SearchNode;
pub use runner::{BnbResult, BnbSolver};
