//! Domain model types for traveling salesman instances.
//!
//! Provides the core abstractions: cities with coordinates and elevation,
//! a cost model trait that solvers consume, and closed tours.

mod city;
mod cost_model;
mod tour;

pub use city::City;
pub use cost_model::CostModel;
pub use tour::Tour;

pub(crate) use tour::validate_permutation;
