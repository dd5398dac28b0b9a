//! Random instance generation.
//!
//! Places cities uniformly in a rectangle and derives costs according to a
//! [`Difficulty`]: symmetric Euclidean, asymmetric with elevation gain, or
//! asymmetric with a fraction of edges removed.

mod config;
mod generator;

pub use config::{Difficulty, ScenarioConfig};
pub use generator::Scenario;
