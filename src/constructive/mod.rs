//! Constructive heuristics for building initial feasible tours.
//!
//! - [`nearest_neighbor`] — Greedy nearest neighbor with start-city retries, O(n²) per start
//! - [`random_tour`] — Random permutations until one is feasible
//! - [`seed_tour`] — Strategy dispatch used to seed the incumbent

mod nearest_neighbor;
mod random_tour;
mod seed;

pub use nearest_neighbor::{nearest_neighbor, nearest_neighbor_tour, NearestNeighborOutcome};
pub use random_tour::{random_tour, RandomTourOutcome};
pub use seed::{seed_tour, SeedConfig, SeedOutcome, SeedStrategy};
