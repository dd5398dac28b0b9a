//! Branch-and-bound configuration.

use serde::{Deserialize, Serialize};

use crate::constructive::SeedConfig;
use crate::error::{Result, TspError};

/// Priority rule for the open-node queue.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum NodeOrdering {
    /// Smallest bound first; ties go to the deeper node.
    #[default]
    BoundThenDepth,

    /// Smallest `bound - weight * depth` first; ties go to the deeper node.
    ///
    /// Dives towards complete tours much sooner than pure best-first, at
    /// the cost of expanding nodes out of bound order.
    DepthBiased {
        /// Bound credit granted per level of depth. Non-negative.
        weight: f64,
    },
}

impl NodeOrdering {
    /// Queue priority key for a node; smaller is expanded first.
    pub(crate) fn key(&self, bound: f64, depth: usize) -> f64 {
        match *self {
            NodeOrdering::BoundThenDepth => bound,
            NodeOrdering::DepthBiased { weight } => bound - weight * depth as f64,
        }
    }
}

/// Configuration for the branch-and-bound solver.
///
/// # Examples
///
/// ```
/// use u_tsp::bnb::{BnbConfig, NodeOrdering};
///
/// let config = BnbConfig::default()
///     .with_time_limit(5.0)
///     .with_ordering(NodeOrdering::DepthBiased { weight: 400.0 });
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BnbConfig {
    /// Search time budget in seconds, not counting seeding.
    /// `f64::INFINITY` = unlimited.
    pub time_limit: f64,

    /// City every tour starts from.
    pub start_city: usize,

    /// Queue priority rule.
    pub ordering: NodeOrdering,

    /// Upper bound on the total matrix cells held by queued nodes.
    ///
    /// Children that would exceed it are discarded and the run is reported
    /// non-exhaustive.
    pub max_queue_cells: usize,

    /// How the incumbent is seeded. Has its own time allowance.
    pub seed: SeedConfig,
}

impl Default for BnbConfig {
    fn default() -> Self {
        Self {
            time_limit: 60.0,
            start_city: 0,
            ordering: NodeOrdering::default(),
            max_queue_cells: 1 << 25,
            seed: SeedConfig::default(),
        }
    }
}

impl BnbConfig {
    pub fn with_time_limit(mut self, secs: f64) -> Self {
        self.time_limit = secs;
        self
    }

    pub fn with_start_city(mut self, city: usize) -> Self {
        self.start_city = city;
        self
    }

    pub fn with_ordering(mut self, ordering: NodeOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn with_max_queue_cells(mut self, cells: usize) -> Self {
        self.max_queue_cells = cells;
        self
    }

    pub fn with_seed_config(mut self, seed: SeedConfig) -> Self {
        self.seed = seed;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.time_limit.is_nan() || self.time_limit <= 0.0 {
            return Err(TspError::InvalidConfig(format!(
                "time_limit must be positive, got {}",
                self.time_limit
            )));
        }
        if let NodeOrdering::DepthBiased { weight } = self.ordering {
            if !(weight.is_finite() && weight >= 0.0) {
                return Err(TspError::InvalidConfig(format!(
                    "depth weight must be finite and non-negative, got {weight}"
                )));
            }
        }
        if self.max_queue_cells == 0 {
            return Err(TspError::InvalidConfig(
                "max_queue_cells must be at least 1".into(),
            ));
        }
        self.seed.validate()
    }
}
