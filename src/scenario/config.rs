//! Scenario configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TspError};

/// How costs between generated cities are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    /// Symmetric Euclidean distances; every edge exists.
    Easy,
    /// Distance plus elevation gain; asymmetric, every edge exists.
    #[default]
    Normal,
    /// Normal costs with a fraction of directed edges removed.
    ///
    /// A random Hamiltonian cycle is kept intact, so at least one finite
    /// tour always exists.
    Hard,
}

/// Configuration for random scenario generation.
///
/// # Examples
///
/// ```
/// use u_tsp::scenario::{Difficulty, ScenarioConfig};
///
/// let config = ScenarioConfig::new(50)
///     .with_difficulty(Difficulty::Hard)
///     .with_edge_removal(0.3)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Number of cities to generate.
    pub num_cities: usize,

    /// Cost model.
    pub difficulty: Difficulty,

    /// Width of the area cities are placed in, centered on the origin.
    pub width: f64,

    /// Height of the area cities are placed in, centered on the origin.
    pub height: f64,

    /// Elevations are drawn uniformly from `[0, max_elevation)`.
    pub max_elevation: f64,

    /// Fraction of directed off-diagonal edges removed in [`Difficulty::Hard`].
    pub edge_removal: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            num_cities: 15,
            difficulty: Difficulty::default(),
            width: 1000.0,
            height: 1000.0,
            max_elevation: 100.0,
            edge_removal: 0.2,
            seed: None,
        }
    }
}

impl ScenarioConfig {
    /// Default configuration with the given number of cities.
    pub fn new(num_cities: usize) -> Self {
        Self {
            num_cities,
            ..Self::default()
        }
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_area(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_max_elevation(mut self, max_elevation: f64) -> Self {
        self.max_elevation = max_elevation;
        self
    }

    pub fn with_edge_removal(mut self, fraction: f64) -> Self {
        self.edge_removal = fraction;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.num_cities < 2 {
            return Err(TspError::TooFewCities {
                count: self.num_cities,
            });
        }
        if !(self.width.is_finite() && self.width > 0.0)
            || !(self.height.is_finite() && self.height > 0.0)
        {
            return Err(TspError::InvalidConfig(format!(
                "area must be finite and positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.max_elevation.is_finite() && self.max_elevation >= 0.0) {
            return Err(TspError::InvalidConfig(format!(
                "max_elevation must be finite and non-negative, got {}",
                self.max_elevation
            )));
        }
        if !(0.0..1.0).contains(&self.edge_removal) {
            return Err(TspError::InvalidConfig(format!(
                "edge_removal must be in [0, 1), got {}",
                self.edge_removal
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScenarioConfig::default();
        assert_eq!(config.num_cities, 15);
        assert_eq!(config.difficulty, Difficulty::Normal);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_too_few() {
        let err = ScenarioConfig::new(1).validate().unwrap_err();
        assert_eq!(err, TspError::TooFewCities { count: 1 });
    }

    #[test]
    fn test_validate_bad_removal() {
        assert!(ScenarioConfig::new(5)
            .with_edge_removal(1.0)
            .validate()
            .is_err());
        assert!(ScenarioConfig::new(5)
            .with_edge_removal(-0.1)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_bad_area() {
        assert!(ScenarioConfig::new(5)
            .with_area(0.0, 10.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: ScenarioConfig =
            serde_json::from_str(r#"{"num_cities": 40, "difficulty": "Hard"}"#).expect("parse");
        assert_eq!(config.num_cities, 40);
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.width, 1000.0);
        assert!(config.seed.is_none());
    }
}
