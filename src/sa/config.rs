//! Annealing configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TspError};

/// Configuration for the simulated-annealing refiner.
///
/// Cooling is geometric: `T_{k+1} = alpha * T_k`, applied after every
/// iteration whether or not the move was accepted.
///
/// # Examples
///
/// ```
/// use u_tsp::sa::AnnealingConfig;
///
/// let config = AnnealingConfig::default()
///     .with_alpha(0.999)
///     .with_initial_temperature(50.0)
///     .with_time_limit(2.0)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.starting_temperature(100), 50.0);
/// assert_eq!(AnnealingConfig::default().starting_temperature(100), 10.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnealingConfig {
    /// Cooling factor in (0, 1). Higher = slower cooling.
    pub alpha: f64,

    /// The run stops once the temperature drops to this value.
    pub min_temperature: f64,

    /// Starting temperature. `None` = `sqrt(N)` for an N-city instance.
    pub initial_temperature: Option<f64>,

    /// Time budget in seconds. `f64::INFINITY` = unlimited.
    pub time_limit: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            alpha: 0.995,
            min_temperature: 1e-10,
            initial_temperature: None,
            time_limit: 60.0,
            seed: None,
        }
    }
}

impl AnnealingConfig {
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = Some(t);
        self
    }

    pub fn with_time_limit(mut self, secs: f64) -> Self {
        self.time_limit = secs;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Starting temperature for an instance of `num_cities` cities.
    pub fn starting_temperature(&self, num_cities: usize) -> f64 {
        self.initial_temperature
            .unwrap_or_else(|| (num_cities as f64).sqrt())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(TspError::InvalidConfig(format!(
                "alpha must be in (0, 1), got {}",
                self.alpha
            )));
        }
        if !(self.min_temperature.is_finite() && self.min_temperature > 0.0) {
            return Err(TspError::InvalidConfig(format!(
                "min_temperature must be finite and positive, got {}",
                self.min_temperature
            )));
        }
        if let Some(t) = self.initial_temperature {
            if !(t.is_finite() && t > self.min_temperature) {
                return Err(TspError::InvalidConfig(format!(
                    "initial_temperature must be finite and above min_temperature, got {t}"
                )));
            }
        }
        if self.time_limit.is_nan() || self.time_limit <= 0.0 {
            return Err(TspError::InvalidConfig(format!(
                "time_limit must be positive, got {}",
                self.time_limit
            )));
        }
        Ok(())
    }
}
