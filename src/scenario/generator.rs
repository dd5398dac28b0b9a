//! Random scenario generation.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use super::config::{Difficulty, ScenarioConfig};
use crate::error::{Result, TspError};
use crate::models::{City, CostModel};
use crate::random::create_rng;

/// A generated instance: cities, a difficulty-dependent cost rule and the
/// set of removed edges.
///
/// # Examples
///
/// ```
/// use u_tsp::models::CostModel;
/// use u_tsp::scenario::{Difficulty, Scenario, ScenarioConfig};
///
/// let config = ScenarioConfig::new(10)
///     .with_difficulty(Difficulty::Easy)
///     .with_seed(42);
/// let scenario = Scenario::generate(&config).unwrap();
/// assert_eq!(scenario.num_cities(), 10);
/// assert_eq!(scenario.cost(3, 3), 0.0);
/// assert_eq!(scenario.cost(2, 5), scenario.cost(5, 2));
/// ```
#[derive(Debug, Clone)]
pub struct Scenario {
    cities: Vec<City>,
    difficulty: Difficulty,
    removed: Vec<bool>,
}

impl Scenario {
    /// Builds a scenario from explicit cities with no removed edges.
    pub fn from_cities(cities: Vec<City>, difficulty: Difficulty) -> Result<Self> {
        if cities.len() < 2 {
            return Err(TspError::TooFewCities {
                count: cities.len(),
            });
        }
        let n = cities.len();
        Ok(Self {
            cities,
            difficulty,
            removed: vec![false; n * n],
        })
    }

    /// Generates a random scenario.
    pub fn generate(config: &ScenarioConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = create_rng(config.seed);

        let (hw, hh) = (config.width / 2.0, config.height / 2.0);
        let cities: Vec<City> = (0..config.num_cities)
            .map(|_| {
                let x = rng.random_range(-hw..hw);
                let y = rng.random_range(-hh..hh);
                let elevation = if config.max_elevation > 0.0 {
                    rng.random_range(0.0..config.max_elevation)
                } else {
                    0.0
                };
                City::new(x, y).with_elevation(elevation)
            })
            .collect();

        let mut scenario = Self::from_cities(cities, config.difficulty)?;
        if config.difficulty == Difficulty::Hard {
            scenario.thin_edges(config.edge_removal, &mut rng);
        }
        Ok(scenario)
    }

    /// Removes a fraction of directed edges, keeping one random Hamiltonian
    /// cycle intact.
    fn thin_edges<R: Rng>(&mut self, fraction: f64, rng: &mut R) {
        let n = self.cities.len();

        let mut cycle: Vec<usize> = (0..n).collect();
        cycle.shuffle(rng);
        let mut protected = vec![false; n * n];
        for i in 0..n {
            protected[cycle[i] * n + cycle[(i + 1) % n]] = true;
        }

        let mut candidates: Vec<usize> = (0..n * n)
            .filter(|&e| e / n != e % n && !protected[e])
            .collect();
        candidates.shuffle(rng);

        let target = ((n * (n - 1)) as f64 * fraction).floor() as usize;
        let count = target.min(candidates.len());
        for &e in &candidates[..count] {
            self.removed[e] = true;
        }
        debug!("scenario: removed {count} of {} directed edges", n * (n - 1));
    }

    /// The generated cities.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// The cost rule in effect.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns `true` if the directed edge `from -> to` was removed.
    pub fn is_removed(&self, from: usize, to: usize) -> bool {
        self.removed[from * self.cities.len() + to]
    }
}

impl CostModel for Scenario {
    fn num_cities(&self) -> usize {
        self.cities.len()
    }

    fn cost(&self, from: usize, to: usize) -> f64 {
        if from == to {
            return 0.0;
        }
        if self.is_removed(from, to) {
            return f64::INFINITY;
        }
        let (a, b) = (&self.cities[from], &self.cities[to]);
        match self.difficulty {
            Difficulty::Easy => a.cost_to(b),
            Difficulty::Normal | Difficulty::Hard => a.climb_cost_to(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::CostMatrix;

    #[test]
    fn test_generate_deterministic() {
        let config = ScenarioConfig::new(12).with_seed(3);
        let a = Scenario::generate(&config).expect("valid");
        let b = Scenario::generate(&config).expect("valid");
        assert_eq!(a.cities(), b.cities());
    }

    #[test]
    fn test_cities_inside_area() {
        let config = ScenarioConfig::new(50).with_area(10.0, 4.0).with_seed(1);
        let s = Scenario::generate(&config).expect("valid");
        for c in s.cities() {
            assert!(c.x() >= -5.0 && c.x() < 5.0);
            assert!(c.y() >= -2.0 && c.y() < 2.0);
            assert!(c.elevation() >= 0.0 && c.elevation() < 100.0);
        }
    }

    #[test]
    fn test_easy_is_symmetric() {
        let config = ScenarioConfig::new(8)
            .with_difficulty(Difficulty::Easy)
            .with_seed(5);
        let s = Scenario::generate(&config).expect("valid");
        let m = CostMatrix::from_model(&s).expect("valid");
        assert!(m.is_symmetric(1e-9));
    }

    #[test]
    fn test_normal_is_asymmetric() {
        let config = ScenarioConfig::new(8)
            .with_difficulty(Difficulty::Normal)
            .with_seed(5);
        let s = Scenario::generate(&config).expect("valid");
        let m = CostMatrix::from_model(&s).expect("valid");
        assert!(!m.is_symmetric(1e-9));
    }

    #[test]
    fn test_hard_removes_edges_but_keeps_a_tour() {
        let n = 20;
        let config = ScenarioConfig::new(n)
            .with_difficulty(Difficulty::Hard)
            .with_edge_removal(0.5)
            .with_seed(11);
        let s = Scenario::generate(&config).expect("valid");

        let removed = (0..n)
            .flat_map(|i| (0..n).map(move |j| (i, j)))
            .filter(|&(i, j)| s.is_removed(i, j))
            .count();
        assert_eq!(removed, n * (n - 1) / 2);
        assert!((0..n).all(|i| !s.is_removed(i, i)));

        // Every city keeps at least one outgoing and one incoming edge.
        for i in 0..n {
            assert!((0..n).any(|j| j != i && s.cost(i, j).is_finite()));
            assert!((0..n).any(|j| j != i && s.cost(j, i).is_finite()));
        }
    }

    #[test]
    fn test_zero_elevation_range() {
        let config = ScenarioConfig::new(4).with_max_elevation(0.0).with_seed(2);
        let s = Scenario::generate(&config).expect("valid");
        assert!(s.cities().iter().all(|c| c.elevation() == 0.0));
    }

    #[test]
    fn test_from_cities_too_few() {
        let err = Scenario::from_cities(vec![City::new(0.0, 0.0)], Difficulty::Easy).unwrap_err();
        assert_eq!(err, TspError::TooFewCities { count: 1 });
    }
}
