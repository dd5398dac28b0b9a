//! City type.

use serde::{Deserialize, Serialize};

/// A city in a traveling salesman instance.
///
/// Cities have planar coordinates and an elevation. The base cost between
/// two cities is their Euclidean distance; asymmetric variants add the
/// elevation gain (see [`City::climb_cost_to`]).
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
///
/// let a = City::new(0.0, 0.0);
/// let b = City::new(3.0, 4.0).with_elevation(2.0);
/// assert!((a.cost_to(&b) - 5.0).abs() < 1e-10);
/// assert!((a.climb_cost_to(&b) - 7.0).abs() < 1e-10);
/// assert!((b.climb_cost_to(&a) - 3.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct City {
    x: f64,
    y: f64,
    elevation: f64,
}

impl City {
    /// Creates a city at the given coordinates with zero elevation.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            elevation: 0.0,
        }
    }

    /// Sets the elevation of this city.
    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = elevation;
        self
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Elevation.
    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Euclidean distance to another city. Symmetric, `0` for self.
    pub fn cost_to(&self, other: &City) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Distance plus elevation gain, clamped at zero.
    ///
    /// Going uphill costs more than going downhill, so the result is
    /// asymmetric whenever elevations differ.
    pub fn climb_cost_to(&self, other: &City) -> f64 {
        (self.cost_to(other) + other.elevation - self.elevation).max(0.0)
    }
}
