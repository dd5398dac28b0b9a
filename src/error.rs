//! Error types.
//!
//! Only malformed input and invalid configuration are errors. Infeasible
//! instances and expired deadlines are normal outcomes reported through the
//! result records.

use thiserror::Error;

/// Errors raised before any search state is constructed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TspError {
    /// The instance has fewer than two cities.
    #[error("at least 2 cities are required, got {count}")]
    TooFewCities {
        /// Number of cities supplied.
        count: usize,
    },

    /// Cost data is not a square `N×N` structure.
    #[error("cost data must hold {expected} entries, got {actual}")]
    DimensionMismatch {
        /// Expected number of entries (or row length).
        expected: usize,
        /// Actual number of entries found.
        actual: usize,
    },

    /// A cost entry is NaN or negative.
    #[error("invalid cost {value} on edge {from} -> {to}")]
    InvalidCost {
        /// Source city index.
        from: usize,
        /// Destination city index.
        to: usize,
        /// The offending value.
        value: f64,
    },

    /// A city sequence is not a permutation of all cities.
    #[error("invalid tour: {0}")]
    InvalidTour(String),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, TspError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = TspError::TooFewCities { count: 1 };
        assert_eq!(e.to_string(), "at least 2 cities are required, got 1");

        let e = TspError::InvalidCost {
            from: 0,
            to: 2,
            value: -1.0,
        };
        assert_eq!(e.to_string(), "invalid cost -1 on edge 0 -> 2");
    }
}
