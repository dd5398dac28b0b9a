//! Wall-clock budgets.

use std::time::{Duration, Instant};

/// A wall-clock deadline measured from its creation.
///
/// A non-finite budget means the deadline never expires.
///
/// # Examples
///
/// ```
/// use u_tsp::clock::Deadline;
///
/// let unlimited = Deadline::from_secs(f64::INFINITY);
/// assert!(!unlimited.expired());
/// assert!(unlimited.remaining().is_none());
///
/// let spent = Deadline::from_secs(0.0);
/// assert!(spent.expired());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start: Instant,
    limit: Option<Duration>,
}

impl Deadline {
    /// Starts a deadline `secs` seconds from now.
    ///
    /// Negative or NaN budgets are treated as already expired.
    pub fn from_secs(secs: f64) -> Self {
        let limit = if secs.is_nan() || secs <= 0.0 {
            Some(Duration::ZERO)
        } else {
            Duration::try_from_secs_f64(secs).ok()
        };
        Self {
            start: Instant::now(),
            limit,
        }
    }

    /// A deadline that never expires.
    pub fn unlimited() -> Self {
        Self {
            start: Instant::now(),
            limit: None,
        }
    }

    /// Time since the deadline was started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Returns `true` once the budget is used up.
    pub fn expired(&self) -> bool {
        match self.limit {
            Some(limit) => self.start.elapsed() >= limit,
            None => false,
        }
    }

    /// Time left, or `None` when unlimited.
    pub fn remaining(&self) -> Option<Duration> {
        self.limit
            .map(|limit| limit.saturating_sub(self.start.elapsed()))
    }
}
