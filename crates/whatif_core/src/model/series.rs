//! Time-series points produced by the path simulators

use serde::{Deserialize, Serialize};

/// One month of a simulated trajectory.
///
/// Series are ordered by ascending `period`; the first point always has
/// `period = 0` with `amount_contributed` equal to the initial lump sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Months since the start of the scenario
    pub period: u32,
    pub portfolio_value: f64,
    pub amount_contributed: f64,
}

/// A reconstructed value at an arbitrary (fractional) timeline position,
/// produced by the interpolator for scrub tooltips.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrubPoint {
    pub period: f64,
    pub portfolio_value: f64,
    pub amount_contributed: f64,
}

impl ScrubPoint {
    /// `portfolio_value - amount_contributed` at this position.
    #[must_use]
    pub fn profit(&self) -> f64 {
        self.portfolio_value - self.amount_contributed
    }
}

impl From<TimeSeriesPoint> for ScrubPoint {
    fn from(point: TimeSeriesPoint) -> Self {
        Self {
            period: f64::from(point.period),
            portfolio_value: point.portfolio_value,
            amount_contributed: point.amount_contributed,
        }
    }
}
