//! Scenario summary results

use serde::{Deserialize, Serialize};

/// Summary of a completed scenario, derived from the full-resolution
/// computation (never from the downsampled chart series).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Everything put in: lump sum plus all periodic contributions
    pub total_contributed: f64,
    /// Portfolio value at the horizon (or today, for a historical replay)
    pub final_value: f64,
    /// `final_value - total_contributed`
    pub profit: f64,
    /// `final_value / total_contributed`, 0 when nothing was contributed
    pub multiplier: f64,
}

impl ScenarioResult {
    /// Build a result from the two independent totals; profit and
    /// multiplier are always derived, never stored separately.
    #[must_use]
    pub fn from_totals(total_contributed: f64, final_value: f64) -> Self {
        let multiplier = if total_contributed > 0.0 {
            final_value / total_contributed
        } else {
            0.0
        };
        Self {
            total_contributed,
            final_value,
            profit: final_value - total_contributed,
            multiplier,
        }
    }

    /// Whether the scenario at least broke even.
    #[must_use]
    pub fn is_gain(&self) -> bool {
        self.profit >= 0.0
    }
}
