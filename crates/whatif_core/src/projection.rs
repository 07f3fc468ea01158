//! Scenario calculators
//!
//! Each calculator is a pure function from a validated scenario to a
//! [`ScenarioResult`]. A violated precondition yields `None` — the valid
//! "insufficient input" state, not an error. Results are always computed at
//! full resolution, never from the downsampled chart series.

use crate::model::{DcaScenario, GrowthScenario, HistoricalScenario, ScenarioResult};

/// Project a forward DCA scenario to its horizon.
///
/// Unit accumulation follows the scenario's price model (see
/// [`DcaScenario::total_units`]); the final valuation is always
/// `total_units × target_price`.
pub fn project_dca(scenario: &DcaScenario) -> Option<ScenarioResult> {
    let units = scenario.total_units()?;
    Some(ScenarioResult::from_totals(
        scenario.total_contributed(),
        units * scenario.target_price,
    ))
}

/// Replay a historical "what if I had invested then" scenario.
pub fn replay_historical(scenario: &HistoricalScenario) -> Option<ScenarioResult> {
    scenario.validate().ok()?;
    Some(ScenarioResult::from_totals(
        scenario.invested_amount,
        scenario.units() * scenario.current_price,
    ))
}

/// Compound an initial balance month by month with recurring contributions.
///
/// Iterates `balance ← balance·(1+r) + contribution` over the whole horizon
/// with the monthly-equivalent rate, so the growth curve matches what the
/// path simulator draws.
pub fn project_compound_growth(scenario: &GrowthScenario) -> Option<ScenarioResult> {
    scenario.validate().ok()?;
    let rate = scenario.monthly_rate();
    let mut balance = scenario.initial_amount;
    for _ in 0..scenario.total_months() {
        balance = balance * (1.0 + rate) + scenario.monthly_contribution;
    }
    Some(ScenarioResult::from_totals(
        scenario.total_contributed(),
        balance,
    ))
}
