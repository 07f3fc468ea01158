//! Path simulators
//!
//! These produce the full month-by-month trajectory behind each scenario by
//! repeating the calculators' per-month update rule while retaining every
//! intermediate snapshot. Violated preconditions yield an empty series.

use crate::model::{DcaScenario, GrowthScenario, PriceModel, TimeSeriesPoint};

/// Simulate the full DCA trajectory from month 0 to the horizon.
///
/// For `Linear`/`Volatile` each month's contribution is bought at that
/// month's price before the point is valued, so the final point equals
/// `total_units × price(horizon)`. `BestCase` needs no walk: units at month
/// m are already known in closed form.
#[must_use]
pub fn simulate_dca_path(scenario: &DcaScenario) -> Vec<TimeSeriesPoint> {
    if scenario.validate().is_err() {
        return Vec::new();
    }

    let horizon = scenario.horizon_months;
    let mut path = scenario.price_path();
    let mut points = Vec::with_capacity(horizon as usize + 1);

    match scenario.price_model {
        PriceModel::BestCase => {
            for month in 0..=horizon {
                let contributed =
                    scenario.initial_amount + scenario.periodic_amount * f64::from(month);
                let units = contributed / scenario.reference_price;
                points.push(TimeSeriesPoint {
                    period: month,
                    portfolio_value: units * path.price_at(month),
                    amount_contributed: contributed,
                });
            }
        }
        PriceModel::Linear | PriceModel::Volatile => {
            let mut units = scenario.initial_amount / scenario.reference_price;
            for month in 0..=horizon {
                let price = path.price_at(month);
                if month > 0 && price > 0.0 {
                    units += scenario.periodic_amount / price;
                }
                points.push(TimeSeriesPoint {
                    period: month,
                    portfolio_value: units * price,
                    amount_contributed: scenario.initial_amount
                        + scenario.periodic_amount * f64::from(month),
                });
            }
        }
    }

    points
}

/// Simulate the full compound-growth trajectory, one point per month.
#[must_use]
pub fn simulate_growth_path(scenario: &GrowthScenario) -> Vec<TimeSeriesPoint> {
    if scenario.validate().is_err() {
        return Vec::new();
    }

    let months = scenario.total_months();
    let rate = scenario.monthly_rate();
    let mut points = Vec::with_capacity(months as usize + 1);

    let mut balance = scenario.initial_amount;
    points.push(TimeSeriesPoint {
        period: 0,
        portfolio_value: balance,
        amount_contributed: scenario.initial_amount,
    });

    for month in 1..=months {
        balance = balance * (1.0 + rate) + scenario.monthly_contribution;
        points.push(TimeSeriesPoint {
            period: month,
            portfolio_value: balance,
            amount_contributed: scenario.initial_amount
                + scenario.monthly_contribution * f64::from(month),
        });
    }

    points
}
