//! Tests for the three scenario calculators
//!
//! These verify:
//! - Closed-form best-case DCA math
//! - Linear-model unit accumulation along the price trend
//! - Deterministic replay of the volatile model
//! - Historical replay gains and losses
//! - Compound growth with the monthly-equivalent rate
//! - Precondition violations degrade to `None`, never to NaN or a panic

use super::assert_close;
use crate::error::InvalidInput;
use crate::model::{DcaScenario, GrowthScenario, HistoricalScenario, PriceModel};
use crate::projection::{project_compound_growth, project_dca, replay_historical};

fn dca(
    initial: f64,
    periodic: f64,
    reference: f64,
    target: f64,
    months: u32,
    model: PriceModel,
) -> DcaScenario {
    DcaScenario {
        initial_amount: initial,
        periodic_amount: periodic,
        reference_price: reference,
        target_price: target,
        horizon_months: months,
        price_model: model,
    }
}

#[test]
fn test_best_case_lump_sum_price_doubles() {
    let result = project_dca(&dca(1000.0, 0.0, 50_000.0, 100_000.0, 1, PriceModel::BestCase))
        .expect("valid scenario");
    assert_close(result.total_contributed, 1000.0, 1e-9, "contributed");
    assert_close(result.final_value, 2000.0, 1e-9, "final value");
    assert_close(result.profit, 1000.0, 1e-9, "profit");
    assert_close(result.multiplier, 2.0, 1e-9, "multiplier");
}

#[test]
fn test_best_case_dca_only() {
    let result = project_dca(&dca(0.0, 100.0, 50_000.0, 100_000.0, 12, PriceModel::BestCase))
        .expect("valid scenario");
    assert_close(result.total_contributed, 1200.0, 1e-9, "contributed");
    assert_close(result.final_value, 2400.0, 1e-9, "final value");
    assert_close(result.multiplier, 2.0, 1e-9, "multiplier");
}

#[test]
fn test_best_case_combined_initial_and_dca() {
    let result = project_dca(&dca(
        5000.0,
        500.0,
        100_000.0,
        200_000.0,
        6,
        PriceModel::BestCase,
    ))
    .expect("valid scenario");
    assert_close(result.total_contributed, 8000.0, 1e-9, "contributed");
    assert_close(result.final_value, 16_000.0, 1e-9, "final value");
    assert_close(result.profit, 8000.0, 1e-9, "profit");
}

#[test]
fn test_best_case_loss_when_target_below_reference() {
    let result = project_dca(&dca(1000.0, 0.0, 50_000.0, 25_000.0, 1, PriceModel::BestCase))
        .expect("valid scenario");
    assert_close(result.profit, -500.0, 1e-9, "profit");
    assert_close(result.multiplier, 0.5, 1e-9, "multiplier");
}

#[test]
fn test_best_case_small_unit_prices() {
    // DOGE-sized prices must not lose precision
    let scenario = dca(100.0, 0.0, 0.3, 1.0, 1, PriceModel::BestCase);
    assert_close(
        scenario.total_units().expect("valid scenario"),
        333.3333,
        0.01,
        "units",
    );
    let result = project_dca(&scenario).expect("valid scenario");
    assert_close(result.final_value, 333.3333, 0.01, "final value");
}

#[test]
fn test_linear_model_buys_along_the_trend() {
    // Prices at months 1 and 2 are 150 and 200, so $100/month buys
    // 100/150 + 100/200 units, valued at the target price.
    let result =
        project_dca(&dca(0.0, 100.0, 100.0, 200.0, 2, PriceModel::Linear)).expect("valid scenario");
    let expected_units = 100.0 / 150.0 + 100.0 / 200.0;
    assert_close(result.final_value, expected_units * 200.0, 1e-9, "final value");
    assert_close(result.total_contributed, 200.0, 1e-9, "contributed");
}

#[test]
fn test_linear_model_flat_trend_matches_best_case() {
    // With target == reference, every month's price is the reference price,
    // so linear accumulation collapses to the best-case closed form.
    let linear = project_dca(&dca(1000.0, 100.0, 50_000.0, 50_000.0, 12, PriceModel::Linear))
        .expect("valid scenario");
    let best = project_dca(&dca(
        1000.0,
        100.0,
        50_000.0,
        50_000.0,
        12,
        PriceModel::BestCase,
    ))
    .expect("valid scenario");
    assert_close(linear.final_value, best.final_value, 1e-6, "final value");
}

#[test]
fn test_volatile_model_is_deterministic() {
    let scenario = dca(1000.0, 100.0, 50_000.0, 100_000.0, 12, PriceModel::Volatile);
    let a = project_dca(&scenario).expect("valid scenario");
    let b = project_dca(&scenario).expect("valid scenario");
    assert_eq!(a.final_value, b.final_value);
    assert_eq!(a.profit, b.profit);
    assert_eq!(a.multiplier, b.multiplier);
}

#[test]
fn test_volatile_model_changes_with_any_input() {
    let base = project_dca(&dca(1000.0, 100.0, 50_000.0, 100_000.0, 12, PriceModel::Volatile))
        .expect("valid scenario");
    let nudged = project_dca(&dca(1001.0, 100.0, 50_000.0, 100_000.0, 12, PriceModel::Volatile))
        .expect("valid scenario");
    assert_ne!(base.final_value, nudged.final_value);
}

#[test]
fn test_volatile_result_is_finite() {
    let result = project_dca(&dca(
        1_000_000.0,
        10_000.0,
        0.5,
        0.01,
        360,
        PriceModel::Volatile,
    ))
    .expect("valid scenario");
    assert!(result.final_value.is_finite());
    assert!(result.final_value >= 0.0);
}

#[test]
fn test_dca_rejects_non_positive_reference_price() {
    assert!(project_dca(&dca(1000.0, 100.0, 0.0, 50_000.0, 12, PriceModel::BestCase)).is_none());
    assert!(project_dca(&dca(1000.0, 100.0, -1.0, 50_000.0, 12, PriceModel::BestCase)).is_none());
}

#[test]
fn test_dca_rejects_zero_horizon() {
    assert!(project_dca(&dca(1000.0, 100.0, 50_000.0, 100_000.0, 0, PriceModel::BestCase)).is_none());
}

#[test]
fn test_dca_rejects_empty_contributions() {
    let scenario = dca(0.0, 0.0, 50_000.0, 100_000.0, 12, PriceModel::BestCase);
    assert_eq!(scenario.validate(), Err(InvalidInput::NoContribution));
    assert!(project_dca(&scenario).is_none());
}

#[test]
fn test_dca_rejects_non_finite_input() {
    assert!(project_dca(&dca(f64::NAN, 100.0, 50_000.0, 100_000.0, 12, PriceModel::BestCase))
        .is_none());
    assert!(project_dca(&dca(
        1000.0,
        f64::INFINITY,
        50_000.0,
        100_000.0,
        12,
        PriceModel::BestCase
    ))
    .is_none());
}

#[test]
fn test_historical_replay_gain() {
    let result = replay_historical(&HistoricalScenario {
        invested_amount: 1000.0,
        historical_price: 10.0,
        current_price: 100.0,
    })
    .expect("valid scenario");
    assert_close(result.final_value, 10_000.0, 1e-9, "current value");
    assert_close(result.profit, 9000.0, 1e-9, "profit");
    assert_close(result.multiplier, 10.0, 1e-9, "multiplier");
}

#[test]
fn test_historical_replay_loss() {
    let scenario = HistoricalScenario {
        invested_amount: 1000.0,
        historical_price: 100.0,
        current_price: 50.0,
    };
    assert_close(scenario.units(), 10.0, 1e-9, "units");
    let result = replay_historical(&scenario).expect("valid scenario");
    assert_close(result.final_value, 500.0, 1e-9, "current value");
    assert_close(result.profit, -500.0, 1e-9, "profit");
    assert_close(result.multiplier, 0.5, 1e-9, "multiplier");
}

#[test]
fn test_historical_replay_fractional_units() {
    let result = replay_historical(&HistoricalScenario {
        invested_amount: 500.0,
        historical_price: 3000.0,
        current_price: 6000.0,
    })
    .expect("valid scenario");
    assert_close(result.final_value, 1000.0, 1e-6, "current value");
    assert_close(result.multiplier, 2.0, 1e-9, "multiplier");
}

#[test]
fn test_historical_replay_rejects_non_positive_prices() {
    let mut scenario = HistoricalScenario {
        invested_amount: 1000.0,
        historical_price: 0.0,
        current_price: 100.0,
    };
    assert!(replay_historical(&scenario).is_none());
    scenario.historical_price = -5.0;
    assert!(replay_historical(&scenario).is_none());
    scenario.historical_price = 10.0;
    scenario.current_price = 0.0;
    assert!(replay_historical(&scenario).is_none());
}

#[test]
fn test_growth_lump_sum_reproduces_annual_rate() {
    // Twelve monthly compoundings at the monthly-equivalent rate must land
    // exactly on the stated annual rate.
    let result = project_compound_growth(&GrowthScenario {
        initial_amount: 1000.0,
        monthly_contribution: 0.0,
        annual_rate: 0.10,
        years: 1.0,
    })
    .expect("valid scenario");
    assert_close(result.final_value, 1100.0, 1e-6, "final value");
}

#[test]
fn test_growth_zero_rate_just_accumulates_contributions() {
    let result = project_compound_growth(&GrowthScenario {
        initial_amount: 1000.0,
        monthly_contribution: 100.0,
        annual_rate: 0.0,
        years: 1.0,
    })
    .expect("valid scenario");
    assert_close(result.final_value, 2200.0, 1e-9, "final value");
    assert_close(result.profit, 0.0, 1e-9, "interest earned");
}

#[test]
fn test_growth_zero_contributions_stay_zero() {
    // No contribution, no growth: guard against a stray non-zero
    // accumulator leaking into the result.
    for rate in [0.0, 0.05, 0.25] {
        for years in [1.0, 7.5, 30.0] {
            let result = project_compound_growth(&GrowthScenario {
                initial_amount: 0.0,
                monthly_contribution: 0.0,
                annual_rate: rate,
                years,
            })
            .expect("valid scenario");
            assert_eq!(result.final_value, 0.0);
            assert_eq!(result.total_contributed, 0.0);
            assert_eq!(result.multiplier, 0.0);
        }
    }
}

#[test]
fn test_growth_negative_rate_loses_value() {
    let result = project_compound_growth(&GrowthScenario {
        initial_amount: 10_000.0,
        monthly_contribution: 0.0,
        annual_rate: -0.20,
        years: 1.0,
    })
    .expect("valid scenario");
    assert_close(result.final_value, 8000.0, 1e-6, "final value");
    assert!(result.profit < 0.0);
}

#[test]
fn test_growth_fractional_years_round_to_months() {
    let scenario = GrowthScenario {
        initial_amount: 0.0,
        monthly_contribution: 100.0,
        annual_rate: 0.0,
        years: 1.5,
    };
    assert_eq!(scenario.total_months(), 18);
    let result = project_compound_growth(&scenario).expect("valid scenario");
    assert_close(result.total_contributed, 1800.0, 1e-9, "contributed");
}

#[test]
fn test_growth_rejects_zero_horizon() {
    assert!(project_compound_growth(&GrowthScenario {
        initial_amount: 1000.0,
        monthly_contribution: 100.0,
        annual_rate: 0.1,
        years: 0.0,
    })
    .is_none());
}

#[test]
fn test_growth_rejects_total_loss_rate() {
    assert!(project_compound_growth(&GrowthScenario {
        initial_amount: 1000.0,
        monthly_contribution: 0.0,
        annual_rate: -1.0,
        years: 1.0,
    })
    .is_none());
}
