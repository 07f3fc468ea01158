//! Tests for chart series downsampling

use crate::model::{DcaScenario, PriceModel, TimeSeriesPoint};
use crate::sample::{DCA_CHART_POINTS, GROWTH_CHART_POINTS, sample_series};
use crate::simulate::simulate_dca_path;

/// A synthetic monthly series with recognizable values.
fn long_series(months: u32) -> Vec<TimeSeriesPoint> {
    (0..=months)
        .map(|m| TimeSeriesPoint {
            period: m,
            portfolio_value: 1000.0 + f64::from(m) * 10.0,
            amount_contributed: 500.0 + f64::from(m) * 5.0,
        })
        .collect()
}

#[test]
fn test_short_series_returned_unchanged() {
    let series = long_series(10);
    assert_eq!(sample_series(&series, DCA_CHART_POINTS), series);
}

#[test]
fn test_series_at_budget_returned_unchanged() {
    let series = long_series(36); // 37 points
    assert_eq!(sample_series(&series, DCA_CHART_POINTS), series);
}

#[test]
fn test_long_series_is_bounded() {
    let series = long_series(360);
    assert_eq!(sample_series(&series, DCA_CHART_POINTS).len(), DCA_CHART_POINTS);
    assert_eq!(
        sample_series(&series, GROWTH_CHART_POINTS).len(),
        GROWTH_CHART_POINTS
    );
}

#[test]
fn test_endpoints_are_preserved_exactly() {
    let series = long_series(240);
    let sampled = sample_series(&series, DCA_CHART_POINTS);
    assert_eq!(sampled[0], series[0]);
    assert_eq!(*sampled.last().unwrap(), *series.last().unwrap());
}

#[test]
fn test_sampled_periods_are_non_decreasing() {
    let series = long_series(500);
    let sampled = sample_series(&series, DCA_CHART_POINTS);
    for pair in sampled.windows(2) {
        assert!(pair[0].period <= pair[1].period);
    }
}

#[test]
fn test_sampled_points_come_from_the_original_series() {
    let series = long_series(123);
    for point in sample_series(&series, DCA_CHART_POINTS) {
        assert_eq!(point, series[point.period as usize]);
    }
}

#[test]
fn test_tiny_budget_still_keeps_both_endpoints() {
    let series = long_series(100);
    let sampled = sample_series(&series, 1);
    assert_eq!(sampled.len(), 2);
    assert_eq!(sampled[0], series[0]);
    assert_eq!(sampled[1], *series.last().unwrap());
}

#[test]
fn test_empty_series_stays_empty() {
    assert!(sample_series(&[], DCA_CHART_POINTS).is_empty());
}

#[test]
fn test_sampling_a_simulated_path_keeps_summary_endpoints() {
    let scenario = DcaScenario {
        initial_amount: 1000.0,
        periodic_amount: 100.0,
        reference_price: 50_000.0,
        target_price: 100_000.0,
        horizon_months: 120,
        price_model: PriceModel::Volatile,
    };
    let path = simulate_dca_path(&scenario);
    let sampled = sample_series(&path, DCA_CHART_POINTS);
    assert_eq!(sampled.first(), path.first());
    assert_eq!(sampled.last(), path.last());
}
