//! Integration tests for the projection engine
//!
//! Tests are organized by topic:
//! - `noise` - Seed derivation and the deterministic noise stream
//! - `projection` - The three scenario calculators and their preconditions
//! - `paths` - Month-by-month path simulators
//! - `sampling` - Chart series downsampling
//! - `scrubbing` - Timeline interpolation

mod projection;
mod sampling;

use crate::model::TimeSeriesPoint;

/// Build a series from `(period, portfolio_value, amount_contributed)` triples.
fn series(points: &[(u32, f64, f64)]) -> Vec<TimeSeriesPoint> {
    points
        .iter()
        .map(|&(period, portfolio_value, amount_contributed)| TimeSeriesPoint {
            period,
            portfolio_value,
            amount_contributed,
        })
        .collect()
}

/// Assert two floats agree to within an absolute tolerance.
fn assert_close(actual: f64, expected: f64, tolerance: f64, what: &str) {
    assert!(
        (actual - expected).abs() < tolerance,
        "{what}: expected {expected}, got {actual}"
    );
}
