//! Continuous-time interpolation over a sampled series
//!
//! Drives the chart scrubber: invoked once per pointer-move, so it must be
//! pure, cheap, and free of accumulated state. Each call is independent and
//! idempotent for the same `(series, target_period)` pair.

use crate::model::{ScrubPoint, TimeSeriesPoint};

/// Linearly reconstruct the value at an arbitrary fractional period.
///
/// Positions at or outside the series bounds return the boundary point
/// unchanged. In between, the bracketing pair is found by scan (the series
/// is a handful of chart points) and both `portfolio_value` and
/// `amount_contributed` are interpolated independently. Returns `None` only
/// for an empty series.
#[must_use]
pub fn value_at(series: &[TimeSeriesPoint], target_period: f64) -> Option<ScrubPoint> {
    let first = *series.first()?;
    let last = *series.last()?;

    if target_period <= f64::from(first.period) {
        return Some(first.into());
    }
    if target_period >= f64::from(last.period) {
        return Some(last.into());
    }

    for pair in series.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if f64::from(a.period) <= target_period && target_period <= f64::from(b.period) {
            let width = f64::from(b.period - a.period);
            let t = if width > 0.0 {
                (target_period - f64::from(a.period)) / width
            } else {
                0.0
            };
            return Some(ScrubPoint {
                period: target_period,
                portfolio_value: lerp(a.portfolio_value, b.portfolio_value, t),
                amount_contributed: lerp(a.amount_contributed, b.amount_contributed, t),
            });
        }
    }

    Some(last.into())
}

/// Resolve a pointer's horizontal fraction (0 = series start, 1 = series
/// end) to an interpolated point. The fraction is clamped to `[0, 1]`.
#[must_use]
pub fn value_at_fraction(series: &[TimeSeriesPoint], fraction: f64) -> Option<ScrubPoint> {
    let last = series.last()?;
    value_at(series, fraction.clamp(0.0, 1.0) * f64::from(last.period))
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
