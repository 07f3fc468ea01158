//! Downsampling of simulated series for chart display
//!
//! Charts only need enough points for a visually smooth curve, not
//! per-month resolution. The first and last points of the original series
//! always survive sampling exactly, so chart endpoints and summary values
//! agree.

use crate::model::TimeSeriesPoint;

/// Point budget for DCA charts.
pub const DCA_CHART_POINTS: usize = 37;

/// Point budget for compound-growth charts, which span longer horizons.
pub const GROWTH_CHART_POINTS: usize = 49;

/// Downsample a series to at most `max_points` points.
///
/// Targets are spaced evenly across the period range and snapped to the
/// nearest simulated period, clamped to `[0, last_period]`. Series already
/// within budget are returned unchanged. `max_points` below 2 is raised to
/// 2 so both endpoints always appear.
#[must_use]
pub fn sample_series(series: &[TimeSeriesPoint], max_points: usize) -> Vec<TimeSeriesPoint> {
    let max_points = max_points.max(2);
    if series.len() <= max_points {
        return series.to_vec();
    }

    let last = series.len() - 1;
    let last_period = f64::from(series[last].period);
    let step = last_period / (max_points - 1) as f64;

    let mut sampled = Vec::with_capacity(max_points);
    for i in 0..max_points {
        let target = (i as f64 * step).round().clamp(0.0, last_period);
        sampled.push(series[nearest_index(series, target)]);
    }
    sampled
}

/// Index of the point whose period is closest to `target`, preferring the
/// earlier point on ties. Series are ordered by ascending period.
fn nearest_index(series: &[TimeSeriesPoint], target: f64) -> usize {
    let hi = series.partition_point(|p| f64::from(p.period) < target);
    if hi == 0 {
        return 0;
    }
    if hi >= series.len() {
        return series.len() - 1;
    }
    let lo = hi - 1;
    if target - f64::from(series[lo].period) <= f64::from(series[hi].period) - target {
        lo
    } else {
        hi
    }
}
