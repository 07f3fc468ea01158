//! Plain-text chart rendering for a sampled series
//!
//! One row per sampled point: a month label, a bar scaled to the portfolio
//! value, and the compact value. A `·` marks where the contributed amount
//! sits inside the bar, so gains read as the bar outrunning the dot.

use whatif_core::model::TimeSeriesPoint;
use whatif_core::sample_series;

use crate::format::{format_compact_currency, format_month};

const BAR_WIDTH: usize = 42;
const MAX_ROWS: usize = 13;

pub fn render(series: &[TimeSeriesPoint]) -> String {
    if series.len() < 2 {
        return String::new();
    }

    // The chart series is already downsampled for rendering; thin it again
    // to terminal-friendly row counts, endpoints preserved.
    let rows = sample_series(series, MAX_ROWS);
    let max_value = rows
        .iter()
        .map(|p| p.portfolio_value.max(p.amount_contributed))
        .fold(0.0_f64, f64::max);
    if max_value <= 0.0 {
        return String::new();
    }

    let mut out = String::new();
    for point in &rows {
        let value_cells = scale(point.portfolio_value, max_value);
        let invested_cells = scale(point.amount_contributed, max_value);

        let mut bar = String::with_capacity(BAR_WIDTH);
        for cell in 0..BAR_WIDTH {
            if cell + 1 == invested_cells {
                bar.push('·');
            } else if cell < value_cells {
                bar.push('█');
            } else {
                bar.push(' ');
            }
        }

        out.push_str(&format!(
            "{:>5} │{bar} {}\n",
            format_month(f64::from(point.period)),
            format_compact_currency(point.portfolio_value)
        ));
    }
    out
}

fn scale(value: f64, max_value: f64) -> usize {
    (((value / max_value) * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH)
}
