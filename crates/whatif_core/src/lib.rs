//! Deterministic "what if" financial projection engine
//!
//! This crate computes hypothetical investment scenarios:
//! - Forward dollar-cost-averaging projections toward a target price,
//!   under a best-case, linear, or volatile price model
//! - Backward "what if I had invested then" replays
//! - Compound growth with recurring monthly contributions
//!
//! Alongside the summary calculators it produces the full month-by-month
//! trajectory behind each scenario, downsamples it to a chart-sized series,
//! and interpolates arbitrary timeline positions for interactive scrubbing.
//!
//! Every function here is pure: no I/O, no clock, no global state. The
//! volatile price model draws from a stream seeded purely from the scenario
//! inputs, so identical inputs always replay the identical price path.
//!
//! ```ignore
//! use whatif_core::model::{DcaScenario, PriceModel};
//! use whatif_core::{project_dca, sample_series, simulate_dca_path, value_at};
//!
//! let scenario = DcaScenario {
//!     initial_amount: 1_000.0,
//!     periodic_amount: 100.0,
//!     reference_price: 50_000.0,
//!     target_price: 100_000.0,
//!     horizon_months: 12,
//!     price_model: PriceModel::Volatile,
//! };
//!
//! let summary = project_dca(&scenario).unwrap();
//! let chart = sample_series(&simulate_dca_path(&scenario), 37);
//! let scrubbed = value_at(&chart, 4.5).unwrap();
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod interpolate;
pub mod noise;
pub mod projection;
pub mod sample;
pub mod simulate;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::InvalidInput;
pub use interpolate::{value_at, value_at_fraction};
pub use projection::{project_compound_growth, project_dca, replay_historical};
pub use sample::{DCA_CHART_POINTS, GROWTH_CHART_POINTS, sample_series};
pub use simulate::{simulate_dca_path, simulate_growth_path};
