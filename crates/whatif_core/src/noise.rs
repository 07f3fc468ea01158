//! Seeded noise stream for the volatile price model
//!
//! The stream is derived purely from the scenario inputs: no wall-clock
//! seed, no global state. Two scenarios with identical inputs replay the
//! identical noise path; changing any one input changes the path.

use std::f64::consts::TAU;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Substituted for a uniform draw of exactly zero before taking its log,
/// so the Box–Muller transform never evaluates `ln(0)`.
const U1_FLOOR: f64 = 1e-4;

/// Combine the five scenario scalars into a stream seed.
///
/// A cheap weighted sum with distinct prime multipliers: not a real hash,
/// but enough that any single input change lands on a different seed.
#[must_use]
pub fn hash_inputs(
    initial_amount: f64,
    periodic_amount: f64,
    reference_price: f64,
    target_price: f64,
    horizon_months: u32,
) -> u64 {
    let combined = initial_amount * 7.0
        + periodic_amount * 13.0
        + reference_price * 31.0
        + target_price * 37.0
        + f64::from(horizon_months) * 41.0;
    (combined * 100.0).round() as u64
}

/// A deterministic uniform stream for the given seed. Callers draw from it
/// with `rng.random::<f64>()`, which yields values in `[0, 1)`.
#[must_use]
pub fn seeded_stream(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// One approximately standard-normal value via the Box–Muller transform.
///
/// Consumes exactly two uniform draws per call. Cannot fail: a zero first
/// draw is floored before the logarithm.
pub fn gaussian<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let u1 = rng.random::<f64>();
    let u2 = rng.random::<f64>();
    let u1 = if u1 > 0.0 { u1 } else { U1_FLOOR };
    (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
}
