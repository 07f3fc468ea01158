//! Scenario inputs and the price models that drive them
//!
//! A scenario is an immutable value describing one projection request. It is
//! built fresh per calculation, validated at the engine boundary, and never
//! mutated afterwards. Unparseable or out-of-range user input must be
//! rejected here so that `NaN` never propagates into a result.

use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;
use crate::noise::{gaussian, hash_inputs, seeded_stream};

/// Default monthly noise magnitude for [`PriceModel::Volatile`].
pub const MONTHLY_VOLATILITY: f64 = 0.15;

/// Default floor for a perturbed price, as a fraction of the reference price.
/// Keeps the volatile path away from zero/negative prices; the 1% threshold
/// is a display-quality guard, not a calibrated market parameter.
pub const PRICE_FLOOR_RATIO: f64 = 0.01;

/// How the asset price evolves between now and the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PriceModel {
    /// Every unit of currency, whenever contributed, buys at the reference
    /// price. The most optimistic assumption by construction: in reality
    /// later contributions would buy at a different price.
    #[default]
    BestCase,
    /// Price moves along the straight line from the reference price to the
    /// target price; each contribution buys at that month's trend price.
    Linear,
    /// Linear trend plus multiplicative Gaussian noise each month, seeded
    /// purely from the scenario inputs so the path replays identically.
    Volatile,
}

/// A forward dollar-cost-averaging projection toward a target price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DcaScenario {
    /// Lump sum committed at month zero
    pub initial_amount: f64,
    /// Amount added every month
    pub periodic_amount: f64,
    /// Price at month zero
    pub reference_price: f64,
    /// Price assumed at the horizon
    pub target_price: f64,
    /// Number of months simulated
    pub horizon_months: u32,
    pub price_model: PriceModel,
}

impl DcaScenario {
    /// Check the scenario preconditions, naming the first violated one.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        check_finite(self.initial_amount, "initial amount")?;
        check_finite(self.periodic_amount, "periodic amount")?;
        check_finite(self.reference_price, "reference price")?;
        check_finite(self.target_price, "target price")?;
        check_non_negative(self.initial_amount, "initial amount")?;
        check_non_negative(self.periodic_amount, "periodic amount")?;
        check_non_negative(self.target_price, "target price")?;
        if self.reference_price <= 0.0 {
            return Err(InvalidInput::NonPositivePrice("reference price"));
        }
        if self.horizon_months == 0 {
            return Err(InvalidInput::NonPositiveHorizon);
        }
        if self.initial_amount == 0.0 && self.periodic_amount == 0.0 {
            return Err(InvalidInput::NoContribution);
        }
        Ok(())
    }

    /// Total amount contributed over the whole horizon.
    #[must_use]
    pub fn total_contributed(&self) -> f64 {
        self.initial_amount + self.periodic_amount * f64::from(self.horizon_months)
    }

    /// Seed for the volatile noise stream, derived purely from the inputs.
    #[must_use]
    pub fn noise_seed(&self) -> u64 {
        hash_inputs(
            self.initial_amount,
            self.periodic_amount,
            self.reference_price,
            self.target_price,
            self.horizon_months,
        )
    }

    /// The month-by-month price sequence for this scenario.
    #[must_use]
    pub fn price_path(&self) -> PricePath {
        PricePath::new(self)
    }

    /// Total units accumulated by the horizon under the scenario's price
    /// model, or `None` when a precondition is violated.
    ///
    /// `BestCase` is closed-form; `Linear` and `Volatile` walk the price
    /// path month by month because each contribution buys at that month's
    /// price.
    pub fn total_units(&self) -> Option<f64> {
        self.validate().ok()?;
        match self.price_model {
            PriceModel::BestCase => Some(self.total_contributed() / self.reference_price),
            PriceModel::Linear | PriceModel::Volatile => {
                let mut path = self.price_path();
                let mut units = self.initial_amount / self.reference_price;
                for month in 1..=self.horizon_months {
                    let price = path.price_at(month);
                    if price > 0.0 {
                        units += self.periodic_amount / price;
                    }
                }
                Some(units)
            }
        }
    }
}

/// A backward "what if I had invested then" replay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoricalScenario {
    /// Amount invested at the historical date
    pub invested_amount: f64,
    /// Price at the historical date
    pub historical_price: f64,
    /// Price today
    pub current_price: f64,
}

impl HistoricalScenario {
    pub fn validate(&self) -> Result<(), InvalidInput> {
        check_finite(self.invested_amount, "invested amount")?;
        check_finite(self.historical_price, "historical price")?;
        check_finite(self.current_price, "current price")?;
        check_non_negative(self.invested_amount, "invested amount")?;
        if self.historical_price <= 0.0 {
            return Err(InvalidInput::NonPositivePrice("historical price"));
        }
        if self.current_price <= 0.0 {
            return Err(InvalidInput::NonPositivePrice("current price"));
        }
        Ok(())
    }

    /// Units bought at the historical price.
    #[must_use]
    pub fn units(&self) -> f64 {
        self.invested_amount / self.historical_price
    }
}

/// Compound growth with recurring monthly contributions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthScenario {
    /// Lump sum at month zero
    pub initial_amount: f64,
    /// Amount added every month
    pub monthly_contribution: f64,
    /// Annual return as a decimal (0.10 = 10%)
    pub annual_rate: f64,
    /// Time horizon in years (fractional years allowed)
    pub years: f64,
}

impl GrowthScenario {
    pub fn validate(&self) -> Result<(), InvalidInput> {
        check_finite(self.initial_amount, "initial amount")?;
        check_finite(self.monthly_contribution, "monthly contribution")?;
        check_finite(self.annual_rate, "annual rate")?;
        check_finite(self.years, "years")?;
        check_non_negative(self.initial_amount, "initial amount")?;
        check_non_negative(self.monthly_contribution, "monthly contribution")?;
        // Below -100% a year the monthly-equivalent rate has no real value.
        if self.annual_rate <= -1.0 {
            return Err(InvalidInput::NonFinite("annual rate"));
        }
        if self.years <= 0.0 {
            return Err(InvalidInput::NonPositiveHorizon);
        }
        Ok(())
    }

    /// Monthly-equivalent rate: twelve monthly compoundings reproduce the
    /// stated annual rate exactly (NOT `annual_rate / 12`).
    #[must_use]
    pub fn monthly_rate(&self) -> f64 {
        (1.0 + self.annual_rate).powf(1.0 / 12.0) - 1.0
    }

    /// Number of whole months simulated.
    #[must_use]
    pub fn total_months(&self) -> u32 {
        (self.years * 12.0).round() as u32
    }

    /// Total amount contributed over the whole horizon.
    #[must_use]
    pub fn total_contributed(&self) -> f64 {
        self.initial_amount + self.monthly_contribution * f64::from(self.total_months())
    }
}

/// The month-indexed price sequence behind a DCA scenario.
///
/// For `Volatile` scenarios this carries the seeded noise stream, so prices
/// must be asked for in ascending month order, once per month, to replay the
/// same path the calculator saw. Month 0 is always the exact reference price.
#[derive(Debug, Clone)]
pub struct PricePath {
    reference_price: f64,
    target_price: f64,
    horizon_months: u32,
    volatility: f64,
    floor_ratio: f64,
    rng: Option<SmallRng>,
}

impl PricePath {
    fn new(scenario: &DcaScenario) -> Self {
        let rng = match scenario.price_model {
            PriceModel::Volatile => Some(seeded_stream(scenario.noise_seed())),
            PriceModel::BestCase | PriceModel::Linear => None,
        };
        Self {
            reference_price: scenario.reference_price,
            target_price: scenario.target_price,
            horizon_months: scenario.horizon_months,
            volatility: MONTHLY_VOLATILITY,
            floor_ratio: PRICE_FLOOR_RATIO,
            rng,
        }
    }

    /// Override the noise magnitude and price floor for this path.
    #[must_use]
    pub fn with_noise_params(mut self, volatility: f64, floor_ratio: f64) -> Self {
        self.volatility = volatility;
        self.floor_ratio = floor_ratio;
        self
    }

    /// Price at the given month: linear trend from reference to target,
    /// perturbed (months ≥ 1 only) when a noise stream is present.
    pub fn price_at(&mut self, month: u32) -> f64 {
        let t = f64::from(month) / f64::from(self.horizon_months);
        let mut price = self.reference_price + (self.target_price - self.reference_price) * t;
        if month > 0
            && let Some(rng) = self.rng.as_mut()
        {
            price *= 1.0 + self.volatility * gaussian(rng);
            price = price.max(self.floor_ratio * self.reference_price);
        }
        price
    }
}

fn check_finite(value: f64, field: &'static str) -> Result<(), InvalidInput> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InvalidInput::NonFinite(field))
    }
}

fn check_non_negative(value: f64, field: &'static str) -> Result<(), InvalidInput> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(InvalidInput::NegativeAmount(field))
    }
}
