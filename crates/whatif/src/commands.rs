//! Subcommand definitions and their runners
//!
//! Each runner builds a scenario from the CLI flags, hands it to the engine,
//! and formats whatever comes back. A violated precondition prints a hint
//! ("No result: ...") and exits cleanly — it is an empty state, not an error.

use clap::{Subcommand, ValueEnum};
use serde::Serialize;

use whatif_core::model::{
    DcaScenario, GrowthScenario, HistoricalScenario, PriceModel, ScenarioResult, TimeSeriesPoint,
};
use whatif_core::{
    DCA_CHART_POINTS, GROWTH_CHART_POINTS, project_compound_growth, project_dca,
    replay_historical, sample_series, simulate_dca_path, simulate_growth_path, value_at,
};

use crate::chart;
use crate::format::{
    format_currency, format_month, format_multiplier, format_number, format_quantity,
    format_signed_currency,
};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Project a dollar-cost-averaging scenario toward a target price
    Dca(DcaArgs),
    /// Replay a "what if I had invested back then" scenario
    History(HistoryArgs),
    /// Compound an initial balance with recurring monthly contributions
    Growth(GrowthArgs),
    /// Plain percentage calculations
    Percent(PercentArgs),
}

impl Command {
    pub fn run(self) -> color_eyre::Result<()> {
        match self {
            Command::Dca(args) => run_dca(&args),
            Command::History(args) => run_history(&args),
            Command::Growth(args) => run_growth(&args),
            Command::Percent(args) => run_percent(&args),
        }
    }
}

// ============================================================================
// dca
// ============================================================================

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModelArg {
    /// Every contribution buys at today's price (most optimistic)
    BestCase,
    /// Price moves linearly from today's price to the target
    Linear,
    /// Linear trend plus reproducible month-to-month noise
    Volatile,
}

impl From<ModelArg> for PriceModel {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::BestCase => PriceModel::BestCase,
            ModelArg::Linear => PriceModel::Linear,
            ModelArg::Volatile => PriceModel::Volatile,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct DcaArgs {
    /// Lump sum invested today, in dollars
    #[arg(long, default_value_t = 1000.0)]
    initial: f64,

    /// Amount added every month, in dollars
    #[arg(long, default_value_t = 100.0)]
    monthly: f64,

    /// Asset price today, in dollars
    #[arg(long)]
    price: f64,

    /// Assumed price at the horizon (default: double today's price)
    #[arg(long)]
    target: Option<f64>,

    /// Months simulated
    #[arg(long, default_value_t = 12)]
    months: u32,

    /// How the price evolves between now and the horizon
    #[arg(long, value_enum, default_value_t = ModelArg::BestCase)]
    model: ModelArg,

    /// Read off the interpolated chart value at this (fractional) month
    #[arg(long)]
    at: Option<f64>,

    /// Emit raw JSON instead of the formatted card
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct DcaReport<'a> {
    scenario: &'a DcaScenario,
    units: f64,
    summary: ScenarioResult,
    series: &'a [TimeSeriesPoint],
}

fn run_dca(args: &DcaArgs) -> color_eyre::Result<()> {
    let scenario = DcaScenario {
        initial_amount: args.initial,
        periodic_amount: args.monthly,
        reference_price: args.price,
        target_price: args.target.unwrap_or(args.price * 2.0),
        horizon_months: args.months,
        price_model: args.model.into(),
    };

    if let Err(reason) = scenario.validate() {
        println!("No result: {reason}.");
        return Ok(());
    }
    let Some(summary) = project_dca(&scenario) else {
        return Ok(());
    };
    let Some(units) = scenario.total_units() else {
        return Ok(());
    };

    let path = simulate_dca_path(&scenario);
    let series = sample_series(&path, DCA_CHART_POINTS);
    tracing::debug!(
        seed = scenario.noise_seed(),
        simulated = path.len(),
        sampled = series.len(),
        "dca path ready"
    );

    if args.json {
        let report = DcaReport {
            scenario: &scenario,
            units,
            summary,
            series: &series,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Imagine: {} toward {} over {} ({:?})",
        format_currency(summary.total_contributed),
        format_currency(scenario.target_price),
        format_month(f64::from(scenario.horizon_months)),
        scenario.price_model,
    );
    println!("  Units bought      {}", format_quantity(units));
    println!(
        "  Value at target   {}",
        format_currency(summary.final_value)
    );
    println!(
        "  Profit            {}  ({})",
        format_signed_currency(summary.profit),
        format_multiplier(summary.multiplier),
    );
    println!(
        "  Price multiple    {}",
        format_multiplier(scenario.target_price / scenario.reference_price)
    );
    println!("  Horizon ends      {}", horizon_date(scenario.horizon_months));
    println!();
    print!("{}", chart::render(&series));

    if let Some(month) = args.at
        && let Some(point) = value_at(&series, month)
    {
        println!();
        println!(
            "At {}: value {}, invested {}, profit {}",
            format_month(point.period),
            format_currency(point.portfolio_value),
            format_currency(point.amount_contributed),
            format_signed_currency(point.profit()),
        );
    }

    Ok(())
}

/// Calendar month the horizon lands in, e.g. "August 2027". Horizons past
/// jiff's span range are capped rather than rejected.
fn horizon_date(months: u32) -> String {
    let months = i64::from(months).min(120_000);
    let today = jiff::Zoned::now().date();
    let target = today.saturating_add(jiff::Span::new().months(months));
    target.strftime("%B %Y").to_string()
}

// ============================================================================
// history
// ============================================================================

#[derive(clap::Args, Debug)]
pub struct HistoryArgs {
    /// Amount that would have been invested, in dollars
    #[arg(long)]
    amount: f64,

    /// Asset price at the time, in dollars
    #[arg(long = "then")]
    then_price: f64,

    /// Asset price today, in dollars
    #[arg(long = "now")]
    now_price: f64,

    /// Emit raw JSON instead of the formatted card
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct HistoryReport<'a> {
    scenario: &'a HistoricalScenario,
    units: f64,
    summary: ScenarioResult,
}

fn run_history(args: &HistoryArgs) -> color_eyre::Result<()> {
    let scenario = HistoricalScenario {
        invested_amount: args.amount,
        historical_price: args.then_price,
        current_price: args.now_price,
    };

    if let Err(reason) = scenario.validate() {
        println!("No result: {reason}.");
        return Ok(());
    }
    let Some(summary) = replay_historical(&scenario) else {
        return Ok(());
    };

    if args.json {
        let report = HistoryReport {
            scenario: &scenario,
            units: scenario.units(),
            summary,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} at {} would have bought {} units",
        format_currency(scenario.invested_amount),
        format_currency(scenario.historical_price),
        format_quantity(scenario.units()),
    );
    println!("  Worth today       {}", format_currency(summary.final_value));
    println!(
        "  Profit            {}  ({})",
        format_signed_currency(summary.profit),
        format_multiplier(summary.multiplier),
    );

    Ok(())
}

// ============================================================================
// growth
// ============================================================================

#[derive(clap::Args, Debug)]
pub struct GrowthArgs {
    /// Starting balance, in dollars
    #[arg(long, default_value_t = 10_000.0)]
    initial: f64,

    /// Amount added every month, in dollars
    #[arg(long, default_value_t = 500.0)]
    monthly: f64,

    /// Annual return in percent (7 = 7%)
    #[arg(long, default_value_t = 7.0)]
    rate: f64,

    /// Time horizon in years (fractional years allowed)
    #[arg(long, default_value_t = 10.0)]
    years: f64,

    /// Read off the interpolated chart value at this (fractional) month
    #[arg(long)]
    at: Option<f64>,

    /// Emit raw JSON instead of the formatted card
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct GrowthReport<'a> {
    scenario: &'a GrowthScenario,
    summary: ScenarioResult,
    series: &'a [TimeSeriesPoint],
}

fn run_growth(args: &GrowthArgs) -> color_eyre::Result<()> {
    let scenario = GrowthScenario {
        initial_amount: args.initial,
        monthly_contribution: args.monthly,
        annual_rate: args.rate / 100.0,
        years: args.years,
    };

    if let Err(reason) = scenario.validate() {
        println!("No result: {reason}.");
        return Ok(());
    }
    let Some(summary) = project_compound_growth(&scenario) else {
        return Ok(());
    };

    let path = simulate_growth_path(&scenario);
    let series = sample_series(&path, GROWTH_CHART_POINTS);
    tracing::debug!(
        months = scenario.total_months(),
        sampled = series.len(),
        "growth path ready"
    );

    if args.json {
        let report = GrowthReport {
            scenario: &scenario,
            summary,
            series: &series,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} now plus {}/month at {}%/yr for {}",
        format_currency(scenario.initial_amount),
        format_currency(scenario.monthly_contribution),
        format_number(args.rate),
        format_month(f64::from(scenario.total_months())),
    );
    println!(
        "  Contributed       {}",
        format_currency(summary.total_contributed)
    );
    println!("  Final balance     {}", format_currency(summary.final_value));
    println!(
        "  Interest earned   {}  ({})",
        format_signed_currency(summary.profit),
        format_multiplier(summary.multiplier),
    );
    println!();
    print!("{}", chart::render(&series));

    if let Some(month) = args.at
        && let Some(point) = value_at(&series, month)
    {
        println!();
        println!(
            "At {}: balance {}, contributed {}, interest {}",
            format_month(point.period),
            format_currency(point.portfolio_value),
            format_currency(point.amount_contributed),
            format_signed_currency(point.profit()),
        );
    }

    Ok(())
}

// ============================================================================
// percent
// ============================================================================

#[derive(clap::Args, Debug)]
pub struct PercentArgs {
    #[command(subcommand)]
    op: PercentOp,
}

#[derive(Subcommand, Debug)]
pub enum PercentOp {
    /// What is X% of Y?
    WhatIs { x: f64, y: f64 },
    /// X is what percent of Y?
    WhatPercent { x: f64, y: f64 },
    /// Percent change from X to Y
    Change { x: f64, y: f64 },
}

fn run_percent(args: &PercentArgs) -> color_eyre::Result<()> {
    let answer = match args.op {
        PercentOp::WhatIs { x, y } => what_is(x, y).map(|v| format!("{}% of {} = {}", format_number(x), format_number(y), format_number(v))),
        PercentOp::WhatPercent { x, y } => what_percent(x, y).map(|v| {
            format!("{} is {}% of {}", format_number(x), format_number(v), format_number(y))
        }),
        PercentOp::Change { x, y } => change(x, y).map(|v| {
            format!("{} -> {} is a {}% change", format_number(x), format_number(y), format_number(v))
        }),
    };

    match answer {
        Some(line) => println!("{line}"),
        None => println!("No result: the inputs leave nothing to divide by."),
    }
    Ok(())
}

fn what_is(x: f64, y: f64) -> Option<f64> {
    (x.is_finite() && y.is_finite()).then(|| x / 100.0 * y)
}

fn what_percent(x: f64, y: f64) -> Option<f64> {
    (x.is_finite() && y.is_finite() && y != 0.0).then(|| x / y * 100.0)
}

fn change(x: f64, y: f64) -> Option<f64> {
    (x.is_finite() && y.is_finite() && x != 0.0).then(|| (y - x) / x.abs() * 100.0)
}
