mod results;
mod scenario;
mod series;

pub use results::ScenarioResult;
pub use scenario::{
    DcaScenario, GrowthScenario, HistoricalScenario, MONTHLY_VOLATILITY, PRICE_FLOOR_RATIO,
    PriceModel, PricePath,
};
pub use series::{ScrubPoint, TimeSeriesPoint};
