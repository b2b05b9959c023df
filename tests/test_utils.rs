use optval_lib::PricingInputs;
use serde::Deserialize;

/// CSV row structure matching the scenario fixture format
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioRow {
    pub label: String,
    pub underlying_price: f64,
    pub strike_price: f64,
    pub years_to_exp: f64,
    pub rate: f64,
    pub dividend_yield: f64,
    pub volatility: f64,
}

impl ScenarioRow {
    /// Convert a fixture row into engine inputs
    pub fn inputs(&self) -> PricingInputs {
        PricingInputs {
            underlying_price: self.underlying_price,
            strike_price: self.strike_price,
            years_to_exp: self.years_to_exp,
            rate: self.rate,
            dividend_yield: self.dividend_yield,
            volatility: self.volatility,
        }
    }
}

/// Load valuation scenarios from the CSV fixture
pub fn load_scenarios(file_path: &str) -> Result<Vec<ScenarioRow>, Box<dyn std::error::Error>> {
    let mut reader = csv::Reader::from_path(file_path)?;
    let mut rows = Vec::new();

    for result in reader.deserialize() {
        let row: ScenarioRow = result?;
        rows.push(row);
    }

    Ok(rows)
}
