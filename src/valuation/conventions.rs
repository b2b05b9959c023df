use crate::valuation::types::PricingInputs;

/// Conventions for converting user-facing quotes into engine units.
///
/// The pricing engine consumes decimal fractions and year-denominated times;
/// front ends usually quote time to expiry in calendar days and
/// rates/yields/volatilities in percent.  A `QuoteConventions` value makes
/// that boundary conversion explicit and configurable instead of leaving
/// `/365` and `/100` scattered through caller code.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct QuoteConventions {
    /// Day-count denominator for the days-to-years conversion
    #[cfg_attr(feature = "serde", serde(default = "default_days_per_year"))]
    pub days_per_year: f64,

    /// Rates and dividend yields are quoted in percent (5.0 instead of 0.05)
    #[cfg_attr(feature = "serde", serde(default = "default_quoted_in_percent"))]
    pub rates_in_percent: bool,

    /// Volatilities are quoted in percent (35.0 instead of 0.35)
    #[cfg_attr(feature = "serde", serde(default = "default_quoted_in_percent"))]
    pub vols_in_percent: bool,
}

impl Default for QuoteConventions {
    fn default() -> Self {
        Self {
            days_per_year: default_days_per_year(),
            rates_in_percent: default_quoted_in_percent(),
            vols_in_percent: default_quoted_in_percent(),
        }
    }
}

impl QuoteConventions {
    /// Calendar-day convention with a 365-day year, percent quoting.
    pub fn calendar_365() -> Self {
        Self::default()
    }

    /// Calendar-day convention with a 365.25-day year, percent quoting.
    pub fn calendar_365_25() -> Self {
        Self {
            days_per_year: 365.25,
            ..Self::default()
        }
    }

    /// Convert a calendar-day count to year-denominated time.
    pub fn years_from_days(&self, days: f64) -> f64 {
        days / self.days_per_year
    }

    /// Convert a quoted rate or dividend yield to a decimal fraction.
    pub fn rate_from_quote(&self, quote: f64) -> f64 {
        if self.rates_in_percent {
            quote / 100.0
        } else {
            quote
        }
    }

    /// Convert a quoted volatility to a decimal fraction.
    pub fn vol_from_quote(&self, quote: f64) -> f64 {
        if self.vols_in_percent {
            quote / 100.0
        } else {
            quote
        }
    }

    /// Assemble engine inputs from quotes expressed in this convention.
    ///
    /// Prices pass through unchanged; `days_to_exp`, `rate_quote`,
    /// `dividend_quote` and `vol_quote` are converted per the convention
    /// flags.  The returned inputs are not validated here; the engine
    /// validates at its own boundary.
    pub fn inputs_from_quotes(
        &self,
        underlying_price: f64,
        strike_price: f64,
        days_to_exp: f64,
        rate_quote: f64,
        dividend_quote: f64,
        vol_quote: f64,
    ) -> PricingInputs {
        PricingInputs {
            underlying_price,
            strike_price,
            years_to_exp: self.years_from_days(days_to_exp),
            rate: self.rate_from_quote(rate_quote),
            dividend_yield: self.rate_from_quote(dividend_quote),
            volatility: self.vol_from_quote(vol_quote),
        }
    }

    /// Parse conventions from a TOML document.
    ///
    /// Missing fields fall back to the percent-quoting, 365-day defaults, so
    /// an empty document yields [`QuoteConventions::calendar_365`].
    #[cfg(feature = "serde")]
    pub fn from_toml_str(doc: &str) -> anyhow::Result<Self> {
        toml::from_str(doc)
            .map_err(|e| anyhow::anyhow!("failed to parse quote conventions TOML: {}", e))
    }
}

fn default_days_per_year() -> f64 {
    365.0
}

fn default_quoted_in_percent() -> bool {
    true
}
