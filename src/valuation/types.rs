use anyhow::{bail, Result};

/// Complete set of scalar inputs for valuing one European option contract.
///
/// Units contract: `years_to_exp` is denominated in years; `rate`,
/// `dividend_yield` and `volatility` are annualized decimal fractions
/// (0.05 means 5%).  Front ends quoting calendar days and percentages should
/// convert through [`QuoteConventions`](crate::QuoteConventions) before
/// building this struct.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingInputs {
    /// Underlying asset price
    pub underlying_price: f64,
    /// Strike price
    pub strike_price: f64,
    /// Time to expiration in years
    pub years_to_exp: f64,
    /// Annualized risk-free rate (decimal; negative rates are accepted)
    pub rate: f64,
    /// Annualized continuous dividend yield (decimal; may be negative)
    pub dividend_yield: f64,
    /// Annualized volatility (decimal)
    pub volatility: f64,
}

impl PricingInputs {
    /// Reject inputs the pricing formulas are not defined for.
    ///
    /// `years_to_exp == 0.0` and `volatility == 0.0` pass validation; those
    /// are legitimate market states (expiry day, a deterministic underlying)
    /// handled by the intrinsic-value branches of the engine.  Inputs are
    /// never clamped; the error names the offending parameter.
    pub fn validate(&self) -> Result<()> {
        if !self.underlying_price.is_finite() || self.underlying_price <= 0.0 {
            bail!(
                "underlying_price must be positive and finite, got {}",
                self.underlying_price
            );
        }
        if !self.strike_price.is_finite() || self.strike_price <= 0.0 {
            bail!(
                "strike_price must be positive and finite, got {}",
                self.strike_price
            );
        }
        if !self.years_to_exp.is_finite() || self.years_to_exp < 0.0 {
            bail!(
                "years_to_exp must be non-negative and finite, got {}",
                self.years_to_exp
            );
        }
        if !self.rate.is_finite() {
            bail!("rate must be finite, got {}", self.rate);
        }
        if !self.dividend_yield.is_finite() {
            bail!("dividend_yield must be finite, got {}", self.dividend_yield);
        }
        if !self.volatility.is_finite() || self.volatility < 0.0 {
            bail!(
                "volatility must be non-negative and finite, got {}",
                self.volatility
            );
        }
        Ok(())
    }
}

/// Theoretical call and put values for one set of inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Theoretical value of the call
    pub call_value: f64,
    /// Theoretical value of the put
    pub put_value: f64,
}

/// Parameters held fixed across every contract of a chain.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedParameters {
    /// Annualized risk-free rate (decimal)
    pub r: f64,
    /// Annualized continuous dividend yield (decimal)
    pub q: f64,
}

impl Default for FixedParameters {
    fn default() -> Self {
        Self { r: 0.02, q: 0.0 }
    }
}

/// Per-strike inputs of one chain row.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrikeQuote {
    /// Strike price
    pub strike_price: f64,
    /// Annualized volatility for this strike (decimal)
    pub volatility: f64,
}

/// One valued chain row.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChainValue {
    /// Strike price
    pub strike_price: f64,
    /// Annualized volatility used for this strike (decimal)
    pub volatility: f64,
    /// Theoretical value of the call
    pub call_value: f64,
    /// Theoretical value of the put
    pub put_value: f64,
}
