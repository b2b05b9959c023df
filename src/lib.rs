//! # Optval-Lib: Black-Scholes-Merton European Option Valuation
//!
//! `optval-lib` is a lightweight Rust library for computing theoretical values of
//! European call and put options under the Black-Scholes-Merton model with
//! continuous dividend yield.  The pricing engine is a leaf numeric utility: it
//! consumes scalar inputs, returns scalar outputs, and has no opinion about where
//! market data comes from or how results are displayed.
//!
//! ## Core Features
//!
//! - **Closed-Form Pricing**: call and put values evaluated from a single shared
//!   d1/d2 pair, so put-call parity holds by construction
//! - **Explicit Edge-Case Contract**: intrinsic-value fallbacks at zero expiry and
//!   zero volatility instead of NaN
//! - **Fail-Fast Validation**: invalid inputs are rejected with an error naming
//!   the offending parameter; nothing is silently clamped
//! - **Quote Conventions**: configurable day-count and percent-quote conversion
//!   for callers working in user-facing units
//! - **Chain Valuation**: batch pricing across the strikes of one expiry with
//!   strike-sorted output
//!
//! ## Quick Start
//!
//! ```rust
//! use optval_lib::{price_european, PricingInputs};
//!
//! let inputs = PricingInputs {
//!     underlying_price: 10.0,
//!     strike_price: 10.0,
//!     years_to_exp: 31.0 / 365.0,
//!     rate: 0.05,
//!     dividend_yield: 0.0,
//!     volatility: 0.35,
//! };
//!
//! let value = price_european(&inputs)?;
//! println!("call ${:.4}  put ${:.4}", value.call_value, value.put_value);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Units Contract
//!
//! Engine inputs are decimal fractions (0.05 for 5%) and year-denominated
//! times.  Callers quoting calendar days and percentages convert through
//! [`QuoteConventions`] first; formatting results (currency display, rounding)
//! is likewise the caller's concern.
//!
//! ## Out of Scope
//!
//! American early exercise, implied-volatility solving, Greeks, calibration,
//! and lattice/Monte-Carlo methods are deliberately not part of this crate.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod models;
pub mod valuation;

// ================================================================================================
// IMPORTS
// ================================================================================================

use anyhow::Result;
use std::cmp::Ordering;

use models::bsm;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Quote-unit conversion for callers working in days/percent
pub use valuation::conventions::QuoteConventions;

// Core value types for pricing and chain valuation
pub use valuation::types::{ChainValue, FixedParameters, PricingInputs, PricingResult, StrikeQuote};

// ================================================================================================
// TOP-LEVEL API
// ================================================================================================

/// Value a single European option contract.
///
/// Computes the theoretical call and put values for `inputs` under the
/// Black-Scholes-Merton model with continuous dividend yield.  Both values
/// come out of one shared d1/d2 evaluation; see
/// [`models::bsm::european_values`] for the formulas and the edge-case
/// contract at zero expiry / zero volatility.  Per-side helpers
/// [`models::bsm::call_value`] and [`models::bsm::put_value`] are available
/// when only one leg is needed.
///
/// # Arguments
///
/// * `inputs` - Scalar market parameters in engine units (decimal fractions,
///   year-denominated time).  Use [`QuoteConventions`] to convert day counts
///   and percent quotes.
///
/// # Returns
///
/// A [`PricingResult`] with both theoretical values.
///
/// # Errors
///
/// `anyhow::Error` naming the offending parameter if `inputs` violates its
/// constraints (non-positive underlying or strike, negative expiry, negative
/// volatility, or any non-finite field).  Zero expiry and zero volatility are
/// not errors; they take the intrinsic-value branches.
///
/// # Example
///
/// ```rust
/// use optval_lib::{price_european, PricingInputs};
///
/// let inputs = PricingInputs {
///     underlying_price: 100.0,
///     strike_price: 100.0,
///     years_to_exp: 1.0,
///     rate: 0.05,
///     dividend_yield: 0.0,
///     volatility: 0.2,
/// };
///
/// let value = price_european(&inputs)?;
/// assert!(value.call_value > value.put_value); // positive rates favor the call
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn price_european(inputs: &PricingInputs) -> Result<PricingResult> {
    bsm::european_values(inputs)
}

/// Value an option chain: every strike of one expiry against shared market
/// parameters.
///
/// Each quote is priced independently via the same engine as
/// [`price_european`], with `underlying_price`, `years_to_exp` and the
/// [`FixedParameters`] rate/yield pair shared across rows and the
/// strike/volatility varying per row.
///
/// # Arguments
///
/// * `underlying_price` - Underlying asset price shared by the chain
/// * `years_to_exp` - Time to the chain's expiry in years
/// * `quotes` - Per-strike inputs; need not be sorted
/// * `fixed` - Rate and dividend yield shared by the chain
///
/// # Returns
///
/// One [`ChainValue`] per quote, sorted by strike price in ascending order.
///
/// # Errors
///
/// Fails fast on the first invalid row with the engine's validation error; no
/// partial output is returned.
///
/// # Example
///
/// ```rust
/// use optval_lib::{price_chain, FixedParameters, StrikeQuote};
///
/// let quotes = [
///     StrikeQuote { strike_price: 110.0, volatility: 0.22 },
///     StrikeQuote { strike_price: 90.0, volatility: 0.25 },
///     StrikeQuote { strike_price: 100.0, volatility: 0.2 },
/// ];
/// let fixed = FixedParameters { r: 0.05, q: 0.0 };
///
/// let chain = price_chain(100.0, 0.5, &quotes, fixed)?;
/// assert_eq!(chain.len(), 3);
/// assert_eq!(chain[0].strike_price, 90.0); // sorted output
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn price_chain(
    underlying_price: f64,
    years_to_exp: f64,
    quotes: &[StrikeQuote],
    fixed: FixedParameters,
) -> Result<Vec<ChainValue>> {
    let mut results = Vec::with_capacity(quotes.len());

    for quote in quotes {
        let inputs = PricingInputs {
            underlying_price,
            strike_price: quote.strike_price,
            years_to_exp,
            rate: fixed.r,
            dividend_yield: fixed.q,
            volatility: quote.volatility,
        };
        let value = bsm::european_values(&inputs)?;

        results.push(ChainValue {
            strike_price: quote.strike_price,
            volatility: quote.volatility,
            call_value: value.call_value,
            put_value: value.put_value,
        });
    }

    // Sort results by strike price for consistent ordering
    results.sort_by(|a, b| {
        a.strike_price
            .partial_cmp(&b.strike_price)
            .unwrap_or(Ordering::Equal)
    });
    Ok(results)
}
