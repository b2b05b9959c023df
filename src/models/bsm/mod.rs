// Black-Scholes-Merton valuation of European calls and puts with continuous
// dividend yield.  Implied-volatility solving and Greeks are intentionally
// omitted to keep the lightweight focus of optval-lib.

use anyhow::Result;

use crate::valuation::types::{PricingInputs, PricingResult};

/// Standard normal cumulative distribution function.
///
/// erf saturates across the f64 range, so the tails evaluate to exactly 0.0
/// and 1.0 instead of overflowing.
fn norm_cdf(x: f64) -> f64 {
    // 0.5 * [1 + erf(x / sqrt(2))]
    0.5 * (1.0 + libm::erf(x / (2.0_f64).sqrt()))
}

/// Shared d1/d2 terms of the Black-Scholes-Merton formula.
///
/// The call and the put are both evaluated from this single pair, so put-call
/// parity holds by construction.  Callers must ensure `years_to_exp > 0` and
/// `volatility > 0`; the degenerate states are handled before this point.
fn d1_d2(inputs: &PricingInputs) -> (f64, f64) {
    let s = inputs.underlying_price;
    let k = inputs.strike_price;
    let t = inputs.years_to_exp;
    let v = inputs.volatility;

    let vol_sqrt_t = v * t.sqrt();
    let d1 = ((s / k).ln() + (inputs.rate - inputs.dividend_yield + 0.5 * v.powi(2)) * t)
        / vol_sqrt_t;
    (d1, d1 - vol_sqrt_t)
}

/// Payoff at expiry: call = max(S - K, 0), put = max(K - S, 0).
fn intrinsic(inputs: &PricingInputs) -> (f64, f64) {
    let moneyness = inputs.underlying_price - inputs.strike_price;
    (moneyness.max(0.0), (-moneyness).max(0.0))
}

/// Value of a deterministic underlying: the discounted forward against the
/// discounted strike.  Used when volatility is exactly zero but expiry is not.
fn discounted_intrinsic(inputs: &PricingInputs) -> (f64, f64) {
    let t = inputs.years_to_exp;
    let fwd = inputs.underlying_price * (-inputs.dividend_yield * t).exp();
    let disc_strike = inputs.strike_price * (-inputs.rate * t).exp();
    ((fwd - disc_strike).max(0.0), (disc_strike - fwd).max(0.0))
}

/// Theoretical value of a European call option.
///
/// # Errors
///
/// Rejects invalid inputs before any computation; see
/// [`PricingInputs::validate`].
pub fn call_value(inputs: &PricingInputs) -> Result<f64> {
    Ok(european_values(inputs)?.call_value)
}

/// Theoretical value of a European put option.
///
/// # Errors
///
/// Rejects invalid inputs before any computation; see
/// [`PricingInputs::validate`].
pub fn put_value(inputs: &PricingInputs) -> Result<f64> {
    Ok(european_values(inputs)?.put_value)
}

/// Theoretical values of the European call and put for one set of inputs.
///
/// Both values come out of a single d1/d2 evaluation:
///
/// ```text
/// d1   = (ln(S/K) + (r - q + v²/2)·T) / (v·√T)
/// d2   = d1 - v·√T
/// call = S·e^(-qT)·Φ(d1) - K·e^(-rT)·Φ(d2)
/// put  = K·e^(-rT)·Φ(-d2) - S·e^(-qT)·Φ(-d1)
/// ```
///
/// The naive formulas are undefined at the boundaries, which are legitimate
/// market states and priced by explicit branches instead:
///
/// - `years_to_exp == 0`: intrinsic value, call = max(S-K, 0),
///   put = max(K-S, 0).
/// - `volatility == 0` (with positive expiry): discounted intrinsic value,
///   call = max(S·e^(-qT) - K·e^(-rT), 0), put = max(K·e^(-rT) - S·e^(-qT), 0).
///
/// # Errors
///
/// Rejects invalid inputs before any computation; see
/// [`PricingInputs::validate`].  Degenerate inputs (zero expiry, zero
/// volatility) are not errors.
pub fn european_values(inputs: &PricingInputs) -> Result<PricingResult> {
    inputs.validate()?;

    let (call_value, put_value) = if inputs.years_to_exp == 0.0 {
        intrinsic(inputs)
    } else if inputs.volatility == 0.0 {
        discounted_intrinsic(inputs)
    } else {
        let t = inputs.years_to_exp;
        let (d1, d2) = d1_d2(inputs);
        let fwd = inputs.underlying_price * (-inputs.dividend_yield * t).exp();
        let disc_strike = inputs.strike_price * (-inputs.rate * t).exp();
        (
            fwd * norm_cdf(d1) - disc_strike * norm_cdf(d2),
            disc_strike * norm_cdf(-d2) - fwd * norm_cdf(-d1),
        )
    };

    Ok(PricingResult {
        call_value,
        put_value,
    })
}
