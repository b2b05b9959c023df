// demos/value_demo.rs

//! Demonstration of single-contract and chain valuation
//!
//! This example shows how to:
//! 1. Convert sidebar-style quotes (calendar days, percentages) into engine units
//! 2. Value a single European contract
//! 3. Value a chain of strikes and print the results as a table

use anyhow::Result;
use optval_lib::{price_chain, price_european, FixedParameters, QuoteConventions, StrikeQuote};

fn main() -> Result<()> {
    println!("European Option Valuation Demo");
    println!("==============================");

    // Quotes the way a front end collects them: days and percent
    let conventions = QuoteConventions::calendar_365();
    let inputs = conventions.inputs_from_quotes(10.0, 10.0, 31.0, 5.0, 0.0, 35.0);

    println!("\nStep 1: Single contract");
    println!("  Underlying: ${:.2}", inputs.underlying_price);
    println!("  Strike:     ${:.2}", inputs.strike_price);
    println!(
        "  Expiry:     31 days ({:.4} years)",
        inputs.years_to_exp
    );
    println!("  Rate: 5.00%   Dividend yield: 0.00%   Volatility: 35.00%");

    let value = price_european(&inputs)?;
    println!("  Call Value: ${:.4}", value.call_value);
    println!("  Put Value:  ${:.4}", value.put_value);

    println!("\nStep 2: Chain across strikes");

    let quotes: Vec<StrikeQuote> = (6..=14)
        .map(|strike| StrikeQuote {
            strike_price: strike as f64,
            volatility: inputs.volatility,
        })
        .collect();
    let fixed = FixedParameters {
        r: inputs.rate,
        q: inputs.dividend_yield,
    };

    let chain = price_chain(inputs.underlying_price, inputs.years_to_exp, &quotes, fixed)?;

    println!("Options valued: {}", chain.len());
    println!(
        "{:<8} {:<8} {:<12} {:<12}",
        "Strike", "Vol", "Call Value", "Put Value"
    );
    println!("{}", "-".repeat(44));

    for row in &chain {
        println!(
            "{:<8.2} {:<8.2} {:<12.4} {:<12.4}",
            row.strike_price, row.volatility, row.call_value, row.put_value
        );
    }

    Ok(())
}
