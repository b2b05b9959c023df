use optval_lib::{
    price_chain, price_european, FixedParameters, PricingInputs, QuoteConventions, StrikeQuote,
};

#[test]
fn test_chain_sorted_and_consistent_with_single_pricing() {
    // Deliberately unsorted strikes
    let quotes = [
        StrikeQuote {
            strike_price: 12.0,
            volatility: 0.38,
        },
        StrikeQuote {
            strike_price: 8.0,
            volatility: 0.42,
        },
        StrikeQuote {
            strike_price: 10.0,
            volatility: 0.35,
        },
    ];
    let fixed = FixedParameters { r: 0.05, q: 0.01 };
    let underlying = 10.0;
    let years = 31.0 / 365.0;

    let chain = price_chain(underlying, years, &quotes, fixed).expect("valid chain");

    assert_eq!(chain.len(), 3);
    let strikes: Vec<f64> = chain.iter().map(|row| row.strike_price).collect();
    assert_eq!(strikes, vec![8.0, 10.0, 12.0]);

    for row in &chain {
        let single = price_european(&PricingInputs {
            underlying_price: underlying,
            strike_price: row.strike_price,
            years_to_exp: years,
            rate: fixed.r,
            dividend_yield: fixed.q,
            volatility: row.volatility,
        })
        .expect("valid inputs");

        assert_eq!(row.call_value, single.call_value);
        assert_eq!(row.put_value, single.put_value);
    }
}

#[test]
fn test_chain_rejects_invalid_row() {
    let quotes = [
        StrikeQuote {
            strike_price: 10.0,
            volatility: 0.35,
        },
        StrikeQuote {
            strike_price: -5.0,
            volatility: 0.35,
        },
    ];

    let result = price_chain(10.0, 0.5, &quotes, FixedParameters::default());
    let err = result.unwrap_err();
    assert!(err.to_string().contains("strike_price"));
}

#[test]
fn test_fixed_parameters_default() {
    let fixed = FixedParameters::default();
    assert_eq!(fixed.r, 0.02);
    assert_eq!(fixed.q, 0.0);
}

#[test]
fn test_conventions_match_original_calculator() {
    // The reference front end quotes 31 days, 5% rate, 0% yield, 35% vol
    let conventions = QuoteConventions::calendar_365();

    assert_eq!(conventions.years_from_days(31.0), 31.0 / 365.0);
    assert_eq!(conventions.rate_from_quote(5.0), 0.05);
    assert_eq!(conventions.vol_from_quote(35.0), 0.35);

    let inputs = conventions.inputs_from_quotes(10.0, 10.0, 31.0, 5.0, 0.0, 35.0);
    let value = price_european(&inputs).expect("valid inputs");

    assert!((value.call_value - 0.4274243).abs() < 5e-6);
    assert!((value.put_value - 0.3850486).abs() < 5e-6);
}

#[test]
fn test_conventions_decimal_quoting_passthrough() {
    let conventions = QuoteConventions {
        days_per_year: 365.0,
        rates_in_percent: false,
        vols_in_percent: false,
    };

    assert_eq!(conventions.rate_from_quote(0.05), 0.05);
    assert_eq!(conventions.vol_from_quote(0.35), 0.35);
}

#[test]
fn test_conventions_365_25_preset() {
    let conventions = QuoteConventions::calendar_365_25();
    assert_eq!(conventions.days_per_year, 365.25);
    assert!(conventions.rates_in_percent);
    assert!(conventions.vols_in_percent);
}

#[test]
fn test_conventions_from_toml() {
    let full = QuoteConventions::from_toml_str(
        "days_per_year = 252.0\nrates_in_percent = false\nvols_in_percent = true\n",
    )
    .expect("well-formed TOML");
    assert_eq!(full.days_per_year, 252.0);
    assert!(!full.rates_in_percent);
    assert!(full.vols_in_percent);

    // Missing fields fall back to the calendar-365 percent defaults
    let partial =
        QuoteConventions::from_toml_str("days_per_year = 365.25\n").expect("well-formed TOML");
    assert_eq!(partial.days_per_year, 365.25);
    assert!(partial.rates_in_percent);
    assert!(partial.vols_in_percent);

    let empty = QuoteConventions::from_toml_str("").expect("empty document uses defaults");
    assert_eq!(empty.days_per_year, 365.0);

    let err = QuoteConventions::from_toml_str("days_per_year = \"soon\"").unwrap_err();
    assert!(err.to_string().contains("quote conventions"));
}
