// demos/plot_value_curve.rs
// Values an option chain around the given underlying price and produces an SVG
// comparing call and put theoretical values across strikes.
//
// Usage:
//     cargo run --example plot_value_curve -- [underlying] [days] [vol_percent]
//
// Defaults to underlying 10.0, 31 days, 35% volatility.  The output image is
// written to value_curve.svg in the working directory.

use std::env;
use std::error::Error;

use optval_lib::{price_chain, FixedParameters, QuoteConventions, StrikeQuote};
use plotters::prelude::*;

fn parse_arg(args: &[String], index: usize, default: f64) -> f64 {
    args.get(index)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    let underlying = parse_arg(&args, 1, 10.0);
    let days = parse_arg(&args, 2, 31.0);
    let vol_percent = parse_arg(&args, 3, 35.0);

    let conventions = QuoteConventions::calendar_365();
    let years = conventions.years_from_days(days);
    let vol = conventions.vol_from_quote(vol_percent);
    let fixed = FixedParameters { r: 0.05, q: 0.0 };

    // Strike grid from 60% to 140% of the underlying
    let quotes: Vec<StrikeQuote> = (0..=80)
        .map(|step| StrikeQuote {
            strike_price: underlying * (0.6 + 0.01 * step as f64),
            volatility: vol,
        })
        .collect();

    let chain = price_chain(underlying, years, &quotes, fixed)?;

    let min_strike = chain.first().map(|row| row.strike_price).unwrap_or(0.0);
    let max_strike = chain.last().map(|row| row.strike_price).unwrap_or(1.0);
    let max_value = chain
        .iter()
        .map(|row| row.call_value.max(row.put_value))
        .fold(0.0_f64, f64::max);

    let root = SVGBackend::new("value_curve.svg", (900, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!(
                "European option values (S={:.2}, {:.0} days, vol {:.0}%)",
                underlying, days, vol_percent
            ),
            ("sans-serif", 24),
        )
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(min_strike..max_strike, 0.0..max_value * 1.05)?;

    chart
        .configure_mesh()
        .x_desc("Strike")
        .y_desc("Theoretical value")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            chain.iter().map(|row| (row.strike_price, row.call_value)),
            &RED,
        ))?
        .label("Call")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .draw_series(LineSeries::new(
            chain.iter().map(|row| (row.strike_price, row.put_value)),
            &BLUE,
        ))?
        .label("Put")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    println!("Wrote value_curve.svg");

    Ok(())
}
