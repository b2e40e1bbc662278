// demos/plot_strike_sweep.rs
// Sweeps call and put prices over a strike axis and produces an SVG line
// chart with the equilibrium strike marked, mirroring the classic
// "option price vs strike" view.
//
// Usage:
//     cargo run --example plot_strike_sweep
//
// The output image will be written to strike_sweep.svg in the working
// directory.

use std::error::Error;

use plotters::prelude::*;
use pricer_lib::{default_sweeps, sweep_strikes, PricingInputs};

fn main() -> Result<(), Box<dyn Error>> {
    let inputs = PricingInputs::new(100.0, 100.0, 0.05, 1.0, 0.2)?;
    let sweep = sweep_strikes(&inputs, &default_sweeps::strike())?;

    let call_line: Vec<(f64, f64)> = sweep
        .points
        .iter()
        .map(|p| (p.strike_price, p.call_price))
        .collect();
    let put_line: Vec<(f64, f64)> = sweep
        .points
        .iter()
        .map(|p| (p.strike_price, p.put_price))
        .collect();

    let min_strike = sweep.points[0].strike_price;
    let max_strike = sweep.points[sweep.len() - 1].strike_price;

    let max_price = sweep
        .points
        .iter()
        .flat_map(|p| [p.call_price, p.put_price])
        .fold(f64::NEG_INFINITY, f64::max);

    // Add 5% headroom for better visualization
    let y_max = max_price * 1.05;

    let equilibrium = sweep.equilibrium_strike();
    println!(
        "Equilibrium strike: {:.2} (index {})",
        equilibrium, sweep.equilibrium_index
    );

    let root = SVGBackend::new("strike_sweep.svg", (1280, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!(
                "Option Price vs Strike | S={:.0}, r={:.0}%, T={:.1}y, vol={:.0}%",
                inputs.spot_price,
                inputs.risk_free_rate * 100.0,
                inputs.time_to_maturity,
                inputs.volatility * 100.0
            ),
            ("sans-serif", 30),
        )
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(min_strike..max_strike, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Strike ($)")
        .y_desc("Option Price ($)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(call_line, &RED))?
        .label("Call Price")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .draw_series(LineSeries::new(put_line, &BLUE))?
        .label("Put Price")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    // Vertical marker at the equilibrium strike
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(equilibrium, 0.0), (equilibrium, y_max)],
        RED.stroke_width(1),
    )))?;

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    println!("Chart saved to strike_sweep.svg");
    Ok(())
}
