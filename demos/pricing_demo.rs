// demos/pricing_demo.rs

//! Demonstration of Black-Scholes pricing and the sweep drivers
//!
//! This example shows how to:
//! 1. Price a single European call/put pair
//! 2. Sweep call and put prices over a strike axis
//! 3. Locate the equilibrium strike where call and put are closest
//! 4. Fill a (spot, volatility) price grid and summarize it

use anyhow::Result;
use pricer_lib::{default_sweeps, price, price_grid, sweep_strikes, PricingInputs};

fn main() -> Result<()> {
    println!("Black-Scholes Pricing and Sweep Demo");
    println!("====================================");

    let inputs = PricingInputs::new(100.0, 100.0, 0.05, 1.0, 0.2)?;

    println!("Inputs:");
    println!("  Spot price:       ${:.2}", inputs.spot_price);
    println!("  Strike price:     ${:.2}", inputs.strike_price);
    println!("  Risk-free rate:   {:.2}%", inputs.risk_free_rate * 100.0);
    println!("  Time to maturity: {:.2} years", inputs.time_to_maturity);
    println!("  Volatility:       {:.2}%", inputs.volatility * 100.0);

    println!("\nStep 1: Pricing a single option pair...");
    let result = price(&inputs)?;
    println!("  Call price: ${:.2}", result.call_price);
    println!("  Put price:  ${:.2}", result.put_price);

    println!("\nStep 2: Sweeping the strike axis...");
    let sweep = sweep_strikes(&inputs, &default_sweeps::strike())?;
    println!("  Strikes evaluated: {}", sweep.len());

    println!("\n{:<12} {:<12} {:<12}", "Strike", "Call", "Put");
    println!("{}", "-".repeat(36));
    for point in sweep.points.iter().step_by(10) {
        println!(
            "{:<12.2} {:<12.2} {:<12.2}",
            point.strike_price, point.call_price, point.put_price
        );
    }

    let equilibrium = &sweep.points[sweep.equilibrium_index];
    println!(
        "\n  Equilibrium strike: ${:.2} (call ${:.2}, put ${:.2})",
        equilibrium.strike_price, equilibrium.call_price, equilibrium.put_price
    );

    println!("\nStep 3: Filling the (spot, volatility) grid...");
    let grid = price_grid(&inputs, &default_sweeps::heatmap())?;
    let (spot_points, vol_points) = grid.shape();
    println!("  Grid shape: {} x {}", spot_points, vol_points);

    let cells = (spot_points * vol_points) as f64;
    let avg_call: f64 = grid.call_prices.iter().flatten().sum::<f64>() / cells;
    let avg_put: f64 = grid.put_prices.iter().flatten().sum::<f64>() / cells;

    println!("\nSummary Statistics:");
    println!("  Average call price: ${:.2}", avg_call);
    println!("  Average put price:  ${:.2}", avg_put);
    println!(
        "  All cells finite: {}",
        grid.call_prices
            .iter()
            .chain(grid.put_prices.iter())
            .flatten()
            .all(|c| c.is_finite())
    );

    Ok(())
}
