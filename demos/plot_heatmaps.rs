// demos/plot_heatmaps.rs
// Fills the (spot, volatility) price grid and renders one SVG heatmap per
// matrix: call prices and put prices, volatility on the x-axis and spot on
// the y-axis.
//
// Usage:
//     cargo run --example plot_heatmaps
//
// The output images are written to call_heatmap.svg and put_heatmap.svg in
// the working directory.

use std::error::Error;

use plotters::prelude::*;
use pricer_lib::{default_sweeps, price_grid, PriceGrid, PricingInputs};

// Red (low) through yellow to green (high), t in [0, 1]
fn heat_color(t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        RGBColor(220, (40.0 + 430.0 * t) as u8, 40)
    } else {
        RGBColor((220.0 * 2.0 * (1.0 - t)) as u8, 215, 40)
    }
}

fn render_heatmap(
    path: &str,
    title: &str,
    grid: &PriceGrid,
    matrix: &[Vec<f64>],
) -> Result<(), Box<dyn Error>> {
    let (spot_points, vol_points) = grid.shape();

    let vol_min = grid.vol_axis[0];
    let vol_max = grid.vol_axis[vol_points - 1];
    let spot_min = grid.spot_axis[0];
    let spot_max = grid.spot_axis[spot_points - 1];

    // Color scale over finite cells only; non-finite cells are skipped below
    let finite: Vec<f64> = matrix
        .iter()
        .flatten()
        .copied()
        .filter(|c| c.is_finite())
        .collect();
    let price_min = finite.iter().fold(f64::INFINITY, |a, &b| a.min(b));
    let price_max = finite.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    let span = (price_max - price_min).max(f64::EPSILON);

    let root = SVGBackend::new(path, (1280, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(title, ("sans-serif", 30))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(vol_min..vol_max, spot_min..spot_max)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Volatility")
        .y_desc("Spot Price ($)")
        .draw()?;

    let vol_step = (vol_max - vol_min) / (vol_points - 1) as f64;
    let spot_step = (spot_max - spot_min) / (spot_points - 1) as f64;

    let mut cells = Vec::with_capacity(spot_points * vol_points);
    for (i, row) in matrix.iter().enumerate() {
        for (j, &cell) in row.iter().enumerate() {
            if !cell.is_finite() {
                continue;
            }
            let spot = grid.spot_axis[i];
            let vol = grid.vol_axis[j];
            let color = heat_color((cell - price_min) / span);
            cells.push(Rectangle::new(
                [
                    (vol - vol_step / 2.0, spot - spot_step / 2.0),
                    (vol + vol_step / 2.0, spot + spot_step / 2.0),
                ],
                color.filled(),
            ));
        }
    }
    chart.draw_series(cells)?;

    root.present()?;
    println!("Chart saved to {}", path);
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let inputs = PricingInputs::new(100.0, 100.0, 0.05, 1.0, 0.2)?;
    let grid = price_grid(&inputs, &default_sweeps::heatmap())?;

    let (spot_points, vol_points) = grid.shape();
    println!("Grid filled: {} x {} cells", spot_points, vol_points);

    render_heatmap(
        "call_heatmap.svg",
        "Call Option Price Heatmap",
        &grid,
        &grid.call_prices,
    )?;
    render_heatmap(
        "put_heatmap.svg",
        "Put Option Price Heatmap",
        &grid,
        &grid.put_prices,
    )?;

    Ok(())
}
