//! Sweep drivers: pure iteration over the pricing engine, one fresh
//! [`PricingInputs`] per grid point, plain data structures out.

use std::cmp::Ordering;

use anyhow::Result;

use crate::pricing::{price, PricingInputs};
use crate::sweep::config::{GridConfig, StrikeSweepConfig};
use crate::sweep::types::{PriceGrid, StrikeSweep, SweepPoint};

/// `n` evenly spaced values over `[start, stop]`, endpoints included.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    if n < 2 {
        return (0..n).map(|_| start).collect();
    }
    let last = (n - 1) as f64;
    (0..n)
        .map(|i| start + (stop - start) * (i as f64) / last)
        .collect()
}

/// Evaluate call and put prices over a strike axis derived from the spot.
///
/// Strikes run over `[lower_factor * spot, upper_factor * spot]`; every other
/// input is held fixed. The returned sweep also carries the index of the
/// equilibrium strike, the grid point minimizing |call - put|.
///
/// # Errors
///
/// Fails if the inputs violate the pricing invariants or the config is
/// invalid; a pricing failure mid-sweep aborts the whole sweep.
pub fn sweep_strikes(inputs: &PricingInputs, config: &StrikeSweepConfig) -> Result<StrikeSweep> {
    inputs.validate()?;
    config.validate()?;

    let strikes = linspace(
        config.lower_factor * inputs.spot_price,
        config.upper_factor * inputs.spot_price,
        config.points,
    );

    let mut points = Vec::with_capacity(strikes.len());
    for strike in strikes {
        let result = price(&PricingInputs {
            strike_price: strike,
            ..*inputs
        })?;
        points.push(SweepPoint {
            strike_price: strike,
            call_price: result.call_price,
            put_price: result.put_price,
        });
    }

    Ok(StrikeSweep {
        spot_price: inputs.spot_price,
        equilibrium_index: equilibrium_index(&points),
        points,
    })
}

// min_by keeps the first of tied elements, which is the tie policy for the
// equilibrium marker.
fn equilibrium_index(points: &[SweepPoint]) -> usize {
    points
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            let da = (a.call_price - a.put_price).abs();
            let db = (b.call_price - b.put_price).abs();
            da.partial_cmp(&db).unwrap_or(Ordering::Equal)
        })
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Fill call and put price matrices over a (spot, volatility) grid.
///
/// The spot axis runs over `[spot_lower_factor * spot, spot_upper_factor *
/// spot]` and the volatility axis over `[vol_min, vol_max]`; strike, rate and
/// maturity are held fixed. Matrices are indexed `[spot_index][vol_index]`
/// with no missing cells.
///
/// # Errors
///
/// Fails if the inputs violate the pricing invariants or the config is
/// invalid; a pricing failure mid-grid aborts the whole grid.
pub fn price_grid(inputs: &PricingInputs, config: &GridConfig) -> Result<PriceGrid> {
    inputs.validate()?;
    config.validate()?;

    let spot_axis = linspace(
        config.spot_lower_factor * inputs.spot_price,
        config.spot_upper_factor * inputs.spot_price,
        config.spot_points,
    );
    let vol_axis = linspace(config.vol_min, config.vol_max, config.vol_points);

    let mut call_prices = Vec::with_capacity(spot_axis.len());
    let mut put_prices = Vec::with_capacity(spot_axis.len());

    for &spot in &spot_axis {
        let mut call_row = Vec::with_capacity(vol_axis.len());
        let mut put_row = Vec::with_capacity(vol_axis.len());
        for &vol in &vol_axis {
            let cell = price(&PricingInputs {
                spot_price: spot,
                volatility: vol,
                ..*inputs
            })?;
            call_row.push(cell.call_price);
            put_row.push(cell.put_price);
        }
        call_prices.push(call_row);
        put_prices.push(put_row);
    }

    Ok(PriceGrid {
        spot_axis,
        vol_axis,
        call_prices,
        put_prices,
    })
}
