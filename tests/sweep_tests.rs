mod test_utils;

use pricer_lib::{
    default_sweeps, price, price_grid, sweep_strikes, GridConfig, PricingInputs, StrikeSweepConfig,
};
use test_utils::{assert_close, reference_inputs};

#[test]
fn test_strike_sweep_axis() {
    let inputs = reference_inputs();
    let sweep = sweep_strikes(&inputs, &default_sweeps::strike()).unwrap();

    assert_eq!(sweep.len(), 100);
    assert_eq!(sweep.spot_price, 100.0);
    assert_eq!(sweep.points[0].strike_price, 50.0);
    assert_eq!(sweep.points[99].strike_price, 150.0);

    // Ascending strike order
    for pair in sweep.points.windows(2) {
        assert!(pair[0].strike_price < pair[1].strike_price);
    }
}

/// Every sweep point must match a direct engine call on the same tuple.
#[test]
fn test_strike_sweep_points_match_engine() {
    let inputs = reference_inputs();
    let sweep = sweep_strikes(&inputs, &StrikeSweepConfig::coarse()).unwrap();

    for point in &sweep.points {
        let direct = price(&PricingInputs {
            strike_price: point.strike_price,
            ..inputs
        })
        .unwrap();
        assert_eq!(point.call_price.to_bits(), direct.call_price.to_bits());
        assert_eq!(point.put_price.to_bits(), direct.put_price.to_bits());
    }
}

/// The equilibrium index is the argmin of |call - put| over the sweep.
#[test]
fn test_equilibrium_index_is_argmin() {
    let inputs = reference_inputs();
    let sweep = sweep_strikes(&inputs, &default_sweeps::strike()).unwrap();

    let mut best_index = 0;
    let mut best_gap = f64::INFINITY;
    for (i, point) in sweep.points.iter().enumerate() {
        let gap = (point.call_price - point.put_price).abs();
        if gap < best_gap {
            best_gap = gap;
            best_index = i;
        }
    }

    assert_eq!(sweep.equilibrium_index, best_index);
}

/// Put-call parity puts the crossing at X = S * exp(r*T); the marker must
/// land on the nearest grid points of that strike.
#[test]
fn test_equilibrium_strike_near_parity_crossing() {
    let inputs = reference_inputs();
    let sweep = sweep_strikes(&inputs, &default_sweeps::strike()).unwrap();

    let crossing = 100.0 * (0.05_f64).exp();
    let step = 100.0 / 99.0;
    assert_close(
        sweep.equilibrium_strike(),
        crossing,
        step,
        "equilibrium strike",
    );
}

#[test]
fn test_grid_shape_and_axes() {
    let inputs = reference_inputs();
    let grid = price_grid(&inputs, &default_sweeps::heatmap()).unwrap();

    assert_eq!(grid.shape(), (50, 50));
    assert_eq!(grid.call_prices.len(), 50);
    assert_eq!(grid.put_prices.len(), 50);
    for (call_row, put_row) in grid.call_prices.iter().zip(&grid.put_prices) {
        assert_eq!(call_row.len(), 50);
        assert_eq!(put_row.len(), 50);
    }

    assert_eq!(grid.spot_axis[0], 50.0);
    assert_eq!(grid.spot_axis[49], 150.0);
    assert_eq!(grid.vol_axis[0], 0.01);
    assert_eq!(grid.vol_axis[49], 1.0);
}

/// No missing cells and every cell finite for in-range inputs.
#[test]
fn test_grid_cells_finite() {
    let inputs = reference_inputs();
    let grid = price_grid(&inputs, &default_sweeps::heatmap()).unwrap();

    for row in grid.call_prices.iter().chain(grid.put_prices.iter()) {
        for &cell in row {
            assert!(cell.is_finite());
            assert!(cell >= 0.0);
        }
    }
}

/// Sampled cells must match direct engine calls on the tagged axes.
#[test]
fn test_grid_cells_match_engine() {
    let inputs = reference_inputs();
    let grid = price_grid(&inputs, &GridConfig::coarse()).unwrap();

    for &(i, j) in &[(0, 0), (7, 3), (14, 14), (3, 11)] {
        let direct = price(&PricingInputs {
            spot_price: grid.spot_axis[i],
            volatility: grid.vol_axis[j],
            ..inputs
        })
        .unwrap();
        assert_eq!(grid.call_prices[i][j].to_bits(), direct.call_price.to_bits());
        assert_eq!(grid.put_prices[i][j].to_bits(), direct.put_price.to_bits());
    }
}

#[test]
fn test_sweep_config_validation() {
    assert!(StrikeSweepConfig::default().validate().is_ok());
    assert!(GridConfig::default().validate().is_ok());

    let one_point = StrikeSweepConfig {
        points: 1,
        ..StrikeSweepConfig::default()
    };
    assert!(one_point.validate().is_err());

    let zero_lower = StrikeSweepConfig {
        lower_factor: 0.0,
        ..StrikeSweepConfig::default()
    };
    assert!(zero_lower.validate().is_err());

    let inverted = StrikeSweepConfig {
        lower_factor: 1.5,
        upper_factor: 0.5,
        points: 100,
    };
    assert!(inverted.validate().is_err());

    let zero_vol = GridConfig {
        vol_min: 0.0,
        ..GridConfig::default()
    };
    assert!(zero_vol.validate().is_err());

    let inverted_vol = GridConfig {
        vol_min: 0.5,
        vol_max: 0.2,
        ..GridConfig::default()
    };
    assert!(inverted_vol.validate().is_err());
}

#[test]
fn test_sweep_rejects_invalid_inputs() {
    let bad_inputs = PricingInputs {
        volatility: -0.2,
        ..reference_inputs()
    };
    assert!(sweep_strikes(&bad_inputs, &StrikeSweepConfig::default()).is_err());
    assert!(price_grid(&bad_inputs, &GridConfig::default()).is_err());

    let bad_config = StrikeSweepConfig {
        points: 0,
        ..StrikeSweepConfig::default()
    };
    assert!(sweep_strikes(&reference_inputs(), &bad_config).is_err());
}

#[cfg(feature = "serde")]
mod settings {
    use pricer_lib::SweepSettings;

    #[test]
    fn test_settings_from_toml_with_defaults() {
        let settings = SweepSettings::from_toml_str(
            r#"
            [strike]
            points = 200

            [grid]
            vol_max = 0.8
            "#,
        )
        .unwrap();

        assert_eq!(settings.strike.points, 200);
        assert_eq!(settings.strike.lower_factor, 0.5);
        assert_eq!(settings.grid.vol_max, 0.8);
        assert_eq!(settings.grid.spot_points, 50);
    }

    #[test]
    fn test_empty_settings_are_defaults() {
        let settings = SweepSettings::from_toml_str("").unwrap();
        assert_eq!(settings, SweepSettings::default());
    }

    #[test]
    fn test_settings_rejects_bad_values() {
        assert!(SweepSettings::from_toml_str("[strike]\npoints = 1\n").is_err());
        assert!(SweepSettings::from_toml_str("[grid]\nvol_min = -0.1\n").is_err());
        assert!(SweepSettings::from_toml_str("not valid toml [").is_err());
    }
}
