//! # Pricer-Lib: European Option Pricing and Parameter Sweeps
//!
//! `pricer-lib` is a small Rust library for quantitative finance applications,
//! focused on closed-form European option pricing. It evaluates the
//! Black-Scholes formula for a single parameter tuple and drives parameter
//! sweeps over strike and (spot, volatility) grids, returning plain data
//! structures ready for a charting collaborator.
//!
//! ## Core Features
//!
//! - **Black-Scholes Pricing**: call and put prices from five market inputs,
//!   rounded to cents
//! - **Strike Sweep**: 1-D sweep over a strike axis derived from spot, with an
//!   equilibrium-strike marker where call and put prices are closest
//! - **Price Grid**: 2-D (spot, volatility) sweep filling call and put
//!   matrices tagged with their axes
//! - **Configurable Axes**: sweep configs with sensible defaults, named
//!   presets and optional TOML loading
//!
//! ## Quick Start
//!
//! ```rust
//! use pricer_lib::{price, sweep_strikes, PricingInputs, StrikeSweepConfig};
//!
//! // Single evaluation
//! let inputs = PricingInputs::new(100.0, 100.0, 0.05, 1.0, 0.2)?;
//! let result = price(&inputs)?;
//! println!("call = {:.2}, put = {:.2}", result.call_price, result.put_price);
//!
//! // Strike sweep with the default 100-point axis over [0.5*S, 1.5*S]
//! let sweep = sweep_strikes(&inputs, &StrikeSweepConfig::default())?;
//! println!("equilibrium strike: {:.2}", sweep.equilibrium_strike());
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Scope
//!
//! The library prices European exercise only. Calibration to market data,
//! implied-volatility solving, American exercise and Greeks are out of scope.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod pricing;
pub mod sweep;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Pricing engine types and entry point
pub use pricing::{price, PricingInputs, PricingResult};

// Sweep drivers, configs and output types
pub use sweep::{
    config::{GridConfig, StrikeSweepConfig, SweepSettings},
    drivers::{linspace, price_grid, sweep_strikes},
    types::{PriceGrid, StrikeSweep, SweepPoint},
};

// ================================================================================================
// DEFAULT SWEEP CONFIGURATIONS
// ================================================================================================

/// Pre-configured sweep settings and suggested input bounds.
///
/// The bounds are the ranges a UI would use for widget limits. They are
/// advisory only: the engine accepts any inputs satisfying its positivity
/// invariants regardless of these ranges.
pub mod default_sweeps {
    use crate::sweep::config::{GridConfig, StrikeSweepConfig};

    /// Suggested spot price range for input widgets
    pub const SPOT_RANGE: (f64, f64) = (1.0, 1000.0);
    /// Suggested strike price range for input widgets
    pub const STRIKE_RANGE: (f64, f64) = (1.0, 1000.0);
    /// Suggested risk-free rate range for input widgets
    pub const RATE_RANGE: (f64, f64) = (0.0, 0.2);
    /// Suggested time-to-maturity range in years for input widgets
    pub const MATURITY_RANGE: (f64, f64) = (0.01, 5.0);
    /// Suggested volatility range for input widgets
    pub const VOLATILITY_RANGE: (f64, f64) = (0.01, 1.0);

    /// Default strike sweep: 100 strikes over `[0.5 * spot, 1.5 * spot]`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pricer_lib::default_sweeps;
    ///
    /// let config = default_sweeps::strike();
    /// assert_eq!(config.points, 100);
    /// ```
    pub fn strike() -> StrikeSweepConfig {
        StrikeSweepConfig::default()
    }

    /// Default heatmap grid: 50x50 cells over `[0.5 * spot, 1.5 * spot]` and
    /// volatilities `[0.01, 1.0]`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pricer_lib::default_sweeps;
    ///
    /// let config = default_sweeps::heatmap();
    /// assert_eq!((config.spot_points, config.vol_points), (50, 50));
    /// ```
    pub fn heatmap() -> GridConfig {
        GridConfig::default()
    }
}
