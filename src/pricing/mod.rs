// A minimal Black-Scholes implementation providing the call and put pricing
// required by the sweep drivers.  Implied-volatility and Greeks are
// intentionally omitted to keep the lightweight focus of pricer-lib.

use anyhow::{anyhow, Result};

/// Market inputs for a single Black-Scholes evaluation.
///
/// Immutable value type: a fresh `PricingInputs` is built for every point of a
/// sweep and consumed by [`price`] to produce one [`PricingResult`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingInputs {
    /// Current underlying price (S)
    pub spot_price: f64,
    /// Exercise price (X)
    pub strike_price: f64,
    /// Continuously-compounded annual risk-free rate (r)
    pub risk_free_rate: f64,
    /// Time to maturity in years (T)
    pub time_to_maturity: f64,
    /// Annualized standard deviation of log-returns (sigma)
    pub volatility: f64,
}

impl PricingInputs {
    /// Create validated inputs.
    ///
    /// # Errors
    ///
    /// Returns an error if `spot_price`, `strike_price`, `time_to_maturity` or
    /// `volatility` is not strictly positive. The formula divides by
    /// `volatility * sqrt(time_to_maturity)` and takes `ln(spot / strike)`, so
    /// none of these can be zero or negative.
    pub fn new(
        spot_price: f64,
        strike_price: f64,
        risk_free_rate: f64,
        time_to_maturity: f64,
        volatility: f64,
    ) -> Result<Self> {
        let inputs = Self {
            spot_price,
            strike_price,
            risk_free_rate,
            time_to_maturity,
            volatility,
        };
        inputs.validate()?;
        Ok(inputs)
    }

    /// Check the positivity invariants without constructing anything.
    pub fn validate(&self) -> Result<()> {
        if !(self.spot_price > 0.0) {
            return Err(anyhow!(
                "Spot price must be positive, got: {}",
                self.spot_price
            ));
        }
        if !(self.strike_price > 0.0) {
            return Err(anyhow!(
                "Strike price must be positive, got: {}",
                self.strike_price
            ));
        }
        if !(self.time_to_maturity > 0.0) {
            return Err(anyhow!(
                "Time to maturity must be positive, got: {}",
                self.time_to_maturity
            ));
        }
        if !(self.volatility > 0.0) {
            return Err(anyhow!(
                "Volatility must be positive, got: {}",
                self.volatility
            ));
        }
        Ok(())
    }
}

/// Pair of option prices produced by one engine call.
///
/// Both prices are rounded to exactly 2 decimal places with
/// `(x * 100.0).round() / 100.0`; `f64::round` rounds half away from zero.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    pub call_price: f64,
    pub put_price: f64,
}

// 0.5 * [1 + erf(x / sqrt(2))]
fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + libm::erf(x / (2.0_f64).sqrt()))
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Price a European call and put under Black-Scholes assumptions.
///
/// ```text
/// d1   = (ln(S/X) + (r + sigma^2/2) * T) / (sigma * sqrt(T))
/// d2   = d1 - sigma * sqrt(T)
/// call = S * N(d1) - X * exp(-r*T) * N(d2)
/// put  = X * exp(-r*T) * N(-d2) - S * N(-d1)
/// ```
///
/// Pure and deterministic: identical inputs give bit-identical outputs.
///
/// Degenerate but still positive volatility or maturity is not special-cased:
/// `erf` saturates at extreme arguments, so as `sigma -> 0` the call price
/// collapses to its intrinsic value `max(S - X*exp(-r*T), 0)`. Extreme
/// `r * T` may overflow the exponential; non-finite values propagate to the
/// result per IEEE-754 and callers are expected to filter them before
/// rendering.
///
/// # Errors
///
/// Returns an error when the inputs violate the positivity invariants of
/// [`PricingInputs`]. No clamping is performed.
pub fn price(inputs: &PricingInputs) -> Result<PricingResult> {
    inputs.validate()?;

    let s = inputs.spot_price;
    let x = inputs.strike_price;
    let r = inputs.risk_free_rate;
    let t = inputs.time_to_maturity;
    let sigma = inputs.volatility;

    let d1 = ((s / x).ln() + (r + 0.5 * sigma * sigma) * t) / (sigma * t.sqrt());
    let d2 = d1 - sigma * t.sqrt();
    let discount = (-r * t).exp();

    let call = s * norm_cdf(d1) - x * discount * norm_cdf(d2);
    let put = x * discount * norm_cdf(-d2) - s * norm_cdf(-d1);

    Ok(PricingResult {
        call_price: round2(call),
        put_price: round2(put),
    })
}
