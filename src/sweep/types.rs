/// One evaluated point of a strike sweep
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepPoint {
    pub strike_price: f64,
    pub call_price: f64,
    pub put_price: f64,
}

/// Output of a 1-D strike sweep at fixed spot, rate, maturity and volatility.
///
/// Points are ordered by ascending strike. `equilibrium_index` marks the grid
/// point where |call - put| is smallest (nearest-grid-point approximation of
/// the strike at which call and put prices cross, not a root solve); ties
/// resolve to the first occurrence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrikeSweep {
    /// Spot price the sweep was generated from
    pub spot_price: f64,
    /// Evaluated (strike, call, put) triples in ascending strike order
    pub points: Vec<SweepPoint>,
    /// Index into `points` minimizing |call - put|
    pub equilibrium_index: usize,
}

impl StrikeSweep {
    /// Strike at the equilibrium index
    pub fn equilibrium_strike(&self) -> f64 {
        self.points[self.equilibrium_index].strike_price
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Output of a 2-D sweep over (spot, volatility) at fixed strike, rate and
/// maturity.
///
/// Matrices are indexed `[spot_index][vol_index]` and tagged with both axes so
/// a presentation collaborator can render them without recomputing ranges.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceGrid {
    /// Spot prices along the first matrix dimension
    pub spot_axis: Vec<f64>,
    /// Volatilities along the second matrix dimension
    pub vol_axis: Vec<f64>,
    /// Call prices, `call_prices[i][j]` for `(spot_axis[i], vol_axis[j])`
    pub call_prices: Vec<Vec<f64>>,
    /// Put prices, same indexing as `call_prices`
    pub put_prices: Vec<Vec<f64>>,
}

impl PriceGrid {
    /// Matrix shape as `(spot_points, vol_points)`
    pub fn shape(&self) -> (usize, usize) {
        (self.spot_axis.len(), self.vol_axis.len())
    }
}
