use anyhow::{anyhow, Result};

/// Configuration for the 1-D strike sweep.
///
/// The strike axis is derived from the spot price: `points` strikes evenly
/// spaced over `[lower_factor * spot, upper_factor * spot]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StrikeSweepConfig {
    /// Lower bound of the strike axis as a fraction of spot
    pub lower_factor: f64,
    /// Upper bound of the strike axis as a fraction of spot
    pub upper_factor: f64,
    /// Number of strikes to evaluate
    pub points: usize,
}

impl Default for StrikeSweepConfig {
    fn default() -> Self {
        Self {
            lower_factor: 0.5,
            upper_factor: 1.5,
            points: 100,
        }
    }
}

impl StrikeSweepConfig {
    /// Coarse axis for quick previews
    pub fn coarse() -> Self {
        Self {
            points: 25,
            ..Self::default()
        }
    }

    /// Dense axis for smooth rendering
    pub fn fine() -> Self {
        Self {
            points: 400,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.points < 2 {
            return Err(anyhow!(
                "Strike sweep needs at least 2 points, got: {}",
                self.points
            ));
        }
        if !(self.lower_factor > 0.0) {
            return Err(anyhow!(
                "Lower strike factor must be positive, got: {}",
                self.lower_factor
            ));
        }
        if !(self.upper_factor > self.lower_factor) {
            return Err(anyhow!(
                "Upper strike factor must exceed lower ({} <= {})",
                self.upper_factor,
                self.lower_factor
            ));
        }
        Ok(())
    }
}

/// Configuration for the 2-D (spot, volatility) price grid.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    /// Lower bound of the spot axis as a fraction of spot
    pub spot_lower_factor: f64,
    /// Upper bound of the spot axis as a fraction of spot
    pub spot_upper_factor: f64,
    /// Number of spot values (first matrix dimension)
    pub spot_points: usize,
    /// Lowest volatility on the second axis
    pub vol_min: f64,
    /// Highest volatility on the second axis
    pub vol_max: f64,
    /// Number of volatility values (second matrix dimension)
    pub vol_points: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            spot_lower_factor: 0.5,
            spot_upper_factor: 1.5,
            spot_points: 50,
            vol_min: 0.01,
            vol_max: 1.0,
            vol_points: 50,
        }
    }
}

impl GridConfig {
    /// Coarse grid for quick previews
    pub fn coarse() -> Self {
        Self {
            spot_points: 15,
            vol_points: 15,
            ..Self::default()
        }
    }

    /// Dense grid for smooth heatmaps
    pub fn fine() -> Self {
        Self {
            spot_points: 150,
            vol_points: 150,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.spot_points < 2 || self.vol_points < 2 {
            return Err(anyhow!(
                "Price grid needs at least 2 points per axis, got: {}x{}",
                self.spot_points,
                self.vol_points
            ));
        }
        if !(self.spot_lower_factor > 0.0) {
            return Err(anyhow!(
                "Lower spot factor must be positive, got: {}",
                self.spot_lower_factor
            ));
        }
        if !(self.spot_upper_factor > self.spot_lower_factor) {
            return Err(anyhow!(
                "Upper spot factor must exceed lower ({} <= {})",
                self.spot_upper_factor,
                self.spot_lower_factor
            ));
        }
        if !(self.vol_min > 0.0) {
            return Err(anyhow!(
                "Minimum volatility must be positive, got: {}",
                self.vol_min
            ));
        }
        if !(self.vol_max > self.vol_min) {
            return Err(anyhow!(
                "Maximum volatility must exceed minimum ({} <= {})",
                self.vol_max,
                self.vol_min
            ));
        }
        Ok(())
    }
}

/// Combined sweep settings, loadable from a TOML file.
///
/// Missing sections and fields fall back to their defaults, so a settings file
/// only needs to name what it overrides:
///
/// ```toml
/// [strike]
/// points = 200
///
/// [grid]
/// vol_max = 0.8
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SweepSettings {
    pub strike: StrikeSweepConfig,
    pub grid: GridConfig,
}

#[cfg(feature = "serde")]
impl SweepSettings {
    /// Parse settings from a TOML string and validate both sections.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        use anyhow::Context;

        let settings: Self =
            toml::from_str(contents).context("Failed to parse sweep settings TOML")?;
        settings.strike.validate()?;
        settings.grid.validate()?;
        Ok(settings)
    }

    /// Read and parse a TOML settings file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        use anyhow::Context;

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read sweep settings from {}", path.display()))?;
        Self::from_toml_str(&contents)
    }
}
