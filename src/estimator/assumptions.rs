use std::{fmt::Debug, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    prelude::*,
    quantity::ratios::{KilowattsPerKilowattHour, RupeesPerKilowatt, Share},
};

/// Installed capacity per kWh of average daily usage.
pub const DEFAULT_SIZING_FACTOR: KilowattsPerKilowattHour = KilowattsPerKilowattHour(0.25);

/// Fraction of the electricity bill that solar generation offsets.
pub const DEFAULT_SAVINGS_SHARE: Share = Share(0.35);

/// Installed system cost per kilowatt of capacity.
pub const DEFAULT_COST_PER_KILOWATT: RupeesPerKilowatt = RupeesPerKilowatt(100_000.0);

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Pricing multipliers behind the estimate.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    #[serde(rename = "sizing_factor_kw_per_kwh")]
    pub sizing_factor: KilowattsPerKilowattHour,

    pub savings_share: Share,

    #[serde(rename = "cost_per_kilowatt_rupees")]
    pub cost_per_kilowatt: RupeesPerKilowatt,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            sizing_factor: DEFAULT_SIZING_FACTOR,
            savings_share: DEFAULT_SAVINGS_SHARE,
            cost_per_kilowatt: DEFAULT_COST_PER_KILOWATT,
        }
    }
}

impl Assumptions {
    /// Read the assumptions from a TOML file, missing keys fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Unreadable or malformed file, or an assumption rejected by [`Self::validate`].
    #[instrument(name = "Reading the assumptions…")]
    pub fn read_from<P: AsRef<Path> + Debug>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        let assumptions: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse `{}`", path.display()))?;
        assumptions.validate()?;
        Ok(assumptions)
    }

    /// # Errors
    ///
    /// Any multiplier that is not a positive finite number, or a savings share above 100%.
    pub fn validate(&self) -> Result {
        ensure!(
            is_positive(self.sizing_factor.0),
            "sizing factor must be positive, got {:?}",
            self.sizing_factor,
        );
        ensure!(
            is_positive(self.savings_share.0) && self.savings_share.0 <= 1.0,
            "savings share must be within (0, 1], got {:?}",
            self.savings_share,
        );
        ensure!(
            is_positive(self.cost_per_kilowatt.0),
            "cost per kilowatt must be positive, got {:?}",
            self.cost_per_kilowatt,
        );
        Ok(())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
