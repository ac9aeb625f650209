//! Solar savings estimator.
//!
//! Maps a [`FarmProfile`] onto a recommended system size, the projected annual savings,
//! and the payback period:
//!
//! 1. `system size = ⌈daily usage × sizing factor⌉`
//! 2. `annual savings = monthly bill × savings share × 12`
//! 3. `estimated cost = system size × cost per kilowatt`
//! 4. `ROI = ⌈estimated cost ÷ annual savings⌉`

mod assumptions;
mod profile;

use serde::Serialize;

pub use self::{
    assumptions::{
        Assumptions,
        DEFAULT_COST_PER_KILOWATT,
        DEFAULT_SAVINGS_SHARE,
        DEFAULT_SIZING_FACTOR,
        MONTHS_PER_YEAR,
    },
    profile::FarmProfile,
};
use crate::quantity::{currency::Rupees, power::Kilowatts, time::Years};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid input: {field} {reason}")]
    InvalidInput { field: &'static str, reason: &'static str },
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Estimate {
    #[serde(rename = "recommendedSystemSizeKw")]
    pub system_size: Kilowatts,

    #[serde(rename = "annualSavingsRupees")]
    pub annual_savings: Rupees,

    #[serde(rename = "estimatedSystemCostRupees")]
    pub estimated_cost: Rupees,

    /// Years until the cumulative savings cover the estimated cost.
    #[serde(rename = "roiYears")]
    pub roi: Years,
}

/// Estimate the recommended system and its payback.
///
/// Inputs outside of the calculator's slider ranges are computed like any other.
///
/// # Errors
///
/// [`Error::InvalidInput`] when any input is zero or the bill is not a positive number,
/// when the annual savings come out non-positive so that the payback period is undefined,
/// or when the system size or the payback period is too large to represent.
pub fn estimate(profile: &FarmProfile, assumptions: &Assumptions) -> Result<Estimate, Error> {
    if profile.farm_size.0 == 0 {
        return Err(Error::InvalidInput { field: "farm size", reason: "must be positive" });
    }
    if !(profile.monthly_bill.0.is_finite() && profile.monthly_bill.0 > 0.0) {
        return Err(Error::InvalidInput { field: "monthly bill", reason: "must be positive" });
    }
    if profile.daily_usage.0 == 0 {
        return Err(Error::InvalidInput { field: "daily usage", reason: "must be positive" });
    }

    let system_size = profile.daily_usage.required_capacity(assumptions.sizing_factor).ok_or(
        Error::InvalidInput { field: "system size", reason: "exceeds the representable range" },
    )?;
    let annual_savings = profile.monthly_bill * assumptions.savings_share * MONTHS_PER_YEAR;
    if !(annual_savings.0.is_finite() && annual_savings > Rupees::ZERO) {
        return Err(Error::InvalidInput {
            field: "annual savings",
            reason: "must be positive to compute the payback period",
        });
    }
    let estimated_cost = system_size * assumptions.cost_per_kilowatt;
    let roi = Years::try_ceil(estimated_cost / annual_savings)
        .ok_or(Error::InvalidInput { field: "roi", reason: "exceeds the representable range" })?;

    Ok(Estimate { system_size, annual_savings, estimated_cost, roi })
}
