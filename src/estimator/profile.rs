use bon::Builder;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    estimator::{Assumptions, Error, Estimate, estimate},
    quantity::{area::Acres, currency::Rupees, energy::KilowattHours},
};

/// Operating parameters of a farm, as entered into the calculator.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Builder, Serialize, Deserialize)]
pub struct FarmProfile {
    /// Not used by the current formulas.
    #[builder(into, default = Acres(10))]
    #[serde(rename = "farmSizeAcres")]
    pub farm_size: Acres,

    /// Average monthly electricity bill.
    #[builder(into, default = Rupees(15_000.0))]
    #[serde(rename = "monthlyBillInRupees", deserialize_with = "deserialize_whole_rupees")]
    pub monthly_bill: Rupees,

    #[builder(into, default = KilowattHours(100))]
    #[serde(rename = "dailyUsageKwh")]
    pub daily_usage: KilowattHours,
}

impl Default for FarmProfile {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl FarmProfile {
    /// # Errors
    ///
    /// See [`estimate`].
    pub fn estimate(&self, assumptions: &Assumptions) -> Result<Estimate, Error> {
        estimate(self, assumptions)
    }

    /// Same farm and bill, different daily usage.
    pub const fn with_daily_usage(mut self, daily_usage: KilowattHours) -> Self {
        self.daily_usage = daily_usage;
        self
    }
}

/// The input record carries the bill in whole rupees.
fn deserialize_whole_rupees<'de, D>(deserializer: D) -> Result<Rupees, D::Error>
where
    D: Deserializer<'de>,
{
    u32::deserialize(deserializer).map(Rupees::from)
}
