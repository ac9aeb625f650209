use std::ops::RangeInclusive;

use agrisolar::{
    estimator::FarmProfile,
    quantity::{area::Acres, currency::Rupees, energy::KilowattHours},
};
use clap::{Parser, value_parser};

/// Bounds of the calculator form.
pub const FARM_SIZE_ACRES: RangeInclusive<i64> = 1..=100;
pub const MONTHLY_BILL_RUPEES: RangeInclusive<i64> = 1_000..=100_000;
pub const DAILY_USAGE_KWH: RangeInclusive<i64> = 10..=500;

#[derive(Copy, Clone, Parser)]
pub struct FarmArgs {
    /// Farm size in acres.
    #[clap(
        long = "farm-size",
        env = "FARM_SIZE_ACRES",
        default_value = "10",
        value_parser = value_parser!(u32).range(FARM_SIZE_ACRES),
    )]
    pub farm_size: u32,

    /// Current average monthly electricity bill in rupees.
    #[clap(
        long = "monthly-bill",
        env = "MONTHLY_BILL_RUPEES",
        default_value = "15000",
        value_parser = value_parser!(u32).range(MONTHLY_BILL_RUPEES),
    )]
    pub monthly_bill: u32,
}

impl FarmArgs {
    pub fn profile(self, daily_usage: KilowattHours) -> FarmProfile {
        FarmProfile::builder()
            .farm_size(Acres(self.farm_size))
            .monthly_bill(Rupees::from(self.monthly_bill))
            .daily_usage(daily_usage)
            .build()
    }
}
