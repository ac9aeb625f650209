use agrisolar::{estimator::Assumptions, prelude::*, quantity::energy::KilowattHours};
use clap::{Parser, value_parser};

use crate::{
    cli::{
        OutputFormat,
        farm::{DAILY_USAGE_KWH, FarmArgs},
    },
    tables::build_estimate_table,
};

#[derive(Parser)]
pub struct EstimateArgs {
    #[clap(flatten)]
    farm: FarmArgs,

    /// Average daily electricity usage in kilowatt-hours.
    #[clap(
        long = "daily-usage",
        env = "DAILY_USAGE_KWH",
        default_value = "100",
        value_parser = value_parser!(u32).range(DAILY_USAGE_KWH),
    )]
    daily_usage: u32,

    #[clap(long, value_enum, default_value_t)]
    format: OutputFormat,
}

impl EstimateArgs {
    #[instrument(skip_all)]
    pub fn run(&self, assumptions: &Assumptions) -> Result {
        let profile = self.farm.profile(KilowattHours(self.daily_usage));
        let estimate = profile.estimate(assumptions)?;
        info!(
            system_size = %estimate.system_size,
            annual_savings = %estimate.annual_savings,
            roi = %estimate.roi,
            "estimated"
        );
        match self.format {
            OutputFormat::Table => {
                println!("{}", build_estimate_table(&profile, assumptions, &estimate));
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&estimate)?);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = EstimateArgs::try_parse_from(["estimate"]).unwrap();
        assert_eq!(args.farm.farm_size, 10);
        assert_eq!(args.farm.monthly_bill, 15_000);
        assert_eq!(args.daily_usage, 100);
        assert!(matches!(args.format, OutputFormat::Table));
    }

    #[test]
    fn test_ranges() {
        assert!(EstimateArgs::try_parse_from(["estimate", "--farm-size", "101"]).is_err());
        assert!(EstimateArgs::try_parse_from(["estimate", "--monthly-bill", "999"]).is_err());
        assert!(EstimateArgs::try_parse_from(["estimate", "--daily-usage", "501"]).is_err());
        assert!(EstimateArgs::try_parse_from(["estimate", "--daily-usage", "10"]).is_ok());
    }

    #[test]
    fn test_run() {
        let args = EstimateArgs::try_parse_from([
            "estimate",
            "--farm-size",
            "50",
            "--monthly-bill",
            "50000",
            "--daily-usage",
            "300",
            "--format",
            "json",
        ])
        .unwrap();
        assert!(matches!(args.format, OutputFormat::Json));
        args.run(&Assumptions::default()).unwrap();
    }
}
