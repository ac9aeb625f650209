use agrisolar::{
    estimator::{Assumptions, Estimate, FarmProfile},
    prelude::*,
    quantity::energy::KilowattHours,
};
use clap::{Parser, value_parser};
use serde::Serialize;

use crate::{
    cli::{
        OutputFormat,
        farm::{DAILY_USAGE_KWH, FarmArgs},
    },
    tables::build_sweep_table,
};

#[derive(Parser)]
pub struct SweepArgs {
    #[clap(flatten)]
    farm: FarmArgs,

    /// Lowest daily usage in kilowatt-hours.
    #[clap(long, default_value = "10", value_parser = value_parser!(u32).range(DAILY_USAGE_KWH))]
    from: u32,

    /// Highest daily usage in kilowatt-hours, inclusive.
    #[clap(long, default_value = "500", value_parser = value_parser!(u32).range(DAILY_USAGE_KWH))]
    to: u32,

    /// Daily usage increment in kilowatt-hours.
    #[clap(long, default_value = "10", value_parser = value_parser!(u32).range(1..))]
    step: u32,

    #[clap(long, value_enum, default_value_t)]
    format: OutputFormat,
}

#[must_use]
#[derive(Serialize)]
pub struct SweepRow {
    #[serde(flatten)]
    pub profile: FarmProfile,

    #[serde(flatten)]
    pub estimate: Estimate,
}

impl SweepArgs {
    #[instrument(skip_all)]
    pub fn run(&self, assumptions: &Assumptions) -> Result {
        let rows = self.sweep(assumptions)?;
        info!(n_rows = rows.len(), "swept");
        match self.format {
            OutputFormat::Table => println!("{}", build_sweep_table(&rows)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        }
        Ok(())
    }

    fn sweep(&self, assumptions: &Assumptions) -> Result<Vec<SweepRow>> {
        ensure!(
            self.from <= self.to,
            "`--from` ({}) must not exceed `--to` ({})",
            self.from,
            self.to,
        );
        let step = usize::try_from(self.step)?;
        (self.from..=self.to)
            .step_by(step)
            .map(|daily_usage| -> Result<SweepRow> {
                let profile = self.farm.profile(KilowattHours(daily_usage));
                let estimate = profile.estimate(assumptions)?;
                Ok(SweepRow { profile, estimate })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use agrisolar::quantity::{power::Kilowatts, time::Years};

    use super::*;

    #[test]
    fn test_default_range_follows_slider() {
        let args = SweepArgs::try_parse_from(["sweep"]).unwrap();
        let rows = args.sweep(&Assumptions::default()).unwrap();
        assert_eq!(rows.len(), 50);
        assert_eq!(rows[0].profile.daily_usage, KilowattHours(10));
        assert_eq!(rows[0].estimate.system_size, Kilowatts(3));
        assert_eq!(rows[9].profile.daily_usage, KilowattHours(100));
        assert_eq!(rows[9].estimate.roi, Years(40));
        assert_eq!(rows[49].profile.daily_usage, KilowattHours(500));
    }

    #[test]
    fn test_partial_step() {
        let args =
            SweepArgs::try_parse_from(["sweep", "--from", "100", "--to", "130", "--step", "20"])
                .unwrap();
        let usages: Vec<_> = args
            .sweep(&Assumptions::default())
            .unwrap()
            .into_iter()
            .map(|row| row.profile.daily_usage)
            .collect();
        assert_eq!(usages, [KilowattHours(100), KilowattHours(120)]);
    }

    #[test]
    fn test_inverted_range() {
        let args = SweepArgs::try_parse_from(["sweep", "--from", "200", "--to", "100"]).unwrap();
        assert!(args.sweep(&Assumptions::default()).is_err());
    }

    #[test]
    fn test_zero_step_is_rejected() {
        assert!(SweepArgs::try_parse_from(["sweep", "--step", "0"]).is_err());
    }

    #[test]
    fn test_row_serialization() {
        let args = SweepArgs::try_parse_from(["sweep", "--from", "100", "--to", "100"]).unwrap();
        let rows = args.sweep(&Assumptions::default()).unwrap();
        let json = serde_json::to_value(&rows).unwrap();
        assert_eq!(json[0]["dailyUsageKwh"], 100);
        assert_eq!(json[0]["farmSizeAcres"], 10);
        assert_eq!(json[0]["recommendedSystemSizeKw"], 25);
        assert_eq!(json[0]["roiYears"], 40);
    }
}
