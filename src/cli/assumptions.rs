use std::path::PathBuf;

use agrisolar::{
    estimator::Assumptions,
    prelude::*,
    quantity::ratios::{KilowattsPerKilowattHour, RupeesPerKilowatt, Share},
};
use clap::Parser;

/// Overrides of the pricing assumptions.
///
/// Explicit values take precedence over the file, and the file over the built-in defaults.
#[derive(Parser)]
pub struct AssumptionsArgs {
    /// TOML file with the assumptions.
    #[clap(long = "assumptions-file", env = "ASSUMPTIONS_FILE", global = true)]
    file: Option<PathBuf>,

    /// Installed kilowatts per kilowatt-hour of average daily usage.
    #[clap(long = "sizing-factor", env = "SIZING_FACTOR", global = true)]
    sizing_factor: Option<KilowattsPerKilowattHour>,

    /// Fraction of the electricity bill offset by solar generation.
    #[clap(long = "savings-share", env = "SAVINGS_SHARE", global = true)]
    savings_share: Option<Share>,

    /// Installed system cost in rupees per kilowatt.
    #[clap(long = "cost-per-kilowatt", env = "COST_PER_KILOWATT", global = true)]
    cost_per_kilowatt: Option<RupeesPerKilowatt>,
}

impl AssumptionsArgs {
    pub fn resolve(&self) -> Result<Assumptions> {
        let mut assumptions = match &self.file {
            Some(path) => Assumptions::read_from(path)?,
            None => Assumptions::default(),
        };
        if let Some(sizing_factor) = self.sizing_factor {
            assumptions.sizing_factor = sizing_factor;
        }
        if let Some(savings_share) = self.savings_share {
            assumptions.savings_share = savings_share;
        }
        if let Some(cost_per_kilowatt) = self.cost_per_kilowatt {
            assumptions.cost_per_kilowatt = cost_per_kilowatt;
        }
        assumptions.validate().context("invalid assumptions")?;
        Ok(assumptions)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use agrisolar::estimator::{DEFAULT_COST_PER_KILOWATT, DEFAULT_SIZING_FACTOR};
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let args = AssumptionsArgs::try_parse_from(["agrisolar"]).unwrap();
        assert_eq!(args.resolve().unwrap(), Assumptions::default());
    }

    #[test]
    fn test_flag_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "savings_share = 0.5\nsizing_factor_kw_per_kwh = 0.3").unwrap();
        let path = file.path().to_str().unwrap();
        let args = AssumptionsArgs::try_parse_from([
            "agrisolar",
            "--assumptions-file",
            path,
            "--savings-share",
            "0.4",
        ])
        .unwrap();
        let assumptions = args.resolve().unwrap();
        assert_abs_diff_eq!(assumptions.savings_share.0, 0.4);
        assert_abs_diff_eq!(assumptions.sizing_factor.0, 0.3);
        assert_eq!(assumptions.cost_per_kilowatt, DEFAULT_COST_PER_KILOWATT);
        assert_ne!(assumptions.sizing_factor, DEFAULT_SIZING_FACTOR);
    }

    #[test]
    fn test_invalid_override() {
        let args =
            AssumptionsArgs::try_parse_from(["agrisolar", "--cost-per-kilowatt=-5"]).unwrap();
        assert!(args.resolve().is_err());
    }
}
