mod assumptions;
mod estimate;
mod farm;
mod sweep;

use clap::{Parser, Subcommand};

pub use self::{
    assumptions::AssumptionsArgs,
    estimate::EstimateArgs,
    sweep::{SweepArgs, SweepRow},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[clap(flatten)]
    pub assumptions: AssumptionsArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Estimate the recommended system size, annual savings, and payback period.
    #[clap(name = "estimate")]
    Estimate(Box<EstimateArgs>),

    /// Tabulate the estimates over a range of daily usage.
    #[clap(name = "sweep")]
    Sweep(Box<SweepArgs>),
}

#[derive(Copy, Clone, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table.
    #[default]
    Table,

    /// JSON document on the standard output.
    Json,
}
