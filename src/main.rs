#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod cli;
mod tables;

use agrisolar::prelude::*;
use clap::{Parser, crate_version};

use crate::cli::{Args, Command};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let assumptions = args.assumptions.resolve()?;
    debug!(?assumptions, "resolved the assumptions");

    match args.command {
        Command::Estimate(args) => args.run(&assumptions)?,
        Command::Sweep(args) => args.run(&assumptions)?,
    }

    info!("done!");
    Ok(())
}
