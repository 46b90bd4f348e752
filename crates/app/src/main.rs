use anyhow::Context;
use clap::Parser;
use crc_sim::{
    config::{SimArgs, SimConfig},
    logging, sim,
};

fn main() -> anyhow::Result<()> {
    let args = SimArgs::parse();
    logging::init(args.verbosity.verbose);

    let config = SimConfig::from_args(args).context("invalid configuration")?;
    if config.print_config {
        config.print();
    }

    let metrics = sim::run(&config).context("simulation failed")?;

    if config.print_metrics {
        metrics.print_summary();
    }
    metrics.print_result();

    Ok(())
}
