use clap::Parser;
use crc_sim::{cli, config::EncoderArgs, logging};
use std::io;

fn main() -> anyhow::Result<()> {
    let args = EncoderArgs::parse();
    logging::init(args.verbosity.verbose);

    cli::run_encoder(&args, io::stdin().lock(), &mut io::stdout().lock())
}
