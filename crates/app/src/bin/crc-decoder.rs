use clap::Parser;
use crc_sim::{cli, config::DecoderArgs, logging};
use std::io;

fn main() -> anyhow::Result<()> {
    let args = DecoderArgs::parse();
    logging::init(args.verbosity.verbose);

    cli::run_decoder(&args, io::stdin().lock(), &mut io::stdout().lock())
}
