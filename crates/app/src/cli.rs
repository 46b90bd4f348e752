//! Sender and receiver programs, parameterised over their input and output.
//!
//! All input is collected and validated before anything is computed, so a
//! bad token produces an error and no partial result.

use crate::config::{DecoderArgs, EncoderArgs};
use crate::prompt::Prompter;
use crate::report::{decoder_report, encoder_report};
use anyhow::Context;
use crc_sim_core::{Generator, Role};
use std::io::{BufRead, Write};
use tracing::info;

/// Run the sender: collect dataword and divisor, print remainder and codeword.
pub fn run_encoder<R: BufRead, W: Write>(
    args: &EncoderArgs,
    input: R,
    output: &mut W,
) -> anyhow::Result<()> {
    let (dataword, generator) = {
        let mut prompter = Prompter::new(input, &mut *output, !args.quiet);

        let dataword = match &args.dataword {
            Some(dataword) => dataword.clone(),
            None => prompter
                .read_sequence(Role::Dataword, "Dataword")
                .context("failed to read dataword")?,
        };
        let generator = match &args.divisor {
            Some(generator) => generator.clone(),
            None => read_generator(&mut prompter)?,
        };
        (dataword, generator)
    };

    let encoded = generator
        .encode(&dataword)
        .context("failed to encode dataword")?;
    info!(
        data_bits = dataword.len(),
        check_bits = encoded.remainder.len(),
        "codeword ready"
    );

    output.write_all(encoder_report(&encoded).as_bytes())?;
    output.flush()?;
    Ok(())
}

/// Run the receiver: collect received word and divisor, print quotient,
/// remainder and verdict.
pub fn run_decoder<R: BufRead, W: Write>(
    args: &DecoderArgs,
    input: R,
    output: &mut W,
) -> anyhow::Result<()> {
    let (received, generator) = {
        let mut prompter = Prompter::new(input, &mut *output, !args.quiet);

        let received = match &args.received {
            Some(received) => received.clone(),
            None => prompter
                .read_sequence(Role::ReceivedWord, "Codeword")
                .context("failed to read codeword")?,
        };
        let generator = match &args.divisor {
            Some(generator) => generator.clone(),
            None => read_generator(&mut prompter)?,
        };
        (received, generator)
    };

    let decoded = generator
        .decode(&received)
        .context("failed to check received word")?;
    info!(verdict = ?decoded.verdict(), "received word checked");

    output.write_all(decoder_report(&decoded).as_bytes())?;
    output.flush()?;
    Ok(())
}

fn read_generator<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<Generator> {
    let divisor = prompter
        .read_sequence(Role::Divisor, "Divisor")
        .context("failed to read divisor")?;
    Ok(Generator::new(divisor)?)
}
