//! The simulated link: sender -> noisy channel -> receiver.

use crate::config::SimConfig;
use crate::input_gen::dataword_stream;
use crc_sim_core::channel::NoisyChannel;
use crc_sim_core::metrics::Metrics;
use crc_sim_core::Result;
use tracing::{debug, info};

/// Send `config.words` random datawords across the channel and tally what
/// the receiver made of them.
///
/// # Errors
/// Propagates channel configuration and encode/decode errors.
pub fn run(config: &SimConfig) -> Result<Metrics> {
    let mut channel = NoisyChannel::new(config.channel)?;
    let mut metrics = Metrics::new();

    info!(
        divisor = %config.generator,
        words = config.words,
        flip_rate = config.channel.flip_rate,
        seed = config.seed,
        "starting simulation"
    );

    for (index, dataword) in dataword_stream(config.seed, config.dataword_bits)
        .take(config.words as usize)
        .enumerate()
    {
        let encoded = config.generator.encode(&dataword)?;
        let transmission = channel.transmit(&encoded.codeword);
        let decoded = config.generator.decode(&transmission.word)?;

        if transmission.is_corrupted() && decoded.is_accepted() {
            debug!(
                index,
                sent = %encoded.codeword,
                received = %transmission.word,
                flipped = ?transmission.flipped,
                "undetected error"
            );
        }

        metrics.record(dataword.len(), &transmission, &decoded);
    }

    metrics.complete();

    let stats = channel.stats();
    info!(
        bit_error_rate = stats.bit_error_rate(),
        corruption_rate = stats.corruption_rate(),
        detection_rate = metrics.detection_rate(),
        "simulation complete"
    );

    Ok(metrics)
}
