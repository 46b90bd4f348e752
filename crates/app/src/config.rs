//! Command-line configuration for the three programs.
//!
//! The sender and receiver take their bit sequences either as flags or
//! interactively. The simulator works with ZERO arguments, using seeded
//! defaults; the seed is printed with `--print-config` so runs are
//! reproducible.

use clap::{Args, Parser};
use crc_sim_core::channel::ChannelConfig;
use crc_sim_core::{BitSeq, Error, Generator, Result, Role};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Shared `-v` flag.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct Verbosity {
    /// Increase log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Parser)]
#[command(name = "crc-encoder")]
#[command(about = "CRC sender: append check bits to a dataword")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct EncoderArgs {
    /// Dataword bits, e.g. 1101011011 (prompted for when omitted)
    #[arg(long)]
    pub dataword: Option<BitSeq>,

    /// Divisor (generator polynomial) bits, e.g. 10011 (prompted for when omitted)
    #[arg(long)]
    pub divisor: Option<Generator>,

    /// Do not print prompts (for piped input)
    #[arg(short, long)]
    pub quiet: bool,

    #[command(flatten)]
    pub verbosity: Verbosity,
}

#[derive(Debug, Parser)]
#[command(name = "crc-decoder")]
#[command(about = "CRC receiver: check a received codeword")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct DecoderArgs {
    /// Received codeword bits (prompted for when omitted)
    #[arg(long)]
    pub received: Option<BitSeq>,

    /// Divisor (generator polynomial) bits (prompted for when omitted)
    #[arg(long)]
    pub divisor: Option<Generator>,

    /// Do not print prompts (for piped input)
    #[arg(short, long)]
    pub quiet: bool,

    #[command(flatten)]
    pub verbosity: Verbosity,
}

#[derive(Debug, Parser)]
#[command(name = "crc-sim")]
#[command(about = "Send random datawords through a noisy channel and measure CRC detection")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct SimArgs {
    /// Divisor (generator polynomial) bits
    #[arg(long, default_value = "10011")]
    pub divisor: Generator,

    /// Bits per dataword
    #[arg(long, default_value_t = 8)]
    pub dataword_bits: usize,

    /// Number of datawords to send
    #[arg(long, default_value_t = 1000)]
    pub words: u64,

    /// Per-bit flip probability 0.0-1.0 (default: random 0-0.05)
    #[arg(long)]
    pub flip_rate: Option<f64>,

    /// Random seed for determinism (default: time-based)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print resolved configuration
    #[arg(long)]
    pub print_config: bool,

    /// Don't print metrics summary
    #[arg(long)]
    pub no_metrics: bool,

    #[command(flatten)]
    pub verbosity: Verbosity,
}

/// Complete configuration for a simulator run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Divisor used by both sides
    pub generator: Generator,

    /// Bits per random dataword
    pub dataword_bits: usize,

    /// Number of datawords to send
    pub words: u64,

    /// Seed for dataword generation
    pub seed: u64,

    /// Channel simulation config
    pub channel: ChannelConfig,

    /// Whether to print detailed config
    pub print_config: bool,

    /// Whether to print detailed metrics summary
    pub print_metrics: bool,
}

impl SimConfig {
    /// Resolve defaults and validate.
    ///
    /// If `--seed` is given, every random choice (default flip rate,
    /// datawords, channel flips) derives from it.
    ///
    /// # Errors
    /// - `Error::InvalidLength` if `dataword_bits` is 0
    /// - `Error::Config` if the flip rate is not a probability
    pub fn from_args(args: SimArgs) -> Result<Self> {
        if args.dataword_bits < Role::Dataword.minimum_len() {
            return Err(Error::invalid_length(
                Role::Dataword,
                args.dataword_bits as i64,
                Role::Dataword.minimum_len(),
            ));
        }

        let seed = args.seed.unwrap_or_else(time_seed);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let flip_rate = args.flip_rate.unwrap_or_else(|| {
            // Bias toward small flip rates
            let r: f64 = rng.gen();
            (r * r * 0.05).min(0.05)
        });

        let channel = ChannelConfig {
            flip_rate,
            seed: seed.wrapping_add(1),
        };
        channel.validate()?;

        Ok(SimConfig {
            generator: args.divisor,
            dataword_bits: args.dataword_bits,
            words: args.words,
            seed,
            channel,
            print_config: args.print_config,
            print_metrics: !args.no_metrics,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!("Divisor: {} ({} check bits)", self.generator, self.generator.width());
        println!("Dataword bits: {}", self.dataword_bits);
        println!("Words: {}", self.words);
        println!();
        println!("=== Channel Simulation ===");
        println!("Seed: {}", self.seed);
        println!("Flip rate: {:.3}%", self.channel.flip_rate * 100.0);
        println!();
    }
}

fn time_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|t| t.as_millis() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoder_args_parsing() {
        let args = EncoderArgs::try_parse_from([
            "crc-encoder",
            "--dataword",
            "1101011011",
            "--divisor",
            "10011",
            "-q",
        ])
        .unwrap();

        assert_eq!(args.dataword.unwrap().to_string(), "1101011011");
        assert_eq!(args.divisor.unwrap().width(), 4);
        assert!(args.quiet);
        assert_eq!(args.verbosity.verbose, 0);
    }

    #[test]
    fn test_encoder_args_reject_bad_bits() {
        assert!(EncoderArgs::try_parse_from(["crc-encoder", "--dataword", "10201"]).is_err());
        assert!(EncoderArgs::try_parse_from(["crc-encoder", "--divisor", "1"]).is_err());
    }

    #[test]
    fn test_decoder_args_all_prompted() {
        let args = DecoderArgs::try_parse_from(["crc-decoder", "-vv"]).unwrap();
        assert!(args.received.is_none());
        assert!(args.divisor.is_none());
        assert!(!args.quiet);
        assert_eq!(args.verbosity.verbose, 2);
    }

    #[test]
    fn test_sim_defaults() {
        let args = SimArgs::try_parse_from(["crc-sim", "--seed", "42"]).unwrap();
        let config = SimConfig::from_args(args).unwrap();

        assert_eq!(config.generator.to_string(), "10011");
        assert_eq!(config.dataword_bits, 8);
        assert_eq!(config.words, 1000);
        assert_eq!(config.seed, 42);
        assert!((0.0..=0.05).contains(&config.channel.flip_rate));
        assert!(config.print_metrics);
        assert!(!config.print_config);
    }

    #[test]
    fn test_sim_seed_determinism() {
        let a = SimConfig::from_args(SimArgs::try_parse_from(["crc-sim", "--seed", "7"]).unwrap())
            .unwrap();
        let b = SimConfig::from_args(SimArgs::try_parse_from(["crc-sim", "--seed", "7"]).unwrap())
            .unwrap();
        assert_eq!(a.channel, b.channel);
    }

    #[test]
    fn test_sim_explicit_values() {
        let args = SimArgs::try_parse_from([
            "crc-sim",
            "--divisor",
            "100000111",
            "--dataword-bits",
            "16",
            "--words",
            "10",
            "--flip-rate",
            "0.1",
            "--seed",
            "3",
            "--print-config",
            "--no-metrics",
        ])
        .unwrap();
        let config = SimConfig::from_args(args).unwrap();

        assert_eq!(config.generator.width(), 8);
        assert_eq!(config.dataword_bits, 16);
        assert_eq!(config.words, 10);
        assert_eq!(config.channel.flip_rate, 0.1);
        assert!(config.print_config);
        assert!(!config.print_metrics);
    }

    #[test]
    fn test_sim_rejects_bad_values() {
        let args = SimArgs::try_parse_from(["crc-sim", "--flip-rate", "1.5"]).unwrap();
        assert!(matches!(SimConfig::from_args(args), Err(Error::Config(_))));

        let args = SimArgs::try_parse_from(["crc-sim", "--dataword-bits", "0"]).unwrap();
        assert!(matches!(
            SimConfig::from_args(args),
            Err(Error::InvalidLength { .. })
        ));
    }
}
