//! Noisy channel simulator between sender and receiver.
//!
//! Models a binary symmetric channel: every transmitted bit is flipped
//! independently with probability `flip_rate`. The flips are what the
//! receiver's CRC check is supposed to catch.
//!
//! # Determinism
//!
//! All randomness comes from a seeded ChaCha8 RNG. Given the same seed and
//! the same sequence of words, the same bits are flipped.

use crate::bits::BitSeq;
use crate::error::{Error, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::trace;

/// Configuration for channel simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelConfig {
    /// Per-bit flip probability [0.0, 1.0]
    pub flip_rate: f64,

    /// Random seed for determinism
    pub seed: u64,
}

impl ChannelConfig {
    /// A channel that never corrupts anything.
    pub fn perfect(seed: u64) -> Self {
        Self {
            flip_rate: 0.0,
            seed,
        }
    }

    /// A moderately noisy channel: 1% of bits flipped.
    pub fn default_with_seed(seed: u64) -> Self {
        Self {
            flip_rate: 0.01,
            seed,
        }
    }

    /// # Errors
    /// Returns `Error::Config` if `flip_rate` is not a probability.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.flip_rate) {
            return Err(Error::Config(format!(
                "flip rate {} is outside [0, 1]",
                self.flip_rate
            )));
        }
        Ok(())
    }
}

/// One word after it crossed the channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transmission {
    /// The word as the receiver sees it
    pub word: BitSeq,

    /// Positions that were flipped, ascending
    pub flipped: Vec<usize>,
}

impl Transmission {
    pub fn is_corrupted(&self) -> bool {
        !self.flipped.is_empty()
    }
}

/// Channel simulator with per-bit random flips.
///
/// # Thread Safety
/// Not thread-safe; use one instance per thread or synchronize externally.
pub struct NoisyChannel {
    config: ChannelConfig,
    rng: ChaCha8Rng,

    // Statistics
    words_sent: u64,
    words_corrupted: u64,
    bits_sent: u64,
    bits_flipped: u64,
}

impl NoisyChannel {
    /// Create a new channel with the given configuration.
    ///
    /// # Errors
    /// Returns `Error::Config` if the configuration does not validate.
    pub fn new(config: ChannelConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            words_sent: 0,
            words_corrupted: 0,
            bits_sent: 0,
            bits_flipped: 0,
        })
    }

    /// Send a word through the channel.
    ///
    /// One random draw is made per bit whenever `flip_rate > 0`, so the RNG
    /// stream depends only on the lengths of the words sent.
    pub fn transmit(&mut self, word: &BitSeq) -> Transmission {
        let mut delivered = word.clone();
        let mut flipped = Vec::new();

        if self.config.flip_rate > 0.0 {
            for position in 0..word.len() {
                let roll: f64 = self.rng.gen();
                if roll < self.config.flip_rate {
                    delivered.flip(position);
                    flipped.push(position);
                }
            }
        }

        self.words_sent += 1;
        self.bits_sent += word.len() as u64;
        self.bits_flipped += flipped.len() as u64;
        if !flipped.is_empty() {
            self.words_corrupted += 1;
            trace!(sent = %word, delivered = %delivered, ?flipped, "word corrupted");
        }

        Transmission {
            word: delivered,
            flipped,
        }
    }

    /// Get statistics about channel behavior.
    pub fn stats(&self) -> ChannelStats {
        ChannelStats {
            words_sent: self.words_sent,
            words_corrupted: self.words_corrupted,
            bits_sent: self.bits_sent,
            bits_flipped: self.bits_flipped,
        }
    }
}

/// Statistics about channel behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelStats {
    /// Words sent into the channel
    pub words_sent: u64,

    /// Words with at least one flipped bit
    pub words_corrupted: u64,

    /// Total bits sent
    pub bits_sent: u64,

    /// Total bits flipped
    pub bits_flipped: u64,
}

impl ChannelStats {
    /// Observed bit error rate (flipped / sent).
    pub fn bit_error_rate(&self) -> f64 {
        if self.bits_sent == 0 {
            0.0
        } else {
            self.bits_flipped as f64 / self.bits_sent as f64
        }
    }

    /// Fraction of words that arrived corrupted.
    pub fn corruption_rate(&self) -> f64 {
        if self.words_sent == 0 {
            0.0
        } else {
            self.words_corrupted as f64 / self.words_sent as f64
        }
    }
}
