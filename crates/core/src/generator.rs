//! Generator polynomials.
//!
//! A [`Generator`] is a divisor that has passed boundary validation. Both the
//! encoder and the decoder take one, so neither has to re-check the divisor.

use crate::bits::{Bit, BitSeq};
use crate::decoder::{self, Decoded};
use crate::encoder::{self, Encoded};
use crate::error::{Error, Result, Role};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Shortest divisor that yields at least one check bit.
pub const MIN_DIVISOR_BITS: usize = 2;

/// A validated CRC divisor (generator polynomial), highest degree first.
///
/// # Invariants
/// - `divisor.len() >= MIN_DIVISOR_BITS`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Generator {
    divisor: BitSeq,
}

impl Generator {
    /// Validate `divisor` and wrap it.
    ///
    /// A leading 0 bit is accepted but logged: the polynomial then has a lower
    /// degree than the number of check bits suggests.
    ///
    /// # Errors
    /// Returns `Error::InvalidLength` if the divisor has fewer than 2 bits.
    pub fn new(divisor: BitSeq) -> Result<Self> {
        if divisor.len() < MIN_DIVISOR_BITS {
            return Err(Error::invalid_length(
                Role::Divisor,
                divisor.len() as i64,
                MIN_DIVISOR_BITS,
            ));
        }

        if divisor.get(0) == Some(Bit::Zero) {
            warn!(divisor = %divisor, "divisor has a leading 0 bit");
        }

        Ok(Self { divisor })
    }

    pub fn divisor(&self) -> &BitSeq {
        &self.divisor
    }

    /// Number of check bits appended to a dataword (`n - 1`).
    pub fn width(&self) -> usize {
        self.divisor.len() - 1
    }

    /// Whether every single-bit error is guaranteed to leave a nonzero
    /// remainder: true when at least two divisor bits are set.
    pub fn detects_single_bit_errors(&self) -> bool {
        self.divisor.count_ones() >= 2
    }

    /// Sender side: see [`encoder::encode`].
    pub fn encode(&self, dataword: &BitSeq) -> Result<Encoded> {
        encoder::encode(dataword, self)
    }

    /// Receiver side: see [`decoder::decode`].
    pub fn decode(&self, received: &BitSeq) -> Result<Decoded> {
        decoder::decode(received, self)
    }
}

impl FromStr for Generator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Generator::new(s.parse()?)
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.divisor, f)
    }
}
