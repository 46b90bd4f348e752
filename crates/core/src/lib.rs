//! crc-sim-core: CRC encoding and decoding by modulo-2 long division
//!
//! This library provides the pieces of a learning-focused CRC link:
//! - A sender that appends CRC check bits to a dataword
//! - A receiver that divides a received word and reports the remainder
//! - A noisy channel that flips bits between the two, reproducibly
//!
//! # Architecture
//!
//! - `bits`: Bit and bit-sequence types, parsing and display
//! - `generator`: Validated divisor (generator polynomial)
//! - `divider`: The modulo-2 long division both sides share
//! - `encoder`: Sender (dataword -> codeword)
//! - `decoder`: Receiver (received word -> quotient, remainder, verdict)
//! - `channel`: Binary symmetric channel with seeded randomness
//! - `metrics`: Detection statistics for simulated runs
//!
//! # Example
//!
//! ```
//! use crc_sim_core::{BitSeq, Generator};
//!
//! let generator: Generator = "10011".parse().unwrap();
//! let dataword: BitSeq = "1101011011".parse().unwrap();
//!
//! let encoded = generator.encode(&dataword).unwrap();
//! assert_eq!(encoded.remainder.to_string(), "1110");
//! assert_eq!(encoded.codeword.to_string(), "11010110111110");
//!
//! let decoded = generator.decode(&encoded.codeword).unwrap();
//! assert!(decoded.is_accepted());
//! ```

pub mod bits;
pub mod channel;
pub mod decoder;
pub mod divider;
pub mod encoder;
pub mod error;
pub mod generator;
pub mod metrics;

#[cfg(test)]
mod proptests;

// Re-export commonly used types
pub use bits::{Bit, BitSeq};
pub use decoder::{Decoded, Verdict};
pub use encoder::Encoded;
pub use error::{Error, Result, Role};
pub use generator::Generator;
