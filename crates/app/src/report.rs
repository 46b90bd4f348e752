//! Result formatting for the sender and receiver.
//!
//! The sender prints bit sequences back to back; the receiver prints them
//! separated by spaces and adds its verdict.

use crc_sim_core::{Decoded, Encoded};

/// Sender output: remainder then codeword, one per line.
pub fn encoder_report(encoded: &Encoded) -> String {
    format!(
        "Remainder (CRC bits): {}\nCodeword to be transmitted: {}\n",
        encoded.remainder, encoded.codeword
    )
}

/// Receiver output: quotient, remainder, verdict, one per line.
pub fn decoder_report(decoded: &Decoded) -> String {
    format!(
        "Quotient: {}\nRemainder: {}\n{}\n",
        decoded.quotient.spaced(),
        decoded.remainder.spaced(),
        decoded.verdict()
    )
}
