//! Receiver side: check a received word against the generator.
//!
//! The received word is divided as-is (no padding). A valid codeword is a
//! multiple of the generator, so its remainder is all zeros; any set bit in
//! the remainder means the word was corrupted in transit.

use crate::bits::BitSeq;
use crate::divider::divide;
use crate::error::{Error, Result, Role};
use crate::generator::Generator;
use std::fmt;
use tracing::debug;

/// Accept/reject decision derived from the remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Remainder is all zeros: no error detected
    Accepted,
    /// Remainder has a set bit: error detected
    Rejected,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Accepted => f.write_str("No error detected. Codeword is valid."),
            Verdict::Rejected => f.write_str("Error detected in received codeword!"),
        }
    }
}

/// Output of the receiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// Leading `len - width` bits of the received word
    pub dataword: BitSeq,

    /// Quotient of the division, reported for inspection only
    pub quotient: BitSeq,

    /// Final remainder, `generator.width()` bits
    pub remainder: BitSeq,
}

impl Decoded {
    pub fn verdict(&self) -> Verdict {
        if self.remainder.is_all_zero() {
            Verdict::Accepted
        } else {
            Verdict::Rejected
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.verdict() == Verdict::Accepted
    }
}

/// Divide a received word by the generator.
///
/// # Errors
/// - `Error::InvalidLength` if the received word is empty
/// - `Error::DividendTooShort` if it is shorter than the divisor
pub fn decode(received: &BitSeq, generator: &Generator) -> Result<Decoded> {
    if received.is_empty() {
        return Err(Error::invalid_length(
            Role::ReceivedWord,
            0,
            Role::ReceivedWord.minimum_len(),
        ));
    }

    let division = divide(received, generator.divisor())?;
    let (dataword, _) = received.split_at(received.len() - generator.width());

    let decoded = Decoded {
        dataword,
        quotient: division.quotient,
        remainder: division.remainder,
    };

    debug!(
        received = %received,
        divisor = %generator,
        quotient = %decoded.quotient,
        remainder = %decoded.remainder,
        verdict = ?decoded.verdict(),
        "decoded received word"
    );

    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn seq(s: &str) -> BitSeq {
        s.parse().unwrap()
    }

    fn generator(s: &str) -> Generator {
        s.parse().unwrap()
    }

    #[test]
    fn test_valid_codeword_accepted() {
        let decoded = decode(&seq("11010110111110"), &generator("10011")).unwrap();
        assert_eq!(decoded.remainder, seq("0000"));
        assert_eq!(decoded.quotient, seq("1100001010"));
        assert_eq!(decoded.dataword, seq("1101011011"));
        assert_eq!(decoded.verdict(), Verdict::Accepted);
        assert!(decoded.is_accepted());
    }

    #[test]
    fn test_corrupted_codeword_rejected() {
        // bit 3 flipped
        let decoded = decode(&seq("11000110111110"), &generator("10011")).unwrap();
        assert_eq!(decoded.remainder, seq("0111"));
        assert_eq!(decoded.verdict(), Verdict::Rejected);
    }

    #[test]
    fn test_window_matches_divisor_length() {
        let decoded = decode(&seq("111000100101"), &generator("110101")).unwrap();
        assert!(decoded.is_accepted());
        assert_eq!(decoded.remainder, seq("00000"));
        assert_eq!(decoded.quotient, seq("1010001"));
        assert_eq!(decoded.dataword, seq("1110001"));

        let decoded = decode(&seq("1100101001111000"), &generator("100000111")).unwrap();
        assert!(decoded.is_accepted());
        assert_eq!(decoded.remainder.len(), 8);
        assert_eq!(decoded.quotient, seq("11001000"));
    }

    #[test]
    fn test_too_short_received_word() {
        let err = decode(&seq("101"), &generator("10011")).unwrap_err();
        assert!(matches!(err, Error::DividendTooShort { .. }));

        let err = decode(&BitSeq::new(), &generator("10011")).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidLength {
                role: Role::ReceivedWord,
                ..
            }
        ));
    }

    #[test]
    fn test_verdict_messages() {
        assert_eq!(
            Verdict::Accepted.to_string(),
            "No error detected. Codeword is valid."
        );
        assert_eq!(
            Verdict::Rejected.to_string(),
            "Error detected in received codeword!"
        );
    }
}
