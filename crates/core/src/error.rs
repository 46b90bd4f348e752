//! Error types for the CRC sender and receiver.
//!
//! Every check happens at the boundary (parsing bits, building a generator,
//! configuring the channel) so the divider only ever sees well-formed input.
//! Operations return these structured errors instead of panicking.

use crate::generator::MIN_DIVISOR_BITS;
use thiserror::Error;

/// Top-level error type for all operations in the system.
#[derive(Debug, Error)]
pub enum Error {
    /// A declared bit count or a sequence length is out of range
    #[error("invalid {role} length {length}: need at least {minimum} bits")]
    InvalidLength {
        role: Role,
        length: i64,
        minimum: usize,
    },

    /// A declared bit count that is not a whole number, or too large for `i64`
    #[error("invalid {role} bit count {token:?}: expected a whole number that fits in 64 bits")]
    InvalidCount { role: Role, token: String },

    /// A token that is not a single `0` or `1`
    #[error("invalid bit {token:?} at position {position}: expected 0 or 1")]
    InvalidInput { token: String, position: usize },

    /// Dividend is shorter than the divisor, so no division step is possible
    #[error("dividend of {dividend} bits is shorter than divisor of {divisor} bits")]
    DividendTooShort { dividend: usize, divisor: usize },

    /// Reading input failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Which bit sequence a length error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Dataword,
    Divisor,
    ReceivedWord,
}

impl Role {
    /// Fewest bits a sequence in this role may have.
    pub fn minimum_len(self) -> usize {
        match self {
            Role::Dataword | Role::ReceivedWord => 1,
            Role::Divisor => MIN_DIVISOR_BITS,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Role::Dataword => "dataword",
            Role::Divisor => "divisor",
            Role::ReceivedWord => "received word",
        };
        f.write_str(name)
    }
}

impl Error {
    /// Build an `InvalidLength` error from a declared or measured length.
    pub fn invalid_length(role: Role, length: i64, minimum: usize) -> Self {
        Error::InvalidLength {
            role,
            length,
            minimum,
        }
    }
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = Error::invalid_length(Role::Divisor, 1, 2);
        assert_eq!(
            err.to_string(),
            "invalid divisor length 1: need at least 2 bits"
        );

        let err = Error::InvalidInput {
            token: "2".to_string(),
            position: 3,
        };
        assert_eq!(
            err.to_string(),
            "invalid bit \"2\" at position 3: expected 0 or 1"
        );

        let err = Error::DividendTooShort {
            dividend: 3,
            divisor: 5,
        };
        assert!(err.to_string().contains("shorter than divisor"));
    }

    #[test]
    fn test_minimum_lengths() {
        assert_eq!(Role::Dataword.minimum_len(), 1);
        assert_eq!(Role::ReceivedWord.minimum_len(), 1);
        assert_eq!(Role::Divisor.minimum_len(), 2);
    }

    #[test]
    fn test_negative_declared_length() {
        let err = Error::invalid_length(Role::ReceivedWord, -4, 1);
        assert!(matches!(err, Error::InvalidLength { length: -4, .. }));
        assert!(err.to_string().starts_with("invalid received word length -4"));
    }
}
