//! Sender side: turn a dataword into a codeword.
//!
//! The dataword is multiplied by x^(n-1) (padded with `n - 1` zero bits),
//! divided by the generator, and the remainder is appended. The resulting
//! codeword is an exact multiple of the generator.

use crate::bits::BitSeq;
use crate::divider::divide;
use crate::error::{Error, Result, Role};
use crate::generator::Generator;
use tracing::debug;

/// Output of the sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// CRC check bits, `generator.width()` bits
    pub remainder: BitSeq,

    /// Dataword followed by the remainder, ready to transmit
    pub codeword: BitSeq,
}

/// Compute the CRC of `dataword` and build the codeword.
///
/// # Errors
/// Returns `Error::InvalidLength` if the dataword is empty.
pub fn encode(dataword: &BitSeq, generator: &Generator) -> Result<Encoded> {
    if dataword.is_empty() {
        return Err(Error::invalid_length(Role::Dataword, 0, Role::Dataword.minimum_len()));
    }

    let dividend = dataword.padded(generator.width());
    let division = divide(&dividend, generator.divisor())?;
    let codeword = dataword.concat(&division.remainder);

    debug!(
        dataword = %dataword,
        divisor = %generator,
        remainder = %division.remainder,
        codeword = %codeword,
        "encoded dataword"
    );

    Ok(Encoded {
        remainder: division.remainder,
        codeword,
    })
}
