//! Modulo-2 long division.
//!
//! This is the one routine both the sender and the receiver run. It performs
//! binary long division where subtraction is replaced by XOR (no borrow, no
//! carry).
//!
//! # Algorithm
//!
//! A window as wide as the divisor slides over the dividend:
//!
//! 1. Load the first `n` dividend bits into the window (`n` = divisor length).
//! 2. For every remaining dividend bit: if the window's leading bit is 1, XOR
//!    the window with the divisor; record that leading bit as the next quotient
//!    bit; drop it and shift the next dividend bit in at the tail.
//! 3. Make the same XOR-or-keep decision once more after the last bit.
//! 4. The remainder is the window minus its (now consumed) leading bit.
//!
//! ```text
//!   dividend  1 1 0 1 0 1 1 0 1 1 0 0 0 0
//!             [1 1 0 1 0]                    window, n = 5
//!    divisor   1 0 0 1 1                     leading 1 -> XOR
//!             [0 1 0 0 1] 1                  drop leading 0, shift in 1
//! ```
//!
//! The quotient has `m - n + 1` bits and the remainder `n - 1`, for a dividend
//! of `m` bits.

use crate::bits::{Bit, BitSeq};
use crate::error::{Error, Result, Role};
use crate::generator::MIN_DIVISOR_BITS;
use std::collections::VecDeque;
use tracing::trace;

/// Result of dividing one bit sequence by another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Division {
    /// One bit per division step, `m - n + 1` bits
    pub quotient: BitSeq,

    /// Final remainder, always `n - 1` bits
    pub remainder: BitSeq,
}

/// The working remainder under division.
///
/// A fixed-size ring buffer: every shift drops one bit at the head and
/// appends one at the tail, so its length is the divisor length throughout.
#[derive(Debug)]
struct Window {
    bits: VecDeque<Bit>,
}

impl Window {
    fn new(initial: &[Bit]) -> Self {
        Self {
            bits: initial.iter().copied().collect(),
        }
    }

    /// One division step: XOR with the divisor when the leading bit is set.
    ///
    /// Returns the leading bit inspected, which is the quotient bit.
    fn reduce(&mut self, divisor: &[Bit]) -> Bit {
        let leading = self.bits.front().copied().unwrap_or_default();
        if leading.is_one() {
            for (bit, &d) in self.bits.iter_mut().zip(divisor) {
                *bit = *bit ^ d;
            }
        }
        leading
    }

    /// Drop the leading bit and append `next` at the tail.
    fn shift_in(&mut self, next: Bit) {
        self.bits.pop_front();
        self.bits.push_back(next);
    }

    /// Everything but the leading bit.
    fn into_remainder(mut self) -> BitSeq {
        self.bits.pop_front();
        self.bits.into_iter().collect()
    }
}

/// Divide `dividend` by `divisor` over GF(2).
///
/// The divisor is used exactly as given; a leading 0 bit is not rejected
/// here (the XOR simply leaves the window's leading bit set, and it is
/// dropped all the same).
///
/// # Errors
/// - `Error::InvalidLength` if the divisor has fewer than 2 bits
/// - `Error::DividendTooShort` if the dividend is shorter than the divisor
pub fn divide(dividend: &BitSeq, divisor: &BitSeq) -> Result<Division> {
    let n = divisor.len();
    if n < MIN_DIVISOR_BITS {
        return Err(Error::invalid_length(
            Role::Divisor,
            n as i64,
            MIN_DIVISOR_BITS,
        ));
    }

    let m = dividend.len();
    if m < n {
        return Err(Error::DividendTooShort {
            dividend: m,
            divisor: n,
        });
    }

    let taps = divisor.as_slice();
    let (head, rest) = dividend.as_slice().split_at(n);
    let mut window = Window::new(head);
    let mut quotient = BitSeq::new();

    for &next in rest {
        quotient.push(window.reduce(taps));
        window.shift_in(next);
        debug_assert_eq!(window.bits.len(), n);
    }
    quotient.push(window.reduce(taps));

    let remainder = window.into_remainder();
    trace!(
        dividend = %dividend,
        divisor = %divisor,
        quotient = %quotient,
        remainder = %remainder,
        "modulo-2 division"
    );

    Ok(Division {
        quotient,
        remainder,
    })
}
