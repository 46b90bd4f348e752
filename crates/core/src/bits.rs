//! Bits and bit sequences.
//!
//! A [`BitSeq`] is an ordered, fixed-length list of [`Bit`]s, written
//! most-significant (highest polynomial degree) first. Datawords, divisors,
//! codewords and remainders are all bit sequences.
//!
//! # Parsing Rules
//! - `FromStr`: accepts `0` and `1` characters; whitespace and `_` are
//!   separators and are skipped. Positions in errors are character offsets.
//! - `from_tokens`: every token must be exactly `0` or `1`. Positions in
//!   errors are token indices.
//!
//! # Example
//! ```
//! use crc_sim_core::bits::BitSeq;
//!
//! let word: BitSeq = "1101 0110_11".parse().unwrap();
//! assert_eq!(word.len(), 10);
//! assert_eq!(word.to_string(), "1101011011");
//! assert_eq!(word.spaced().to_string(), "1 1 0 1 0 1 1 0 1 1");
//! ```

use crate::error::{Error, Result};
use std::fmt;
use std::ops::BitXor;
use std::str::FromStr;

/// A single binary digit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bit {
    #[default]
    Zero,
    One,
}

impl Bit {
    /// Parse a single token (`"0"` or `"1"`).
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` for anything else, tagged with `position`.
    pub fn parse_token(token: &str, position: usize) -> Result<Self> {
        match token {
            "0" => Ok(Bit::Zero),
            "1" => Ok(Bit::One),
            _ => Err(Error::InvalidInput {
                token: token.to_string(),
                position,
            }),
        }
    }

    pub fn is_one(self) -> bool {
        self == Bit::One
    }

    /// The opposite bit.
    pub fn flipped(self) -> Self {
        match self {
            Bit::Zero => Bit::One,
            Bit::One => Bit::Zero,
        }
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        if value {
            Bit::One
        } else {
            Bit::Zero
        }
    }
}

impl From<Bit> for u8 {
    fn from(bit: Bit) -> Self {
        match bit {
            Bit::Zero => 0,
            Bit::One => 1,
        }
    }
}

/// Modulo-2 addition: no carry, so `1 ^ 1 == 0`.
impl BitXor for Bit {
    type Output = Bit;

    fn bitxor(self, rhs: Bit) -> Bit {
        Bit::from(self != rhs)
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

/// An ordered sequence of bits, most significant first.
///
/// # Invariants
/// - The length never changes behind the caller's back; only `push`,
///   `extend` and the constructors produce sequences of new lengths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitSeq {
    bits: Vec<Bit>,
}

impl BitSeq {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    /// Create a sequence of `len` zero bits.
    pub fn zeros(len: usize) -> Self {
        Self {
            bits: vec![Bit::Zero; len],
        }
    }

    /// Parse whitespace-separated tokens, one bit per token.
    ///
    /// This is the form interactive input arrives in: `1 0 1 1 0 0 1`.
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` naming the first bad token and its index.
    pub fn from_tokens<'a, I>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        tokens
            .into_iter()
            .enumerate()
            .map(|(position, token)| Bit::parse_token(token, position))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn as_slice(&self) -> &[Bit] {
        &self.bits
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bit> {
        self.bits.iter()
    }

    pub fn get(&self, index: usize) -> Option<Bit> {
        self.bits.get(index).copied()
    }

    pub fn push(&mut self, bit: Bit) {
        self.bits.push(bit);
    }

    /// True when no bit is set. An empty sequence counts as all-zero.
    pub fn is_all_zero(&self) -> bool {
        self.bits.iter().all(|&bit| bit == Bit::Zero)
    }

    /// Number of bits set to one.
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|bit| bit.is_one()).count()
    }

    /// Return `self` followed by `other`.
    pub fn concat(&self, other: &BitSeq) -> BitSeq {
        let mut bits = Vec::with_capacity(self.len() + other.len());
        bits.extend_from_slice(&self.bits);
        bits.extend_from_slice(&other.bits);
        Self { bits }
    }

    /// Return `self` followed by `count` zero bits (multiplication by x^count).
    pub fn padded(&self, count: usize) -> BitSeq {
        self.concat(&BitSeq::zeros(count))
    }

    /// Split into `[0, mid)` and `[mid, len)`.
    ///
    /// `mid` is clamped to the sequence length.
    pub fn split_at(&self, mid: usize) -> (BitSeq, BitSeq) {
        let (head, tail) = self.bits.split_at(mid.min(self.len()));
        (BitSeq::from(head.to_vec()), BitSeq::from(tail.to_vec()))
    }

    /// Invert the bit at `index`.
    ///
    /// Returns false (and leaves the sequence alone) if `index` is out of range.
    pub fn flip(&mut self, index: usize) -> bool {
        match self.bits.get_mut(index) {
            Some(bit) => {
                *bit = bit.flipped();
                true
            }
            None => false,
        }
    }

    /// Display adapter that writes the bits separated by single spaces.
    pub fn spaced(&self) -> Spaced<'_> {
        Spaced(self)
    }
}

impl From<Vec<Bit>> for BitSeq {
    fn from(bits: Vec<Bit>) -> Self {
        Self { bits }
    }
}

impl FromIterator<Bit> for BitSeq {
    fn from_iter<I: IntoIterator<Item = Bit>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a BitSeq {
    type Item = &'a Bit;
    type IntoIter = std::slice::Iter<'a, Bit>;

    fn into_iter(self) -> Self::IntoIter {
        self.bits.iter()
    }
}

impl FromStr for BitSeq {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .enumerate()
            .filter(|(_, c)| !c.is_whitespace() && *c != '_')
            .map(|(position, c)| match c {
                '0' => Ok(Bit::Zero),
                '1' => Ok(Bit::One),
                other => Err(Error::InvalidInput {
                    token: other.to_string(),
                    position,
                }),
            })
            .collect()
    }
}

/// Bits written back to back: `1011`.
impl fmt::Display for BitSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            write!(f, "{bit}")?;
        }
        Ok(())
    }
}

/// Bits separated by spaces: `1 0 1 1`. See [`BitSeq::spaced`].
#[derive(Debug, Clone, Copy)]
pub struct Spaced<'a>(&'a BitSeq);

impl fmt::Display for Spaced<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, bit) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{bit}")?;
        }
        Ok(())
    }
}
