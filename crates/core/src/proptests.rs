//! Property tests for the sender/receiver pair.
//!
//! The divider is checked against a bitwise reference on packed integers,
//! and the encoder/decoder against the defining CRC properties:
//!
//! 1. Every codeword leaves a zero remainder at the receiver.
//! 2. Every single-bit error leaves a nonzero remainder, for divisors with at
//!    least two bits set.
//! 3. The remainder is always one bit shorter than the divisor.

use proptest::prelude::*;

use crate::bits::{Bit, BitSeq};
use crate::divider::divide;
use crate::generator::Generator;

fn bits(max_len: usize) -> impl Strategy<Value = BitSeq> {
    proptest::collection::vec(any::<bool>(), 1..=max_len)
        .prop_map(|v| v.into_iter().map(Bit::from).collect())
}

/// Divisors of 2..=17 bits with the conventional leading 1.
fn generator() -> impl Strategy<Value = Generator> {
    proptest::collection::vec(any::<bool>(), 1..=16).prop_map(|tail| {
        let divisor: BitSeq = std::iter::once(Bit::One)
            .chain(tail.into_iter().map(Bit::from))
            .collect();
        Generator::new(divisor).unwrap()
    })
}

fn pack(seq: &BitSeq) -> u128 {
    seq.iter().fold(0, |acc, &bit| (acc << 1) | u128::from(u8::from(bit)))
}

/// Textbook polynomial remainder on integers; `divisor` must have a leading 1.
fn reference_remainder(dividend: &BitSeq, divisor: &BitSeq) -> u128 {
    let degree = divisor.len() - 1;
    let poly = pack(divisor);
    let mut value = pack(dividend);

    for i in (degree..dividend.len()).rev() {
        if (value >> i) & 1 == 1 {
            value ^= poly << (i - degree);
        }
    }
    value
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn divider_matches_reference(
        dividend in bits(96),
        generator in generator(),
    ) {
        prop_assume!(dividend.len() >= generator.divisor().len());

        let division = divide(&dividend, generator.divisor()).unwrap();
        prop_assert_eq!(
            pack(&division.remainder),
            reference_remainder(&dividend, generator.divisor())
        );
        prop_assert_eq!(
            division.quotient.len(),
            dividend.len() - generator.divisor().len() + 1
        );
    }

    #[test]
    fn codeword_round_trip(
        dataword in bits(64),
        generator in generator(),
    ) {
        let encoded = generator.encode(&dataword).unwrap();
        prop_assert_eq!(encoded.codeword.len(), dataword.len() + generator.width());

        let decoded = generator.decode(&encoded.codeword).unwrap();
        prop_assert!(decoded.remainder.is_all_zero(),
            "codeword {} left remainder {}", encoded.codeword, decoded.remainder);
        prop_assert_eq!(decoded.dataword, dataword);
    }

    #[test]
    fn single_bit_error_detected(
        dataword in bits(64),
        generator in generator(),
        position in any::<usize>(),
    ) {
        prop_assume!(generator.detects_single_bit_errors());

        let mut received = generator.encode(&dataword).unwrap().codeword;
        let position = position % received.len();
        received.flip(position);

        let decoded = generator.decode(&received).unwrap();
        prop_assert!(!decoded.is_accepted(),
            "flip at {} of {} went undetected by {}", position, received, generator);
    }

    #[test]
    fn remainder_is_one_shorter_than_divisor(
        word in bits(64),
        generator in generator(),
    ) {
        prop_assert_eq!(generator.encode(&word).unwrap().remainder.len(), generator.width());

        if word.len() >= generator.divisor().len() {
            let first = generator.decode(&word).unwrap();
            prop_assert_eq!(first.remainder.len(), generator.width());
            prop_assert_eq!(first, generator.decode(&word).unwrap());
        }
    }
}
