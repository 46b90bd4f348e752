//! Random dataword generation for the simulator.
//!
//! Datawords come from a seeded ChaCha8 RNG, so a run is fully described by
//! its seed and configuration.

use crc_sim_core::{Bit, BitSeq};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate one dataword of `len` uniformly random bits.
pub fn generate_dataword(rng: &mut ChaCha8Rng, len: usize) -> BitSeq {
    (0..len).map(|_| Bit::from(rng.gen::<bool>())).collect()
}

/// Endless stream of `len`-bit datawords derived from `seed`.
pub fn dataword_stream(seed: u64, len: usize) -> impl Iterator<Item = BitSeq> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    std::iter::repeat_with(move || generate_dataword(&mut rng, len))
}
