//! crc-sim: command-line front ends for the CRC sender and receiver
//!
//! - `crc-encoder`: read a dataword and divisor, print remainder and codeword
//! - `crc-decoder`: read a received word and divisor, print quotient,
//!   remainder and verdict
//! - `crc-sim`: push seeded random datawords through a noisy channel and
//!   report how many corrupted words the CRC caught
//!
//! The binaries stay thin: everything they do lives here so it can be
//! driven from tests with in-memory input and output.

pub mod cli;
pub mod config;
pub mod input_gen;
pub mod logging;
pub mod prompt;
pub mod report;
pub mod sim;
