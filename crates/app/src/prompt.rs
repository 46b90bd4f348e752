//! Interactive input: a bit count followed by that many bits.
//!
//! Input is read as whitespace-separated tokens, so a count and its bits may
//! share a line or be spread over several. Each prompt is written (and
//! flushed) before the token it asks for is read.
//!
//! # Example Session
//!
//! ```text
//! Enter the number of bits in Dataword: 7
//! Enter the Dataword bits: 1 0 1 1 0 0 1
//! ```

use crc_sim_core::{BitSeq, Error, Result, Role};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Reads tokens from `input`, writing prompts to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    show_prompts: bool,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, show_prompts: bool) -> Self {
        Self {
            input,
            output,
            show_prompts,
            pending: VecDeque::new(),
        }
    }

    /// Ask for a bit count, then that many bits.
    ///
    /// `label` names the sequence in the prompts ("Dataword", "Divisor",
    /// "Codeword"); `role` decides the minimum length.
    ///
    /// # Errors
    /// - `Error::InvalidCount` if the count is not a whole number that fits
    ///   in 64 bits
    /// - `Error::InvalidLength` if the count is below the role's minimum
    /// - `Error::InvalidInput` if a bit token is not `0` or `1`
    /// - `Error::Io` if input ends early
    pub fn read_sequence(&mut self, role: Role, label: &str) -> Result<BitSeq> {
        let count = self.read_count(role, &format!("Enter the number of bits in {label}: "))?;
        self.read_bits(count, &format!("Enter the {label} bits: "))
    }

    /// Ask for a bit count and check it against the role's minimum.
    pub fn read_count(&mut self, role: Role, message: &str) -> Result<usize> {
        self.prompt(message)?;
        let token = self.next_token()?;

        let count: i64 = token.parse().map_err(|_| Error::InvalidCount {
            role,
            token: token.clone(),
        })?;

        if count < role.minimum_len() as i64 {
            return Err(Error::invalid_length(role, count, role.minimum_len()));
        }
        Ok(count as usize)
    }

    /// Ask for exactly `count` bit tokens.
    pub fn read_bits(&mut self, count: usize, message: &str) -> Result<BitSeq> {
        self.prompt(message)?;

        // The count is unchecked against the input, so grow as tokens arrive
        let mut tokens = Vec::new();
        for _ in 0..count {
            tokens.push(self.next_token()?);
        }
        BitSeq::from_tokens(tokens.iter().map(String::as_str))
    }

    fn prompt(&mut self, message: &str) -> Result<()> {
        if self.show_prompts {
            write!(self.output, "{message}")?;
            self.output.flush()?;
        }
        Ok(())
    }

    /// Next whitespace-separated token, reading more lines as needed.
    fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input ended early").into());
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}
