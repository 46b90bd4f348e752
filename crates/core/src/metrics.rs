//! Metrics collection and reporting for a simulated CRC link.
//!
//! Each word that goes sender → channel → receiver is recorded once. The
//! interesting numbers are how much of the corruption the CRC caught and how
//! much slipped through as undetected errors.
//!
//! # Thread Safety
//!
//! The `Metrics` struct is NOT thread-safe. For multi-threaded use, wrap in
//! `Arc<Mutex<Metrics>>` or keep per-thread metrics and merge them.

use crate::channel::Transmission;
use crate::decoder::Decoded;
use std::time::{Duration, Instant};

/// Counters for one simulation run.
#[derive(Debug, Clone)]
pub struct Metrics {
    // === Timing ===
    /// When the run started
    pub start_time: Instant,

    /// When the run ended (set on completion)
    pub end_time: Option<Instant>,

    // === Sender ===
    /// Datawords encoded
    pub words_encoded: u64,

    /// Dataword bits across all words
    pub data_bits: u64,

    /// CRC check bits across all words
    pub check_bits: u64,

    // === Channel ===
    /// Words with at least one flipped bit
    pub words_corrupted: u64,

    /// Bits flipped in transit
    pub bits_flipped: u64,

    // === Receiver ===
    /// Words whose remainder was all zeros
    pub words_accepted: u64,

    /// Words whose remainder had a set bit
    pub words_rejected: u64,

    /// Corrupted words that were still accepted
    pub undetected_errors: u64,

    /// Intact words that were rejected (always zero for a correct divider)
    pub false_rejections: u64,
}

impl Metrics {
    /// Create new metrics with start time set to now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            words_encoded: 0,
            data_bits: 0,
            check_bits: 0,
            words_corrupted: 0,
            bits_flipped: 0,
            words_accepted: 0,
            words_rejected: 0,
            undetected_errors: 0,
            false_rejections: 0,
        }
    }

    /// Record one word's trip through the link.
    pub fn record(&mut self, data_bits: usize, transmission: &Transmission, decoded: &Decoded) {
        self.words_encoded += 1;
        self.data_bits += data_bits as u64;
        self.check_bits += decoded.remainder.len() as u64;
        self.bits_flipped += transmission.flipped.len() as u64;

        let corrupted = transmission.is_corrupted();
        if corrupted {
            self.words_corrupted += 1;
        }

        match (decoded.is_accepted(), corrupted) {
            (true, false) => self.words_accepted += 1,
            (true, true) => {
                self.words_accepted += 1;
                self.undetected_errors += 1;
            }
            (false, true) => self.words_rejected += 1,
            (false, false) => {
                self.words_rejected += 1;
                self.false_rejections += 1;
            }
        }
    }

    /// Mark the run as complete.
    pub fn complete(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Get total duration (or current elapsed if not complete).
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    /// Check bits as a fraction of all transmitted bits.
    pub fn overhead_ratio(&self) -> f64 {
        let total = self.data_bits + self.check_bits;
        if total == 0 {
            0.0
        } else {
            self.check_bits as f64 / total as f64
        }
    }

    /// Fraction of corrupted words the receiver rejected.
    ///
    /// Returns 1.0 when nothing was corrupted.
    pub fn detection_rate(&self) -> f64 {
        if self.words_corrupted == 0 {
            1.0
        } else {
            (self.words_corrupted - self.undetected_errors) as f64 / self.words_corrupted as f64
        }
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Link Summary ===");
        println!("Duration: {} ms", self.duration().as_millis());
        println!();

        println!("=== Sender ===");
        println!("Words encoded: {}", self.words_encoded);
        println!("Data bits: {}", self.data_bits);
        println!("Check bits: {}", self.check_bits);
        println!("Overhead: {:.1}%", self.overhead_ratio() * 100.0);
        println!();

        println!("=== Channel ===");
        println!("Words corrupted: {}", self.words_corrupted);
        println!("Bits flipped: {}", self.bits_flipped);
        println!();

        println!("=== Receiver ===");
        println!("Accepted: {}", self.words_accepted);
        println!("Rejected: {}", self.words_rejected);
        println!("Undetected errors: {}", self.undetected_errors);
        println!("False rejections: {}", self.false_rejections);
        println!("Detection rate: {:.2}%", self.detection_rate() * 100.0);
        println!();
    }

    /// Print just the final result (pass/fail).
    pub fn print_result(&self) {
        if self.false_rejections > 0 {
            println!("✗ {} intact words were rejected", self.false_rejections);
        } else if self.undetected_errors == 0 {
            println!("✓ Every corrupted word was detected");
            println!(
                "  {} of {} words corrupted in transit",
                self.words_corrupted, self.words_encoded
            );
        } else {
            println!(
                "✗ {} of {} corrupted words went undetected",
                self.undetected_errors, self.words_corrupted
            );
        }
    }

    /// Export metrics as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "duration_ms={}\n\
             words_encoded={}\n\
             data_bits={}\n\
             check_bits={}\n\
             overhead_ratio={:.4}\n\
             words_corrupted={}\n\
             bits_flipped={}\n\
             words_accepted={}\n\
             words_rejected={}\n\
             undetected_errors={}\n\
             false_rejections={}\n\
             detection_rate={:.4}\n",
            self.duration().as_millis(),
            self.words_encoded,
            self.data_bits,
            self.check_bits,
            self.overhead_ratio(),
            self.words_corrupted,
            self.bits_flipped,
            self.words_accepted,
            self.words_rejected,
            self.undetected_errors,
            self.false_rejections,
            self.detection_rate(),
        )
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::BitSeq;

    fn transmission(word: &str, flipped: Vec<usize>) -> Transmission {
        Transmission {
            word: word.parse().unwrap(),
            flipped,
        }
    }

    fn decoded(remainder: &str) -> Decoded {
        Decoded {
            dataword: BitSeq::zeros(4),
            quotient: BitSeq::zeros(4),
            remainder: remainder.parse().unwrap(),
        }
    }

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new();
        assert!(metrics.end_time.is_none());
        assert!(metrics.duration().as_millis() < 100);
        assert_eq!(metrics.detection_rate(), 1.0);
        assert_eq!(metrics.overhead_ratio(), 0.0);
    }

    #[test]
    fn test_record_outcomes() {
        let mut metrics = Metrics::new();

        metrics.record(4, &transmission("1010001", vec![]), &decoded("000"));
        metrics.record(4, &transmission("1110001", vec![1]), &decoded("110"));
        metrics.record(4, &transmission("0111001", vec![0, 3, 4]), &decoded("000"));
        metrics.record(4, &transmission("1010001", vec![]), &decoded("001"));

        assert_eq!(metrics.words_encoded, 4);
        assert_eq!(metrics.data_bits, 16);
        assert_eq!(metrics.check_bits, 12);
        assert_eq!(metrics.words_corrupted, 2);
        assert_eq!(metrics.bits_flipped, 4);
        assert_eq!(metrics.words_accepted, 2);
        assert_eq!(metrics.words_rejected, 2);
        assert_eq!(metrics.undetected_errors, 1);
        assert_eq!(metrics.false_rejections, 1);
        assert_eq!(metrics.detection_rate(), 0.5);
    }

    #[test]
    fn test_overhead_ratio() {
        let mut metrics = Metrics::new();
        metrics.data_bits = 300;
        metrics.check_bits = 100;

        assert_eq!(metrics.overhead_ratio(), 0.25);
    }

    #[test]
    fn test_export_text() {
        let mut metrics = Metrics::new();
        metrics.words_encoded = 10;
        metrics.words_corrupted = 4;
        metrics.undetected_errors = 1;
        metrics.complete();

        let text = metrics.export_text();
        assert!(text.contains("words_encoded=10"));
        assert!(text.contains("words_corrupted=4"));
        assert!(text.contains("detection_rate=0.7500"));
    }
}
