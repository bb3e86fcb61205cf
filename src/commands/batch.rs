//! Batch command
//!
//! Automatically decodes every line of a file in parallel.

use crate::cipher::Cipher;
use crate::decoder::{AutoDecodeConfig, AutoDecoded, AutoDecoder};
use crate::dictionary::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// One decoded line
#[derive(Debug, Clone)]
pub struct BatchEntry {
    /// 1-based line number in the input
    pub line: usize,
    pub cipher_text: String,
    pub decoded: AutoDecoded,
}

/// Result of a batch run
#[derive(Debug, Clone)]
pub struct BatchResult {
    pub entries: Vec<BatchEntry>,
    pub duration: Duration,
    pub lines_per_second: f64,
}

impl BatchResult {
    /// Entries whose decoding contains at least one recognised word
    #[must_use]
    pub fn recognized(&self) -> usize {
        self.entries.iter().filter(|e| e.decoded.score > 0).count()
    }
}

/// Decode every non-blank line of `content`
///
/// Output order follows input order regardless of scheduling.
#[must_use]
pub fn run_batch(
    content: &str,
    cipher: Cipher,
    secret: &str,
    config: AutoDecodeConfig,
    dictionary: &Dictionary,
    show_progress: bool,
) -> BatchResult {
    let start = Instant::now();
    let lines: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect();

    let pb = if show_progress {
        let pb = ProgressBar::new(lines.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let decoder = AutoDecoder::new(cipher, dictionary, config);
    let entries: Vec<BatchEntry> = lines
        .par_iter()
        .map(|&(line, cipher_text)| {
            let decoded = decoder.decode(cipher_text, secret);
            pb.inc(1);
            BatchEntry {
                line,
                cipher_text: cipher_text.to_string(),
                decoded,
            }
        })
        .collect();

    pb.finish_with_message("done");

    let duration = start.elapsed();
    let lines_per_second = if duration.as_secs_f64() > 0.0 {
        entries.len() as f64 / duration.as_secs_f64()
    } else {
        0.0
    };

    BatchResult {
        entries,
        duration,
        lines_per_second,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_each_line_in_order() {
        let content = "\
0316251516110726060415160002241220251223120123121816

21140214231510230302192404142303131023022114191001131823
";
        let result = run_batch(
            content,
            Cipher::default(),
            "",
            AutoDecodeConfig::default(),
            Dictionary::french(),
            false,
        );
        assert_eq!(result.entries.len(), 2);
        assert_eq!(result.entries[0].line, 1);
        assert_eq!(result.entries[0].decoded.text, "RENDEZVOUS DEMAIN A LA PLAGE");
        assert_eq!(result.entries[1].line, 3);
        assert_eq!(
            result.entries[1].decoded.text,
            "LES ENFANTS JOUENT DANS LE JARDIN"
        );
        assert_eq!(result.recognized(), 2);
    }

    #[test]
    fn empty_input() {
        let result = run_batch(
            "\n  \n",
            Cipher::default(),
            "",
            AutoDecodeConfig::default(),
            Dictionary::french(),
            false,
        );
        assert!(result.entries.is_empty());
        assert_eq!(result.recognized(), 0);
    }
}
