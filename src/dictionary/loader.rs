//! Word list loading utilities
//!
//! Extra words can be supplied in a plain text file, one word per line.

use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Blank lines and lines starting with `#` are skipped. Words are lower-cased
/// with accents folded, the form the dictionary stores.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use courrier_code::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/extra_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Normalise and filter the lines of a word list
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| crate::core::fold_diacritics(line).to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_lines_skips_blank_and_comments() {
        let words = words_from_lines("# header\nchat\n\n  chien  \n# tail\n");
        assert_eq!(words, vec!["chat", "chien"]);
    }

    #[test]
    fn words_from_lines_normalises() {
        let words = words_from_lines("Éléphant\nGARÇON\n");
        assert_eq!(words, vec!["elephant", "garcon"]);
    }

    #[test]
    fn words_from_lines_empty() {
        assert!(words_from_lines("").is_empty());
    }

    #[test]
    fn load_missing_file_is_an_error() {
        assert!(load_from_file("/nonexistent/words.txt").is_err());
    }
}
