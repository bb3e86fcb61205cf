//! Formatting utilities for terminal output

/// Split a cipher text into space-separated code units for reading
#[must_use]
pub fn group_units(cipher_text: &str) -> String {
    let chars: Vec<char> = cipher_text.chars().filter(|c| !c.is_whitespace()).collect();
    chars
        .chunks(2)
        .map(|pair| pair.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Recognition score as a bar, full at the score of the whole text as one word
#[must_use]
pub fn score_bar(score: usize, text: &str, width: usize) -> String {
    let letters = text.chars().filter(|c| !c.is_whitespace()).count();
    create_progress_bar(score as f64, (letters * letters) as f64, width)
}
