//! Formatting utilities for terminal output

use crate::core::LetterSet;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a letter set, or a dash when empty
#[must_use]
pub fn format_letters(letters: &LetterSet) -> String {
    if letters.is_empty() {
        "-".to_string()
    } else {
        letters.to_string()
    }
}

/// Format per-slot exclusions like `1:ae 4:y`
#[must_use]
pub fn format_exclusions(exclusions: &[(usize, LetterSet)]) -> String {
    if exclusions.is_empty() {
        return "-".to_string();
    }

    exclusions
        .iter()
        .map(|(position, letters)| format!("{position}:{letters}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a slot's most frequent letters like `h×2 j×1`
#[must_use]
pub fn format_letter_ranks(ranks: &[(char, u32)]) -> String {
    if ranks.is_empty() {
        return "-".to_string();
    }

    ranks
        .iter()
        .map(|(letter, count)| format!("{letter}×{count}"))
        .collect::<Vec<_>>()
        .join(" ")
}
