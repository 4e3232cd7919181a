// src/core/classifier.rs
use crate::core::types::{Classification, InvalidReason};

/// Any Unicode digit, not only ASCII: ३, ３ and ৩ all count.
fn is_decimal_digit(c: char) -> bool {
    c.is_numeric()
}

/// Sorts a raw input into exactly one script category.
/// Total over all strings; checks run in a fixed order so the cases never overlap.
pub fn classify(word: &str) -> Classification {
    let trimmed = word.trim();
    if trimmed.is_empty() {
        return Classification::Invalid(InvalidReason::Empty);
    }
    if trimmed.chars().any(is_decimal_digit) {
        return Classification::Invalid(InvalidReason::ContainsDigit);
    }
    if trimmed
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
    {
        return Classification::EnglishAscii;
    }
    // At this point something non-ASCII-letter is present, so any ASCII letter means interleaving.
    if trimmed.chars().any(|c| c.is_ascii_alphabetic()) {
        return Classification::Mixed;
    }
    Classification::Devanagari
}
