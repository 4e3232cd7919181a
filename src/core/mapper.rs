// src/core/mapper.rs
use crate::core::table::{is_display_char, CharacterCodeTable};
use crate::core::types::MappedWord;
use tracing::debug;

/// Walks a Devanagari word code point by code point.
///
/// The display list and the digit codes are both taken from the original
/// string: a code point hidden from display can still carry a code, and an
/// unmapped one is skipped without error.
pub fn map_word(word: &str) -> MappedWord {
    let table = CharacterCodeTable::global();

    let display_characters: Vec<char> = word.chars().filter(|&c| is_display_char(c)).collect();
    let digit_codes: Vec<_> = word.chars().filter_map(|c| table.lookup(c)).collect();

    debug!(
        code_points = word.chars().count(),
        mapped = digit_codes.len(),
        displayed = display_characters.len()
    );

    MappedWord {
        display_characters,
        digit_codes,
    }
}
