// src/core/table.rs
use crate::core::types::DigitCode;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Dependent vowel signs that carry a code and are shown in the breakdown.
pub const MATRAS: [char; 7] = ['ा', 'ि', 'ी', 'ो', 'ौ', 'ु', 'ू'];

/// First and last code point of the letter range kept for display (अ..ह).
pub const LETTER_FIRST: char = '\u{0905}';
pub const LETTER_LAST: char = '\u{0939}';

const ENTRIES: &[(char, DigitCode)] = &[
    // Independent vowels
    ('अ', "31"), ('आ', "311"), ('इ', "5"), ('ई', "5"), ('उ', "3"), ('ऊ', "3"),
    ('ए', "1"), ('ऐ', "1"), ('ओ', "311"), ('औ', "311"),
    // Consonants
    ('क', "9"), ('ख', "21"), ('ग', "1"), ('घ', "1"), ('ङ', "5"),
    ('च', "1"), ('छ', "8"), ('ज', "1"), ('झ', "51"), ('ञ', "01"),
    ('ठ', "0"), ('ड', "5"), ('ढ', "6"), ('ण', "01"),
    ('त', "7"), ('थ', "1"), ('द', "6"), ('ध', "1"), ('न', "7"),
    ('प', "4"), ('फ', "4"), ('ब', "9"), ('भ', "4"), ('म', "4"),
    ('य', "4"), ('र', "2"), ('ल', "1"), ('व', "9"),
    ('श', "21"), ('ष', "4"), ('स', "21"), ('ह', "5"),
    // Matras
    ('ा', "1"), ('ि', "1"), ('ी', "1"), ('ो', "1"), ('ौ', "1"), ('ू', "9"), ('ु', "6"),
];

/// Process-wide, read-only mapping from a Devanagari code point to its digit code.
pub struct CharacterCodeTable {
    codes: HashMap<char, DigitCode>,
}

impl CharacterCodeTable {
    /// Get or initialize the global table.
    pub fn global() -> &'static CharacterCodeTable {
        static INSTANCE: OnceLock<CharacterCodeTable> = OnceLock::new();
        INSTANCE.get_or_init(|| CharacterCodeTable {
            codes: ENTRIES.iter().copied().collect(),
        })
    }

    /// Returns `None` for any code point outside the table (halant, punctuation, ...).
    pub fn lookup(&self, c: char) -> Option<DigitCode> {
        self.codes.get(&c).copied()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// All entries in table order, for listing.
    pub fn entries(&self) -> &'static [(char, DigitCode)] {
        ENTRIES
    }
}

/// True for code points shown in the word breakdown.
pub fn is_display_char(c: char) -> bool {
    MATRAS.contains(&c) || (LETTER_FIRST..=LETTER_LAST).contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_and_matras() {
        let table = CharacterCodeTable::global();
        assert_eq!(table.lookup('क'), Some("9"));
        assert_eq!(table.lookup('आ'), Some("311"));
        assert_eq!(table.lookup('ु'), Some("6"));
        assert_eq!(table.lookup('ू'), Some("9"));
    }

    #[test]
    fn test_unmapped_signs() {
        let table = CharacterCodeTable::global();
        assert_eq!(table.lookup('\u{094D}'), None); // virama
        assert_eq!(table.lookup('े'), None);
        assert_eq!(table.lookup('ट'), None);
        assert_eq!(table.lookup('a'), None);
    }

    #[test]
    fn test_no_duplicate_keys() {
        assert_eq!(CharacterCodeTable::global().len(), ENTRIES.len());
    }

    #[test]
    fn test_codes_are_short_digit_runs() {
        for (c, code) in ENTRIES {
            assert!((1..=3).contains(&code.len()), "{c}");
            assert!(code.bytes().all(|b| b.is_ascii_digit()), "{c}");
        }
    }

    #[test]
    fn test_keys_are_letters_or_matras() {
        for (c, _) in ENTRIES {
            assert!(is_display_char(*c), "{c}");
        }
    }

    #[test]
    fn test_display_filter() {
        assert!(is_display_char('अ'));
        assert!(is_display_char('ह'));
        assert!(is_display_char('ट'));
        assert!(!is_display_char('\u{094D}'));
        assert!(!is_display_char('े'));
        assert!(!is_display_char('ं'));
    }
}
