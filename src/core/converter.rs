// src/core/converter.rs
use crate::error::TransliterationError;

const HALANTA: char = '\u{094d}';
const ANUSVARA: char = '\u{0902}';

/// Longest roman sequence in the token table.
const MAX_TOKEN_LEN: usize = 3;

/// Anything that turns a lower-cased ASCII word into Devanagari text.
pub trait Transliterate {
    fn transliterate(&self, ascii_word: &str) -> Result<String, TransliterationError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    /// Independent form and the matra used after a consonant (`None` for the inherent `a`).
    Vowel(char, Option<char>),
    Consonant(&'static str),
    Anusvara,
    Virama,
}

fn lookup_token(s: &str) -> Option<Token> {
    use Token::{Consonant, Vowel};
    let token = match s {
        "a" => Vowel('अ', None),
        "aa" => Vowel('आ', Some('ा')),
        "i" => Vowel('इ', Some('ि')),
        "ii" | "ee" => Vowel('ई', Some('ी')),
        "u" => Vowel('उ', Some('ु')),
        "uu" | "oo" => Vowel('ऊ', Some('ू')),
        "e" => Vowel('ए', Some('े')),
        "ai" => Vowel('ऐ', Some('ै')),
        "o" => Vowel('ओ', Some('ो')),
        "au" => Vowel('औ', Some('ौ')),

        "k" => Consonant("क"), "kh" => Consonant("ख"),
        "g" => Consonant("ग"), "gh" => Consonant("घ"),
        "c" | "ch" => Consonant("च"), "chh" => Consonant("छ"),
        "j" => Consonant("ज"), "jh" => Consonant("झ"), "~n" => Consonant("ञ"),
        "t" => Consonant("त"), "th" => Consonant("थ"),
        "d" => Consonant("द"), "dh" => Consonant("ध"), "n" => Consonant("न"),
        "p" => Consonant("प"), "ph" => Consonant("फ"), "f" => Consonant("फ़"),
        "b" => Consonant("ब"), "bh" => Consonant("भ"), "m" => Consonant("म"),
        "y" => Consonant("य"), "r" => Consonant("र"), "l" => Consonant("ल"),
        "v" | "w" => Consonant("व"),
        "sh" => Consonant("श"), "shh" => Consonant("ष"), "s" => Consonant("स"),
        "h" => Consonant("ह"),
        "x" => Consonant("क्ष"), "z" => Consonant("ज़"), "q" => Consonant("क़"),

        ".n" => Token::Anusvara,
        ".h" => Token::Virama,
        _ => return None,
    };
    Some(token)
}

/// Greedy longest match at the start of `rest`. Returns the token and its byte length.
fn next_token(rest: &str) -> Option<(Token, usize)> {
    (1..=MAX_TOKEN_LEN.min(rest.len()))
        .rev()
        .filter(|&n| rest.is_char_boundary(n))
        .find_map(|n| lookup_token(&rest[..n]).map(|token| (token, n)))
}

/// ITRANS-style Romanization to Devanagari converter.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItransConverter;

impl ItransConverter {
    pub fn new() -> Self {
        Self
    }
}

impl Transliterate for ItransConverter {
    /// Transliterates a full roman string. Consonants carry a pending halant
    /// that a following vowel removes; a halant left at a word end is dropped.
    fn transliterate(&self, roman: &str) -> Result<String, TransliterationError> {
        let mut result = String::new();
        let mut rest = roman;
        let mut last_was_consonant = false;

        while let Some(c) = rest.chars().next() {
            if c.is_whitespace() {
                if last_was_consonant && result.ends_with(HALANTA) {
                    result.pop();
                }
                result.push(c);
                last_was_consonant = false;
                rest = &rest[c.len_utf8()..];
                continue;
            }

            let (token, len) = next_token(rest)
                .ok_or_else(|| TransliterationError::Unparseable(roman.to_string()))?;
            rest = &rest[len..];

            match token {
                Token::Vowel(independent, matra) => {
                    if last_was_consonant {
                        if result.ends_with(HALANTA) {
                            result.pop();
                        }
                        if let Some(m) = matra {
                            result.push(m);
                        }
                    } else {
                        result.push(independent);
                    }
                    last_was_consonant = false;
                }
                Token::Consonant(cons) => {
                    result.push_str(cons);
                    result.push(HALANTA);
                    last_was_consonant = true;
                }
                Token::Anusvara => {
                    if last_was_consonant && result.ends_with(HALANTA) {
                        result.pop();
                    }
                    result.push(ANUSVARA);
                    last_was_consonant = false;
                }
                Token::Virama => {
                    // An explicit halant survives the word-end drop.
                    if !last_was_consonant {
                        result.push(HALANTA);
                    }
                    last_was_consonant = false;
                }
            }
        }

        if last_was_consonant && result.ends_with(HALANTA) {
            result.pop();
        }

        if result.trim().is_empty() {
            return Err(TransliterationError::Empty);
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(roman: &str) -> String {
        ItransConverter::new().transliterate(roman).unwrap()
    }

    #[test]
    fn test_inherent_vowel_and_final_halant() {
        assert_eq!(t("bharat"), "भरत");
        assert_eq!(t("kamal"), "कमल");
    }

    #[test]
    fn test_long_vowels_and_matras() {
        assert_eq!(t("bhaarat"), "भारत");
        assert_eq!(t("guru"), "गुरु");
        assert_eq!(t("devii"), "देवी");
        assert_eq!(t("maum"), "मौम");
    }

    #[test]
    fn test_conjuncts_keep_halant() {
        assert_eq!(t("parva"), "पर्व");
        assert_eq!(t("namaste"), "नमस्ते");
    }

    #[test]
    fn test_independent_vowels() {
        assert_eq!(t("aam"), "आम");
        assert_eq!(t("ii"), "ई");
        assert_eq!(t("u"), "उ");
    }

    #[test]
    fn test_aspirates_take_longest_match() {
        assert_eq!(t("chhatra"), "छत्र");
        assert_eq!(t("chaa"), "चा");
        assert_eq!(t("khaana"), "खाना");
    }

    #[test]
    fn test_signs() {
        assert_eq!(t("ga.nga"), "गंग");
        assert_eq!(t("jagat.h"), "जगत्");
    }

    #[test]
    fn test_words_are_separated() {
        assert_eq!(t("bharat mata"), "भरत मत");
        assert_eq!(t("raam  siitaa"), "राम  सीता");
    }

    #[test]
    fn test_failures() {
        let conv = ItransConverter::new();
        assert_eq!(conv.transliterate(""), Err(TransliterationError::Empty));
        assert_eq!(conv.transliterate("   "), Err(TransliterationError::Empty));
        assert!(matches!(
            conv.transliterate("ka!"),
            Err(TransliterationError::Unparseable(_))
        ));
        assert!(matches!(
            conv.transliterate("~"),
            Err(TransliterationError::Unparseable(_))
        ));
    }
}
