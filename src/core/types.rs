// src/core/types.rs
use serde::Serialize;

/// A short run of decimal digits assigned to one Devanagari code point.
pub type DigitCode = &'static str;

/// Why an input was rejected before any mapping happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum InvalidReason {
    /// Empty or whitespace-only.
    Empty,
    /// Contains a decimal digit.
    ContainsDigit,
}

/// The script category of a raw input. Exactly one applies to any string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Classification {
    Devanagari,
    EnglishAscii,
    Mixed,
    Invalid(InvalidReason),
}

/// Output of the character mapper, before PIN derivation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MappedWord {
    /// Code points kept for presentation, in input order.
    pub display_characters: Vec<char>,
    /// One code per mapped code point, in input order.
    pub digit_codes: Vec<DigitCode>,
}

/// The result of one successful generation request.
/// Built once per request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedWord {
    /// Devanagari text produced from an ASCII input, if transliteration ran.
    pub transliterated: Option<String>,
    pub display_characters: Vec<char>,
    pub digit_codes: Vec<DigitCode>,
    pub pin4: String,
    pub pin6: String,
}

impl ProcessedWord {
    /// Concatenation of every digit code, recomputed on demand.
    pub fn raw_code(&self) -> String {
        self.digit_codes.concat()
    }
}
