// src/error.rs
use thiserror::Error;

/// Failure of a transliteration adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransliterationError {
    #[error("transliteration produced no output")]
    Empty,
    #[error("cannot transliterate {0:?}")]
    Unparseable(String),
}

/// Raised by PIN derivation when there are no digits to work with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no digit codes to derive a PIN from")]
pub struct EmptyCodeError;

/// Every way a generation request can fail. The `Display` text is the
/// message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PinError {
    #[error("Please enter a Devanagari word")]
    EmptyInput,
    #[error("Invalid input. Please enter a Devanagari word")]
    InvalidCharacter,
    #[error("Please write only in Devanagari or only in English. Mixed input is not supported.")]
    MixedScript,
    #[error("Translation error. Please write in Devanagari.")]
    TransliterationFailure(#[source] TransliterationError),
    #[error("PIN cannot be generated from this word. Please enter a word with Devanagari characters.")]
    EmptyMapping,
}

impl PinError {
    /// Stable name for machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            PinError::EmptyInput => "EmptyInput",
            PinError::InvalidCharacter => "InvalidCharacter",
            PinError::MixedScript => "MixedScript",
            PinError::TransliterationFailure(_) => "TransliterationFailure",
            PinError::EmptyMapping => "EmptyMapping",
        }
    }
}

impl From<EmptyCodeError> for PinError {
    fn from(_: EmptyCodeError) -> Self {
        PinError::EmptyMapping
    }
}

impl From<TransliterationError> for PinError {
    fn from(e: TransliterationError) -> Self {
        PinError::TransliterationFailure(e)
    }
}
