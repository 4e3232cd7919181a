use crate::core::classifier::classify;
use crate::core::converter::{ItransConverter, Transliterate};
use crate::core::deriver::derive_pins;
use crate::core::mapper::map_word;
use crate::core::types::{Classification, InvalidReason, ProcessedWord};
use crate::error::{PinError, TransliterationError};
use tracing::{debug, debug_span};

/// The PIN pipeline: classify, transliterate ASCII input, map, derive.
/// Holds no per-request state, so one engine serves any number of requests.
pub struct PinEngine<T = ItransConverter> {
    transliterator: T,
}

impl PinEngine {
    pub fn new() -> Self {
        Self::with_transliterator(ItransConverter::new())
    }
}

impl Default for PinEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transliterate> PinEngine<T> {
    pub fn with_transliterator(transliterator: T) -> Self {
        Self { transliterator }
    }

    /// Turns one user-supplied word into a [`ProcessedWord`], or the first failure hit.
    pub fn generate_pin(&self, word: &str) -> Result<ProcessedWord, PinError> {
        let _span = debug_span!("generate_pin").entered();

        let classification = classify(word);
        debug!(?classification);

        let transliterated = match classification {
            Classification::Invalid(InvalidReason::Empty) => return Err(PinError::EmptyInput),
            Classification::Invalid(InvalidReason::ContainsDigit) => {
                return Err(PinError::InvalidCharacter)
            }
            Classification::Mixed => return Err(PinError::MixedScript),
            Classification::EnglishAscii => Some(self.transliterate(word)?),
            Classification::Devanagari => None,
        };
        let text = transliterated.as_deref().unwrap_or(word);

        let mapped = map_word(text);
        // An empty code list comes back as EmptyMapping via EmptyCodeError.
        let pins = derive_pins(&mapped.digit_codes)?;

        Ok(ProcessedWord {
            transliterated,
            display_characters: mapped.display_characters,
            digit_codes: mapped.digit_codes,
            pin4: pins.pin4,
            pin6: pins.pin6,
        })
    }

    fn transliterate(&self, word: &str) -> Result<String, PinError> {
        let normalized = word.trim().to_lowercase();
        let converted = self.transliterator.transliterate(&normalized)?;
        if converted.trim().is_empty() {
            return Err(TransliterationError::Empty.into());
        }
        debug!(input = %normalized, output = %converted, "transliterated");
        Ok(converted)
    }
}

/// Runs [`PinEngine::generate_pin`] with the built-in ITRANS converter.
pub fn generate_pin(word: &str) -> Result<ProcessedWord, PinError> {
    PinEngine::new().generate_pin(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str);

    impl Transliterate for Fixed {
        fn transliterate(&self, _: &str) -> Result<String, TransliterationError> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn test_devanagari_word() {
        let result = generate_pin("भारत").unwrap();
        assert_eq!(result.transliterated, None);
        assert_eq!(result.pin4, "4127");
        assert_eq!(result.pin6, "412741");
        assert_eq!(result.raw_code(), "4127");
    }

    #[test]
    fn test_ascii_word_goes_through_adapter() {
        let result = generate_pin("  Bharat ").unwrap();
        assert_eq!(result.transliterated.as_deref(), Some("भरत"));
        assert_eq!(result.digit_codes, vec!["4", "2", "7"]);
        assert_eq!(result.pin4, "4274");
        assert_eq!(result.pin6, "427427");
    }

    #[test]
    fn test_failures_in_order() {
        assert_eq!(generate_pin("   "), Err(PinError::EmptyInput));
        assert_eq!(generate_pin("123"), Err(PinError::InvalidCharacter));
        assert_eq!(generate_pin("bhaरत"), Err(PinError::MixedScript));
        assert_eq!(generate_pin("\u{094D}"), Err(PinError::EmptyMapping));
    }

    #[test]
    fn test_blank_adapter_output_fails() {
        let engine = PinEngine::with_transliterator(Fixed("  "));
        assert_eq!(
            engine.generate_pin("anything"),
            Err(PinError::TransliterationFailure(TransliterationError::Empty))
        );
    }

    #[test]
    fn test_adapter_output_without_codes() {
        let engine = PinEngine::with_transliterator(Fixed("ट"));
        assert_eq!(engine.generate_pin("ta"), Err(PinError::EmptyMapping));
    }
}
