//! Property-based checks for the classifier and the PIN pipeline.

use proptest::prelude::*;

use pin_core::core::deriver::derive_pins;
use pin_core::{classify, generate_pin, Classification, InvalidReason, PinError};

fn arb_devanagari_word() -> impl Strategy<Value = String> {
    // Letters, matras, virama and a few unmapped signs.
    prop::collection::vec(
        prop_oneof![
            4 => (0x0905u32..=0x0939).prop_map(|cp| char::from_u32(cp).unwrap()),
            2 => prop::sample::select(vec!['ा', 'ि', 'ी', 'ो', 'ौ', 'ु', 'ू']),
            1 => prop::sample::select(vec!['\u{094D}', 'ं', 'े', 'ै', '़']),
        ],
        1..12,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn arb_digit_code() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["0", "1", "5", "9", "01", "21", "31", "51", "311"])
}

proptest! {
    #[test]
    fn classify_is_total_and_consistent(s in any::<String>()) {
        let c = classify(&s);
        let trimmed = s.trim();
        match c {
            Classification::Invalid(InvalidReason::Empty) => {
                prop_assert!(trimmed.is_empty());
            }
            Classification::Invalid(InvalidReason::ContainsDigit) => {
                prop_assert!(trimmed.chars().any(char::is_numeric));
            }
            Classification::EnglishAscii => {
                prop_assert!(!trimmed.is_empty());
                prop_assert!(trimmed.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace()));
            }
            Classification::Mixed => {
                prop_assert!(trimmed.chars().any(|c| c.is_ascii_alphabetic()));
                prop_assert!(!trimmed.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace()));
            }
            Classification::Devanagari => {
                prop_assert!(!trimmed.chars().any(|c| c.is_ascii_alphabetic() || c.is_numeric()));
            }
        }
    }

    #[test]
    fn ascii_letters_never_classify_as_devanagari(s in "[a-zA-Z ]{1,20}") {
        prop_assume!(!s.trim().is_empty());
        prop_assert_eq!(classify(&s), Classification::EnglishAscii);
    }

    #[test]
    fn any_unicode_digit_rejects_the_word(
        word in arb_devanagari_word(),
        digit in prop::sample::select(vec!['3', '३', '３', '৩', '٣']),
        pos in 0usize..12,
    ) {
        let mut chars: Vec<char> = word.chars().collect();
        chars.insert(pos.min(chars.len()), digit);
        let input: String = chars.into_iter().collect();
        prop_assert_eq!(generate_pin(&input), Err(PinError::InvalidCharacter));
    }

    #[test]
    fn pins_have_fixed_lengths(codes in prop::collection::vec(arb_digit_code(), 1..10)) {
        let pins = derive_pins(&codes).unwrap();
        let raw = codes.concat();
        prop_assert_eq!(pins.pin4.len(), 4);
        prop_assert_eq!(pins.pin6.len(), 6);
        prop_assert!(pins.pin4.bytes().all(|b| b.is_ascii_digit()));
        prop_assert!(pins.pin6.bytes().all(|b| b.is_ascii_digit()));
        // Both PINs start with the raw code (or a prefix of it).
        let head = &raw[..raw.len().min(4)];
        prop_assert!(pins.pin4.starts_with(head));
    }

    #[test]
    fn devanagari_pipeline_is_deterministic(word in arb_devanagari_word()) {
        let first = generate_pin(&word);
        let second = generate_pin(&word);
        prop_assert_eq!(&first, &second);
        match first {
            Ok(p) => {
                prop_assert_eq!(p.pin4.len(), 4);
                prop_assert_eq!(p.pin6.len(), 6);
                prop_assert!(!p.digit_codes.is_empty());
            }
            Err(e) => {
                prop_assert_eq!(e, PinError::EmptyMapping);
            }
        }
    }

    #[test]
    fn ascii_pipeline_yields_fixed_lengths(word in "[a-z]{1,12}") {
        if let Ok(p) = generate_pin(&word) {
            prop_assert_eq!(p.pin4.len(), 4);
            prop_assert_eq!(p.pin6.len(), 6);
            prop_assert!(p.transliterated.is_some());
        }
    }
}
