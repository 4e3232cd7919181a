// src/core/deriver.rs
use crate::core::types::DigitCode;
use crate::error::EmptyCodeError;
use tracing::debug;

pub const PIN4_LEN: usize = 4;
pub const PIN6_LEN: usize = 6;

/// The two PINs derived from one raw code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pins {
    pub pin4: String,
    pub pin6: String,
}

/// Stretches `raw` by whole repetitions until it covers `len`, then truncates.
///
/// | n    | len = 4          | len = 6          |
/// |------|------------------|------------------|
/// | 1..2 | repeated         | repeated         |
/// | 3    | `(raw+raw)[..4]` | `raw+raw`        |
/// | 4    | `raw`            | `(raw+raw)[..6]` |
/// | 5    | `raw[..4]`       | `(raw+raw)[..6]` |
/// | 6+   | `raw[..4]`       | `raw[..6]`       |
///
/// `raw` must be non-empty ASCII.
fn fit(raw: &str, len: usize) -> String {
    let repeats = len.div_ceil(raw.len());
    let mut out = raw.repeat(repeats);
    out.truncate(len);
    out
}

/// Concatenates the digit codes and derives the 4- and 6-digit PINs.
/// A pure string operation; the code table is never consulted again.
pub fn derive_pins(digit_codes: &[DigitCode]) -> Result<Pins, EmptyCodeError> {
    let raw = digit_codes.concat();
    if raw.is_empty() {
        return Err(EmptyCodeError);
    }
    debug_assert!(raw.bytes().all(|b| b.is_ascii_digit()));

    let pins = Pins {
        pin4: fit(&raw, PIN4_LEN),
        pin6: fit(&raw, PIN6_LEN),
    };
    debug!(raw_len = raw.len(), pin4 = %pins.pin4, pin6 = %pins.pin6);
    Ok(pins)
}
