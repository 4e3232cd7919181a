// C boundary for a host UI. Strings in and out are UTF-8; every returned
// string must be released with `devanagari_pin_free_string`.
use crate::core::classifier::classify;
use crate::core::types::{Classification, ProcessedWord};
use crate::PinEngine;
use serde::Serialize;
use std::ffi::{c_char, CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum Response {
    Ok(ProcessedWord),
    Error { kind: &'static str, message: String },
}

/// Reads a caller-owned C string. `None` for null or invalid UTF-8.
unsafe fn read_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    CStr::from_ptr(s).to_str().ok()
}

fn generate_json(word: &str) -> String {
    let response = match PinEngine::new().generate_pin(word) {
        Ok(processed) => Response::Ok(processed),
        Err(e) => Response::Error {
            kind: e.kind(),
            message: e.to_string(),
        },
    };
    serde_json::to_string(&response).unwrap_or_else(|e| {
        tracing::error!("failed to serialize response: {e}");
        r#"{"status":"error","kind":"Internal","message":"Processing error. Please try again."}"#
            .to_string()
    })
}

/// Generates PINs for `word` and returns a JSON document, or null if `word`
/// is null or not UTF-8.
///
/// # Safety
/// `word` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn devanagari_pin_generate(word: *const c_char) -> *mut c_char {
    let Some(word) = read_str(word) else {
        return ptr::null_mut();
    };
    let result = catch_unwind(AssertUnwindSafe(|| generate_json(word)));
    let json = result.unwrap_or_else(|_| {
        tracing::error!("panic in devanagari_pin_generate");
        r#"{"status":"error","kind":"Internal","message":"Processing error. Please try again."}"#
            .to_string()
    });
    // serde_json escapes control characters, so no interior NUL can appear.
    CString::new(json).map_or(ptr::null_mut(), CString::into_raw)
}

/// 0 Devanagari, 1 EnglishAscii, 2 Mixed, 3 Invalid, -1 for null or non-UTF-8 input.
///
/// # Safety
/// `word` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn devanagari_pin_classify(word: *const c_char) -> i32 {
    match read_str(word).map(classify) {
        Some(Classification::Devanagari) => 0,
        Some(Classification::EnglishAscii) => 1,
        Some(Classification::Mixed) => 2,
        Some(Classification::Invalid(_)) => 3,
        None => -1,
    }
}

/// # Safety
/// `s` must be null or a pointer previously returned by this library.
#[no_mangle]
pub unsafe extern "C" fn devanagari_pin_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
