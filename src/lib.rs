// src/lib.rs

pub mod c_api;
pub mod core;
pub mod error;
pub mod settings;

pub use crate::core::classifier::classify;
pub use crate::core::converter::{ItransConverter, Transliterate};
pub use crate::core::engine::{generate_pin, PinEngine};
pub use crate::core::types::{Classification, InvalidReason, ProcessedWord};
pub use crate::error::{PinError, TransliterationError};
