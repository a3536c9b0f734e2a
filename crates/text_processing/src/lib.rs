//! Promotion phrase decoding
//!
//! This crate turns free-form Chinese promotional copy into an effective
//! discount rate on the 折 scale:
//! - **Numerals**: Arabic digits, Chinese digit characters and 半
//! - **Prices**: literal base prices such as `50元`, `$30`, `1件100`
//! - **Classifier**: ordered matchers, one per promotion family
//! - **Capture**: OCR stand-ins behind `PromotionTextSource`
//! - **Decoder**: input gating and capture-then-classify orchestration
//!
//! # Example
//!
//! ```
//! use promo_decoder_text_processing::classify;
//! use promo_decoder_core::PromotionType;
//!
//! let result = classify("買一送一");
//! assert_eq!(result.promotion_type, PromotionType::Bogo);
//! assert_eq!(result.value, 5.0);
//! ```

pub mod capture;
pub mod classifier;
pub mod numeral;
pub mod prices;

mod decoder;
mod error;
mod format;

pub use error::{Result, TextProcessingError};

pub use capture::{create_source, CannedTextSource, DisabledTextSource};
pub use classifier::{classify, PromotionClassifier, PromotionText};
pub use decoder::{DecodedCapture, PromotionDecoder};
pub use numeral::normalize;
pub use prices::extract_prices;
