//! Decoder front-end
//!
//! Sits between a shell (CLI, UI) and the classifier: gates manual input on
//! a minimum length and turns one capture into one classified result.

use serde::Serialize;
use std::sync::Arc;

use crate::capture::create_source;
use crate::classifier::PromotionClassifier;
use crate::Result;
use promo_decoder_config::{DecoderConfig, Settings};
use promo_decoder_core::{PromotionResult, PromotionTextSource};

/// Captured text together with its classification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedCapture {
    pub text: String,
    pub result: PromotionResult,
}

/// Promotion decoder
pub struct PromotionDecoder {
    classifier: PromotionClassifier,
    source: Arc<dyn PromotionTextSource>,
    config: DecoderConfig,
}

impl PromotionDecoder {
    pub fn new(config: DecoderConfig, source: Arc<dyn PromotionTextSource>) -> Self {
        Self {
            classifier: PromotionClassifier::new(),
            source,
            config,
        }
    }

    /// Build from settings, creating the configured capture source
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.decoder.clone(), create_source(&settings.capture))
    }

    /// Classify manually entered text
    ///
    /// Returns `None` while the input is shorter than `min_input_chars`;
    /// partial input is not worth classifying.
    pub fn decode_input(&self, text: &str) -> Option<PromotionResult> {
        let chars = text.chars().count();
        if chars < self.config.min_input_chars {
            tracing::trace!(chars, min = self.config.min_input_chars, "Input too short");
            return None;
        }
        Some(self.classifier.classify(text))
    }

    /// Capture one phrase and classify it
    pub async fn decode_capture(&self) -> Result<DecodedCapture> {
        tracing::info!(source = self.source.name(), "Capturing promotion text");

        let text = match self.source.capture_promotion_text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(source = self.source.name(), error = %e, "Capture failed");
                return Err(e.into());
            },
        };

        let result = self.classifier.classify(&text);
        tracing::info!(
            text = %text,
            promotion_type = %result.promotion_type,
            value = result.value,
            "Captured promotion decoded"
        );

        Ok(DecodedCapture { text, result })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::{CannedTextSource, DisabledTextSource};
    use crate::TextProcessingError;
    use promo_decoder_core::{Error, PromotionType};
    use std::time::Duration;

    fn canned(phrase: &str) -> Arc<dyn PromotionTextSource> {
        Arc::new(CannedTextSource::new(vec![phrase.to_string()], Duration::ZERO))
    }

    #[test]
    fn test_short_input_is_not_classified() {
        let decoder = PromotionDecoder::new(DecoderConfig::default(), canned("買一送一"));
        assert!(decoder.decode_input("").is_none());
        assert!(decoder.decode_input("7折").is_none());

        let result = decoder.decode_input("全館7折").unwrap();
        assert_eq!(result.promotion_type, PromotionType::Simple);
    }

    #[test]
    fn test_min_chars_counts_characters_not_bytes() {
        let decoder = PromotionDecoder::new(DecoderConfig::default(), canned("買一送一"));
        // 3 characters, 9 bytes
        let result = decoder.decode_input("85折").unwrap();
        assert_eq!(result.value, 8.5);
    }

    #[test]
    fn test_configurable_min_chars() {
        let config = DecoderConfig { min_input_chars: 1 };
        let decoder = PromotionDecoder::new(config, canned("買一送一"));
        let result = decoder.decode_input("x").unwrap();
        assert!(result.is_unknown());
    }

    #[tokio::test]
    async fn test_decode_capture() {
        let decoder = PromotionDecoder::new(DecoderConfig::default(), canned("滿千送百"));
        let decoded = decoder.decode_capture().await.unwrap();
        assert_eq!(decoded.text, "滿千送百");
        assert_eq!(decoded.result.promotion_type, PromotionType::Threshold);
        assert!((decoded.result.value - 9.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_decode_capture_propagates_failure() {
        let decoder =
            PromotionDecoder::new(DecoderConfig::default(), Arc::new(DisabledTextSource));
        let err = decoder.decode_capture().await.unwrap_err();
        assert!(matches!(
            err,
            TextProcessingError::Capture(Error::CaptureUnavailable)
        ));
    }

    #[test]
    fn test_from_settings() {
        let decoder = PromotionDecoder::from_settings(&Settings::default());
        assert!(decoder.decode_input("買一送一").is_some());
    }
}
