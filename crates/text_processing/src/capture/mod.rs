//! Promotion text capture
//!
//! Stand-ins for the OCR step. A real recogniser plugs in behind the same
//! `PromotionTextSource` trait.

mod canned;
mod disabled;

pub use canned::CannedTextSource;
pub use disabled::DisabledTextSource;

use promo_decoder_config::{CaptureConfig, CaptureProvider};
use promo_decoder_core::PromotionTextSource;
use std::sync::Arc;
use std::time::Duration;

/// Create a capture source based on config
pub fn create_source(config: &CaptureConfig) -> Arc<dyn PromotionTextSource> {
    match config.provider {
        CaptureProvider::Canned => Arc::new(CannedTextSource::new(
            config.phrases.clone(),
            Duration::from_millis(config.delay_ms),
        )),
        CaptureProvider::Disabled => Arc::new(DisabledTextSource),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_canned_by_default() {
        let source = create_source(&CaptureConfig::default());
        assert_eq!(source.name(), "canned");
    }

    #[test]
    fn test_create_disabled() {
        let config = CaptureConfig {
            provider: CaptureProvider::Disabled,
            ..Default::default()
        };
        let source = create_source(&config);
        assert_eq!(source.name(), "disabled");
    }
}
