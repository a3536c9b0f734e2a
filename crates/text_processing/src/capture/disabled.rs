//! Capture source used when no recogniser is configured

use async_trait::async_trait;
use promo_decoder_core::{Error, PromotionTextSource, Result};

/// Always reports that capture is unavailable
pub struct DisabledTextSource;

#[async_trait]
impl PromotionTextSource for DisabledTextSource {
    async fn capture_promotion_text(&self) -> Result<String> {
        Err(Error::CaptureUnavailable)
    }

    fn name(&self) -> &str {
        "disabled"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_fails() {
        let result = DisabledTextSource.capture_promotion_text().await;
        assert_eq!(result, Err(Error::CaptureUnavailable));
    }
}
