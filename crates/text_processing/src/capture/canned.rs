//! Fixed-delay capture stub
//!
//! Simulates recognition latency, then returns one of a configured set of
//! phrases at random.

use async_trait::async_trait;
use promo_decoder_config::constants::capture;
use promo_decoder_core::{Error, PromotionTextSource, Result};
use rand::seq::SliceRandom;
use std::time::Duration;

/// Canned OCR stand-in
pub struct CannedTextSource {
    phrases: Vec<String>,
    delay: Duration,
}

impl Default for CannedTextSource {
    fn default() -> Self {
        Self::new(
            capture::CANNED_PHRASES.iter().map(|p| p.to_string()).collect(),
            Duration::from_millis(capture::DELAY_MS),
        )
    }
}

impl CannedTextSource {
    pub fn new(phrases: Vec<String>, delay: Duration) -> Self {
        Self { phrases, delay }
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }
}

#[async_trait]
impl PromotionTextSource for CannedTextSource {
    async fn capture_promotion_text(&self) -> Result<String> {
        tokio::time::sleep(self.delay).await;

        let phrase = {
            let mut rng = rand::thread_rng();
            self.phrases.choose(&mut rng).cloned()
        };

        let phrase = phrase.ok_or(Error::EmptyCapture)?;
        tracing::debug!(phrase = %phrase, "Canned capture returned");
        Ok(phrase)
    }

    fn name(&self) -> &str {
        "canned"
    }
}
