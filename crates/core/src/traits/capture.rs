//! Promotion text capture interface

use crate::Result;
use async_trait::async_trait;

/// Source of raw promotional text (camera OCR, image upload, etc.)
///
/// Implementations:
/// - `CannedTextSource` - fixed-delay stub returning a canned phrase
/// - `DisabledTextSource` - always reports that capture is unavailable
///
/// A call is made at most once per user action and resolves exactly once.
/// Timeouts and cancellation are the implementation's concern.
///
/// # Example
///
/// ```ignore
/// let source: Arc<dyn PromotionTextSource> = Arc::new(CannedTextSource::default());
/// let text = source.capture_promotion_text().await?;
/// let result = classify(&text);
/// ```
#[async_trait]
pub trait PromotionTextSource: Send + Sync + 'static {
    /// Capture a single promotional phrase
    async fn capture_promotion_text(&self) -> Result<String>;

    /// Source name for logging
    fn name(&self) -> &str;
}
