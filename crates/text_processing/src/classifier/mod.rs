//! Promotion classification
//!
//! Whitespace is stripped, literal prices are collected, and an ordered list
//! of matchers is tried. The first matcher whose pattern matches and whose
//! numeric preconditions hold decides the result; a matcher that declines
//! never retries, control just moves on to the next one. If nothing matches
//! the result is `PromotionType::Unknown`.
//!
//! Matcher order (earlier wins):
//! 1. Threshold (滿千送百)
//! 2. AddOne (加1元多1件)
//! 3. NthSave (第2件省50元)
//! 4. BOGO (買一送一)
//! 5. NthItem (第2件6折)
//! 6. BuyAGetB (買100元送50元)
//! 7. GroupDisc (2件8折)
//! 8. Simple (7折)

pub mod matchers;

use crate::prices::extract_prices;
use promo_decoder_core::{PromotionResult, PromotionType};
use std::fmt;

pub use matchers::Matcher;

/// Cleaned input shared by all matchers
#[derive(Debug, Clone, PartialEq)]
pub struct PromotionText {
    cleaned: String,
    prices: Vec<f64>,
}

impl PromotionText {
    pub fn new(text: &str) -> Self {
        let cleaned: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        let prices = extract_prices(&cleaned);
        Self { cleaned, prices }
    }

    /// Input with all whitespace removed
    pub fn cleaned(&self) -> &str {
        &self.cleaned
    }

    /// Literal prices in order of appearance
    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    /// First literal price, if any
    pub fn base_price(&self) -> Option<f64> {
        self.prices.first().copied()
    }
}

/// Ordered promotion matchers
#[derive(Clone, Copy)]
pub struct PromotionClassifier {
    matchers: &'static [(PromotionType, Matcher)],
}

impl fmt::Debug for PromotionClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.order()).finish()
    }
}

impl Default for PromotionClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl PromotionClassifier {
    pub fn new() -> Self {
        Self {
            matchers: matchers::MATCHERS,
        }
    }

    /// Promotion families in the order they are tried
    pub fn order(&self) -> impl Iterator<Item = PromotionType> + '_ {
        self.matchers.iter().map(|(promotion_type, _)| *promotion_type)
    }

    /// Classify one promotional phrase
    pub fn classify(&self, text: &str) -> PromotionResult {
        let input = PromotionText::new(text);
        if input.cleaned().is_empty() {
            return PromotionResult::unknown();
        }

        let matched = self
            .matchers
            .iter()
            .find_map(|(_, matcher)| matcher(&input));

        match matched {
            Some(result) => {
                tracing::debug!(
                    promotion_type = %result.promotion_type,
                    value = result.value,
                    prices = ?input.prices(),
                    "Promotion matched"
                );
                result
            },
            None => {
                tracing::debug!(text = %input.cleaned(), "No promotion pattern matched");
                PromotionResult::unknown()
            },
        }
    }
}

/// Classify with the default matcher order
pub fn classify(text: &str) -> PromotionResult {
    PromotionClassifier::new().classify(text)
}
