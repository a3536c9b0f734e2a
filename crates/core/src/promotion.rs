//! Promotion classification results
//!
//! A `PromotionResult` is an immutable projection of one promotional phrase.
//! `value` is the effective discount on the 折 scale: 10 means full price,
//! 5 means half price.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Promotion families recognised by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PromotionType {
    /// 滿千送百: spend a threshold, save a fixed amount
    Threshold,
    /// 加1元多1件: add a small amount for extra items
    AddOne,
    /// 第2件省50元: fixed saving on the second item
    NthSave,
    /// 買一送一: buy N, get M free
    #[serde(rename = "BOGO")]
    Bogo,
    /// 第2件6折: discount on the Nth item
    NthItem,
    /// Buy one priced item, get a differently priced one free
    BuyAGetB,
    /// 2件8折: discount on a group of items
    GroupDisc,
    /// 7折: plain discount
    Simple,
    /// Nothing matched
    Unknown,
}

impl PromotionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Threshold => "Threshold",
            Self::AddOne => "AddOne",
            Self::NthSave => "NthSave",
            Self::Bogo => "BOGO",
            Self::NthItem => "NthItem",
            Self::BuyAGetB => "BuyAGetB",
            Self::GroupDisc => "GroupDisc",
            Self::Simple => "Simple",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for PromotionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classifying one promotional phrase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionResult {
    /// Matched promotion family
    #[serde(rename = "type")]
    pub promotion_type: PromotionType,
    /// Short label rebuilt from the extracted quantities
    pub title: String,
    /// Rate rendered for display, e.g. "7.5 折"
    pub discount_label: String,
    /// Sentence showing the arithmetic behind the rate
    pub detail: String,
    /// Effective discount rate on the base-10 scale (0 for Unknown)
    pub value: f64,
}

impl PromotionResult {
    pub fn new(
        promotion_type: PromotionType,
        title: impl Into<String>,
        discount_label: impl Into<String>,
        detail: impl Into<String>,
        value: f64,
    ) -> Self {
        Self {
            promotion_type,
            title: title.into(),
            discount_label: discount_label.into(),
            detail: detail.into(),
            value,
        }
    }

    /// Terminal result when no promotion pattern matched
    pub fn unknown() -> Self {
        Self::new(
            PromotionType::Unknown,
            "無法翻譯",
            "?",
            "請輸入包含金額的文案，或標準折扣語法 (如: 買一送一)",
            0.0,
        )
    }

    pub fn is_unknown(&self) -> bool {
        self.promotion_type == PromotionType::Unknown
    }

    /// Whether this result carries a usable discount in (0, 10]
    ///
    /// Unknown results and out-of-range rates are "no actionable discount".
    pub fn is_actionable(&self) -> bool {
        !self.is_unknown() && self.value > 0.0 && self.value <= 10.0
    }

    /// Compare effective rates; lower is the better deal
    ///
    /// Returns `None` if either side is not actionable, so the Unknown
    /// sentinel never ranks as a real computation.
    pub fn compare_rate(&self, other: &Self) -> Option<Ordering> {
        if !self.is_actionable() || !other.is_actionable() {
            return None;
        }
        self.value.partial_cmp(&other.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(promotion_type: PromotionType, value: f64) -> PromotionResult {
        PromotionResult::new(promotion_type, "t", "l", "d", value)
    }

    #[test]
    fn test_unknown_is_not_actionable() {
        let unknown = PromotionResult::unknown();
        assert!(unknown.is_unknown());
        assert!(!unknown.is_actionable());
        assert_eq!(unknown.value, 0.0);
        assert_eq!(unknown.discount_label, "?");
    }

    #[test]
    fn test_actionable_range() {
        assert!(result(PromotionType::Simple, 10.0).is_actionable());
        assert!(result(PromotionType::Bogo, 5.0).is_actionable());
        assert!(!result(PromotionType::Simple, 0.0).is_actionable());
        assert!(!result(PromotionType::Threshold, -1.0).is_actionable());
        assert!(!result(PromotionType::GroupDisc, 85.0).is_actionable());
    }

    #[test]
    fn test_compare_rate_skips_unknown() {
        let bogo = result(PromotionType::Bogo, 5.0);
        let simple = result(PromotionType::Simple, 7.0);
        let unknown = PromotionResult::unknown();

        assert_eq!(bogo.compare_rate(&simple), Some(Ordering::Less));
        assert_eq!(simple.compare_rate(&bogo), Some(Ordering::Greater));
        assert_eq!(bogo.compare_rate(&unknown), None);
        assert_eq!(unknown.compare_rate(&bogo), None);
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(result(PromotionType::Bogo, 5.0)).unwrap();
        assert_eq!(json["type"], "BOGO");
        assert_eq!(json["discountLabel"], "l");
        assert_eq!(json["value"], 5.0);
    }

    #[test]
    fn test_type_display() {
        assert_eq!(PromotionType::Bogo.to_string(), "BOGO");
        assert_eq!(PromotionType::NthItem.to_string(), "NthItem");
    }
}
