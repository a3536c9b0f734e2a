//! Core traits and types for the promotion decoder
//!
//! This crate provides the types shared by every other crate:
//! - `PromotionResult` and the closed set of promotion families
//! - The `PromotionTextSource` seam for OCR-style text capture
//! - Unit-price comparison
//! - Error types

pub mod comparison;
pub mod error;
pub mod promotion;
pub mod traits;

pub use comparison::{compare_unit_prices, unit_price, Cheaper, UnitPriceComparison};
pub use error::{Error, Result};
pub use promotion::{PromotionResult, PromotionType};
pub use traits::PromotionTextSource;
