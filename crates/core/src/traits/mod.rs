//! Core traits
//!
//! Pluggable seams for collaborators that live outside the classifier.

mod capture;

pub use capture::PromotionTextSource;
