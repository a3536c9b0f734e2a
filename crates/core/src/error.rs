//! Error types shared across the promotion decoder crates

use thiserror::Error;

/// Result alias using the core error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core errors
///
/// Classification itself never fails; these cover the collaborators around it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("No capture source is configured")]
    CaptureUnavailable,

    #[error("Capture returned no text")]
    EmptyCapture,
}
