//! Text processing errors

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TextProcessingError>;

#[derive(Error, Debug)]
pub enum TextProcessingError {
    #[error("Capture error: {0}")]
    Capture(#[from] promo_decoder_core::Error),
}
