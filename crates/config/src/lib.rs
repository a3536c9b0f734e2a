//! Configuration management for the promotion decoder
//!
//! Supports loading configuration from:
//! - TOML/YAML files (`config/default.*`, `config/{env}.*`)
//! - Environment variables (PROMO_DECODER__ prefix)
//! - Built-in defaults

pub mod constants;
pub mod settings;

pub use settings::{
    load_settings, load_settings_from, CaptureConfig, CaptureProvider, DecoderConfig,
    ObservabilityConfig, Settings,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
