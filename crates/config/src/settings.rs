//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{capture, decoder, env};
use crate::ConfigError;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Manual input decoding
    #[serde(default)]
    pub decoder: DecoderConfig,

    /// Promotion text capture (OCR stand-in)
    #[serde(default)]
    pub capture: CaptureConfig,

    /// Logging configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Manual input decoding configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// Inputs with fewer characters are not classified
    #[serde(default = "default_min_input_chars")]
    pub min_input_chars: usize,
}

fn default_min_input_chars() -> usize {
    decoder::MIN_INPUT_CHARS
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            min_input_chars: default_min_input_chars(),
        }
    }
}

/// Capture providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CaptureProvider {
    /// Fixed-delay stub returning one of the configured phrases
    #[default]
    Canned,
    /// No capture source; capture requests fail
    Disabled,
}

/// Capture configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Which provider to use
    #[serde(default)]
    pub provider: CaptureProvider,

    /// Simulated recognition latency in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Phrases the canned provider picks from
    #[serde(default = "default_phrases")]
    pub phrases: Vec<String>,
}

fn default_delay_ms() -> u64 {
    capture::DELAY_MS
}

fn default_phrases() -> Vec<String> {
    capture::CANNED_PHRASES
        .iter()
        .map(|p| p.to_string())
        .collect()
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            provider: CaptureProvider::default(),
            delay_ms: default_delay_ms(),
            phrases: default_phrases(),
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

impl Settings {
    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_decoder()?;
        self.validate_capture()?;
        Ok(())
    }

    fn validate_decoder(&self) -> Result<(), ConfigError> {
        if self.decoder.min_input_chars == 0 {
            return Err(ConfigError::InvalidValue {
                field: "decoder.min_input_chars".to_string(),
                message: "Must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    fn validate_capture(&self) -> Result<(), ConfigError> {
        if self.capture.delay_ms > capture::MAX_DELAY_MS {
            return Err(ConfigError::InvalidValue {
                field: "capture.delay_ms".to_string(),
                message: format!(
                    "Must be at most {}ms, got {}ms",
                    capture::MAX_DELAY_MS,
                    self.capture.delay_ms
                ),
            });
        }

        if self.capture.provider == CaptureProvider::Canned
            && self.capture.phrases.iter().all(|p| p.trim().is_empty())
        {
            return Err(ConfigError::InvalidValue {
                field: "capture.phrases".to_string(),
                message: "Canned provider needs at least one non-empty phrase".to_string(),
            });
        }

        Ok(())
    }
}

/// Load settings from `config/` and the environment
///
/// Priority: env vars > config/{env}.* > config/default.* > defaults
pub fn load_settings(env_name: Option<&str>) -> Result<Settings, ConfigError> {
    load_settings_from(Path::new("config"), env_name)
}

/// Load settings from an explicit configuration directory
pub fn load_settings_from(dir: &Path, env_name: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    let default_path = dir.join("default");
    builder = builder.add_source(File::with_name(&default_path.to_string_lossy()).required(false));

    if let Some(env_name) = env_name {
        let env_path = dir.join(env_name);
        builder = builder.add_source(File::with_name(&env_path.to_string_lossy()).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix(env::PREFIX)
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    tracing::debug!(
        dir = %dir.display(),
        env = env_name.unwrap_or("default"),
        "Settings loaded"
    );

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.decoder.min_input_chars, 3);
        assert_eq!(settings.capture.provider, CaptureProvider::Canned);
        assert_eq!(settings.capture.delay_ms, 1200);
        assert_eq!(settings.capture.phrases.len(), 5);
        assert_eq!(settings.observability.log_level, "info");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_min_input_chars_validation() {
        let mut settings = Settings::default();
        settings.decoder.min_input_chars = 0;
        assert!(settings.validate().is_err());

        settings.decoder.min_input_chars = 1;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_capture_validation() {
        let mut settings = Settings::default();
        settings.capture.delay_ms = 120_000;
        assert!(settings.validate().is_err());

        settings.capture.delay_ms = 0;
        assert!(settings.validate().is_ok());

        settings.capture.phrases = vec!["  ".to_string()];
        assert!(settings.validate().is_err());

        // Disabled provider does not need phrases
        settings.capture.provider = CaptureProvider::Disabled;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_load_from_missing_dir_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from(dir.path(), None).unwrap();
        assert_eq!(settings.decoder.min_input_chars, 3);
        assert_eq!(settings.capture.delay_ms, 1200);
    }

    #[test]
    fn test_load_with_env_overlay() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[capture]\ndelay_ms = 500\n\n[observability]\nlog_level = \"debug\"\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("test.toml"),
            "[capture]\ndelay_ms = 0\nprovider = \"disabled\"\n",
        )
        .unwrap();

        let base = load_settings_from(dir.path(), None).unwrap();
        assert_eq!(base.capture.delay_ms, 500);
        assert_eq!(base.observability.log_level, "debug");

        let overlaid = load_settings_from(dir.path(), Some("test")).unwrap();
        assert_eq!(overlaid.capture.delay_ms, 0);
        assert_eq!(overlaid.capture.provider, CaptureProvider::Disabled);
        assert_eq!(overlaid.observability.log_level, "debug");
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[decoder]\nmin_input_chars = 0\n",
        )
        .unwrap();

        let err = load_settings_from(dir.path(), None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }
}
