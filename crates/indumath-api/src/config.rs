//! # Calculator Configuration
//!
//! Configuration management for the calculator.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     INDUMATH_SAMPLE_COUNT=200                                          │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/indumath/indumath.toml (Linux)                           │
//! │     ~/Library/Application Support/com.indumath.calculator/ (macOS)     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     100-point curves, textbook form values                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # indumath.toml
//! [models]
//! sample_count = 100
//!
//! [defaults.production]
//! profit_a = 40.0
//! profit_b = 30.0
//! machine_limit_1 = 40.0
//! machine_limit_2 = 60.0
//!
//! [defaults.queue]
//! arrival_rate = 2.0
//! service_rate = 4.0
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info, warn};

use indumath_core::settings::CurveSettings;
use indumath_core::{
    BreakEvenInputs, EoqInputs, ModelSettings, ProductionInputs, QueueInputs, ValidationError,
};

/// Environment variable overriding `models.sample_count`.
pub const ENV_SAMPLE_COUNT: &str = "INDUMATH_SAMPLE_COUNT";

// =============================================================================
// Errors
// =============================================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for this schema.
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Values parsed but are out of range.
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Form Defaults
// =============================================================================

/// Values the input forms start with.
///
/// The presentation layer owns form state; these are only its initial values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormDefaults {
    #[serde(default = "default_production")]
    pub production: ProductionInputs,

    #[serde(default = "default_eoq")]
    pub eoq: EoqInputs,

    #[serde(default = "default_queue")]
    pub queue: QueueInputs,

    #[serde(default = "default_break_even")]
    pub break_even: BreakEvenInputs,
}

fn default_production() -> ProductionInputs {
    ProductionInputs::new(40.0, 30.0, 40.0, 60.0)
}

fn default_eoq() -> EoqInputs {
    EoqInputs::new(1000.0, 50.0, 2.0)
}

fn default_queue() -> QueueInputs {
    QueueInputs::new(2.0, 4.0)
}

fn default_break_even() -> BreakEvenInputs {
    BreakEvenInputs::new(10_000.0, 20.0, 50.0)
}

impl Default for FormDefaults {
    fn default() -> Self {
        FormDefaults {
            production: default_production(),
            eoq: default_eoq(),
            queue: default_queue(),
            break_even: default_break_even(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete calculator configuration.
///
/// Read-only after load, so commands can share it across threads freely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Curve sampling settings.
    #[serde(default)]
    pub models: CurveSettings,

    /// Initial form values.
    #[serde(default)]
    pub defaults: FormDefaults,
}

impl CalculatorConfig {
    /// Parses configuration from TOML text. Missing sections take defaults.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        let config: CalculatorConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (indumath.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading calculator config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());

        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load calculator config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.settings().validate()
    }

    /// The model-facing subset of this configuration.
    pub fn settings(&self) -> ModelSettings {
        ModelSettings {
            models: self.models,
        }
    }

    /// Applies overrides from a key lookup (the environment in production).
    ///
    /// Unparseable values are logged and ignored.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_SAMPLE_COUNT) {
            match raw.trim().parse::<usize>() {
                Ok(n) => {
                    debug!(sample_count = n, "Overriding sample count from environment");
                    self.models.sample_count = n;
                }
                Err(_) => warn!(value = %raw, "Ignoring invalid {}", ENV_SAMPLE_COUNT),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "indumath", "calculator")
            .map(|dirs| dirs.config_dir().join("indumath.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = CalculatorConfig::default();
        assert_eq!(config.models.sample_count, 100);
        assert_eq!(config.defaults.queue, QueueInputs::new(2.0, 4.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let config = CalculatorConfig::from_toml_str(
            r#"
            [models]
            sample_count = 250

            [defaults.queue]
            arrival_rate = 3.0
            service_rate = 5.0
            "#,
        )
        .unwrap();

        assert_eq!(config.models.sample_count, 250);
        assert_eq!(config.defaults.production, ProductionInputs::new(40.0, 30.0, 40.0, 60.0));
        assert_eq!(config.defaults.queue, QueueInputs::new(3.0, 5.0));
        assert_eq!(config.defaults.eoq, EoqInputs::new(1000.0, 50.0, 2.0));
    }

    #[test]
    fn test_invalid_toml_values() {
        let err = CalculatorConfig::from_toml_str("[models]\nsample_count = 1\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = CalculatorConfig::from_toml_str("[models]\nsample_count = \"many\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([(ENV_SAMPLE_COUNT, " 40 ")]);

        let mut config = CalculatorConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.models.sample_count, 40);

        let env: HashMap<&str, &str> = HashMap::from([(ENV_SAMPLE_COUNT, "not-a-number")]);
        let mut config = CalculatorConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.models.sample_count, 100);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("indumath-test-{}.toml", std::process::id()));
        std::fs::write(&path, "[models]\nsample_count = 77\n").unwrap();

        let config = CalculatorConfig::load(Some(path.clone())).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.models.sample_count, 77);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("indumath-does-not-exist.toml");
        let config = CalculatorConfig::load_or_default(Some(path));
        assert_eq!(config.defaults, FormDefaults::default());
    }

    #[test]
    fn test_toml_serialization() {
        let config = CalculatorConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[models]"));
        assert!(toml_str.contains("[defaults.production]"));
    }
}
