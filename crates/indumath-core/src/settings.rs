//! # Model Settings
//!
//! Tunables shared by all evaluations. Plain data: loading them from a file
//! or the environment is the caller's job.
//!
//! ```toml
//! [models]
//! sample_count = 100
//! ```

use serde::{Deserialize, Serialize};

use crate::validation::{validate_sample_count, ValidationResult};
use crate::DEFAULT_SAMPLE_COUNT;

/// Curve resolution defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSettings {
    /// Points per curve when a request does not specify one.
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,
}

fn default_sample_count() -> usize {
    DEFAULT_SAMPLE_COUNT
}

impl Default for CurveSettings {
    fn default() -> Self {
        CurveSettings {
            sample_count: default_sample_count(),
        }
    }
}

/// Everything the models can be tuned with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelSettings {
    #[serde(default)]
    pub models: CurveSettings,
}

impl ModelSettings {
    /// Validates the settings.
    ///
    /// ## Rules
    /// - sample_count >= 2
    pub fn validate(&self) -> ValidationResult<()> {
        validate_sample_count(self.models.sample_count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ModelSettings::default();
        assert_eq!(settings.models.sample_count, 100);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut settings = ModelSettings::default();
        settings.models.sample_count = 1;
        assert!(settings.validate().is_err());

        settings.models.sample_count = 2;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: ModelSettings = serde_json::from_str(r#"{"models":{}}"#).unwrap();
        assert_eq!(settings.models.sample_count, 100);

        let settings: ModelSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, ModelSettings::default());
    }
}
