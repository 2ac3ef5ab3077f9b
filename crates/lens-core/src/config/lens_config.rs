//! Top-level client configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ApiConfig, ObservabilityConfig, SessionConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`LENS_*`)
/// 2. Config file (`lens.toml` or an explicit path)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LensConfig {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub observability: ObservabilityConfig,
}

impl LensConfig {
    /// Load configuration: defaults, then the TOML file at `path` (when it
    /// exists), then `LENS_*` environment overrides. The result is validated.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) if p.exists() => Self::from_file(p)?,
            _ => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `LENS_*` overrides using `lookup` to resolve variable names.
    /// Unparseable numeric values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("LENS_API_BASE_URL") {
            self.api.base_url = val;
        }
        if let Some(val) = lookup("LENS_API_TIMEOUT_SECS") {
            if let Ok(v) = val.parse::<u64>() {
                self.api.timeout_secs = v;
            }
        }
        if let Some(val) = lookup("LENS_PROFILE_DIR") {
            self.session.profile_dir = Some(val);
        }
        if let Some(val) = lookup("LENS_SESSION_NAMESPACE") {
            self.session.namespace = val;
        }
        if let Some(val) = lookup("LENS_LOG_LEVEL") {
            self.observability.log_level = val;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.api.base_url.trim();
        if base.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "api.base_url".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::ValidationFailed {
                field: "api.base_url".to_string(),
                message: "must start with http:// or https://".to_string(),
            });
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "api.timeout_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.api.connect_timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "api.connect_timeout_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.session.namespace.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "session.namespace".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
