// crates/fieldset-config/src/lib.rs
// ============================================================================
// Module: Fieldset Configuration
// Description: TOML-backed configuration for the field engine host.
// Purpose: Load and validate store and cache settings with fail-closed checks.
// Dependencies: fieldset-cache, fieldset-client, serde, thiserror, toml
// ============================================================================

//! ## Overview
//! Hosts configure the engine from a TOML file: backing-store connection
//! settings and cache TTL. Loading is strict and fail-closed: path and size
//! guards reject suspicious inputs, and `validate()` rejects every boundary
//! violation with a field-specific message before anything touches the
//! network.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;

use fieldset_cache::DEFAULT_TTL_MS;
use fieldset_client::HttpStoreConfig;
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default config file name resolved against the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "fieldset.toml";
/// Maximum config file size accepted by the loader.
const MAX_CONFIG_BYTES: u64 = 1024 * 1024;
/// Maximum length of a single config path component.
const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total config path length.
const MAX_TOTAL_PATH_LENGTH: usize = 4096;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("config io error: {0}")]
    Io(String),
    /// Config file could not be parsed as TOML.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Config contents violate a boundary check.
    #[error("config invalid: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Settings
// ============================================================================

/// Backing-store connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreSettings {
    /// Base URL of the backing store API.
    pub base_url: String,
    /// Allow cleartext HTTP (disabled by default).
    #[serde(default)]
    pub allow_http: bool,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Maximum response size allowed, in bytes.
    #[serde(default = "default_max_response_bytes")]
    pub max_response_bytes: usize,
    /// User agent string for outbound requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Descriptor cache settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheSettings {
    /// Descriptor entry time-to-live in milliseconds.
    #[serde(default = "default_ttl_ms")]
    pub ttl_ms: i64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl_ms: default_ttl_ms(),
        }
    }
}

/// Top-level engine configuration.
///
/// # Invariants
/// - `validate()` passes before the config is handed to any component.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldsetConfig {
    /// Backing-store connection settings.
    pub store: StoreSettings,
    /// Descriptor cache settings.
    #[serde(default)]
    pub cache: CacheSettings,
}

impl FieldsetConfig {
    /// Loads configuration from the given path, or the default path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the path violates loader guards, the file
    /// cannot be read or parsed, or the contents fail validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));
        check_path(path)?;
        let metadata =
            fs::metadata(path).map_err(|error| ConfigError::Io(error.to_string()))?;
        if metadata.len() > MAX_CONFIG_BYTES {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let bytes = fs::read(path).map_err(|error| ConfigError::Io(error.to_string()))?;
        let text = String::from_utf8(bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml_str(&text)
    }

    /// Parses and validates configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(text).map_err(|error| ConfigError::Parse(error.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates every boundary constraint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the violated field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("base_url must not be empty".to_string()));
        }
        let cleartext = self.store.base_url.starts_with("http://");
        if cleartext && !self.store.allow_http {
            return Err(ConfigError::Invalid(
                "base_url uses cleartext http without allow_http".to_string(),
            ));
        }
        if !cleartext && !self.store.base_url.starts_with("https://") {
            return Err(ConfigError::Invalid("base_url must use http or https".to_string()));
        }
        if self.store.timeout_ms == 0 {
            return Err(ConfigError::Invalid("timeout_ms must be greater than zero".to_string()));
        }
        if self.store.max_response_bytes == 0 {
            return Err(ConfigError::Invalid(
                "max_response_bytes must be greater than zero".to_string(),
            ));
        }
        if self.store.user_agent.trim().is_empty() {
            return Err(ConfigError::Invalid("user_agent must not be empty".to_string()));
        }
        if self.cache.ttl_ms <= 0 {
            return Err(ConfigError::Invalid("ttl_ms must be greater than zero".to_string()));
        }
        Ok(())
    }

    /// Converts the store settings into an HTTP client configuration.
    #[must_use]
    pub fn http_store_config(&self) -> HttpStoreConfig {
        let mut config = HttpStoreConfig::new(self.store.base_url.clone());
        config.allow_http = self.store.allow_http;
        config.timeout_ms = self.store.timeout_ms;
        config.max_response_bytes = self.store.max_response_bytes;
        config.user_agent = self.store.user_agent.clone();
        config
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Rejects suspicious config paths before touching the filesystem.
fn check_path(path: &Path) -> Result<(), ConfigError> {
    if path.as_os_str().len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        if component.as_os_str().len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Serde default for `timeout_ms`.
const fn default_timeout_ms() -> u64 {
    5_000
}

/// Serde default for `max_response_bytes`.
const fn default_max_response_bytes() -> usize {
    1024 * 1024
}

/// Serde default for `user_agent`.
fn default_user_agent() -> String {
    "fieldset/0.1".to_string()
}

/// Serde default for `ttl_ms`.
const fn default_ttl_ms() -> i64 {
    DEFAULT_TTL_MS
}
