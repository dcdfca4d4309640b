// crates/fieldset-client/src/http.rs
// ============================================================================
// Module: HTTP Field Store
// Description: Blocking reqwest client for the backing store's field API.
// Purpose: Fetch descriptors and delegate authoritative validation with strict limits.
// Dependencies: fieldset-core, reqwest, serde, serde_json
// ============================================================================

//! ## Overview
//! [`HttpFieldStore`] implements the core [`FieldStore`] interface over the
//! backing store's HTTP API: `GET fields?reference_type={vcdb|product}` and
//! `POST validate?reference_type={vcdb|product}`. Cleartext HTTP is disabled
//! by default, redirects are never followed, URLs with embedded credentials
//! are rejected, and response bodies are read under a hard size limit.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::io::Read;
use std::time::Duration;

use fieldset_core::FieldDescriptor;
use fieldset_core::FieldDomain;
use fieldset_core::FieldStore;
use fieldset_core::FieldStoreError;
use fieldset_core::ValidationResult;
use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::blocking::Response;
use reqwest::redirect::Policy;
use serde::Deserialize;
use serde_json::Value;

use crate::envelope::normalize_envelope;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Configuration for the HTTP field store.
///
/// # Invariants
/// - `allow_http = false` blocks cleartext `http://` base URLs.
/// - `max_response_bytes` is a hard upper bound on response bodies.
/// - `timeout_ms` applies to the full request lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HttpStoreConfig {
    /// Base URL of the backing store API.
    pub base_url: String,
    /// Allow cleartext HTTP (disabled by default).
    pub allow_http: bool,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Maximum response size allowed, in bytes.
    pub max_response_bytes: usize,
    /// User agent string for outbound requests.
    pub user_agent: String,
}

impl HttpStoreConfig {
    /// Creates a config with default limits for the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            allow_http: false,
            timeout_ms: 5_000,
            max_response_bytes: 1024 * 1024,
            user_agent: "fieldset/0.1".to_string(),
        }
    }
}

// ============================================================================
// SECTION: Store Implementation
// ============================================================================

/// Blocking HTTP implementation of the core field store interface.
///
/// # Invariants
/// - Redirects are not followed.
/// - Responses exceeding configured limits fail closed.
pub struct HttpFieldStore {
    /// Store configuration, including limits and policy.
    config: HttpStoreConfig,
    /// HTTP client used for outbound requests.
    client: Client,
}

impl HttpFieldStore {
    /// Creates a new HTTP field store with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FieldStoreError`] when the base URL violates policy or the
    /// HTTP client cannot be created.
    pub fn new(config: HttpStoreConfig) -> Result<Self, FieldStoreError> {
        let base = Url::parse(&config.base_url)
            .map_err(|_| FieldStoreError::Transport("invalid base url".to_string()))?;
        validate_base_url(&base, &config)?;
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .redirect(Policy::none())
            .build()
            .map_err(|_| FieldStoreError::Transport("http client build failed".to_string()))?;
        Ok(Self {
            config,
            client,
        })
    }

    /// Builds an endpoint URL with the `reference_type` query parameter.
    ///
    /// # Errors
    ///
    /// Returns [`FieldStoreError`] when the base URL cannot carry path
    /// segments.
    fn endpoint(&self, segment: &str, domain: FieldDomain) -> Result<Url, FieldStoreError> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|_| FieldStoreError::Transport("invalid base url".to_string()))?;
        url.path_segments_mut()
            .map_err(|()| FieldStoreError::Transport("base url cannot carry paths".to_string()))?
            .pop_if_empty()
            .push(segment);
        url.query_pairs_mut().append_pair("reference_type", domain.as_str());
        Ok(url)
    }

    /// Sends a request and reads the body under the configured size limit.
    ///
    /// # Errors
    ///
    /// Returns [`FieldStoreError`] on transport failure, non-success status,
    /// or an oversized body.
    fn read_success_body(
        &self,
        response: Result<Response, reqwest::Error>,
        operation: &str,
    ) -> Result<Vec<u8>, FieldStoreError> {
        let response = response
            .map_err(|_| FieldStoreError::Transport(format!("{operation} request failed")))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FieldStoreError::Transport(format!(
                "{operation} request returned status {status}"
            )));
        }
        read_response_limited(response, self.config.max_response_bytes)
    }
}

impl FieldStore for HttpFieldStore {
    fn fetch_fields(&self, domain: FieldDomain) -> Result<Vec<FieldDescriptor>, FieldStoreError> {
        let url = self.endpoint("fields", domain)?;
        let body = self.read_success_body(self.client.get(url).send(), "fields")?;
        let value: Value = serde_json::from_slice(&body)
            .map_err(|error| FieldStoreError::Decode(format!("fields response: {error}")))?;
        normalize_envelope(value)
    }

    fn validate_fields(
        &self,
        domain: FieldDomain,
        values: &BTreeMap<String, String>,
    ) -> Result<ValidationResult, FieldStoreError> {
        let url = self.endpoint("validate", domain)?;
        let body = self.read_success_body(self.client.post(url).json(values).send(), "validate")?;
        serde_json::from_slice(&body)
            .map_err(|error| FieldStoreError::Decode(format!("validate response: {error}")))
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Validates base URL scheme and credential policy.
fn validate_base_url(url: &Url, config: &HttpStoreConfig) -> Result<(), FieldStoreError> {
    match url.scheme() {
        "https" => {}
        "http" if config.allow_http => {}
        _ => return Err(FieldStoreError::Transport("unsupported url scheme".to_string())),
    }
    if !url.username().is_empty() || url.password().is_some() {
        return Err(FieldStoreError::Transport("url credentials are not allowed".to_string()));
    }
    Ok(())
}

/// Reads the response body while enforcing a byte limit.
fn read_response_limited(
    response: Response,
    max_bytes: usize,
) -> Result<Vec<u8>, FieldStoreError> {
    let expected_len = response.content_length();
    let max_bytes_u64 = u64::try_from(max_bytes)
        .map_err(|_| FieldStoreError::Transport("response size limit exceeds u64".to_string()))?;
    if let Some(expected) = expected_len
        && expected > max_bytes_u64
    {
        return Err(FieldStoreError::Transport("response exceeds size limit".to_string()));
    }
    let mut buf = Vec::new();
    let limit = max_bytes_u64.saturating_add(1);
    let mut handle = response.take(limit);
    handle
        .read_to_end(&mut buf)
        .map_err(|_| FieldStoreError::Transport("failed to read response".to_string()))?;
    if buf.len() > max_bytes {
        return Err(FieldStoreError::Transport("response exceeds size limit".to_string()));
    }
    Ok(buf)
}
