// crates/fieldset-core/src/core/validation.rs
// ============================================================================
// Module: Fieldset Validation Results
// Description: Shared result shape for local and remote validation.
// Purpose: Keep callers agnostic to which validation path produced a verdict.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! [`ValidationResult`] is the single result shape produced by both the local
//! validation composer and the remote validation bridge. Errors are keyed by
//! field name with ordered message lists; transport-level failures fold into
//! a single `general` entry so consumers never special-case network failure
//! versus business-rule failure.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Error key used when a failure is not attributable to one field.
pub const GENERAL_ERROR_KEY: &str = "general";

// ============================================================================
// SECTION: Validation Result
// ============================================================================

/// Aggregate validation verdict with per-field error messages.
///
/// # Invariants
/// - A non-empty `errors` map implies `is_valid = false`.
/// - Locally composed results additionally satisfy the converse: `is_valid`
///   is true exactly when `errors` is empty. Remote verdicts may fail with an
///   empty map and are preserved as-is.
/// - Message lists preserve insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True when no field produced an error.
    pub is_valid: bool,
    /// Field name to ordered error messages.
    #[serde(default)]
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationResult {
    /// Returns a passing result with no errors.
    #[must_use]
    pub const fn valid() -> Self {
        Self {
            is_valid: true,
            errors: BTreeMap::new(),
        }
    }

    /// Returns a failing result carrying a single `general` message.
    #[must_use]
    pub fn general(message: impl Into<String>) -> Self {
        let mut result = Self::valid();
        result.push_error(GENERAL_ERROR_KEY, message);
        result
    }

    /// Appends an error message for a field and marks the result invalid.
    pub fn push_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(field.into()).or_default().push(message.into());
        self.is_valid = false;
    }

    /// Restores the `is_valid`/`errors` invariant after tolerant decoding.
    ///
    /// Empty message lists are dropped; any surviving error forces
    /// `is_valid = false`. A failing verdict with no messages is preserved,
    /// because the remote verdict is authoritative.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.errors.retain(|_, messages| !messages.is_empty());
        if !self.errors.is_empty() {
            self.is_valid = false;
        }
        self
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::valid()
    }
}
