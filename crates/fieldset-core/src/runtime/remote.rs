// crates/fieldset-core/src/runtime/remote.rs
// ============================================================================
// Module: Fieldset Remote Validation Bridge
// Description: Authoritative validation delegated to the backing store.
// Purpose: Fold transport failures into the shared validation result shape.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! The bridge delegates to the backing store's authoritative validation
//! endpoint through any [`FieldStore`]. Transport failures never escape as
//! errors; they fold into a failing result with a single `general` message,
//! so callers handle network failure and business-rule failure identically.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use crate::core::descriptor::FieldDomain;
use crate::core::validation::ValidationResult;
use crate::interfaces::FieldStore;

// ============================================================================
// SECTION: Remote Validation
// ============================================================================

/// Delegates validation of a candidate value set to the backing store.
///
/// Always resolves to a [`ValidationResult`]: store errors become
/// `{is_valid: false, errors: {general: [message]}}`.
pub fn validate_with_store(
    store: &dyn FieldStore,
    domain: FieldDomain,
    values: &BTreeMap<String, String>,
) -> ValidationResult {
    match store.validate_fields(domain, values) {
        Ok(result) => result.normalized(),
        Err(error) => ValidationResult::general(error.to_string()),
    }
}
