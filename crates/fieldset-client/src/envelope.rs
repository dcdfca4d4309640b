// crates/fieldset-client/src/envelope.rs
// ============================================================================
// Module: Response Envelope Normalization
// Description: Tolerant decoding of the store's field list envelopes.
// Purpose: Accept every envelope shape the backing store is known to emit.
// Dependencies: fieldset-core, serde_json
// ============================================================================

//! ## Overview
//! The backing store wraps field lists in one of three envelope shapes: a
//! bare array, a `{results: [...]}` page object, or a `{data: [...]}` object.
//! All three normalize transparently. Any other shape degrades to an empty
//! descriptor list rather than an error, so dependent surfaces keep rendering
//! with fail-open visibility defaults.

// ============================================================================
// SECTION: Imports
// ============================================================================

use fieldset_core::FieldDescriptor;
use fieldset_core::FieldStoreError;
use serde_json::Value;

// ============================================================================
// SECTION: Normalization
// ============================================================================

/// Extracts the descriptor list from any accepted envelope shape.
///
/// Unrecognized envelopes yield an empty list; malformed descriptor entries
/// inside a recognized envelope are decode errors.
///
/// # Errors
///
/// Returns [`FieldStoreError::Decode`] when a list entry cannot be decoded
/// into a [`FieldDescriptor`].
pub fn normalize_envelope(value: Value) -> Result<Vec<FieldDescriptor>, FieldStoreError> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut envelope) => {
            match envelope.remove("results").or_else(|| envelope.remove("data")) {
                Some(Value::Array(items)) => items,
                _ => return Ok(Vec::new()),
            }
        }
        _ => return Ok(Vec::new()),
    };
    items
        .into_iter()
        .map(|item| {
            serde_json::from_value(item)
                .map_err(|error| FieldStoreError::Decode(format!("invalid field entry: {error}")))
        })
        .collect()
}
