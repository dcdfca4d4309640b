// crates/fieldset-client/tests/envelope.rs
// ============================================================================
// Module: Envelope Normalization Tests
// Description: Decoding matrix for the store's field list envelope shapes.
// ============================================================================
//! ## Overview
//! Verifies that bare arrays, `results` pages, and `data` objects normalize
//! to the same descriptor list, that unrecognized shapes degrade to an empty
//! list, and that malformed entries inside a recognized envelope are decode
//! errors.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use fieldset_client::normalize_envelope;
use fieldset_core::FieldStoreError;
use fieldset_core::FieldType;
use serde_json::json;

fn entry(name: &str) -> serde_json::Value {
    json!({
        "name": name,
        "display_name": "Year From",
        "field_type": "integer",
        "domain": "vcdb",
    })
}

#[test]
fn bare_array_envelope_decodes_directly() {
    let fields = normalize_envelope(json!([entry("year_from"), entry("year_to")])).unwrap();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].name, "year_from");
    assert_eq!(fields[0].field_type, FieldType::Integer);
}

#[test]
fn results_page_envelope_decodes() {
    let fields = normalize_envelope(json!({"results": [entry("year_from")], "count": 1})).unwrap();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].name, "year_from");
}

#[test]
fn data_object_envelope_decodes() {
    let fields = normalize_envelope(json!({"data": [entry("year_from")]})).unwrap();
    assert_eq!(fields.len(), 1);
}

#[test]
fn results_key_takes_precedence_over_data() {
    let fields = normalize_envelope(json!({
        "results": [entry("from_results")],
        "data": [entry("from_data")],
    }))
    .unwrap();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].name, "from_results");
}

#[test]
fn unrecognized_shapes_degrade_to_an_empty_list() {
    assert!(normalize_envelope(json!({"items": [entry("year_from")]})).unwrap().is_empty());
    assert!(normalize_envelope(json!({"results": "not a list"})).unwrap().is_empty());
    assert!(normalize_envelope(json!("plain string")).unwrap().is_empty());
    assert!(normalize_envelope(json!(null)).unwrap().is_empty());
}

#[test]
fn malformed_entry_inside_a_recognized_envelope_is_a_decode_error() {
    let result = normalize_envelope(json!([{"display_name": "No Name"}]));
    match result {
        Err(FieldStoreError::Decode(message)) => {
            assert!(message.contains("invalid field entry"));
        }
        other => panic!("expected decode error, got {other:?}"),
    }
}
