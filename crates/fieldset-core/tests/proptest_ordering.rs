// crates/fieldset-core/tests/proptest_ordering.rs
// ============================================================================
// Module: Ordering Property-Based Tests
// Description: Property tests for display-order sorting invariants.
// Purpose: Detect ordering instability across wide input ranges.
// ============================================================================

//! Property-based tests for display-order sorting invariants.

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
    reason = "Test-only assertions and helpers are permitted."
)]

use fieldset_core::FieldDescriptor;
use fieldset_core::FieldType;
use fieldset_core::sort_fields_by_display_order;
use proptest::prelude::*;

mod common;

fn fields_strategy() -> impl Strategy<Value = Vec<FieldDescriptor>> {
    prop::collection::vec(("[a-z]{1,6}", -8_i64 .. 8), 0 .. 16).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(index, (display_name, display_order))| {
                let mut field =
                    common::product_field(&format!("field_{index}"), &display_name, FieldType::String);
                field.display_order = display_order;
                field
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn sorting_is_idempotent(mut fields in fields_strategy()) {
        sort_fields_by_display_order(&mut fields);
        let once: Vec<String> = fields.iter().map(|field| field.name.clone()).collect();
        sort_fields_by_display_order(&mut fields);
        let twice: Vec<String> = fields.iter().map(|field| field.name.clone()).collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn sorted_output_is_totally_ordered(mut fields in fields_strategy()) {
        sort_fields_by_display_order(&mut fields);
        for pair in fields.windows(2) {
            let ordered = (pair[0].display_order, &pair[0].display_name)
                <= (pair[1].display_order, &pair[1].display_name);
            prop_assert!(ordered);
        }
    }
}
