// crates/fieldset-core/tests/resolver.rs
// ============================================================================
// Module: Visibility Resolver Tests
// Description: Per-context visibility and requirement resolution behavior.
// ============================================================================
//! ## Overview
//! Verifies fail-open defaults for unknown keys, the disabled-wins rule, and
//! independent form/filter contexts over one descriptor set.

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

use fieldset_core::ContextMapping;
use fieldset_core::ContextSurface;
use fieldset_core::FieldType;
use fieldset_core::RequirementLevel;
use fieldset_core::resolve_context;
use fieldset_core::resolve_field;

mod common;

#[test]
fn unknown_field_name_fails_open() {
    let fields = vec![common::vcdb_field("year_from", "Year From", FieldType::Integer)];
    let resolved = resolve_field(&fields, "undeclared_legacy", ContextSurface::Form);
    assert!(resolved.is_visible);
    assert!(!resolved.is_required);
    assert!(resolved.descriptor.is_none());
}

#[test]
fn disabled_field_is_never_visible_or_required() {
    let mut field = common::vcdb_field("year_from", "Year From", FieldType::Integer);
    field.is_enabled = false;
    field.requirement_level = RequirementLevel::Required;
    field.show_in_forms = true;
    field.show_in_filters = true;
    let fields = vec![field];

    for surface in [ContextSurface::Form, ContextSurface::Filter] {
        let resolved = resolve_field(&fields, "year_from", surface);
        assert!(!resolved.is_visible);
        assert!(!resolved.is_required);
        assert!(resolved.descriptor.is_some());
    }
}

#[test]
fn form_and_filter_surfaces_read_independent_flags() {
    let mut field = common::product_field("notes", "Notes", FieldType::Text);
    field.show_in_forms = true;
    field.show_in_filters = false;
    let fields = vec![field];

    assert!(resolve_field(&fields, "notes", ContextSurface::Form).is_visible);
    assert!(!resolve_field(&fields, "notes", ContextSurface::Filter).is_visible);
}

#[test]
fn required_needs_enabled() {
    let mut field = common::product_field("part_id", "Part Id", FieldType::String);
    field.requirement_level = RequirementLevel::Required;
    let fields = vec![field.clone()];
    assert!(resolve_field(&fields, "part_id", ContextSurface::Form).is_required);

    field.is_enabled = false;
    let fields = vec![field];
    assert!(!resolve_field(&fields, "part_id", ContextSurface::Form).is_required);
}

#[test]
fn context_mapping_translates_logical_keys() {
    let fields = vec![
        common::vcdb_field("year_from", "Year From", FieldType::Integer),
        common::vcdb_field("year_to", "Year To", FieldType::Integer),
    ];
    let mapping = ContextMapping::new()
        .with("yearFrom", "year_from")
        .with("yearTo", "year_to")
        .with("trim", "trim_level");
    let resolved = resolve_context(&fields, &mapping, ContextSurface::Form);

    assert_eq!(resolved.len(), 3);
    assert!(resolved["yearFrom"].descriptor.is_some());
    assert!(resolved["yearTo"].descriptor.is_some());
    // No descriptor for trim_level: fail-open.
    assert!(resolved["trim"].is_visible);
    assert!(!resolved["trim"].is_required);
    assert!(resolved["trim"].descriptor.is_none());
}

#[test]
fn contexts_do_not_cross_contaminate() {
    let mut form_only = common::product_field("notes", "Notes", FieldType::Text);
    form_only.show_in_forms = true;
    form_only.show_in_filters = false;
    let mut filter_only = common::product_field("brand", "Brand", FieldType::String);
    filter_only.show_in_forms = false;
    filter_only.show_in_filters = true;
    let fields = vec![form_only, filter_only];

    let mapping = ContextMapping::identity(["notes", "brand"]);
    let form = resolve_context(&fields, &mapping, ContextSurface::Form);
    let filter = resolve_context(&fields, &mapping, ContextSurface::Filter);

    assert!(form["notes"].is_visible);
    assert!(!form["brand"].is_visible);
    assert!(!filter["notes"].is_visible);
    assert!(filter["brand"].is_visible);
}

#[test]
fn resolution_reflects_descriptor_changes_on_recomputation() {
    let mut field = common::product_field("notes", "Notes", FieldType::Text);
    let mapping = ContextMapping::identity(["notes"]);

    let before = resolve_context(&[field.clone()], &mapping, ContextSurface::Form);
    assert!(before["notes"].is_visible);

    field.is_enabled = false;
    let after = resolve_context(&[field], &mapping, ContextSurface::Form);
    assert!(!after["notes"].is_visible);
}
