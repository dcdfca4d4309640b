// crates/fieldset-core/tests/common/mod.rs
// ============================================================================
// Module: Core Test Helpers
// Description: Shared descriptor builders for fieldset-core tests.
// ============================================================================
//! ## Overview
//! Builders producing baseline descriptors that individual tests then adjust.

#![allow(dead_code, reason = "Shared helpers are not used by every test binary.")]

use fieldset_core::FieldDescriptor;
use fieldset_core::FieldDomain;
use fieldset_core::FieldType;
use fieldset_core::RequirementLevel;

/// Baseline enabled, optional, form-visible descriptor in the product domain.
pub fn product_field(name: &str, display_name: &str, field_type: FieldType) -> FieldDescriptor {
    FieldDescriptor {
        name: name.to_string(),
        display_name: display_name.to_string(),
        description: None,
        field_type,
        domain: FieldDomain::Product,
        requirement_level: RequirementLevel::Optional,
        is_enabled: true,
        is_unique: false,
        enum_options: Vec::new(),
        default_value: None,
        display_order: 0,
        show_in_forms: true,
        show_in_filters: false,
        min_length: None,
        max_length: None,
        min_value: None,
        max_value: None,
        validation_rules: None,
        created_at: None,
        updated_at: None,
    }
}

/// Baseline descriptor in the vehicle-configuration domain.
pub fn vcdb_field(name: &str, display_name: &str, field_type: FieldType) -> FieldDescriptor {
    let mut field = product_field(name, display_name, field_type);
    field.domain = FieldDomain::VehicleConfiguration;
    field
}
