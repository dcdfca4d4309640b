// crates/fieldset-core/src/runtime/validator.rs
// ============================================================================
// Module: Fieldset Validation Composer
// Description: Layered per-field validation and aggregate submission checks.
// Purpose: Produce fast, advisory validation verdicts ahead of the backing store.
// Dependencies: crate::core, bigdecimal, serde_json
// ============================================================================

//! ## Overview
//! Validation layers a required check under type-specific checks: a missing
//! required value short-circuits with one message and skips everything else;
//! present values run length bounds, decimal-aware numeric range checks, or
//! enum membership per the declared type. Each field reports at most its
//! first error. Local validation is advisory; the remote bridge remains
//! authoritative and is never overridden here.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde_json::Number;

use crate::core::descriptor::ContextSurface;
use crate::core::descriptor::FieldDescriptor;
use crate::core::descriptor::FieldType;
use crate::core::validation::ValidationResult;

// ============================================================================
// SECTION: Per-Field Validation
// ============================================================================

/// Validates one candidate value against a descriptor.
///
/// Returns the first applicable error message, or `None` when the value
/// passes. Empty and whitespace-only values count as missing.
#[must_use]
pub fn validate_field(descriptor: &FieldDescriptor, value: Option<&str>) -> Option<String> {
    let present = value.map(str::trim).filter(|v| !v.is_empty());
    if present.is_none() {
        if descriptor.is_effectively_required() {
            return Some(format!("{} is required", descriptor.display_name));
        }
        return None;
    }
    let value = present?;
    if descriptor.field_type.is_textual() {
        return check_length(descriptor, value);
    }
    if descriptor.field_type.is_numeric() {
        return check_range(descriptor, value);
    }
    if descriptor.field_type == FieldType::Enum {
        return check_membership(descriptor, value);
    }
    None
}

/// Checks string length bounds for textual types.
fn check_length(descriptor: &FieldDescriptor, value: &str) -> Option<String> {
    let length = u64::try_from(value.chars().count()).unwrap_or(u64::MAX);
    if let Some(min) = descriptor.min_length
        && length < min
    {
        return Some(format!("Must be at least {min} characters"));
    }
    if let Some(max) = descriptor.max_length
        && length > max
    {
        return Some(format!("Must be at most {max} characters"));
    }
    None
}

/// Checks parseability and range bounds for numeric types.
fn check_range(descriptor: &FieldDescriptor, value: &str) -> Option<String> {
    let Ok(parsed) = BigDecimal::from_str(value) else {
        return Some("Must be a valid number".to_string());
    };
    if let Some(min) = &descriptor.min_value
        && decimal_cmp(&parsed, min) == Some(Ordering::Less)
    {
        return Some(format!("Must be at least {min}"));
    }
    if let Some(max) = &descriptor.max_value
        && decimal_cmp(&parsed, max) == Some(Ordering::Greater)
    {
        return Some(format!("Must be at most {max}"));
    }
    None
}

/// Checks enum membership against the descriptor's option list.
fn check_membership(descriptor: &FieldDescriptor, value: &str) -> Option<String> {
    if descriptor.enum_options.iter().any(|option| option == value) {
        return None;
    }
    Some(format!("Must be one of: {}", descriptor.enum_options.join(", ")))
}

/// Orders a parsed value against a declared JSON-number bound.
///
/// Decimal-aware: bounds are compared via their stable string rendering, so
/// `0.30` and `0.3` order identically.
fn decimal_cmp(value: &BigDecimal, bound: &Number) -> Option<Ordering> {
    let bound = BigDecimal::from_str(&bound.to_string()).ok()?;
    Some(value.cmp(&bound))
}

// ============================================================================
// SECTION: Aggregate Validation
// ============================================================================

/// Validates a candidate value set against every field visible on a surface.
///
/// Invisible fields are skipped entirely; each failing field contributes its
/// first error only. `is_valid` is true exactly when no field failed.
#[must_use]
pub fn validate_all(
    fields: &[FieldDescriptor],
    values: &BTreeMap<String, String>,
    surface: ContextSurface,
) -> ValidationResult {
    let mut result = ValidationResult::valid();
    for field in fields {
        if !field.is_visible_on(surface) {
            continue;
        }
        let value = values.get(&field.name).map(String::as_str);
        if let Some(message) = validate_field(field, value) {
            result.push_error(field.name.clone(), message);
        }
    }
    result
}
