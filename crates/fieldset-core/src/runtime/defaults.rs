// crates/fieldset-core/src/runtime/defaults.rs
// ============================================================================
// Module: Fieldset Default Resolution
// Description: Type-polymorphic default-value computation.
// Purpose: Seed initial values for fields independent of any widget.
// Dependencies: crate::core, time
// ============================================================================

//! ## Overview
//! Default computation is a pure, total function over a descriptor: the
//! string-encoded `default_value` is decoded per declared type, and anything
//! absent or undecodable falls back to the type's zero value. Each type's
//! decode rule lives in one match arm, so adding a field type is a one-place
//! change. Nothing here touches the cache or the network.

// ============================================================================
// SECTION: Imports
// ============================================================================

use time::Date;
use time::Month;

use crate::core::descriptor::FieldDescriptor;
use crate::core::descriptor::FieldType;
use crate::core::value::FieldValue;

// ============================================================================
// SECTION: Default Computation
// ============================================================================

/// Computes the initial value for a field per its declared type.
///
/// Declared defaults are decoded per type; missing or undecodable defaults
/// yield the type's zero value (`false`, `0`, `0.0`, first enum option or
/// empty string, empty string, no date).
#[must_use]
pub fn default_value(descriptor: &FieldDescriptor) -> FieldValue {
    let declared = descriptor.default_value.as_deref().map(str::trim).filter(|v| !v.is_empty());
    match descriptor.field_type {
        FieldType::Boolean => {
            FieldValue::Bool(declared.is_some_and(|v| v.eq_ignore_ascii_case("true")))
        }
        FieldType::Integer => FieldValue::Integer(decode_integer(declared)),
        FieldType::Number | FieldType::Decimal => FieldValue::Number(decode_number(declared)),
        FieldType::Date => FieldValue::Date(declared.and_then(parse_calendar_date)),
        FieldType::Enum => FieldValue::Text(decode_enum(descriptor, declared)),
        FieldType::String | FieldType::Text => {
            FieldValue::Text(declared.unwrap_or_default().to_string())
        }
    }
}

/// Decodes an integer default via float parse and rounding.
fn decode_integer(declared: Option<&str>) -> i64 {
    declared.and_then(|v| v.parse::<f64>().ok()).map_or(0, round_to_i64)
}

/// Decodes a floating-point default.
fn decode_number(declared: Option<&str>) -> f64 {
    declared.and_then(|v| v.parse::<f64>().ok()).filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Decodes an enum default: declared value, else first option, else empty.
fn decode_enum(descriptor: &FieldDescriptor, declared: Option<&str>) -> String {
    declared
        .map(ToString::to_string)
        .or_else(|| descriptor.enum_options.first().cloned())
        .unwrap_or_default()
}

/// Rounds a parsed float into the i64 range.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    reason = "Rounded value is clamped to the i64 range before conversion."
)]
fn round_to_i64(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    let rounded = value.round();
    if rounded <= i64::MIN as f64 {
        i64::MIN
    } else if rounded >= i64::MAX as f64 {
        i64::MAX
    } else {
        rounded as i64
    }
}

// ============================================================================
// SECTION: Date Parsing
// ============================================================================

/// Parses a calendar-date default (`YYYY-MM-DD`).
fn parse_calendar_date(value: &str) -> Option<Date> {
    let mut parts = value.split('-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u8 = parts.next()?.parse().ok()?;
    let day: u8 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    let month = Month::try_from(month).ok()?;
    Date::from_calendar_date(year, month, day).ok()
}
