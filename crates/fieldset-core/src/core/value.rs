// crates/fieldset-core/src/core/value.rs
// ============================================================================
// Module: Fieldset Field Values
// Description: Typed values produced by default-value computation.
// Purpose: Carry type-coerced initial values to consuming widgets.
// Dependencies: serde, time
// ============================================================================

//! ## Overview
//! [`FieldValue`] is the typed result handed to the widget layer when a form
//! or filter seeds its initial state. The engine never renders anything; it
//! only guarantees that the value matches the descriptor's declared type.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Serialize;
use serde::Serializer;
use time::Date;

// ============================================================================
// SECTION: Field Values
// ============================================================================

/// Typed value seeded for a field, per its declared type.
///
/// # Invariants
/// - The variant always matches the descriptor's `field_type` family.
/// - `Date(None)` means no default date was declared or decodable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Boolean flag.
    Bool(bool),
    /// Whole number.
    Integer(i64),
    /// Floating-point number.
    Number(f64),
    /// String, text, or enum selection.
    Text(String),
    /// Calendar date, serialized as `YYYY-MM-DD` when present.
    Date(#[serde(serialize_with = "serialize_date")] Option<Date>),
}

impl FieldValue {
    /// Returns the text content when the value is textual.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the boolean content when the value is a flag.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => value.fmt(f),
            Self::Integer(value) => value.fmt(f),
            Self::Number(value) => value.fmt(f),
            Self::Text(value) => f.write_str(value),
            Self::Date(Some(date)) => f.write_str(&format_date(*date)),
            Self::Date(None) => Ok(()),
        }
    }
}

// ============================================================================
// SECTION: Date Formatting
// ============================================================================

/// Renders a calendar date as `YYYY-MM-DD`.
fn format_date(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

/// Serializes an optional date as `YYYY-MM-DD` or null.
fn serialize_date<S>(date: &Option<Date>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match date {
        Some(date) => serializer.serialize_str(&format_date(*date)),
        None => serializer.serialize_none(),
    }
}
