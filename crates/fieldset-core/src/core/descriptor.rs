// crates/fieldset-core/src/core/descriptor.rs
// ============================================================================
// Module: Fieldset Field Descriptors
// Description: Metadata records describing runtime-configurable fields.
// Purpose: Provide the canonical field metadata contract shared by all consumers.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! A [`FieldDescriptor`] describes one administrator-configurable field: its
//! type, display metadata, requirement policy, per-surface visibility, and
//! type-specific constraints. Descriptors are owned and mutated exclusively by
//! the backing store; the engine treats them as immutable snapshots. Decoding
//! is tolerant: optional metadata missing from the wire falls back to
//! permissive defaults so incomplete store records never break consumers.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Number;
use serde_json::Value;

// ============================================================================
// SECTION: Domains
// ============================================================================

/// Field namespace served by the backing store.
///
/// # Invariants
/// - Exactly two domains exist; wire tags are stable (`vcdb`, `product`).
/// - Field names are unique within a domain, never across domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldDomain {
    /// Vehicle configuration attributes (year/make/model and friends).
    #[serde(rename = "vcdb")]
    VehicleConfiguration,
    /// Product and fitment attributes.
    #[serde(rename = "product")]
    Product,
}

impl FieldDomain {
    /// Returns the stable wire tag used in store requests.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VehicleConfiguration => "vcdb",
            Self::Product => "product",
        }
    }
}

impl fmt::Display for FieldDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Field Types
// ============================================================================

/// Declared data type of a configurable field.
///
/// # Invariants
/// - Variants are stable for serialization and store compatibility.
/// - Default computation and validation dispatch on this tag in one place
///   each, so adding a variant is a localized change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Single-line string.
    String,
    /// Multi-line text.
    Text,
    /// Floating-point number.
    Number,
    /// Whole number.
    Integer,
    /// Decimal number.
    Decimal,
    /// Boolean flag.
    Boolean,
    /// One of a fixed set of string options.
    Enum,
    /// Calendar date.
    Date,
}

impl FieldType {
    /// Returns true for types validated with numeric range checks.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Number | Self::Integer | Self::Decimal)
    }

    /// Returns true for types validated with length bounds.
    #[must_use]
    pub const fn is_textual(self) -> bool {
        matches!(self, Self::String | Self::Text)
    }
}

// ============================================================================
// SECTION: Requirement Levels
// ============================================================================

/// Submission requirement policy for a field.
///
/// # Invariants
/// - Variants are stable for serialization and store compatibility.
/// - `Disabled` fields are never shown, independent of visibility flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementLevel {
    /// A visible field must carry a non-empty value on submission.
    Required,
    /// The field may be left empty.
    #[default]
    Optional,
    /// The field is never shown.
    Disabled,
}

// ============================================================================
// SECTION: Context Surfaces
// ============================================================================

/// Consuming surface a descriptor set is resolved for.
///
/// Each surface reads its own visibility flag; a field may appear on one
/// surface and not the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextSurface {
    /// Create/edit forms; gated by `show_in_forms`.
    Form,
    /// Search filters; gated by `show_in_filters`.
    Filter,
}

impl ContextSurface {
    /// Returns a stable label for cache keys and metrics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Form => "form",
            Self::Filter => "filter",
        }
    }
}

impl fmt::Display for ContextSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Field Descriptor
// ============================================================================

/// Metadata record for one configurable field.
///
/// # Invariants
/// - `name` is a stable identifier, unique within `domain` (store-owned).
/// - `is_enabled = false` forces the field invisible and not required,
///   regardless of every other flag.
/// - `default_value` is string-encoded and decoded per `field_type`.
/// - `display_order` carries rendering sequence only; ties break on
///   `display_name` lexical order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Canonical field name; stable identifier used by consumers.
    pub name: String,
    /// Human-readable label.
    pub display_name: String,
    /// Optional help text.
    #[serde(default)]
    pub description: Option<String>,
    /// Declared data type.
    pub field_type: FieldType,
    /// Owning domain.
    #[serde(alias = "reference_type")]
    pub domain: FieldDomain,
    /// Submission requirement policy.
    #[serde(default)]
    pub requirement_level: RequirementLevel,
    /// Master on/off switch, independent of `requirement_level`.
    #[serde(default = "default_true")]
    pub is_enabled: bool,
    /// Advisory uniqueness flag surfaced to the UI; not enforced here.
    #[serde(default)]
    pub is_unique: bool,
    /// Ordered allowed values; only meaningful when `field_type` is enum.
    #[serde(default)]
    pub enum_options: Vec<String>,
    /// String-encoded default, decoded per `field_type`.
    #[serde(default)]
    pub default_value: Option<String>,
    /// Rendering sequence; ties break on `display_name`.
    #[serde(default)]
    pub display_order: i64,
    /// Whether the field appears in create/edit forms.
    #[serde(default = "default_true")]
    pub show_in_forms: bool,
    /// Whether the field appears in search filters.
    #[serde(default)]
    pub show_in_filters: bool,
    /// Minimum string length for textual types.
    #[serde(default)]
    pub min_length: Option<u64>,
    /// Maximum string length for textual types.
    #[serde(default)]
    pub max_length: Option<u64>,
    /// Minimum value for numeric types.
    #[serde(default)]
    pub min_value: Option<Number>,
    /// Maximum value for numeric types.
    #[serde(default)]
    pub max_value: Option<Number>,
    /// Free-form extension bag for future constraint kinds; not interpreted.
    #[serde(default)]
    pub validation_rules: Option<Value>,
    /// Store-owned creation timestamp (opaque RFC3339 string).
    #[serde(default)]
    pub created_at: Option<String>,
    /// Store-owned modification timestamp (opaque RFC3339 string).
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl FieldDescriptor {
    /// Returns true when the field is visible on the given surface.
    ///
    /// Disabled fields are never shown, regardless of visibility flags.
    #[must_use]
    pub const fn is_visible_on(&self, surface: ContextSurface) -> bool {
        if !self.is_enabled || matches!(self.requirement_level, RequirementLevel::Disabled) {
            return false;
        }
        match surface {
            ContextSurface::Form => self.show_in_forms,
            ContextSurface::Filter => self.show_in_filters,
        }
    }

    /// Returns true when submissions must carry a non-empty value.
    #[must_use]
    pub fn is_effectively_required(&self) -> bool {
        self.is_enabled && self.requirement_level == RequirementLevel::Required
    }
}

/// Serde default for flags that fail open when absent from the wire.
const fn default_true() -> bool {
    true
}

// ============================================================================
// SECTION: Ordering
// ============================================================================

/// Sorts descriptors into rendering order.
///
/// Total and idempotent: ascending `display_order`, ties broken by
/// `display_name` lexical order.
pub fn sort_fields_by_display_order(fields: &mut [FieldDescriptor]) {
    fields.sort_by(|a, b| {
        a.display_order.cmp(&b.display_order).then_with(|| a.display_name.cmp(&b.display_name))
    });
}
