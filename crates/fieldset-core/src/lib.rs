// crates/fieldset-core/src/lib.rs
// ============================================================================
// Module: Fieldset Core
// Description: Field configuration and validation engine primitives.
// Purpose: Define the field metadata contract and the pure engine operations.
// Dependencies: bigdecimal, serde, serde_json, thiserror, time
// ============================================================================

//! ## Overview
//! Fieldset lets two fixed attribute domains (vehicle configuration and
//! product/fitment) expose their field sets as runtime-editable metadata.
//! This crate holds the pure engine: the [`FieldDescriptor`] model, visibility
//! and requirement resolution per consuming context, default-value
//! computation, validation composition, the remote validation bridge, and the
//! backend-agnostic [`FieldStore`] / [`Clock`] interfaces.
//! Invariants:
//! - Descriptors are immutable snapshots owned by the backing store.
//! - Resolution fails open: unknown field names stay visible and optional.
//! - Every failure path resolves to a typed result, never a panic.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::descriptor::ContextSurface;
pub use crate::core::descriptor::FieldDescriptor;
pub use crate::core::descriptor::FieldDomain;
pub use crate::core::descriptor::FieldType;
pub use crate::core::descriptor::RequirementLevel;
pub use crate::core::descriptor::sort_fields_by_display_order;
pub use crate::core::validation::GENERAL_ERROR_KEY;
pub use crate::core::validation::ValidationResult;
pub use crate::core::value::FieldValue;
pub use crate::interfaces::Clock;
pub use crate::interfaces::FieldStore;
pub use crate::interfaces::FieldStoreError;
pub use crate::runtime::defaults::default_value;
pub use crate::runtime::remote::validate_with_store;
pub use crate::runtime::resolver::ContextMapping;
pub use crate::runtime::resolver::ResolvedField;
pub use crate::runtime::resolver::resolve_context;
pub use crate::runtime::resolver::resolve_field;
pub use crate::runtime::validator::validate_all;
pub use crate::runtime::validator::validate_field;
