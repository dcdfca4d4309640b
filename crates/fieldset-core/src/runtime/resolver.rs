// crates/fieldset-core/src/runtime/resolver.rs
// ============================================================================
// Module: Fieldset Visibility Resolver
// Description: Per-context visibility and requirement resolution.
// Purpose: Annotate a consuming context's logical keys with visibility policy.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! A consuming context (a create form, a search filter) owns a fixed mapping
//! from its logical field keys (for example `yearFrom`) to the domain's
//! canonical descriptor names (`year_from`). Resolution is a total function:
//! a logical key with no matching descriptor fails open to visible and not
//! required, so legacy or unconfigured fields never silently disappear.
//! Resolution is pure and recomputed per call; nothing here caches state.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use crate::core::descriptor::ContextSurface;
use crate::core::descriptor::FieldDescriptor;

// ============================================================================
// SECTION: Context Mapping
// ============================================================================

/// Ordered table translating a context's logical keys to canonical names.
///
/// # Invariants
/// - Entry order is preserved; duplicate logical keys keep the last entry
///   when collected into a resolution map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextMapping {
    /// `(logical key, canonical descriptor name)` pairs.
    entries: Vec<(String, String)>,
}

impl ContextMapping {
    /// Creates an empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds a logical-key to canonical-name entry.
    #[must_use]
    pub fn with(mut self, logical: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.entries.push((logical.into(), canonical.into()));
        self
    }

    /// Creates an identity mapping over the given canonical names.
    #[must_use]
    pub fn identity<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut mapping = Self::new();
        for name in names {
            let name = name.into();
            mapping.entries.push((name.clone(), name));
        }
        mapping
    }

    /// Iterates `(logical key, canonical name)` entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(logical, canonical)| (logical.as_str(), canonical.as_str()))
    }
}

// ============================================================================
// SECTION: Resolved Fields
// ============================================================================

/// Visibility verdict for one logical key.
///
/// # Invariants
/// - `descriptor = None` implies the fail-open default
///   (`is_visible = true`, `is_required = false`).
/// - Never persisted; recomputed whenever the descriptor set changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedField {
    /// Whether the field appears on the requested surface.
    pub is_visible: bool,
    /// Whether submissions must carry a non-empty value.
    pub is_required: bool,
    /// Backing descriptor, when one exists for the canonical name.
    pub descriptor: Option<FieldDescriptor>,
}

impl ResolvedField {
    /// Fail-open verdict for names with no descriptor.
    #[must_use]
    pub const fn fail_open() -> Self {
        Self {
            is_visible: true,
            is_required: false,
            descriptor: None,
        }
    }
}

// ============================================================================
// SECTION: Resolution
// ============================================================================

/// Resolves one canonical field name against a descriptor set.
///
/// Total over the lookup: an unknown name yields the fail-open verdict.
#[must_use]
pub fn resolve_field(
    fields: &[FieldDescriptor],
    name: &str,
    surface: ContextSurface,
) -> ResolvedField {
    fields.iter().find(|field| field.name == name).map_or_else(ResolvedField::fail_open, |field| {
        ResolvedField {
            is_visible: field.is_visible_on(surface),
            is_required: field.is_effectively_required(),
            descriptor: Some(field.clone()),
        }
    })
}

/// Resolves every logical key of a context mapping.
///
/// Contexts sharing one descriptor set resolve independently; nothing is
/// shared or cached between calls.
#[must_use]
pub fn resolve_context(
    fields: &[FieldDescriptor],
    mapping: &ContextMapping,
    surface: ContextSurface,
) -> BTreeMap<String, ResolvedField> {
    mapping
        .entries()
        .map(|(logical, canonical)| (logical.to_string(), resolve_field(fields, canonical, surface)))
        .collect()
}
