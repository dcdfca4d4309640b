// crates/fieldset-core/src/interfaces.rs
// ============================================================================
// Module: Fieldset Interfaces
// Description: Backend-agnostic interfaces for field stores and clocks.
// Purpose: Define the contract surfaces used by the cache and validation bridge.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! Interfaces define how the engine integrates with its collaborators without
//! embedding backend details. The backing store owns field definitions and
//! authoritative validation; the engine only reads. Time is always injected:
//! the core never reads wall-clock time, so TTL behavior is testable with a
//! fake clock.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use thiserror::Error;

use crate::core::descriptor::FieldDescriptor;
use crate::core::descriptor::FieldDomain;
use crate::core::validation::ValidationResult;

// ============================================================================
// SECTION: Field Store
// ============================================================================

/// Field store errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - Errors are never fatal to the hosting process; callers degrade or retry.
#[derive(Debug, Error)]
pub enum FieldStoreError {
    /// Network or backing-store unavailable.
    #[error("field store transport error: {0}")]
    Transport(String),
    /// Response could not be decoded into the expected shape.
    #[error("field store decode error: {0}")]
    Decode(String),
}

/// Backend-agnostic source of field descriptors and authoritative validation.
pub trait FieldStore {
    /// Fetches the full descriptor set for a domain.
    ///
    /// # Errors
    ///
    /// Returns [`FieldStoreError`] when the store is unreachable or the
    /// response cannot be decoded.
    fn fetch_fields(&self, domain: FieldDomain) -> Result<Vec<FieldDescriptor>, FieldStoreError>;

    /// Delegates authoritative validation of a candidate value set.
    ///
    /// # Errors
    ///
    /// Returns [`FieldStoreError`] when the store is unreachable or the
    /// response cannot be decoded. Business-rule failures are not errors;
    /// they arrive inside the [`ValidationResult`].
    fn validate_fields(
        &self,
        domain: FieldDomain,
        values: &BTreeMap<String, String>,
    ) -> Result<ValidationResult, FieldStoreError>;
}

// ============================================================================
// SECTION: Clock
// ============================================================================

/// Injectable time source for TTL bookkeeping.
///
/// # Invariants
/// - Implementations must be monotone enough for expiry comparisons; the
///   engine never assumes strict monotonicity.
pub trait Clock {
    /// Returns the current time as unix epoch milliseconds.
    fn now_millis(&self) -> i64;
}
