// crates/fieldset-client/src/lib.rs
// ============================================================================
// Module: Fieldset Client
// Description: HTTP field store client for the backing configuration store.
// Purpose: Provide the reqwest-backed FieldStore used by caches and bridges.
// Dependencies: fieldset-core, reqwest, serde, serde_json
// ============================================================================

//! ## Overview
//! This crate ships the blocking HTTP implementation of the core
//! [`fieldset_core::FieldStore`] interface: descriptor fetches with tolerant
//! envelope normalization, and delegation to the store's authoritative
//! validation endpoint. Strict limits (timeouts, size caps, no redirects)
//! keep failure modes predictable; error folding into the shared validation
//! shape happens in `fieldset-core::runtime::remote`.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod envelope;
pub mod http;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use envelope::normalize_envelope;
pub use http::HttpFieldStore;
pub use http::HttpStoreConfig;
