// crates/fieldset-core/src/runtime.rs
// ============================================================================
// Module: Fieldset Runtime
// Description: Resolution, default computation, and validation composition.
// Purpose: Group the pure engine operations built over the core model.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! Runtime operations are pure functions over fetched descriptor sets:
//! per-context visibility resolution, type-polymorphic default computation,
//! local validation composition, and the remote validation bridge. State
//! (caching, TTL) lives in `fieldset-cache`, never here.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod defaults;
pub mod remote;
pub mod resolver;
pub mod validator;
