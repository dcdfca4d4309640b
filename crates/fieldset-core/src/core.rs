// crates/fieldset-core/src/core.rs
// ============================================================================
// Module: Fieldset Core Model
// Description: Descriptor, value, and validation-result data model.
// Purpose: Group the pure data types shared by every engine component.
// Dependencies: serde, serde_json, time
// ============================================================================

//! ## Overview
//! The core model is pure data: field descriptors as served by the backing
//! store, typed default values, and the shared validation result shape. No
//! I/O and no wall-clock access lives here.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod descriptor;
pub mod validation;
pub mod value;
