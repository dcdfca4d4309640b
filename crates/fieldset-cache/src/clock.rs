// crates/fieldset-cache/src/clock.rs
// ============================================================================
// Module: System Clock
// Description: Wall-clock implementation of the core Clock interface.
// Purpose: Supply real time to the cache outside of tests.
// Dependencies: fieldset-core
// ============================================================================

//! ## Overview
//! The core never reads wall-clock time; hosts inject a [`Clock`]. This is
//! the production implementation. Tests inject fake clocks instead, which is
//! what makes TTL behavior independently testable.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use fieldset_core::Clock;

// ============================================================================
// SECTION: System Clock
// ============================================================================

/// Wall-clock time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .ok()
            .and_then(|elapsed| i64::try_from(elapsed.as_millis()).ok())
            .unwrap_or(0)
    }
}
