// crates/fieldset-cache/src/metrics.rs
// ============================================================================
// Module: Cache Telemetry
// Description: Observability hooks for descriptor cache lookups.
// Purpose: Provide metric events for hit/miss/error counters without hard deps.
// Dependencies: fieldset-core
// ============================================================================

//! ## Overview
//! This module exposes a thin metrics interface for cache lookup counters. It
//! is intentionally dependency-light so downstream deployments can plug in
//! Prometheus or OpenTelemetry without redesign. The default sink discards
//! every event.

// ============================================================================
// SECTION: Imports
// ============================================================================

use fieldset_core::ContextSurface;
use fieldset_core::FieldDomain;

// ============================================================================
// SECTION: Metric Labels
// ============================================================================

/// Cache lookup outcome classification.
///
/// # Invariants
/// - Variants are stable for telemetry labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Served from a fresh cache entry without store activity.
    Hit,
    /// Fetched from the store and committed to cache.
    Miss,
    /// Store fetch failed; nothing was cached.
    Error,
}

impl LookupOutcome {
    /// Returns a stable label for the outcome.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Miss => "miss",
            Self::Error => "error",
        }
    }
}

/// Cache lookup metric event payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheLookupEvent {
    /// Surface whose key was looked up.
    pub surface: ContextSurface,
    /// Domain whose key was looked up.
    pub domain: FieldDomain,
    /// Lookup outcome.
    pub outcome: LookupOutcome,
}

// ============================================================================
// SECTION: Metrics Sink
// ============================================================================

/// Sink receiving cache lookup events.
pub trait CacheMetricsSink {
    /// Records one lookup event.
    fn record_lookup(&self, event: &CacheLookupEvent);
}

/// Sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMetricsSink;

impl CacheMetricsSink for NoopMetricsSink {
    fn record_lookup(&self, _event: &CacheLookupEvent) {}
}
