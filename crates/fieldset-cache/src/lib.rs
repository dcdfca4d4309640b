// crates/fieldset-cache/src/lib.rs
// ============================================================================
// Module: Fieldset Cache
// Description: Configuration cache for field descriptor sets.
// Purpose: Provide TTL-evicted, explicitly-invalidated descriptor caching.
// Dependencies: fieldset-core
// ============================================================================

//! ## Overview
//! This crate ships the Configuration Cache: a process-wide, lazily-populated
//! descriptor cache keyed per (surface, domain), evicted on a five-minute TTL
//! and invalidated on demand after descriptor mutations. The store and clock
//! are injected through the core interfaces, and a dependency-light metrics
//! sink exposes hit/miss/error counters.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod cache;
pub mod clock;
pub mod metrics;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use cache::DEFAULT_TTL_MS;
pub use cache::FieldCache;
pub use clock::SystemClock;
pub use metrics::CacheLookupEvent;
pub use metrics::CacheMetricsSink;
pub use metrics::LookupOutcome;
pub use metrics::NoopMetricsSink;
