// crates/fieldset-cache/src/cache.rs
// ============================================================================
// Module: Fieldset Configuration Cache
// Description: TTL-evicted, explicitly-invalidated descriptor cache.
// Purpose: Serve descriptor sets per (surface, domain) key without redundant fetches.
// Dependencies: fieldset-core
// ============================================================================

//! ## Overview
//! The cache fronts any [`FieldStore`] with per-key TTL eviction. Form and
//! filter lookups for one domain cache under independent keys, so a surface
//! invalidating or expiring never disturbs the other. Fetch failures are
//! never cached: the error surfaces to the caller and any previous entry,
//! expired or not, is left in place for a later retry to replace. The clock
//! is injected; the cache itself never reads wall-clock time.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use fieldset_core::Clock;
use fieldset_core::ContextSurface;
use fieldset_core::FieldDescriptor;
use fieldset_core::FieldDomain;
use fieldset_core::FieldStore;
use fieldset_core::FieldStoreError;
use fieldset_core::sort_fields_by_display_order;

use crate::metrics::CacheLookupEvent;
use crate::metrics::CacheMetricsSink;
use crate::metrics::LookupOutcome;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default descriptor TTL: five minutes.
pub const DEFAULT_TTL_MS: i64 = 5 * 60 * 1_000;

// ============================================================================
// SECTION: Cache Entries
// ============================================================================

/// Cache key: one surface of one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct CacheKey {
    /// Consuming surface (form or filter).
    surface: ContextSurface,
    /// Field domain.
    domain: FieldDomain,
}

/// Cached descriptor set with its expiry instant.
#[derive(Debug, Clone)]
struct CacheEntry {
    /// Descriptors in display order.
    fields: Vec<FieldDescriptor>,
    /// Entry is fresh strictly before this unix-millisecond instant.
    expires_at_ms: i64,
}

// ============================================================================
// SECTION: Field Cache
// ============================================================================

/// TTL-evicted descriptor cache over a field store.
///
/// # Invariants
/// - Entries are keyed per (surface, domain); surfaces never cross-contaminate.
/// - Descriptors are sorted into display order before caching and treated as
///   immutable afterwards.
/// - Errors are never cached; only successful fetches commit entries.
/// - Lookups that may fetch take `&mut self`, so one handle can never race
///   two identical in-flight fetches.
pub struct FieldCache<S, C> {
    /// Backing field store.
    store: S,
    /// Injected time source.
    clock: C,
    /// Entry time-to-live in milliseconds.
    ttl_ms: i64,
    /// Cached descriptor sets keyed per (surface, domain).
    entries: BTreeMap<CacheKey, CacheEntry>,
    /// Lookup metrics sink.
    metrics: Box<dyn CacheMetricsSink>,
}

impl<S, C> FieldCache<S, C>
where
    S: FieldStore,
    C: Clock,
{
    /// Creates a cache with the default five-minute TTL and no metrics sink.
    #[must_use]
    pub fn new(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            ttl_ms: DEFAULT_TTL_MS,
            entries: BTreeMap::new(),
            metrics: Box::new(crate::metrics::NoopMetricsSink),
        }
    }

    /// Overrides the entry TTL.
    #[must_use]
    pub fn with_ttl_ms(mut self, ttl_ms: i64) -> Self {
        self.ttl_ms = ttl_ms;
        self
    }

    /// Installs a metrics sink for lookup events.
    #[must_use]
    pub fn with_metrics(mut self, metrics: Box<dyn CacheMetricsSink>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Returns the descriptor set for forms of a domain.
    ///
    /// # Errors
    ///
    /// Returns [`FieldStoreError`] when no fresh entry exists and the store
    /// fetch fails.
    pub fn form_fields(
        &mut self,
        domain: FieldDomain,
    ) -> Result<Vec<FieldDescriptor>, FieldStoreError> {
        self.fields(ContextSurface::Form, domain)
    }

    /// Returns the descriptor set for filters of a domain.
    ///
    /// # Errors
    ///
    /// Returns [`FieldStoreError`] when no fresh entry exists and the store
    /// fetch fails.
    pub fn filter_fields(
        &mut self,
        domain: FieldDomain,
    ) -> Result<Vec<FieldDescriptor>, FieldStoreError> {
        self.fields(ContextSurface::Filter, domain)
    }

    /// Returns the descriptor set for one surface of a domain.
    ///
    /// A fresh entry is served without store activity. Otherwise the store is
    /// fetched, the result sorted into display order, and the entry committed
    /// with expiry `now + TTL`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldStoreError`] when no fresh entry exists and the store
    /// fetch fails; the previous entry, if any, is left untouched.
    pub fn fields(
        &mut self,
        surface: ContextSurface,
        domain: FieldDomain,
    ) -> Result<Vec<FieldDescriptor>, FieldStoreError> {
        let key = CacheKey {
            surface,
            domain,
        };
        let now = self.clock.now_millis();
        if let Some(entry) = self.entries.get(&key)
            && entry.expires_at_ms > now
        {
            self.record(surface, domain, LookupOutcome::Hit);
            return Ok(entry.fields.clone());
        }
        match self.store.fetch_fields(domain) {
            Ok(mut fields) => {
                sort_fields_by_display_order(&mut fields);
                self.entries.insert(key, CacheEntry {
                    fields: fields.clone(),
                    expires_at_ms: now.saturating_add(self.ttl_ms),
                });
                self.record(surface, domain, LookupOutcome::Miss);
                Ok(fields)
            }
            Err(error) => {
                self.record(surface, domain, LookupOutcome::Error);
                Err(error)
            }
        }
    }

    /// Returns the descriptor set, degrading to an empty list on store errors.
    ///
    /// This is the consumer-layer fail-open policy: dependent surfaces keep
    /// rendering with fail-open visibility defaults instead of crashing.
    pub fn fields_or_empty(
        &mut self,
        surface: ContextSurface,
        domain: FieldDomain,
    ) -> Vec<FieldDescriptor> {
        self.fields(surface, domain).unwrap_or_default()
    }

    /// Clears entries for one domain, or everything when no domain is given.
    ///
    /// Must be called after any descriptor mutation elsewhere in the system
    /// so subsequent reads are not stale beyond the TTL.
    pub fn invalidate(&mut self, domain: Option<FieldDomain>) {
        match domain {
            Some(domain) => self.entries.retain(|key, _| key.domain != domain),
            None => self.entries.clear(),
        }
    }

    /// Emits one lookup metric event.
    fn record(&self, surface: ContextSurface, domain: FieldDomain, outcome: LookupOutcome) {
        self.metrics.record_lookup(&CacheLookupEvent {
            surface,
            domain,
            outcome,
        });
    }
}
