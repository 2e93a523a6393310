//! Bounded, shareable memoization of [`extract_domain`].

use moka::policy::EvictionPolicy;
use moka::sync::Cache;

use super::canonical::extract_domain;

/// Default number of raw inputs remembered by a [`DomainCanonicalizer`].
pub const DEFAULT_CACHE_CAPACITY: u64 = 512;

/// Canonicalizes URLs and hosts, memoizing results by exact input string.
///
/// The cache is bounded and evicts the least recently used entry when full.
/// Clones share the same cache, and all methods take `&self`, so a single
/// canonicalizer can be handed to any number of threads or tasks.
#[derive(Clone)]
pub struct DomainCanonicalizer {
    cache: Cache<String, String>,
    capacity: u64,
}

impl DomainCanonicalizer {
    /// Canonicalizer with [`DEFAULT_CACHE_CAPACITY`] entries.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Canonicalizer remembering at most `capacity` inputs (at least one).
    pub fn with_capacity(capacity: u64) -> Self {
        let capacity = capacity.max(1);
        let cache = Cache::builder()
            .max_capacity(capacity)
            .eviction_policy(EvictionPolicy::lru())
            .build();
        Self { cache, capacity }
    }

    /// Canonical domain for `input`; empty when it cannot be determined.
    ///
    /// Failed lookups are cached too, so a malformed link repeated across a
    /// feed is only parsed once.
    pub fn canonicalize(&self, input: &str) -> String {
        if let Some(hit) = self.cache.get(input) {
            return hit;
        }
        let domain = extract_domain(input);
        tracing::debug!(input, domain = %domain, "canonicalized domain (cache miss)");
        self.cache.insert(input.to_string(), domain.clone());
        domain
    }

    /// Configured maximum number of cached inputs.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Number of cached inputs, after applying pending evictions.
    pub fn cache_len(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    /// Drop every cached entry.
    pub fn clear(&self) {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks();
    }
}

impl Default for DomainCanonicalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DomainCanonicalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomainCanonicalizer")
            .field("capacity", &self.capacity)
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}
