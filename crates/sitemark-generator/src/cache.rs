//! Rendered-artifact caching.
//!
//! Keyed compute-or-fetch memoizer with per-entry expiry. The serving layer
//! wraps sitemap rendering in [`RenderCache::remember`] so the populator
//! does not run on every request; generators themselves never cache.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::debug;

#[derive(Debug)]
struct CachedEntry {
    value: String,
    expires_at: Instant,
}

/// Keyed cache of rendered artifacts with per-entry TTL.
#[derive(Debug, Default)]
pub struct RenderCache {
    entries: HashMap<String, CachedEntry>,
}

impl RenderCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `key`, or run `compute`, store the result
    /// for `ttl`, and return it.
    pub fn remember<F>(&mut self, key: &str, ttl: Duration, compute: F) -> String
    where
        F: FnOnce() -> String,
    {
        let now = Instant::now();
        if let Some(entry) = self.entries.get(key) {
            if entry.expires_at > now {
                return entry.value.clone();
            }
        }

        debug!(key, "cache miss, rendering");
        let value = compute();
        self.entries.insert(
            key.to_string(),
            CachedEntry {
                value: value.clone(),
                expires_at: now + ttl,
            },
        );
        value
    }

    /// Drop a single entry.
    pub fn invalidate(&mut self, key: &str) {
        self.entries.remove(key);
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of stored entries, expired ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
