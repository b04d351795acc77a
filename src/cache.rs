// src/cache.rs
//! Caller-owned storage for computed figures, keyed by community and graph kind.

use std::collections::HashMap;

use crate::render::{GraphKind, RenderOutcome};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub community: String,
    pub kind: GraphKind,
}

impl CacheKey {
    #[must_use]
    pub fn new(community: impl Into<String>, kind: GraphKind) -> Self {
        Self {
            community: community.into(),
            kind,
        }
    }
}

/// Storage for previously rendered outcomes. The pipeline never reads or
/// writes one; the presentation layer decides when to populate it.
pub trait RenderCache {
    fn get(&self, key: &CacheKey) -> Option<RenderOutcome>;

    fn put(&mut self, key: CacheKey, value: RenderOutcome);

    /// Returns the cached value or computes, stores and returns a new one.
    fn get_or_insert_with<F>(&mut self, key: CacheKey, compute: F) -> RenderOutcome
    where
        F: FnOnce() -> RenderOutcome,
        Self: Sized,
    {
        if let Some(hit) = self.get(&key) {
            return hit;
        }
        let value = compute();
        self.put(key, value.clone());
        value
    }
}

#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: HashMap<CacheKey, RenderOutcome>,
}

impl MemoryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl RenderCache for MemoryCache {
    fn get(&self, key: &CacheKey) -> Option<RenderOutcome> {
        self.entries.get(key).cloned()
    }

    fn put(&mut self, key: CacheKey, value: RenderOutcome) {
        self.entries.insert(key, value);
    }
}
