//! Content-addressed memoization of drawable resources.
//!
//! Each resident key is generated exactly once and handed out as a shared
//! `Rc`, so every caller asking for the same key gets the same allocation.
//! The store is unbounded by default; [`ResourceCache::bounded`] caps it with
//! least-recently-used eviction, after which an evicted key is generated again
//! on its next request.

use std::collections::HashMap;
use std::convert::Infallible;
use std::num::NonZeroUsize;
use std::rc::Rc;

use lru::LruCache;

use super::cache_key::CacheKey;
use crate::platform::texture::Texture;

pub type TextureCache = ResourceCache<Texture>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub generations: u64,
    pub evictions: u64,
}

enum Store<T> {
    Unbounded(HashMap<CacheKey, Rc<T>>),
    Bounded(LruCache<CacheKey, Rc<T>>),
}

pub struct ResourceCache<T> {
    store: Store<T>,
    stats: CacheStats,
}

impl<T> ResourceCache<T> {
    pub fn new() -> Self {
        Self {
            store: Store::Unbounded(HashMap::new()),
            stats: CacheStats::default(),
        }
    }

    pub fn bounded(capacity: NonZeroUsize) -> Self {
        Self {
            store: Store::Bounded(LruCache::new(capacity)),
            stats: CacheStats::default(),
        }
    }

    /// Return the resource stored under `key`, generating it first if absent.
    pub fn get<F>(&mut self, key: &CacheKey, generate: F) -> Rc<T>
    where
        F: FnOnce() -> T,
    {
        match self.get_or_try_insert(key, || Ok::<T, Infallible>(generate())) {
            Ok(resource) => resource,
            Err(never) => match never {},
        }
    }

    /// Like [`get`](Self::get) for generators that can fail.
    ///
    /// A failed generation stores nothing and the error goes straight back to the caller.
    pub fn get_or_try_insert<E, F>(&mut self, key: &CacheKey, generate: F) -> Result<Rc<T>, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if let Some(found) = self.lookup(key) {
            self.stats.hits += 1;
            log::trace!("Resource cache hit: {}", key);
            return Ok(found);
        }

        let resource = Rc::new(generate()?);
        self.stats.generations += 1;
        log::debug!("Generated resource for {}", key);
        self.insert(key.clone(), Rc::clone(&resource));
        Ok(resource)
    }

    /// Whether `key` is resident. Does not count as a use for eviction order.
    pub fn contains(&self, key: &CacheKey) -> bool {
        match &self.store {
            Store::Unbounded(map) => map.contains_key(key),
            Store::Bounded(lru) => lru.contains(key),
        }
    }

    pub fn len(&self) -> usize {
        match &self.store {
            Store::Unbounded(map) => map.len(),
            Store::Bounded(lru) => lru.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `None` when unbounded.
    pub fn capacity(&self) -> Option<NonZeroUsize> {
        match &self.store {
            Store::Unbounded(_) => None,
            Store::Bounded(lru) => Some(lru.cap()),
        }
    }

    /// Drop every entry. Sprites still holding a resource keep it alive.
    pub fn clear(&mut self) {
        log::debug!("Clearing {} cached resources", self.len());
        match &mut self.store {
            Store::Unbounded(map) => map.clear(),
            Store::Bounded(lru) => lru.clear(),
        }
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    fn lookup(&mut self, key: &CacheKey) -> Option<Rc<T>> {
        match &mut self.store {
            Store::Unbounded(map) => map.get(key).cloned(),
            Store::Bounded(lru) => lru.get(key).cloned(),
        }
    }

    fn insert(&mut self, key: CacheKey, resource: Rc<T>) {
        match &mut self.store {
            Store::Unbounded(map) => {
                map.insert(key, resource);
            }
            Store::Bounded(lru) => {
                if let Some((evicted, _)) = lru.push(key, resource) {
                    self.stats.evictions += 1;
                    log::debug!("Evicted resource {}", evicted);
                }
            }
        }
    }
}

impl<T> Default for ResourceCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
