//! ImageCache: size-bounded LRU cache of image metadata

use std::collections::HashMap;

use ahash::RandomState;
use tracing::{debug, trace};

use crate::config::{CacheConfig, RepushPolicy};
use crate::error::{AccountingOp, Error, Result};
use crate::item::Image;
use crate::recency::{Iter, RecencyList};
use crate::stats::CacheStats;

/// Lookup table entry: the cached image and its node slot
struct Entry {
    image: Image,
    slot: usize,
}

/// Cache manager enforcing `available + sum(cached sizes) == capacity`
pub struct ImageCache {
    /// Total capacity in bytes, fixed at construction
    capacity: u64,

    /// Capacity not used by cached images
    available: u64,

    /// Name -> cached image
    lookup: HashMap<String, Entry, RandomState>,

    /// Recency order, MRU at the head
    list: RecencyList,

    /// Push statistics
    stats: CacheStats,

    policy: RepushPolicy,
}

impl ImageCache {
    /// Create a cache holding at most `capacity` bytes of images
    pub fn new(capacity: u64) -> Self {
        Self::with_config(CacheConfig::new(capacity))
    }

    /// Create a cache from a full config
    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            capacity: config.capacity,
            available: config.capacity,
            lookup: HashMap::with_hasher(RandomState::new()),
            list: RecencyList::new(),
            stats: CacheStats::new(),
            policy: config.repush_policy,
        }
    }

    /// Push an image into the cache.
    ///
    /// Returns `Ok(true)` when the image is cached afterwards (newly
    /// admitted or already present) and `Ok(false)` when it is larger than
    /// the whole cache. Evicts least recent images until it fits.
    ///
    /// # Errors
    /// Only on broken internal bookkeeping: [`Error::EmptyStructure`] or
    /// [`Error::CapacityInvariantViolation`].
    pub fn push(&mut self, item: Image) -> Result<bool> {
        if let Some(entry) = self.lookup.get(item.name()) {
            if self.policy == RepushPolicy::Promote {
                self.list.promote(entry.slot);
            }
            self.stats.record_repush();
            trace!(name = item.name(), policy = ?self.policy, "image already cached");
            return Ok(true);
        }

        if item.size() > self.capacity {
            self.stats.record_rejection();
            debug!(
                name = item.name(),
                size = item.size(),
                capacity = self.capacity,
                "image larger than cache, rejected"
            );
            return Ok(false);
        }

        while self.available < item.size() {
            let evicted = self.list.evict_least_recent()?;
            self.lookup.remove(evicted.name());
            self.recover(evicted.size())?;
            self.stats.record_eviction();
            debug!(
                name = evicted.name(),
                size = evicted.size(),
                available = self.available,
                "evicted least recent image"
            );
        }

        self.take(item.size())?;
        let slot = self.list.insert_most_recent(item.clone());
        debug!(
            name = item.name(),
            size = item.size(),
            available = self.available,
            "image cached"
        );
        self.lookup
            .insert(item.name().to_string(), Entry { image: item, slot });
        self.stats.record_insert();

        Ok(true)
    }

    /// Total capacity in bytes
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Capacity not used by cached images
    pub fn available_capacity(&self) -> u64 {
        self.available
    }

    /// Capacity used by cached images
    pub fn used_capacity(&self) -> u64 {
        self.capacity - self.available
    }

    /// Most recently inserted image
    pub fn most_recent_item(&self) -> Option<&Image> {
        self.list.peek_most_recent()
    }

    /// Next image to be evicted
    pub fn least_recent_item(&self) -> Option<&Image> {
        self.list.peek_least_recent()
    }

    /// Number of cached images
    pub fn cached_count(&self) -> usize {
        self.lookup.len()
    }

    /// Check if nothing is cached
    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    /// Fetch a cached image by name
    pub fn get(&self, name: &str) -> Option<&Image> {
        self.lookup.get(name).map(|entry| &entry.image)
    }

    /// Check if `name` is cached
    pub fn contains(&self, name: &str) -> bool {
        self.lookup.contains_key(name)
    }

    /// Cached images from most to least recent
    pub fn iter(&self) -> Iter<'_> {
        self.list.iter()
    }

    /// Push statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Active re-push policy
    pub fn policy(&self) -> RepushPolicy {
        self.policy
    }

    /// Drop every cached image and reset statistics
    pub fn clear(&mut self) {
        self.lookup.clear();
        self.list.clear();
        self.available = self.capacity;
        self.stats.reset();
        debug!(capacity = self.capacity, "cache cleared");
    }

    /// Reserve `size` bytes, returning what remains available
    pub(crate) fn take(&mut self, size: u64) -> Result<u64> {
        if size > self.available {
            return Err(self.violation(AccountingOp::Take, size));
        }
        self.available -= size;
        Ok(self.available)
    }

    /// Release `size` bytes, returning what is available afterwards
    pub(crate) fn recover(&mut self, size: u64) -> Result<u64> {
        if size > self.capacity - self.available {
            return Err(self.violation(AccountingOp::Recover, size));
        }
        self.available += size;
        Ok(self.available)
    }

    fn violation(&self, op: AccountingOp, requested: u64) -> Error {
        Error::CapacityInvariantViolation {
            op,
            requested,
            available: self.available,
            capacity: self.capacity,
        }
    }
}
