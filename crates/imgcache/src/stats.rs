//! Cache statistics tracking

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters describing what `push` has done so far
#[derive(Debug, Default)]
pub struct CacheStats {
    inserts: AtomicU64,
    evictions: AtomicU64,
    rejections: AtomicU64,
    repushes: AtomicU64,
}

impl CacheStats {
    /// Create new stats tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an admitted image
    pub fn record_insert(&self) {
        self.inserts.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an eviction
    pub fn record_eviction(&self) {
        self.evictions.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an image too large to ever fit
    pub fn record_rejection(&self) {
        self.rejections.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a push of an already cached name
    pub fn record_repush(&self) {
        self.repushes.fetch_add(1, Ordering::Relaxed);
    }

    /// Get total inserts
    pub fn inserts(&self) -> u64 {
        self.inserts.load(Ordering::Relaxed)
    }

    /// Get total evictions
    pub fn evictions(&self) -> u64 {
        self.evictions.load(Ordering::Relaxed)
    }

    /// Get total rejections
    pub fn rejections(&self) -> u64 {
        self.rejections.load(Ordering::Relaxed)
    }

    /// Get total re-pushes
    pub fn repushes(&self) -> u64 {
        self.repushes.load(Ordering::Relaxed)
    }

    /// Share of pushes that found the name already cached (0.0 to 1.0)
    pub fn repush_ratio(&self) -> f64 {
        let repushes = self.repushes();
        let total = repushes + self.inserts() + self.rejections();
        if total == 0 {
            0.0
        } else {
            repushes as f64 / total as f64
        }
    }

    /// Reset all statistics
    pub fn reset(&self) {
        self.inserts.store(0, Ordering::Relaxed);
        self.evictions.store(0, Ordering::Relaxed);
        self.rejections.store(0, Ordering::Relaxed);
        self.repushes.store(0, Ordering::Relaxed);
    }
}
