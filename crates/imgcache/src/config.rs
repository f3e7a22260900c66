//! Cache construction settings

/// What `push` does with an image whose name is already cached
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RepushPolicy {
    /// Leave recency order untouched
    #[default]
    Ignore,
    /// Move the cached image to the MRU end
    Promote,
}

/// Settings for an [`ImageCache`](crate::ImageCache)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheConfig {
    /// Total capacity in bytes
    pub capacity: u64,
    /// Behaviour on re-push of a cached name
    pub repush_policy: RepushPolicy,
}

impl CacheConfig {
    /// Config with the given capacity and default policy
    pub fn new(capacity: u64) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Set the total capacity
    pub fn with_capacity(mut self, capacity: u64) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the re-push policy
    pub fn with_repush_policy(mut self, policy: RepushPolicy) -> Self {
        self.repush_policy = policy;
        self
    }
}
