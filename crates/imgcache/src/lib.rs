//! # imgcache
//!
//! Size-bounded in-memory cache of named images with LRU eviction.
//!
//! ## Architecture
//! - **HashMap**: AHash lookup from image name to cached entry (O(1))
//! - **Recency List**: index-arena doubly-linked list, MRU at the head (O(1))
//! - **Accounting**: `available + sum(cached sizes) == capacity` after every call
//!
//! Only metadata (name and size) is stored. The cache is single-threaded;
//! wrap it in one lock for shared access.

#![warn(missing_docs)]

mod config;
mod error;
mod item;
mod manager;
mod recency;
mod stats;

pub use config::{CacheConfig, RepushPolicy};
pub use error::{AccountingOp, Error, Result};
pub use item::Image;
pub use manager::ImageCache;
pub use recency::{Iter, RecencyList};
pub use stats::CacheStats;
