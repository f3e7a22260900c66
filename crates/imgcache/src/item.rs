//! Cached image metadata

use std::fmt;

/// A named image and its size in bytes.
///
/// Only accounting metadata is kept; pixel data never enters the cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Image {
    name: String,
    size: u64,
}

impl Image {
    /// Create a new image record
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// Unique name of the image
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size in bytes
    pub fn size(&self) -> u64 {
        self.size
    }
}

impl fmt::Display for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.size)
    }
}
