//! Error types for imgcache

use std::fmt;

/// Result type alias for imgcache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Capacity accounting step that was being performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountingOp {
    /// Reserving space for an admitted item
    Take,
    /// Returning space freed by an eviction
    Recover,
}

impl fmt::Display for AccountingOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountingOp::Take => write!(f, "take"),
            AccountingOp::Recover => write!(f, "recover"),
        }
    }
}

/// Internal faults of the cache.
///
/// An item that can never fit is not an error: `push` reports it as
/// `Ok(false)`. These variants only describe broken bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Eviction requested on an empty recency list
    EmptyStructure,

    /// Accounting would move `available` outside `[0, capacity]`
    CapacityInvariantViolation {
        /// Which accounting step failed
        op: AccountingOp,
        /// Size the step was asked to move
        requested: u64,
        /// Free capacity before the step
        available: u64,
        /// Total capacity of the cache
        capacity: u64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyStructure => write!(f, "Recency list is empty"),
            Error::CapacityInvariantViolation {
                op,
                requested,
                available,
                capacity,
            } => write!(
                f,
                "Capacity invariant violation: cannot {} {} bytes ({} of {} available)",
                op, requested, available, capacity
            ),
        }
    }
}

impl std::error::Error for Error {}
