//! # Pool Error Types
//!
//! All errors that can occur while operating a slot pool.

use thiserror::Error;

/// Errors that can occur in the slot pool.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// Index argument outside `[0, capacity)`.
    #[error("slot index {index} out of range for capacity {capacity}")]
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// The pool capacity.
        capacity: usize,
    },

    /// Explicit placement hit an occupied slot without reoccupy permission.
    #[error("slot {0} is busy")]
    SlotBusy(usize),

    /// No free slot remains for `alloc`.
    #[error("pool exhausted: all {capacity} slots occupied")]
    PoolExhausted {
        /// The pool capacity.
        capacity: usize,
    },

    /// A feature-gated operation was called on a pool built without that feature.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    /// Invalid pool configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for pool operations.
pub type PoolResult<T> = Result<T, PoolError>;
