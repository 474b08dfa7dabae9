//! # Slot Handles
//!
//! Handles are tagged with the pool that minted them, so a handle from one
//! pool can never be resolved against another pool's storage.

use std::sync::atomic::{AtomicU32, Ordering};

/// Source of process-wide unique pool identifiers.
static NEXT_POOL_ID: AtomicU32 = AtomicU32::new(0);

/// Identity of a single pool instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct PoolId(u32);

impl PoolId {
    /// Mints a fresh identifier.
    pub(crate) fn next() -> Self {
        Self(NEXT_POOL_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Handle to a slot returned by an allocating operation.
///
/// Only a pool can create handles. A handle stays resolvable for the pool's
/// lifetime; whether its slot is still occupied is a separate question
/// answered by [`SlotPool::get`](crate::SlotPool::get).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlotHandle {
    /// Pool that minted this handle.
    pool: PoolId,
    /// Slot index inside that pool.
    index: usize,
}

impl SlotHandle {
    #[inline]
    pub(crate) const fn new(pool: PoolId, index: usize) -> Self {
        Self { pool, index }
    }

    /// Returns the slot index this handle refers to.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }

    /// Returns the identity of the pool that minted this handle.
    #[inline]
    #[must_use]
    pub const fn pool(self) -> PoolId {
        self.pool
    }
}
