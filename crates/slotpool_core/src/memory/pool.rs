//! # Slot Pool
//!
//! Fixed-capacity pool of default-initialized slots with per-slot occupancy.

use crate::config::PoolConfig;
use crate::error::{PoolError, PoolResult};

use super::cursor::FreeCursor;
use super::handle::{PoolId, SlotHandle};
use super::watermark::HighWaterMark;

/// A fixed-capacity pool of `T` slots.
///
/// Every slot is created with `T::default()` when the pool is built. Slots
/// move between free and occupied without the pool ever touching their
/// contents: freeing a slot leaves its value in place, and the value is only
/// dropped together with the pool.
///
/// Two tracking features can be enabled independently through [`PoolConfig`]:
///
/// - **Free cursor** keeps the lowest free index cached and enables
///   [`alloc`](Self::alloc), which always returns the lowest free slot.
/// - **High-water mark** records the highest index ever allocated, so callers
///   can bound scans to `0..=mark`.
///
/// Calling an operation whose feature is disabled returns
/// [`PoolError::UnsupportedOperation`].
///
/// # Thread Safety
///
/// This pool is NOT thread-safe. Use one pool per thread or wrap in a mutex.
///
/// # Example
///
/// ```rust
/// use slotpool_core::{PoolConfig, SlotPool};
///
/// let config = PoolConfig::new(3).with_free_cursor().with_high_water();
/// let mut pool: SlotPool<u32> = SlotPool::with_config(config)?;
///
/// let handle = pool.alloc()?;
/// *pool.get_mut(handle).unwrap() = 42;
/// assert_eq!(pool.index_of(handle), Some(0));
/// assert_eq!(pool.high_water_mark()?, Some(0));
///
/// pool.free(handle);
/// assert!(!pool.is_occupied(0)?);
/// # Ok::<(), slotpool_core::PoolError>(())
/// ```
pub struct SlotPool<T> {
    /// Identity stamped into every handle this pool mints.
    id: PoolId,
    /// The storage array.
    storage: Box<[T]>,
    /// Occupancy flags, index-aligned with `storage`.
    occupied: Box<[bool]>,
    /// Number of occupied slots.
    occupied_count: usize,
    /// Total capacity.
    capacity: usize,
    /// Present iff free-cursor tracking is enabled.
    free_cursor: Option<FreeCursor>,
    /// Present iff high-water tracking is enabled.
    high_water: Option<HighWaterMark>,
}

impl<T: Default> SlotPool<T> {
    /// Creates a pool with no tracking features.
    ///
    /// All memory is pre-allocated upfront.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Number of slots
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. Use [`with_config`](Self::with_config)
    /// for a fallible constructor.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Capacity must be greater than zero");
        Self::build(PoolConfig::new(capacity))
    }

    /// Creates a pool from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfig`] if the configuration is invalid.
    pub fn with_config(config: PoolConfig) -> PoolResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: PoolConfig) -> Self {
        let capacity = config.capacity;
        let storage: Vec<T> = (0..capacity).map(|_| T::default()).collect();

        let pool = Self {
            id: PoolId::next(),
            storage: storage.into_boxed_slice(),
            occupied: vec![false; capacity].into_boxed_slice(),
            occupied_count: 0,
            capacity,
            free_cursor: config.track_free_cursor.then(FreeCursor::new),
            high_water: config.track_high_water.then(HighWaterMark::new),
        };
        tracing::debug!(
            "Created slot pool {:?}: capacity={}, free_cursor={}, high_water={}",
            pool.id,
            capacity,
            config.track_free_cursor,
            config.track_high_water
        );
        pool
    }
}

impl<T> SlotPool<T> {
    /// Returns the total capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the configuration this pool was built with.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> PoolConfig {
        PoolConfig {
            capacity: self.capacity,
            track_free_cursor: self.free_cursor.is_some(),
            track_high_water: self.high_water.is_some(),
        }
    }

    /// Returns the number of occupied slots.
    #[inline]
    #[must_use]
    pub const fn occupied_count(&self) -> usize {
        self.occupied_count
    }

    /// Returns the number of free slots.
    #[inline]
    #[must_use]
    pub const fn free_count(&self) -> usize {
        self.capacity - self.occupied_count
    }

    #[inline]
    fn check_index(&self, index: usize) -> PoolResult<()> {
        if index < self.capacity {
            Ok(())
        } else {
            Err(PoolError::OutOfRange {
                index,
                capacity: self.capacity,
            })
        }
    }

    /// Returns whether slot `index` holds a live allocation.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::OutOfRange`] if `index >= capacity`.
    #[inline]
    pub fn is_occupied(&self, index: usize) -> PoolResult<bool> {
        self.check_index(index)?;
        Ok(self.occupied[index])
    }

    /// Gets a reference to the value in an occupied slot.
    ///
    /// Returns `Ok(None)` if the slot is free.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::OutOfRange`] if `index >= capacity`.
    #[inline]
    pub fn slot_at(&self, index: usize) -> PoolResult<Option<&T>> {
        self.check_index(index)?;
        Ok(self.occupied[index].then(|| &self.storage[index]))
    }

    /// Gets a mutable reference to the value in an occupied slot.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::OutOfRange`] if `index >= capacity`.
    #[inline]
    pub fn slot_at_mut(&mut self, index: usize) -> PoolResult<Option<&mut T>> {
        self.check_index(index)?;
        Ok(if self.occupied[index] {
            Some(&mut self.storage[index])
        } else {
            None
        })
    }

    /// Resolves a handle to its slot index.
    ///
    /// Returns `None` for handles minted by another pool.
    #[inline]
    #[must_use]
    pub fn index_of(&self, handle: SlotHandle) -> Option<usize> {
        (handle.pool() == self.id && handle.index() < self.capacity).then_some(handle.index())
    }

    /// Returns whether the handle was minted by this pool.
    #[inline]
    #[must_use]
    pub fn contains(&self, handle: SlotHandle) -> bool {
        self.index_of(handle).is_some()
    }

    /// Gets a reference to the value behind a handle, if its slot is occupied.
    #[inline]
    #[must_use]
    pub fn get(&self, handle: SlotHandle) -> Option<&T> {
        let index = self.index_of(handle)?;
        self.occupied[index].then(|| &self.storage[index])
    }

    /// Gets a mutable reference to the value behind a handle, if its slot is occupied.
    #[inline]
    pub fn get_mut(&mut self, handle: SlotHandle) -> Option<&mut T> {
        let index = self.index_of(handle)?;
        if self.occupied[index] {
            Some(&mut self.storage[index])
        } else {
            None
        }
    }

    /// Occupies slot `index` directly.
    ///
    /// With `allow_reoccupy` set, an already-occupied slot is taken over in
    /// place: its current value is kept as-is, not reset.
    ///
    /// # Errors
    ///
    /// - [`PoolError::OutOfRange`] if `index >= capacity`
    /// - [`PoolError::SlotBusy`] if the slot is occupied and `allow_reoccupy` is false
    pub fn alloc_at(&mut self, index: usize, allow_reoccupy: bool) -> PoolResult<SlotHandle> {
        self.check_index(index)?;

        if self.occupied[index] {
            if !allow_reoccupy {
                tracing::trace!("Slot {} busy in pool {:?}", index, self.id);
                return Err(PoolError::SlotBusy(index));
            }
            tracing::trace!("Reoccupying slot {} in pool {:?}", index, self.id);
        }

        self.occupy(index);
        Ok(SlotHandle::new(self.id, index))
    }

    /// Occupies the lowest free slot.
    ///
    /// This is **O(1)** amortized over a run of allocations.
    ///
    /// # Errors
    ///
    /// - [`PoolError::UnsupportedOperation`] without free-cursor tracking
    /// - [`PoolError::PoolExhausted`] if every slot is occupied
    pub fn alloc(&mut self) -> PoolResult<SlotHandle> {
        let cursor = self
            .free_cursor
            .ok_or(PoolError::UnsupportedOperation("alloc requires free-cursor tracking"))?;

        let Some(index) = cursor.peek(self.capacity) else {
            tracing::debug!("Slot pool {:?} exhausted ({} slots)", self.id, self.capacity);
            return Err(PoolError::PoolExhausted {
                capacity: self.capacity,
            });
        };

        self.occupy(index);
        Ok(SlotHandle::new(self.id, index))
    }

    /// Occupies the lowest free slot and stores `value` in it.
    ///
    /// # Errors
    ///
    /// Same as [`alloc`](Self::alloc). On error `value` is dropped.
    pub fn insert(&mut self, value: T) -> PoolResult<SlotHandle> {
        let handle = self.alloc()?;
        self.storage[handle.index()] = value;
        Ok(handle)
    }

    /// Marks `index` occupied and updates tracking.
    ///
    /// The high-water mark sees the consumed slot before the cursor moves on.
    fn occupy(&mut self, index: usize) {
        if !self.occupied[index] {
            self.occupied[index] = true;
            self.occupied_count += 1;
        }
        if let Some(mark) = self.high_water.as_mut() {
            mark.record(index);
        }
        if let Some(cursor) = self.free_cursor.as_mut() {
            cursor.on_alloc(&self.occupied, index);
        }
    }

    /// Frees the slot behind a handle.
    ///
    /// Foreign handles and already-free slots are ignored.
    ///
    /// # Returns
    ///
    /// `true` if a slot was released.
    pub fn free(&mut self, handle: SlotHandle) -> bool {
        match self.index_of(handle) {
            Some(index) => self.free_at(index),
            None => {
                tracing::trace!("Ignoring free of foreign handle {:?}", handle);
                false
            }
        }
    }

    /// Frees slot `index`.
    ///
    /// Out-of-range indices and already-free slots are ignored, so double
    /// frees are harmless. The slot's value is left in place and the
    /// high-water mark is untouched.
    ///
    /// # Returns
    ///
    /// `true` if a slot was released.
    pub fn free_at(&mut self, index: usize) -> bool {
        if index >= self.capacity || !self.occupied[index] {
            tracing::trace!("Ignoring free of slot {} in pool {:?}", index, self.id);
            return false;
        }

        self.occupied[index] = false;
        self.occupied_count -= 1;
        if let Some(cursor) = self.free_cursor.as_mut() {
            cursor.on_free(index);
        }
        true
    }

    /// Returns the cached lowest free slot, or `None` if the pool is full.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::UnsupportedOperation`] without free-cursor tracking.
    pub fn first_free_slot(&self) -> PoolResult<Option<usize>> {
        self.free_cursor
            .map(|cursor| cursor.peek(self.capacity))
            .ok_or(PoolError::UnsupportedOperation(
                "first_free_slot requires free-cursor tracking",
            ))
    }

    /// Returns the highest slot index ever allocated, or `None` before the
    /// first allocation.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::UnsupportedOperation`] without high-water tracking.
    pub fn high_water_mark(&self) -> PoolResult<Option<usize>> {
        self.high_water
            .map(HighWaterMark::get)
            .ok_or(PoolError::UnsupportedOperation(
                "high_water_mark requires high-water tracking",
            ))
    }
}
