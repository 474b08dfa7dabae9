//! # SLOTPOOL Core
//!
//! Fixed-capacity object pool with slot-level placement, designed for:
//! - Zero heap allocations after construction
//! - Deterministic slot assignment (lowest free slot wins)
//! - Cheap scan bounds via a high-water mark
//!
//! ## Architecture Rules
//!
//! 1. **Capacity is fixed** - Storage and occupancy are sized once, never resized
//! 2. **Features compose** - Free-cursor and high-water tracking are independent flags
//! 3. **Every index is checked** - Out-of-range access is an error, never UB
//!
//! ## Example
//!
//! ```rust
//! use slotpool_core::{PoolConfig, SlotPool};
//!
//! let mut pool: SlotPool<[f32; 3]> =
//!     SlotPool::with_config(PoolConfig::new(1024).with_free_cursor())?;
//!
//! let particle = pool.insert([0.0, 1.0, 0.0])?;
//! pool.free(particle);
//! # Ok::<(), slotpool_core::PoolError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod memory;

pub use config::PoolConfig;
pub use error::{PoolError, PoolResult};
pub use memory::{PoolId, SlotHandle, SlotPool};
