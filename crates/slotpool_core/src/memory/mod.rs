//! # Memory Management
//!
//! Fixed-capacity slot storage. All memory is allocated once at
//! construction; allocating and freeing slots never touches the heap.

mod cursor;
mod handle;
mod pool;
mod watermark;

pub use handle::{PoolId, SlotHandle};
pub use pool::SlotPool;
