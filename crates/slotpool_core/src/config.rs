//! # Pool Configuration
//!
//! Capacity and tracking features, loadable from a TOML file at startup.
//!
//! ```toml
//! [pool]
//! capacity = 1024
//! track_free_cursor = true
//! track_high_water = false
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PoolError, PoolResult};

/// Construction parameters for a [`SlotPool`](crate::SlotPool).
///
/// The two tracking flags are independent; all four combinations are valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Number of slots. Fixed for the pool's lifetime, must be non-zero.
    pub capacity: usize,
    /// Maintain the lowest-free-slot cursor and enable `alloc`.
    #[serde(default)]
    pub track_free_cursor: bool,
    /// Maintain the highest-slot-ever-allocated mark.
    #[serde(default)]
    pub track_high_water: bool,
}

/// On-disk layout: the pool settings live under a `[pool]` table.
#[derive(Deserialize)]
struct ConfigFile {
    pool: PoolConfig,
}

impl PoolConfig {
    /// Creates a config with no tracking features.
    #[inline]
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self {
            capacity,
            track_free_cursor: false,
            track_high_water: false,
        }
    }

    /// Enables free-cursor tracking.
    #[inline]
    #[must_use]
    pub const fn with_free_cursor(mut self) -> Self {
        self.track_free_cursor = true;
        self
    }

    /// Enables high-water-mark tracking.
    #[inline]
    #[must_use]
    pub const fn with_high_water(mut self) -> Self {
        self.track_high_water = true;
        self
    }

    /// Checks that the config describes a buildable pool.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfig`] if `capacity` is zero.
    pub fn validate(&self) -> PoolResult<()> {
        if self.capacity == 0 {
            return Err(PoolError::InvalidConfig(
                "capacity must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Parses and validates a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfig`] if the text is not valid TOML,
    /// lacks a `[pool]` table, or fails [`validate`](Self::validate).
    pub fn from_toml_str(text: &str) -> PoolResult<Self> {
        let file: ConfigFile = toml::from_str(text)
            .map_err(|e| PoolError::InvalidConfig(format!("Failed to parse pool config: {e}")))?;
        file.pool.validate()?;
        Ok(file.pool)
    }

    /// Reads a config file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfig`] if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> PoolResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            PoolError::InvalidConfig(format!("Failed to read {}: {e}", path.display()))
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(
            "Loaded pool config from {}: capacity={}, free_cursor={}, high_water={}",
            path.display(),
            config.capacity,
            config.track_free_cursor,
            config.track_high_water
        );
        Ok(config)
    }
}
