//! Distance manager configuration

use crate::error::Result;
use crate::engine_bail;

/// Tuning knobs for [`crate::batch::DistanceManager`].
///
/// None of these affect results, only how the kernel is scheduled and
/// how much the manager logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerConfig {
    /// Elements per parallel work item in the squared-distance kernel
    pub chunk_size: usize,

    /// Requester count from which the kernel runs on the rayon pool.
    /// Below it the kernel runs inline on the tick thread.
    pub parallel_threshold: usize,

    /// Log per-phase timings at DEBUG instead of TRACE
    pub log_tick_timings: bool,
}

impl ManagerConfig {
    pub const DEFAULT_CHUNK_SIZE: usize = 64;
    pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1024;

    /// Check every field is in range
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if `chunk_size` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            engine_bail!(InvalidConfig, "culling::ManagerConfig",
                "chunk_size must be at least 1");
        }
        Ok(())
    }
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            chunk_size: Self::DEFAULT_CHUNK_SIZE,
            parallel_threshold: Self::DEFAULT_PARALLEL_THRESHOLD,
            log_tick_timings: false,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
