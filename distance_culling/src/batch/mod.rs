//! Batch distance engine
//!
//! Owns the per-tick cycle: snapshot the registry, collect requests into
//! flat buffers, resolve deferred transforms, run the squared-distance
//! kernel and hand each result back to its requester.

mod kernel;
mod tick_buffers;
mod frame_context;
mod distance_manager;

pub use kernel::{compute_sqr_distances, compute_sqr_distances_parallel};
pub use frame_context::FrameContext;
pub use distance_manager::DistanceManager;
