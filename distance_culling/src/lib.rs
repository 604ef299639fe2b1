/*!
# Distance Culling

Batched distance-gated visibility for large numbers of scene objects.

Instead of every object measuring its own distance to the viewpoint each
frame, objects register as requesters with a central manager. Once per
tick the manager collects every request into flat buffers, resolves all
externally owned transforms in one batched read, computes every squared
distance in one data-parallel pass, and hands each result back to its
requester, which then shows or hides itself.

## Architecture

- **DistanceManager**: Runs the Collecting → Resolving → Computing → Dispatching tick
- **DistanceRequester**: Trait implemented by anything that wants a distance each tick
- **PositionSource**: Manual position, external transform handle, or the reference point
- **TransformProvider**: Batched transform reads (the host's scene, or `TransformStore`)
- **DistanceGate**: Squared-distance visibility threshold
- **ActiveDistanceObject / RendererDistanceObject**: Ready-made requester kinds
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod config;
pub mod math;
pub mod position;
pub mod registry;
pub mod batch;
pub mod visibility;
pub mod stats;

// Main culling namespace module
pub mod culling {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging facade
    pub use crate::engine::Engine;

    // Manager configuration
    pub use crate::config::ManagerConfig;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Vector helpers
    pub mod math {
        pub use crate::math::*;
    }

    // Requests, transforms and the reference point
    pub mod position {
        pub use crate::position::*;
    }

    // Requester trait and registry
    pub mod registry {
        pub use crate::registry::*;
    }

    // Distance manager and kernel
    pub mod batch {
        pub use crate::batch::*;
    }

    // Gates, targets and requester kinds
    pub mod visibility {
        pub use crate::visibility::*;
    }

    // Tick statistics
    pub mod stats {
        pub use crate::stats::*;
    }
}

// Re-export math library at crate root
pub use glam;
