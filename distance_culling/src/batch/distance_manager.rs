/// DistanceManager - batched squared distances for every registered requester.
///
/// One call to `tick()` runs the whole cycle synchronously:
///
/// 1. Collecting: drain queued registry commands, snapshot the registry
///    (this fixes index `i` for requester `i`), allocate the three buffers
///    at exactly the snapshot length, read the reference point once, then
///    ask every requester for its request and resolve inline sources.
/// 2. Resolving: one batched transform read for every deferred slot.
/// 3. Computing: the squared-distance kernel, on the rayon pool once the
///    snapshot reaches `parallel_threshold`.
/// 4. Dispatching: `accept_result(result[i])` on requester `i`, in
///    snapshot order.
///
/// An empty registry skips all of it and allocates nothing. The buffers
/// and the deferred worklist are locals of `tick()` and are released when
/// it returns, whichever way it returns.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use crate::config::ManagerConfig;
use crate::engine::Engine;
use crate::error::Result;
use crate::log::LogSeverity;
use crate::position::PositionResolver;
use crate::registry::{DistanceRequester, RegistrationQueue, RequesterRegistry, SharedRequester};
use crate::stats::{PhaseTimer, TickPhase, TickStats};
use crate::{engine_debug, engine_error};
use super::frame_context::FrameContext;
use super::kernel::{compute_sqr_distances, compute_sqr_distances_parallel};
use super::tick_buffers::TickBuffers;

const SOURCE: &str = "culling::DistanceManager";

/// Central manager for batched distance requests.
///
/// # Example
///
/// ```no_run
/// use std::sync::{Arc, Mutex};
/// use distance_culling::culling::batch::{DistanceManager, FrameContext};
/// use distance_culling::culling::position::{SharedReferencePoint, TransformStore};
/// use distance_culling::culling::visibility::{ActiveDistanceObject, ActiveFlag};
/// use distance_culling::glam::Vec3;
///
/// let mut manager = DistanceManager::new();
/// let camera = SharedReferencePoint::new(Vec3::ZERO);
/// let transforms = TransformStore::new();
///
/// let object = Arc::new(Mutex::new(
///     ActiveDistanceObject::new(Vec3::new(0.0, 0.0, 5.0), 10.0, ActiveFlag::new(true)),
/// ));
/// manager.register(&object);
///
/// // Once per frame, from the host's update loop
/// manager.tick(&FrameContext::new(&camera, &transforms))?;
/// # Ok::<(), distance_culling::culling::Error>(())
/// ```
pub struct DistanceManager {
    registry: RequesterRegistry,
    queue: RegistrationQueue,
    config: ManagerConfig,
    tick_count: u64,
}

impl DistanceManager {
    /// Create a manager with the default configuration
    pub fn new() -> Self {
        Self {
            registry: RequesterRegistry::new(),
            queue: RegistrationQueue::new(),
            config: ManagerConfig::default(),
            tick_count: 0,
        }
    }

    /// Create a manager with a custom configuration
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the configuration does not validate.
    pub fn with_config(config: ManagerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    // ===== REGISTRY =====

    /// Register a requester. It takes part from the next tick on.
    ///
    /// The manager keeps a weak reference only; registering the same
    /// requester twice makes it receive two results per tick.
    pub fn register<R: DistanceRequester + 'static>(&mut self, requester: &Arc<Mutex<R>>) {
        self.apply_queued();
        self.registry.register(requester);
        engine_debug!(SOURCE, "Requester registered ({} active)", self.registry.len());
    }

    /// Unregister the first registration of a requester.
    ///
    /// Unknown requesters are ignored. Returns whether anything was removed.
    pub fn unregister<R: DistanceRequester + 'static>(&mut self, requester: &Arc<Mutex<R>>) -> bool {
        self.apply_queued();
        let removed = self.registry.unregister(requester);
        if removed {
            engine_debug!(SOURCE, "Requester unregistered ({} active)", self.registry.len());
        } else {
            engine_debug!(SOURCE, "Unregister ignored: requester not registered");
        }
        removed
    }

    /// Handle for registering or unregistering from places that cannot
    /// borrow the manager, such as requester callbacks during a tick.
    /// Queued commands are applied at the start of the next tick, or
    /// earlier if `register`/`unregister` is called first, so direct and
    /// queued calls take effect in the order they were made.
    pub fn registration_queue(&self) -> RegistrationQueue {
        self.queue.clone()
    }

    pub fn registry(&self) -> &RequesterRegistry {
        &self.registry
    }

    /// Number of registrations (queued commands not included)
    pub fn requester_count(&self) -> usize {
        self.registry.len()
    }

    /// Number of ticks run so far, skipped ones included
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    // ===== TICK =====

    /// Run one Collecting → Resolving → Computing → Dispatching cycle.
    ///
    /// # Errors
    ///
    /// Returns the transform provider's error if a deferred lookup fails.
    /// The tick then stops before Computing: no requester receives a
    /// result for this tick.
    pub fn tick(&mut self, context: &FrameContext<'_>) -> Result<TickStats> {
        self.tick_count += 1;
        self.apply_queued();

        let requesters = self.registry.snapshot();
        if requesters.is_empty() {
            return Ok(TickStats::empty());
        }
        let count = requesters.len();
        let mut timer = PhaseTimer::new();

        timer.enter(TickPhase::Collecting);
        let mut buffers = TickBuffers::with_len(count);
        let mut resolver = PositionResolver::new(context.reference_point.reference_position());
        for (index, requester) in requesters.iter().enumerate() {
            let request = lock(requester).produce_request();
            resolver.resolve(index, &request, &mut buffers.positions1, &mut buffers.positions2);
        }

        timer.enter(TickPhase::Resolving);
        let deferred_count = resolver
            .flush(context.transforms, &mut buffers.positions1, &mut buffers.positions2)
            .map_err(|err| {
                engine_error!(SOURCE, "Tick {} stopped before dispatch: {}", self.tick_count, err);
                err
            })?;

        timer.enter(TickPhase::Computing);
        let parallel = count >= self.config.parallel_threshold;
        if parallel {
            compute_sqr_distances_parallel(
                &buffers.positions1,
                &buffers.positions2,
                &mut buffers.sqr_distances,
                self.config.chunk_size,
            );
        } else {
            compute_sqr_distances(&buffers.positions1, &buffers.positions2, &mut buffers.sqr_distances);
        }

        timer.enter(TickPhase::Dispatching);
        debug_assert_eq!(timer.phase(), TickPhase::Dispatching);
        debug_assert_eq!(buffers.len(), count);
        for (requester, sqr_distance) in requesters.iter().zip(&buffers.sqr_distances) {
            lock(requester).accept_result(*sqr_distance);
        }

        let stats = timer.finish(count, deferred_count, parallel);
        self.log_timings(&stats);
        Ok(stats)
    }

    fn apply_queued(&mut self) {
        let commands = self.queue.drain();
        if commands.is_empty() {
            return;
        }
        let applied = commands.len();
        for command in commands {
            self.registry.apply(command);
        }
        engine_debug!(SOURCE, "Applied {} queued registry command(s) ({} active)",
            applied, self.registry.len());
    }

    fn log_timings(&self, stats: &TickStats) {
        let severity = if self.config.log_tick_timings {
            LogSeverity::Debug
        } else {
            LogSeverity::Trace
        };
        if !Engine::is_enabled(severity) {
            return;
        }
        Engine::log(severity, SOURCE, format!(
            "Tick {}: {} requesters, {} deferred | collect {:?} resolve {:?} compute {:?}{} dispatch {:?}",
            self.tick_count,
            stats.requester_count,
            stats.deferred_count,
            stats.phase_duration(TickPhase::Collecting),
            stats.phase_duration(TickPhase::Resolving),
            stats.phase_duration(TickPhase::Computing),
            if stats.parallel { " (parallel)" } else { "" },
            stats.phase_duration(TickPhase::Dispatching),
        ));
    }
}

impl Default for DistanceManager {
    fn default() -> Self {
        Self::new()
    }
}

/// A requester that panicked mid-call still gets its later calls.
fn lock(requester: &SharedRequester) -> MutexGuard<'_, dyn DistanceRequester + 'static> {
    requester.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
#[path = "distance_manager_tests.rs"]
mod tests;
