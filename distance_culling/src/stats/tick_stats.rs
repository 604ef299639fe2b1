/// Per-tick statistics and the phase state machine.
///
/// A tick walks `Idle → Collecting → Resolving → Computing → Dispatching → Idle`
/// inside one call to `DistanceManager::tick`. The PhaseTimer records how
/// long each working phase took.

use std::time::{Duration, Instant};

/// Phases of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickPhase {
    /// Between ticks
    Idle,
    /// Snapshotting requesters, sizing buffers, resolving inline sources
    Collecting,
    /// Running the batched external transform lookup
    Resolving,
    /// Running the squared-distance kernel
    Computing,
    /// Returning results to requesters
    Dispatching,
}

impl TickPhase {
    /// The four phases that do work, in execution order
    pub const WORKING: [TickPhase; 4] = [
        TickPhase::Collecting,
        TickPhase::Resolving,
        TickPhase::Computing,
        TickPhase::Dispatching,
    ];

    fn timing_index(self) -> Option<usize> {
        match self {
            TickPhase::Idle => None,
            TickPhase::Collecting => Some(0),
            TickPhase::Resolving => Some(1),
            TickPhase::Computing => Some(2),
            TickPhase::Dispatching => Some(3),
        }
    }
}

/// What one tick did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickStats {
    /// Requesters in this tick's snapshot (= results dispatched)
    pub requester_count: usize,
    /// External transform lookups resolved in the batched call
    pub deferred_count: usize,
    /// Whether the kernel ran on the rayon pool
    pub parallel: bool,
    timings: [Duration; 4],
}

impl TickStats {
    /// Stats of a tick skipped because no requester was registered
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the tick was skipped
    pub fn is_empty(&self) -> bool {
        self.requester_count == 0
    }

    /// Time spent in `phase` (zero for Idle)
    pub fn phase_duration(&self, phase: TickPhase) -> Duration {
        phase.timing_index().map_or(Duration::ZERO, |i| self.timings[i])
    }

    /// Time spent in all working phases
    pub fn total_duration(&self) -> Duration {
        self.timings.iter().sum()
    }
}

/// Drives the phase state machine and times each phase.
pub(crate) struct PhaseTimer {
    phase: TickPhase,
    started: Instant,
    timings: [Duration; 4],
}

impl PhaseTimer {
    pub fn new() -> Self {
        Self {
            phase: TickPhase::Idle,
            started: Instant::now(),
            timings: [Duration::ZERO; 4],
        }
    }

    pub fn phase(&self) -> TickPhase {
        self.phase
    }

    /// Close the current phase and start `next`
    pub fn enter(&mut self, next: TickPhase) {
        let now = Instant::now();
        if let Some(i) = self.phase.timing_index() {
            self.timings[i] += now - self.started;
        }
        debug_assert!(
            Self::is_transition(self.phase, next),
            "invalid tick transition {:?} -> {:?}", self.phase, next
        );
        self.phase = next;
        self.started = now;
    }

    /// Return to Idle and produce the tick's stats
    pub fn finish(mut self, requester_count: usize, deferred_count: usize, parallel: bool) -> TickStats {
        self.enter(TickPhase::Idle);
        TickStats {
            requester_count,
            deferred_count,
            parallel,
            timings: self.timings,
        }
    }

    fn is_transition(from: TickPhase, to: TickPhase) -> bool {
        matches!(
            (from, to),
            (TickPhase::Idle, TickPhase::Collecting)
                | (TickPhase::Collecting, TickPhase::Resolving)
                | (TickPhase::Resolving, TickPhase::Computing)
                | (TickPhase::Computing, TickPhase::Dispatching)
                | (TickPhase::Dispatching, TickPhase::Idle)
        )
    }
}

#[cfg(test)]
#[path = "tick_stats_tests.rs"]
mod tests;
