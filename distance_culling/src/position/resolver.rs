/// Position resolution for one tick.
///
/// Two phases:
/// 1. `resolve()` per request, in requester order. Manual and
///    reference-point sources are written straight into the buffers;
///    external sources are appended to the deferred worklist and their
///    buffer slot is left untouched.
/// 2. `flush()` once. Every deferred handle goes to the transform provider
///    in a single call and the results are scattered back by slot and index.
///
/// The resolver is consumed by `flush()`, so the worklist never outlives
/// the tick that built it.

use glam::Vec3;
use crate::error::Result;
use super::request::{DistanceRequest, PositionSlot, PositionSource};
use super::transform::{TransformHandle, TransformProvider};

/// "Requester `index` needs `handle` resolved into `slot` before the kernel runs."
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeferredLookup {
    pub slot: PositionSlot,
    pub handle: TransformHandle,
    pub index: usize,
}

/// Fills the per-tick position buffers from distance requests.
#[derive(Debug)]
pub struct PositionResolver {
    reference_position: Vec3,
    deferred: Vec<DeferredLookup>,
}

impl PositionResolver {
    /// Start resolving a tick against a reference position snapshot.
    pub fn new(reference_position: Vec3) -> Self {
        Self {
            reference_position,
            deferred: Vec::new(),
        }
    }

    /// Reference position snapshot used for every `ReferencePoint` source.
    pub fn reference_position(&self) -> Vec3 {
        self.reference_position
    }

    /// Lookups waiting for `flush()`, in the order they were deferred.
    pub fn deferred(&self) -> &[DeferredLookup] {
        &self.deferred
    }

    /// Resolve both slots of the request at buffer index `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds for either buffer. Buffers are
    /// sized to the requester snapshot, so this only happens on an index
    /// mismatch bug.
    pub fn resolve(
        &mut self,
        index: usize,
        request: &DistanceRequest,
        positions1: &mut [Vec3],
        positions2: &mut [Vec3],
    ) {
        self.resolve_slot(PositionSlot::First, index, request.position1, positions1);
        self.resolve_slot(PositionSlot::Second, index, request.position2, positions2);
    }

    fn resolve_slot(
        &mut self,
        slot: PositionSlot,
        index: usize,
        source: PositionSource,
        buffer: &mut [Vec3],
    ) {
        match source {
            PositionSource::Manual(position) => buffer[index] = position,
            PositionSource::ReferencePoint => buffer[index] = self.reference_position,
            PositionSource::External(handle) => {
                self.deferred.push(DeferredLookup { slot, handle, index });
            }
        }
    }

    /// Resolve every deferred lookup with one provider call and scatter
    /// the positions into the buffers.
    ///
    /// Returns the number of lookups resolved. The provider is not called
    /// at all when nothing was deferred.
    ///
    /// # Errors
    ///
    /// Propagates the provider's error; the buffers are then partially
    /// unresolved and must not be used.
    pub fn flush(
        self,
        provider: &dyn TransformProvider,
        positions1: &mut [Vec3],
        positions2: &mut [Vec3],
    ) -> Result<usize> {
        if self.deferred.is_empty() {
            return Ok(0);
        }

        let handles: Vec<TransformHandle> = self.deferred.iter().map(|l| l.handle).collect();
        let mut resolved = vec![Vec3::ZERO; handles.len()];
        provider.read_positions(&handles, &mut resolved)?;

        for (lookup, position) in self.deferred.iter().zip(resolved) {
            match lookup.slot {
                PositionSlot::First => positions1[lookup.index] = position,
                PositionSlot::Second => positions2[lookup.index] = position,
            }
        }

        Ok(self.deferred.len())
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
