/// Distance requests - what a requester wants measured this tick.
///
/// Requests are produced fresh every tick and never stored past it.

use glam::Vec3;
use super::transform::TransformHandle;

/// Where one endpoint of a distance comparison comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PositionSource {
    /// A literal world-space position
    Manual(Vec3),
    /// The current position of an externally owned transform.
    ///
    /// Resolved in one batched provider call after all requests are
    /// collected, never individually.
    External(TransformHandle),
    /// The shared reference point (typically the active viewpoint),
    /// read once per tick
    ReferencePoint,
}

/// Which endpoint of a request a position fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionSlot {
    First,
    Second,
}

/// One pending squared-distance comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceRequest {
    pub position1: PositionSource,
    pub position2: PositionSource,
}

impl DistanceRequest {
    /// Compare two arbitrary sources.
    pub fn new(position1: PositionSource, position2: PositionSource) -> Self {
        Self { position1, position2 }
    }

    /// Compare two literal positions.
    pub fn manual(position1: Vec3, position2: Vec3) -> Self {
        Self::new(PositionSource::Manual(position1), PositionSource::Manual(position2))
    }

    /// Compare `source` against the shared reference point.
    ///
    /// This is the common case for distance-gated visibility.
    pub fn to_reference_point(source: PositionSource) -> Self {
        Self::new(source, PositionSource::ReferencePoint)
    }

    /// Source for the given slot.
    pub fn source(&self, slot: PositionSlot) -> PositionSource {
        match slot {
            PositionSlot::First => self.position1,
            PositionSlot::Second => self.position2,
        }
    }
}
