/// Reference point - the shared moving endpoint (usually the viewpoint).
///
/// The manager reads it exactly once per tick, before collecting requests,
/// and reuses that snapshot for every `PositionSource::ReferencePoint` slot.

use std::sync::{Arc, PoisonError, RwLock};
use glam::Vec3;

/// Read-only access to the current reference position.
pub trait ReferencePointProvider {
    fn reference_position(&self) -> Vec3;
}

/// A fixed point. Handy for tests and static viewpoints.
impl ReferencePointProvider for Vec3 {
    fn reference_position(&self) -> Vec3 {
        *self
    }
}

/// Reference point shared between the code that moves the viewpoint and
/// the tick driver.
///
/// Cloning yields another handle to the same point.
#[derive(Debug, Clone, Default)]
pub struct SharedReferencePoint {
    position: Arc<RwLock<Vec3>>,
}

impl SharedReferencePoint {
    pub fn new(position: Vec3) -> Self {
        Self {
            position: Arc::new(RwLock::new(position)),
        }
    }

    /// Move the reference point. Takes effect at the next tick.
    pub fn set(&self, position: Vec3) {
        *self.position.write().unwrap_or_else(PoisonError::into_inner) = position;
    }

    pub fn get(&self) -> Vec3 {
        *self.position.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ReferencePointProvider for SharedReferencePoint {
    fn reference_position(&self) -> Vec3 {
        self.get()
    }
}
