/// ActiveDistanceObject - hides a whole object beyond a distance.
///
/// Requests the distance between its own world position and the shared
/// reference point, then sets its active flag from the result.

use glam::Vec3;
use crate::position::{DistanceRequest, PositionSource};
use crate::registry::DistanceRequester;
use super::distance_gate::DistanceGate;
use super::targets::{ActiveTarget, apply_active};

#[derive(Debug)]
pub struct ActiveDistanceObject<T: ActiveTarget> {
    position: Vec3,
    gate: DistanceGate,
    target: T,
    last_sqr_distance: Option<f32>,
}

impl<T: ActiveTarget> ActiveDistanceObject<T> {
    /// Object at `position`, visible within `distance` of the reference point
    pub fn new(position: Vec3, distance: f32, target: T) -> Self {
        Self::with_gate(position, DistanceGate::new(distance), target)
    }

    pub fn with_gate(position: Vec3, gate: DistanceGate, target: T) -> Self {
        Self {
            position,
            gate,
            target,
            last_sqr_distance: None,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Move the object. Used by the next tick's request.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn gate(&self) -> DistanceGate {
        self.gate
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    pub fn is_visible(&self) -> bool {
        self.target.is_active()
    }

    /// Squared distance received at the last tick, if any
    pub fn last_sqr_distance(&self) -> Option<f32> {
        self.last_sqr_distance
    }
}

impl<T: ActiveTarget> DistanceRequester for ActiveDistanceObject<T> {
    fn produce_request(&self) -> DistanceRequest {
        DistanceRequest::to_reference_point(PositionSource::Manual(self.position))
    }

    fn accept_result(&mut self, sqr_distance: f32) {
        self.last_sqr_distance = Some(sqr_distance);
        apply_active(&mut self.target, self.gate.is_visible(sqr_distance));
    }
}

#[cfg(test)]
#[path = "active_object_tests.rs"]
mod tests;
