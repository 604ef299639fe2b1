/// Un-batched baseline objects.
///
/// Each one measures its own distance every frame, with no manager
/// involved. They make the same decisions as the batched requester kinds
/// and exist to compare the two paths.

use glam::Vec3;
use crate::error::Result;
use crate::math::sqr_distance;
use crate::position::{ReferencePointProvider, TransformHandle, TransformProvider};
use super::distance_gate::DistanceGate;
use super::targets::{ActiveTarget, RendererTarget, apply_active, apply_renderers};

/// Per-frame counterpart of [`super::ActiveDistanceObject`].
#[derive(Debug)]
pub struct StandardDistanceObject<T: ActiveTarget> {
    position: Vec3,
    gate: DistanceGate,
    target: T,
}

impl<T: ActiveTarget> StandardDistanceObject<T> {
    pub fn new(position: Vec3, distance: f32, target: T) -> Self {
        Self {
            position,
            gate: DistanceGate::new(distance),
            target,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Measure against the reference point and apply. Returns the decision.
    pub fn update(&mut self, reference: &dyn ReferencePointProvider) -> bool {
        let visible = self.gate.is_visible(sqr_distance(self.position, reference.reference_position()));
        apply_active(&mut self.target, visible);
        visible
    }
}

/// Per-frame counterpart of [`super::RendererDistanceObject`].
///
/// Reads its own transform individually on every update.
#[derive(Debug)]
pub struct StandardDistanceRendererObject<R: RendererTarget> {
    transform: TransformHandle,
    gate: DistanceGate,
    renderers: Vec<Option<R>>,
}

impl<R: RendererTarget> StandardDistanceRendererObject<R> {
    pub fn new(transform: TransformHandle, distance: f32, renderers: Vec<Option<R>>) -> Self {
        Self {
            transform,
            gate: DistanceGate::new(distance),
            renderers,
        }
    }

    pub fn renderers(&self) -> &[Option<R>] {
        &self.renderers
    }

    /// Read the transform, measure and apply. Returns the decision.
    ///
    /// # Errors
    ///
    /// Returns the provider's error if the transform is gone.
    pub fn update(
        &mut self,
        transforms: &dyn TransformProvider,
        reference: &dyn ReferencePointProvider,
    ) -> Result<bool> {
        let mut position = [Vec3::ZERO];
        transforms.read_positions(&[self.transform], &mut position)?;
        let visible = self.gate.is_visible(sqr_distance(position[0], reference.reference_position()));
        apply_renderers(&mut self.renderers, visible);
        Ok(visible)
    }
}

#[cfg(test)]
#[path = "standard_object_tests.rs"]
mod tests;
