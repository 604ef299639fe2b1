/// RendererDistanceObject - disables an object's renderers beyond a distance.
///
/// Its position lives in an external transform, so every request defers
/// the lookup to the batched provider read. The object itself stays
/// active; only its renderers are switched.

use crate::position::{DistanceRequest, PositionSource, TransformHandle};
use crate::registry::DistanceRequester;
use super::distance_gate::DistanceGate;
use super::targets::{RendererTarget, apply_renderers};

#[derive(Debug)]
pub struct RendererDistanceObject<R: RendererTarget> {
    transform: TransformHandle,
    gate: DistanceGate,
    renderers: Vec<Option<R>>,
    visible: Option<bool>,
}

impl<R: RendererTarget> RendererDistanceObject<R> {
    /// Renderers attached to `transform`, visible within `distance`.
    ///
    /// `None` entries stand for renderers the host has already destroyed;
    /// they are skipped.
    pub fn new(transform: TransformHandle, distance: f32, renderers: Vec<Option<R>>) -> Self {
        Self::with_gate(transform, DistanceGate::new(distance), renderers)
    }

    pub fn with_gate(transform: TransformHandle, gate: DistanceGate, renderers: Vec<Option<R>>) -> Self {
        Self {
            transform,
            gate,
            renderers,
            visible: None,
        }
    }

    pub fn transform(&self) -> TransformHandle {
        self.transform
    }

    pub fn gate(&self) -> DistanceGate {
        self.gate
    }

    pub fn renderers(&self) -> &[Option<R>] {
        &self.renderers
    }

    /// Mutable renderer list (set an entry to `None` when its renderer goes away)
    pub fn renderers_mut(&mut self) -> &mut Vec<Option<R>> {
        &mut self.renderers
    }

    /// Last decision, or None before the first result
    pub fn is_visible(&self) -> Option<bool> {
        self.visible
    }
}

impl<R: RendererTarget> DistanceRequester for RendererDistanceObject<R> {
    fn produce_request(&self) -> DistanceRequest {
        DistanceRequest::to_reference_point(PositionSource::External(self.transform))
    }

    fn accept_result(&mut self, sqr_distance: f32) {
        let visible = self.gate.is_visible(sqr_distance);
        self.visible = Some(visible);
        apply_renderers(&mut self.renderers, visible);
    }
}

#[cfg(test)]
#[path = "renderer_object_tests.rs"]
mod tests;
