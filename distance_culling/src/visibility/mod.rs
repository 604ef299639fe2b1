//! Distance-gated visibility
//!
//! Turns a squared distance into a show/hide decision and applies it to
//! whatever the host uses to hide things: an object-wide active flag or a
//! set of individually enabled renderers. Toggles are only written when
//! the value actually changes.

mod distance_gate;
mod targets;
mod active_object;
mod renderer_object;
mod standard_object;

pub use distance_gate::DistanceGate;
pub use targets::{ActiveTarget, RendererTarget, ActiveFlag, RendererSwitch, apply_active, apply_renderers};
pub use active_object::ActiveDistanceObject;
pub use renderer_object::RendererDistanceObject;
pub use standard_object::{StandardDistanceObject, StandardDistanceRendererObject};
