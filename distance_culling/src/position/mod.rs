//! Position sources and their resolution
//!
//! A [`DistanceRequest`] names two [`PositionSource`]s. The
//! [`PositionResolver`] turns them into concrete positions for one tick,
//! copying manual and reference-point positions inline and deferring every
//! external transform read into a single batched provider call.

mod request;
mod transform;
mod reference_point;
mod resolver;

pub use request::{DistanceRequest, PositionSource, PositionSlot};
pub use transform::{TransformHandle, TransformProvider, TransformStore};
pub use reference_point::{ReferencePointProvider, SharedReferencePoint};
pub use resolver::{DeferredLookup, PositionResolver};
