/// FrameContext - the external collaborators one tick reads from.
///
/// Built by the host for every tick (it only borrows), so the manager never
/// reaches for global state to find the viewpoint or the transforms.

use crate::position::{ReferencePointProvider, TransformProvider};

pub struct FrameContext<'a> {
    /// Shared reference point, read once at the start of Collecting
    pub reference_point: &'a dyn ReferencePointProvider,
    /// Batched transform reads for `PositionSource::External`
    pub transforms: &'a dyn TransformProvider,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        reference_point: &'a dyn ReferencePointProvider,
        transforms: &'a dyn TransformProvider,
    ) -> Self {
        Self { reference_point, transforms }
    }
}
