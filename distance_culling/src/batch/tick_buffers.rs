/// Per-tick working buffers.
///
/// Allocated at the start of Collecting with exactly one element per
/// requester in the snapshot, dropped when the tick returns (on every path,
/// including errors). Index `i` in every buffer belongs to requester `i`.

use glam::Vec3;

pub(crate) struct TickBuffers {
    pub positions1: Vec<Vec3>,
    pub positions2: Vec<Vec3>,
    pub sqr_distances: Vec<f32>,
}

impl TickBuffers {
    pub fn with_len(len: usize) -> Self {
        Self {
            positions1: vec![Vec3::ZERO; len],
            positions2: vec![Vec3::ZERO; len],
            sqr_distances: vec![0.0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.sqr_distances.len()
    }
}
