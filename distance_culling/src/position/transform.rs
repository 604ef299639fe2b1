/// External transforms - opaque handles and the batched provider contract.
///
/// The culling core never reads an external transform on its own. It
/// collects every handle it needs during a tick and asks the provider for
/// all of them at once.

use glam::Vec3;
use slotmap::{new_key_type, SlotMap};
use crate::error::Result;
use crate::engine_bail;

new_key_type! {
    /// Opaque handle to an externally owned transform.
    ///
    /// Handles stay valid until their transform is removed from the
    /// provider, regardless of what else is added or removed.
    pub struct TransformHandle;
}

/// Batched transform/pose read.
///
/// Implemented by whatever owns the transforms (the host engine's scene,
/// or [`TransformStore`]).
pub trait TransformProvider {
    /// Write the current position of `handles[i]` into `out[i]`.
    ///
    /// `out` always has exactly `handles.len()` elements. Called at most
    /// once per tick.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidHandle` if any handle is unknown to the provider.
    fn read_positions(&self, handles: &[TransformHandle], out: &mut [Vec3]) -> Result<()>;
}

/// In-process transform storage.
///
/// A SlotMap of positions keyed by stable [`TransformHandle`]s. Serves as
/// the transform provider when the host has no scene graph of its own, and
/// as the reference implementation of the batched read.
#[derive(Debug, Default)]
pub struct TransformStore {
    positions: SlotMap<TransformHandle, Vec3>,
}

impl TransformStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            positions: SlotMap::with_key(),
        }
    }

    /// Add a transform and return its handle
    pub fn insert(&mut self, position: Vec3) -> TransformHandle {
        self.positions.insert(position)
    }

    /// Remove a transform. Returns its last position, or None if the handle is invalid.
    pub fn remove(&mut self, handle: TransformHandle) -> Option<Vec3> {
        self.positions.remove(handle)
    }

    /// Move a transform. Returns false if the handle is invalid.
    pub fn set_position(&mut self, handle: TransformHandle, position: Vec3) -> bool {
        if let Some(slot) = self.positions.get_mut(handle) {
            *slot = position;
            true
        } else {
            false
        }
    }

    /// Current position of a transform
    pub fn position(&self, handle: TransformHandle) -> Option<Vec3> {
        self.positions.get(handle).copied()
    }

    pub fn contains(&self, handle: TransformHandle) -> bool {
        self.positions.contains_key(handle)
    }

    /// Number of live transforms
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl TransformProvider for TransformStore {
    fn read_positions(&self, handles: &[TransformHandle], out: &mut [Vec3]) -> Result<()> {
        debug_assert_eq!(handles.len(), out.len(), "one output slot per handle");

        for (handle, slot) in handles.iter().zip(out.iter_mut()) {
            match self.positions.get(*handle) {
                Some(position) => *slot = *position,
                None => engine_bail!(InvalidHandle, "culling::TransformStore",
                    "{:?} is not in the store (removed without unregistering?)", handle),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
