/// RequesterRegistry - insertion-ordered weak references.
///
/// Duplicates are allowed and count twice. Removal takes the first match.

use std::sync::Arc;
use std::sync::Mutex;
use crate::{engine_debug, engine_warn};
use super::requester::{DistanceRequester, SharedRequester, WeakRequester, downgrade, same_requester};
use super::registration_queue::RegistryCommand;

/// Ordered set of active requesters.
#[derive(Default)]
pub struct RequesterRegistry {
    entries: Vec<WeakRequester>,
}

impl RequesterRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a requester. No uniqueness check.
    pub fn register<R: DistanceRequester + 'static>(&mut self, requester: &Arc<Mutex<R>>) {
        self.register_weak(downgrade(requester));
    }

    /// Remove the first registration of `requester`.
    ///
    /// Returns false (and changes nothing) if it was never registered.
    pub fn unregister<R: DistanceRequester + 'static>(&mut self, requester: &Arc<Mutex<R>>) -> bool {
        self.unregister_weak(&downgrade(requester))
    }

    pub fn register_weak(&mut self, requester: WeakRequester) {
        self.entries.push(requester);
    }

    pub fn unregister_weak(&mut self, requester: &WeakRequester) -> bool {
        match self.entries.iter().position(|e| same_requester(e, requester)) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Whether `requester` is registered at least once
    pub fn contains<R: DistanceRequester + 'static>(&self, requester: &Arc<Mutex<R>>) -> bool {
        let weak = downgrade(requester);
        self.entries.iter().any(|e| same_requester(e, &weak))
    }

    /// Number of registrations, including ones whose owner is gone
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn apply(&mut self, command: RegistryCommand) {
        match command {
            RegistryCommand::Register(requester) => self.register_weak(requester),
            RegistryCommand::Unregister(requester) => {
                if !self.unregister_weak(&requester) {
                    engine_debug!("culling::RequesterRegistry",
                        "Unregister ignored: requester not registered");
                }
            }
        }
    }

    /// Strong references to every live requester, in registration order.
    ///
    /// The snapshot fixes the index of each requester for one tick.
    /// Registrations whose owner dropped the requester without
    /// unregistering are pruned here.
    pub fn snapshot(&mut self) -> Vec<SharedRequester> {
        let mut snapshot = Vec::with_capacity(self.entries.len());
        let before = self.entries.len();

        self.entries.retain(|weak| match weak.upgrade() {
            Some(strong) => {
                snapshot.push(strong);
                true
            }
            None => false,
        });

        let pruned = before - self.entries.len();
        if pruned > 0 {
            engine_warn!("culling::RequesterRegistry",
                "Pruned {} requester(s) dropped without unregistering", pruned);
        }

        snapshot
    }
}

#[cfg(test)]
#[path = "requester_registry_tests.rs"]
mod tests;
