/// RegistrationQueue - register/unregister from outside the tick window.
///
/// Lifecycle hooks and requester callbacks cannot borrow the manager while
/// a tick is running. They push commands here instead; the manager drains
/// the queue at the start of its next tick, before taking the snapshot.

use std::sync::{Arc, Mutex, PoisonError};
use super::requester::{DistanceRequester, WeakRequester, downgrade};

pub(crate) enum RegistryCommand {
    Register(WeakRequester),
    Unregister(WeakRequester),
}

/// Cloneable handle for deferred registry mutation.
#[derive(Clone, Default)]
pub struct RegistrationQueue {
    pending: Arc<Mutex<Vec<RegistryCommand>>>,
}

impl RegistrationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a registration for the next tick boundary
    pub fn register<R: DistanceRequester + 'static>(&self, requester: &Arc<Mutex<R>>) {
        self.push(RegistryCommand::Register(downgrade(requester)));
    }

    /// Queue an unregistration for the next tick boundary
    pub fn unregister<R: DistanceRequester + 'static>(&self, requester: &Arc<Mutex<R>>) {
        self.push(RegistryCommand::Unregister(downgrade(requester)));
    }

    /// Number of commands waiting
    pub fn pending(&self) -> usize {
        self.lock().len()
    }

    fn push(&self, command: RegistryCommand) {
        self.lock().push(command);
    }

    /// Take every queued command, oldest first
    pub(crate) fn drain(&self) -> Vec<RegistryCommand> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<RegistryCommand>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
