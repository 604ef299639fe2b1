/// Requester capability - the two calls the manager makes per tick.

use std::sync::{Arc, Mutex, Weak};
use crate::position::DistanceRequest;

/// Something that wants its squared distance measured every tick.
///
/// Implemented by the host's object wrappers. The manager calls
/// `produce_request` during collection and `accept_result` during dispatch,
/// always on the tick driver's thread and always in registry order.
pub trait DistanceRequester: Send {
    /// Describe this tick's comparison.
    fn produce_request(&self) -> DistanceRequest;

    /// Receive the squared distance computed for this tick's request.
    fn accept_result(&mut self, sqr_distance: f32);
}

/// Strong, type-erased requester reference
pub type SharedRequester = Arc<Mutex<dyn DistanceRequester>>;

/// Non-owning requester reference, as stored by the registry
pub type WeakRequester = Weak<Mutex<dyn DistanceRequester>>;

/// Erase and downgrade a concrete requester for registration.
pub fn downgrade<R: DistanceRequester + 'static>(requester: &Arc<Mutex<R>>) -> WeakRequester {
    let shared: SharedRequester = requester.clone();
    Arc::downgrade(&shared)
}

/// Identity comparison: same allocation means same requester.
pub(crate) fn same_requester(a: &WeakRequester, b: &WeakRequester) -> bool {
    Weak::ptr_eq(a, b)
}
