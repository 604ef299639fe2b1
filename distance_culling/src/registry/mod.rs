//! Requester registry
//!
//! Requesters are owned by whatever external system creates them. The
//! registry only keeps weak, insertion-ordered references and hands the
//! distance manager a strong snapshot once per tick.

mod requester;
mod requester_registry;
mod registration_queue;

pub use requester::{DistanceRequester, SharedRequester, WeakRequester, downgrade};
pub use requester_registry::RequesterRegistry;
pub use registration_queue::RegistrationQueue;

#[cfg(test)]
pub(crate) mod mock_requester;
