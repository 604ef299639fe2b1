//! Mock requester for unit tests.
//!
//! Records every call into a log shared between mocks, so tests can check
//! both per-requester results and the global call order.

use std::sync::{Arc, Mutex};
use crate::position::DistanceRequest;
use super::requester::DistanceRequester;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Produce(u32),
    Accept(u32, f32),
}

pub(crate) type CallLog = Arc<Mutex<Vec<Call>>>;

pub(crate) fn call_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

#[derive(Debug)]
pub(crate) struct MockRequester {
    pub id: u32,
    pub request: DistanceRequest,
    pub results: Vec<f32>,
    log: CallLog,
}

impl MockRequester {
    pub fn new(id: u32, request: DistanceRequest, log: &CallLog) -> Arc<Mutex<Self>> {
        Arc::new(Mutex::new(Self {
            id,
            request,
            results: Vec::new(),
            log: log.clone(),
        }))
    }
}

impl DistanceRequester for MockRequester {
    fn produce_request(&self) -> DistanceRequest {
        self.log.lock().unwrap().push(Call::Produce(self.id));
        self.request
    }

    fn accept_result(&mut self, sqr_distance: f32) {
        self.log.lock().unwrap().push(Call::Accept(self.id, sqr_distance));
        self.results.push(sqr_distance);
    }
}
