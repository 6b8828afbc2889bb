use std::sync::atomic::{AtomicBool, Ordering};

use buildpulse_config::TagSet;
use parking_lot::Mutex;
use serde::Serialize;

use super::MonitoringClient;
use crate::error::ClientError;
use crate::event::EventPayload;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CounterRecord {
    pub name: String,
    pub host: String,
    pub tags: TagSet,
}

/// A call observed by [`MemoryClient`], in arrival order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum ClientCall {
    Event(EventPayload),
    Counter(CounterRecord),
}

/// Client that keeps every call in memory.
///
/// Used for dry runs and tests. Each call type can be armed to fail.
#[derive(Debug, Default)]
pub struct MemoryClient {
    calls: Mutex<Vec<ClientCall>>,
    fail_events: AtomicBool,
    fail_counters: AtomicBool,
}

impl MemoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_events(&self, fail: bool) {
        self.fail_events.store(fail, Ordering::SeqCst);
    }

    pub fn fail_counters(&self, fail: bool) {
        self.fail_counters.store(fail, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<ClientCall> {
        self.calls.lock().clone()
    }

    pub fn events(&self) -> Vec<EventPayload> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                ClientCall::Event(payload) => Some(payload.clone()),
                ClientCall::Counter(_) => None,
            })
            .collect()
    }

    pub fn counters(&self) -> Vec<CounterRecord> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                ClientCall::Counter(record) => Some(record.clone()),
                ClientCall::Event(_) => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}

impl MonitoringClient for MemoryClient {
    fn send_event(&self, payload: &EventPayload) -> Result<(), ClientError> {
        if self.fail_events.load(Ordering::SeqCst) {
            return Err(ClientError::SendFailed("event submission rejected".into()));
        }
        self.calls.lock().push(ClientCall::Event(payload.clone()));
        Ok(())
    }

    fn increment_counter(
        &self,
        name: &str,
        host: &str,
        tags: &TagSet,
    ) -> Result<(), ClientError> {
        if self.fail_counters.load(Ordering::SeqCst) {
            return Err(ClientError::SendFailed("counter submission rejected".into()));
        }
        self.calls.lock().push(ClientCall::Counter(CounterRecord {
            name: name.to_string(),
            host: host.to_string(),
            tags: tags.clone(),
        }));
        Ok(())
    }
}
