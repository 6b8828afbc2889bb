pub mod memory;
pub mod metrics;

use std::sync::Arc;

use buildpulse_config::TagSet;

use crate::error::ClientError;
use crate::event::EventPayload;

/// Handle capable of transmitting events and counters to a monitoring backend.
///
/// Transport, batching and retry belong to the implementation. Both calls
/// may be made concurrently from any thread.
pub trait MonitoringClient: Send + Sync {
    /// Submit a structured event
    fn send_event(&self, payload: &EventPayload) -> Result<(), ClientError>;

    /// Increment the counter `name` by one
    fn increment_counter(&self, name: &str, host: &str, tags: &TagSet)
    -> Result<(), ClientError>;
}

/// Source of the shared client handle, looked up on every notification.
pub trait ClientFactory: Send + Sync {
    fn client(&self) -> Result<Arc<dyn MonitoringClient>, ClientError>;
}

/// Factory returning a fixed client, or an error when none is configured.
#[derive(Clone, Default)]
pub struct StaticClientFactory {
    client: Option<Arc<dyn MonitoringClient>>,
}

impl StaticClientFactory {
    pub fn new(client: Arc<dyn MonitoringClient>) -> Self {
        Self {
            client: Some(client),
        }
    }

    pub fn unconfigured() -> Self {
        Self { client: None }
    }
}

impl ClientFactory for StaticClientFactory {
    fn client(&self) -> Result<Arc<dyn MonitoringClient>, ClientError> {
        self.client
            .clone()
            .ok_or_else(|| ClientError::Unavailable("no monitoring client configured".into()))
    }
}

impl std::fmt::Debug for StaticClientFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticClientFactory")
            .field("configured", &self.client.is_some())
            .finish()
    }
}

pub use self::memory::{ClientCall, CounterRecord, MemoryClient};
pub use self::metrics::MetricsClient;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_factory_returns_client() {
        let client = Arc::new(MemoryClient::new());
        let factory = StaticClientFactory::new(client.clone());

        let handle = factory.client().expect("configured");
        handle
            .increment_counter("user.logout", "ci-01", &TagSet::new())
            .expect("increment");
        assert_eq!(client.counters().len(), 1);
    }

    #[test]
    fn test_unconfigured_factory_errors() {
        let factory = StaticClientFactory::unconfigured();
        assert!(matches!(factory.client(), Err(ClientError::Unavailable(_))));
    }
}
