use buildpulse_config::TagSet;
use metrics::{Label, counter};
use tracing::info;

use super::MonitoringClient;
use crate::error::ClientError;
use crate::event::EventPayload;

const HOST_LABEL: &str = "host";

/// Client backed by the process-wide `metrics` recorder.
///
/// Counters go through the installed recorder (Prometheus, statsd, ...).
/// Events are written as structured `tracing` records on the
/// `buildpulse::events` target for a log shipper to pick up.
#[derive(Debug, Clone, Default)]
pub struct MetricsClient;

impl MetricsClient {
    pub fn new() -> Self {
        Self
    }

    /// One label per tag key; multiple values are joined with `,`.
    ///
    /// A tag keyed `host` is reported as `tag_host` so the series keeps a
    /// single `host` label.
    fn labels(host: &str, tags: &TagSet) -> Vec<Label> {
        let mut labels = Vec::with_capacity(tags.len() + 1);
        labels.push(Label::new(HOST_LABEL, host.to_string()));
        for (key, values) in tags {
            let value = values.iter().cloned().collect::<Vec<_>>().join(",");
            let key = if key == HOST_LABEL {
                format!("tag_{key}")
            } else {
                key.clone()
            };
            labels.push(Label::new(key, value));
        }
        labels
    }
}

impl MonitoringClient for MetricsClient {
    fn send_event(&self, payload: &EventPayload) -> Result<(), ClientError> {
        let body = serde_json::to_string(payload)?;
        info!(
            target: "buildpulse::events",
            kind = %payload.kind,
            alert_type = %payload.alert_type,
            aggregation_key = %payload.aggregation_key,
            payload = %body,
            "{}",
            payload.title
        );
        Ok(())
    }

    fn increment_counter(
        &self,
        name: &str,
        host: &str,
        tags: &TagSet,
    ) -> Result<(), ClientError> {
        counter!(name.to_string(), Self::labels(host, tags)).increment(1);
        Ok(())
    }
}
