//! Security event forwarding for buildpulse.
//!
//! The [`SecurityEventForwarder`] implements [`SecurityListener`] and turns
//! authentication lifecycle callbacks into one structured event and one
//! counter increment on a [`MonitoringClient`]. Its collaborators are
//! injected as traits:
//!
//! - [`SecuritySettings`](buildpulse_config::SecuritySettings): enable flag, global tags, metric prefix
//! - [`ClientFactory`]: the shared client handle
//! - [`HostnameResolver`]: host identifier for counters
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use buildpulse_config::SharedSettings;
//! use buildpulse_telemetry::{
//!     MetricsClient, SecurityEventForwarder, SecurityListener, StaticClientFactory,
//!     SystemHostnameResolver,
//! };
//!
//! let forwarder = SecurityEventForwarder::new(
//!     Arc::new(SharedSettings::default()),
//!     Arc::new(StaticClientFactory::new(Arc::new(MetricsClient::new()))),
//!     Arc::new(SystemHostnameResolver::new()),
//! );
//!
//! forwarder.authenticated("alice");
//! ```

pub mod clients;
pub mod error;
pub mod event;
pub mod forwarder;
pub mod hostname;
pub mod listener;

pub use clients::{
    ClientCall, ClientFactory, CounterRecord, MemoryClient, MetricsClient, MonitoringClient,
    StaticClientFactory,
};
pub use error::{ClientError, ForwardError, HostnameError};
pub use event::{AlertType, EventPayload, Priority, SecurityEvent, SecurityEventKind};
pub use forwarder::SecurityEventForwarder;
pub use hostname::{HOSTNAME_FALLBACK, HostnameResolver, SystemHostnameResolver};
pub use listener::{SecurityListener, SecurityTrigger};
