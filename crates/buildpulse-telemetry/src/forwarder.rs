//! Forwards authentication lifecycle notifications to a monitoring client.
//!
//! For each active trigger, when security events are enabled, the forwarder
//! sends one event and then increments one counter:
//!
//! | Trigger                  | Event kind      | Counter              |
//! |--------------------------|-----------------|----------------------|
//! | `authenticated`          | `LOGIN`         | `user.authenticated` |
//! | `failed_to_authenticate` | `ACCESS_DENIED` | `user.access_denied` |
//! | `logged_out`             | `LOGOUT`        | `user.logout`        |
//!
//! `logged_in` and `failed_to_log_in` are covered by the first two and are
//! no-ops. Failures never reach the caller; they are logged at warn level.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use buildpulse_config::SecuritySettings;
use tracing::{debug, warn};

use crate::clients::ClientFactory;
use crate::error::ForwardError;
use crate::event::{SecurityEvent, SecurityEventKind};
use crate::hostname::{HOSTNAME_FALLBACK, HostnameResolver};
use crate::listener::{SecurityListener, SecurityTrigger};

pub struct SecurityEventForwarder {
    settings: Arc<dyn SecuritySettings>,
    clients: Arc<dyn ClientFactory>,
    hostnames: Arc<dyn HostnameResolver>,
}

impl SecurityEventForwarder {
    pub fn new(
        settings: Arc<dyn SecuritySettings>,
        clients: Arc<dyn ClientFactory>,
        hostnames: Arc<dyn HostnameResolver>,
    ) -> Self {
        Self {
            settings,
            clients,
            hostnames,
        }
    }

    fn forward(&self, trigger: SecurityTrigger, username: &str, kind: SecurityEventKind) {
        // The flag read is guarded too: a settings provider may panic.
        let result = std::panic::catch_unwind(AssertUnwindSafe(|| {
            if !self.settings.emit_security_events() {
                return Ok(false);
            }
            debug!(trigger = %trigger, "Start security event forwarding");
            self.emit(username, kind).map(|()| true)
        }))
        .unwrap_or_else(|panic| {
            let panic_msg = if let Some(s) = panic.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            Err(ForwardError::Panicked(panic_msg))
        });

        match result {
            Ok(true) => debug!(trigger = %trigger, "End security event forwarding"),
            Ok(false) => {}
            Err(e) => warn!(
                trigger = %trigger,
                error = %e,
                "Unexpected error occurred while forwarding security event"
            ),
        }
    }

    /// Send the event, then the counter. An error from either call stops
    /// the sequence.
    fn emit(&self, username: &str, kind: SecurityEventKind) -> Result<(), ForwardError> {
        let client = self.clients.client()?;
        let tags = self.settings.global_tags();

        let event = SecurityEvent::new(username, kind, tags);
        client.send_event(&event.payload())?;

        let host = self.resolve_host();
        let metric = self.metric_name(kind);
        client.increment_counter(&metric, &host, event.tags())?;

        Ok(())
    }

    fn resolve_host(&self) -> String {
        match self.hostnames.resolve_hostname(HOSTNAME_FALLBACK) {
            Ok(host) if !host.is_empty() => host,
            Ok(_) => HOSTNAME_FALLBACK.to_string(),
            Err(e) => {
                debug!(error = %e, "Hostname resolution failed, using fallback");
                HOSTNAME_FALLBACK.to_string()
            }
        }
    }

    fn metric_name(&self, kind: SecurityEventKind) -> String {
        match self.settings.metric_prefix() {
            Some(prefix) => format!("{prefix}.{}", kind.metric_name()),
            None => kind.metric_name().to_string(),
        }
    }
}

impl SecurityListener for SecurityEventForwarder {
    fn authenticated(&self, username: &str) {
        self.forward(SecurityTrigger::Authenticated, username, SecurityEventKind::Login);
    }

    fn failed_to_authenticate(&self, username: &str) {
        self.forward(
            SecurityTrigger::FailedToAuthenticate,
            username,
            SecurityEventKind::AccessDenied,
        );
    }

    // Covered by `authenticated`.
    fn logged_in(&self, _username: &str) {}

    // Covered by `failed_to_authenticate`.
    fn failed_to_log_in(&self, _username: &str) {}

    fn logged_out(&self, username: &str) {
        self.forward(SecurityTrigger::LoggedOut, username, SecurityEventKind::Logout);
    }
}

impl std::fmt::Debug for SecurityEventForwarder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecurityEventForwarder")
            .field("enabled", &self.settings.emit_security_events())
            .finish()
    }
}
