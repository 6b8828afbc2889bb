//! Host identifier resolution for counter submissions.

use std::ffi::OsString;

use buildpulse_config::{HostConfig, is_valid_hostname};
use tracing::debug;

use crate::error::HostnameError;

/// Host reported when nothing better is known.
///
/// This is the literal string `"null"`, not an absent value. Metric
/// consumers key on it, so it must stay as is.
pub const HOSTNAME_FALLBACK: &str = "null";

pub trait HostnameResolver: Send + Sync {
    /// Resolve the host identifier, returning `fallback` when unknown.
    fn resolve_hostname(&self, fallback: &str) -> Result<String, HostnameError>;
}

/// Resolves the hostname from configuration, the `HOSTNAME` environment
/// variable, then the operating system, in that order.
///
/// The first candidate that passes [`is_valid_hostname`] wins.
#[derive(Debug, Clone, Default)]
pub struct SystemHostnameResolver {
    override_hostname: Option<String>,
}

impl SystemHostnameResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_override(hostname: impl Into<String>) -> Self {
        Self {
            override_hostname: Some(hostname.into()),
        }
    }

    pub fn from_config(config: &HostConfig) -> Self {
        Self {
            override_hostname: config.hostname.clone(),
        }
    }

    fn resolve_from(
        &self,
        env_hostname: Option<String>,
        os_hostname: impl FnOnce() -> std::io::Result<OsString>,
        fallback: &str,
    ) -> String {
        if let Some(hostname) = self.override_hostname.as_deref() {
            if is_valid_hostname(hostname) {
                return hostname.to_string();
            }
            debug!(hostname, "Ignoring invalid configured hostname");
        }

        if let Some(hostname) = env_hostname {
            if is_valid_hostname(&hostname) {
                return hostname;
            }
            debug!(hostname = %hostname, "Ignoring invalid HOSTNAME variable");
        }

        match os_hostname().map_err(HostnameError::from).and_then(|name| {
            name.into_string()
                .map_err(|raw| HostnameError::Invalid(raw.to_string_lossy().into_owned()))
        }) {
            Ok(hostname) if is_valid_hostname(&hostname) => hostname,
            Ok(hostname) => {
                debug!(hostname = %hostname, "Ignoring invalid OS hostname");
                fallback.to_string()
            }
            Err(e) => {
                debug!(error = %e, "OS hostname unavailable");
                fallback.to_string()
            }
        }
    }
}

impl HostnameResolver for SystemHostnameResolver {
    fn resolve_hostname(&self, fallback: &str) -> Result<String, HostnameError> {
        Ok(self.resolve_from(std::env::var("HOSTNAME").ok(), ::hostname::get, fallback))
    }
}
