//! Hot-reloadable settings handle.
//!
//! Holds a [`BuildpulseConfig`] behind an `ArcSwap`, so notification handlers
//! on any thread read a consistent snapshot without locking while an
//! operator reload swaps in a new value.

use arc_swap::ArcSwap;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use crate::Result;
use crate::loader::load_config;
use crate::settings::{BuildpulseConfig, SecuritySettings};
use crate::tags::TagSet;

#[derive(Clone)]
pub struct SharedSettings {
    inner: Arc<ArcSwap<BuildpulseConfig>>,
}

impl SharedSettings {
    pub fn new(config: BuildpulseConfig) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(config)),
        }
    }

    /// Snapshot of the current configuration.
    pub fn snapshot(&self) -> Arc<BuildpulseConfig> {
        self.inner.load_full()
    }

    /// Replace the configuration. Readers holding an old snapshot keep it.
    pub fn update(&self, config: BuildpulseConfig) {
        info!(
            emit_security_events = config.security.emit_security_events,
            global_tags = config.security.global_tags.len(),
            "Updating security event settings"
        );
        self.inner.store(Arc::new(config));
    }

    /// Load `path` and swap it in.
    ///
    /// On failure the current configuration stays in place and the error is
    /// returned to the caller.
    pub fn reload_from(&self, path: &Path) -> Result<()> {
        match load_config(Some(path)) {
            Ok(config) => {
                self.update(config);
                Ok(())
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Config reload failed, keeping current settings");
                Err(e)
            }
        }
    }
}

impl Default for SharedSettings {
    fn default() -> Self {
        Self::new(BuildpulseConfig::default())
    }
}

impl std::fmt::Debug for SharedSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedSettings")
            .field("config", &self.inner.load_full())
            .finish()
    }
}

impl SecuritySettings for SharedSettings {
    fn emit_security_events(&self) -> bool {
        self.inner.load().security.emit_security_events
    }

    fn global_tags(&self) -> TagSet {
        self.inner.load().security.global_tags.clone()
    }

    fn metric_prefix(&self) -> Option<String> {
        self.inner.load().security.metric_prefix.clone()
    }
}
