//! Configuration for buildpulse security event forwarding.
//!
//! This crate provides:
//! - The settings model (`[security]`, `[host]`, `[logging]` sections)
//! - Loading from a TOML file with `BUILDPULSE__*` environment overrides
//! - Global tag parsing (`key:value` lists into a [`TagSet`])
//! - A lock-free, hot-reloadable settings handle ([`SharedSettings`])
//! - The [`SecuritySettings`] provider trait consumed by the forwarder
//!
//! # Example
//!
//! ```ignore
//! use buildpulse_config::{SharedSettings, SecuritySettings, loader::load_config};
//!
//! let config = load_config(Some("buildpulse.toml".as_ref()))?;
//! let settings = SharedSettings::new(config);
//!
//! if settings.emit_security_events() {
//!     let tags = settings.global_tags();
//! }
//! ```

pub mod host;
pub mod loader;
pub mod settings;
pub mod shared;
pub mod tags;

pub use host::is_valid_hostname;
pub use settings::{BuildpulseConfig, HostConfig, LoggingConfig, SecurityConfig, SecuritySettings};
pub use shared::SharedSettings;
pub use tags::{TagSet, flatten_tags, parse_global_tags};

/// Error types for configuration operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Load error: {0}")]
    Load(#[from] config::ConfigError),
}

impl ConfigError {
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
