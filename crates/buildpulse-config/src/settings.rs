//! Settings model.

use serde::{Deserialize, Serialize};

use crate::host::is_valid_hostname;
use crate::tags::{TagSet, deserialize_tags, serialize_tags};
use crate::{ConfigError, Result};

/// Read-only view of the settings that drive security event forwarding.
///
/// Implementations must return a consistent snapshot per call; callers read
/// the flag and the tags independently on every notification.
pub trait SecuritySettings: Send + Sync {
    /// Whether security events should be emitted at all.
    fn emit_security_events(&self) -> bool;

    /// Tags attached to every emitted event and counter.
    fn global_tags(&self) -> TagSet;

    /// Optional namespace prepended to metric names (`<prefix>.user.logout`).
    fn metric_prefix(&self) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BuildpulseConfig {
    #[serde(default)]
    pub security: SecurityConfig,
    #[serde(default)]
    pub host: HostConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl BuildpulseConfig {
    pub fn validate(&self) -> Result<()> {
        let lvl = self.logging.level.to_ascii_lowercase();
        let valid_levels = ["trace", "debug", "info", "warn", "error", "off"];
        if !valid_levels.contains(&lvl.as_str()) {
            return Err(ConfigError::validation(format!(
                "logging.level must be one of {valid_levels:?}"
            )));
        }

        if let Some(prefix) = &self.security.metric_prefix
            && (prefix.trim().is_empty() || prefix.ends_with('.'))
        {
            return Err(ConfigError::validation(
                "security.metric_prefix must be non-empty and must not end with '.'",
            ));
        }

        if let Some(hostname) = &self.host.hostname
            && !is_valid_hostname(hostname)
        {
            return Err(ConfigError::validation(format!(
                "host.hostname '{hostname}' is not a valid hostname"
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    #[serde(default = "default_true")]
    pub emit_security_events: bool,
    /// Parsed from a `key:value` list, see [`crate::tags`].
    #[serde(
        default,
        deserialize_with = "deserialize_tags",
        serialize_with = "serialize_tags"
    )]
    pub global_tags: TagSet,
    #[serde(default)]
    pub metric_prefix: Option<String>,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            emit_security_events: default_true(),
            global_tags: TagSet::new(),
            metric_prefix: None,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HostConfig {
    /// Overrides the OS hostname when reporting counters.
    #[serde(default)]
    pub hostname: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}

impl SecuritySettings for SecurityConfig {
    fn emit_security_events(&self) -> bool {
        self.emit_security_events
    }

    fn global_tags(&self) -> TagSet {
        self.global_tags.clone()
    }

    fn metric_prefix(&self) -> Option<String> {
        self.metric_prefix.clone()
    }
}

impl SecuritySettings for BuildpulseConfig {
    fn emit_security_events(&self) -> bool {
        self.security.emit_security_events()
    }

    fn global_tags(&self) -> TagSet {
        self.security.global_tags()
    }

    fn metric_prefix(&self) -> Option<String> {
        self.security.metric_prefix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = BuildpulseConfig::default();
        assert!(cfg.security.emit_security_events);
        assert!(cfg.security.global_tags.is_empty());
        assert!(cfg.security.metric_prefix.is_none());
        assert!(cfg.host.hostname.is_none());
        assert_eq!(cfg.logging.level, "info");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_deserialize_from_toml() {
        let cfg: BuildpulseConfig = toml::from_str(
            r#"
[security]
emit_security_events = false
global_tags = "env:prod,team:ci"
metric_prefix = "jenkins"

[host]
hostname = "ci-01"
"#,
        )
        .expect("parse");

        assert!(!cfg.emit_security_events());
        assert_eq!(cfg.global_tags().len(), 2);
        assert_eq!(cfg.metric_prefix().as_deref(), Some("jenkins"));
        assert_eq!(cfg.host.hostname.as_deref(), Some("ci-01"));
    }

    #[test]
    fn test_serialize_tags_back_to_string() {
        let cfg: BuildpulseConfig =
            toml::from_str("[security]\nglobal_tags = \"team:ci,env:prod\"").expect("parse");
        let rendered = toml::to_string(&cfg).expect("serialize");
        assert!(rendered.contains(r#"global_tags = "env:prod,team:ci""#));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut cfg = BuildpulseConfig::default();
        cfg.logging.level = "loud".into();
        assert!(matches!(cfg.validate(), Err(ConfigError::Validation(_))));

        let mut cfg = BuildpulseConfig::default();
        cfg.security.metric_prefix = Some("jenkins.".into());
        assert!(cfg.validate().is_err());

        let mut cfg = BuildpulseConfig::default();
        cfg.security.metric_prefix = Some("  ".into());
        assert!(cfg.validate().is_err());

        let mut cfg = BuildpulseConfig::default();
        cfg.host.hostname = Some("localhost".into());
        assert!(cfg.validate().is_err());
    }
}
