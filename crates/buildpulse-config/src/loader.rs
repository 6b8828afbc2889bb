//! Configuration loading from file and environment.

use config::{Config, Environment, File};
use std::path::{Path, PathBuf};

use crate::settings::BuildpulseConfig;
use crate::{ConfigError, Result};

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "buildpulse.toml";

/// Prefix for environment overrides, e.g. `BUILDPULSE__SECURITY__EMIT_SECURITY_EVENTS=false`.
pub const ENV_PREFIX: &str = "BUILDPULSE";

/// Load and validate configuration.
///
/// With an explicit `path` the file must exist. Without one,
/// `buildpulse.toml` is used when present and defaults otherwise.
/// Environment variables always win over file values.
pub fn load_config(path: Option<&Path>) -> Result<BuildpulseConfig> {
    let mut builder = Config::builder();
    match path {
        Some(p) => {
            if !p.exists() {
                return Err(ConfigError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("config file not found: {}", p.display()),
                )));
            }
            builder = builder.add_source(File::from(p.to_path_buf()));
        }
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                builder = builder.add_source(File::from(default_path));
            }
        }
    }
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .separator("__"),
    );

    let merged: BuildpulseConfig = builder.build()?.try_deserialize()?;
    merged.validate()?;
    Ok(merged)
}
