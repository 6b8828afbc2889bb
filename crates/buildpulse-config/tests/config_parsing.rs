use std::{env, fs};

use buildpulse_config::loader::load_config;
use buildpulse_config::{ConfigError, SecuritySettings};

#[test]
fn config_parsing_and_env_overrides_and_validation() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let path = dir.path().join("buildpulse.toml");

    let toml_content = r#"
[security]
emit_security_events = true
global_tags = """
env:prod, team:ci
team:release
"""
metric_prefix = "jenkins"

[host]
hostname = "ci-agent-01"

[logging]
level = "debug"
"#;
    fs::write(&path, toml_content).expect("write toml");

    // 1) Valid config parses
    let cfg = load_config(Some(&path)).expect("should parse config");
    assert!(cfg.emit_security_events());
    assert_eq!(cfg.global_tags()["team"].len(), 2);
    assert_eq!(cfg.metric_prefix().as_deref(), Some("jenkins"));
    assert_eq!(cfg.host.hostname.as_deref(), Some("ci-agent-01"));
    assert_eq!(cfg.logging.level, "debug");

    // 2) Env override should win over file
    unsafe {
        env::set_var("BUILDPULSE__SECURITY__EMIT_SECURITY_EVENTS", "false");
    }
    let cfg_env = load_config(Some(&path)).expect("should parse config with env overrides");
    assert!(!cfg_env.emit_security_events());
    unsafe {
        env::remove_var("BUILDPULSE__SECURITY__EMIT_SECURITY_EVENTS");
    }

    // 3) Invalid config should error
    let invalid_path = dir.path().join("invalid.toml");
    fs::write(&invalid_path, "[security]\nmetric_prefix = \"jenkins.\"\n").expect("write");
    let err = load_config(Some(&invalid_path)).expect_err("expected validation error");
    assert!(matches!(err, ConfigError::Validation(_)));

    // 4) Explicit missing file is an error
    let err = load_config(Some(&dir.path().join("nope.toml"))).expect_err("missing file");
    assert!(matches!(err, ConfigError::Io(_)));
}
