use anyhow::Result;
use buildpulse_config::{BuildpulseConfig, flatten_tags};
use colored::Colorize;

use crate::cli::OutputFormat;
use crate::output::print_value;

pub fn show(config: &BuildpulseConfig, format: OutputFormat) -> Result<()> {
    if matches!(format, OutputFormat::Table) {
        let security = &config.security;
        println!(
            "{}: {}",
            "Emit security events".cyan(),
            security.emit_security_events
        );
        let tags = flatten_tags(&security.global_tags);
        println!(
            "{}: {}",
            "Global tags".cyan(),
            if tags.is_empty() {
                "(none)".to_string()
            } else {
                tags.join(", ")
            }
        );
        println!(
            "{}: {}",
            "Metric prefix".cyan(),
            security.metric_prefix.as_deref().unwrap_or("(none)")
        );
        println!(
            "{}: {}",
            "Hostname".cyan(),
            config.host.hostname.as_deref().unwrap_or("(auto)")
        );
        println!("{}: {}", "Log level".cyan(), config.logging.level);
        return Ok(());
    }

    print_value(&serde_json::to_value(config)?)
}
