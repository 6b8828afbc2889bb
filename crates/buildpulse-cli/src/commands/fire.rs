use std::sync::Arc;

use anyhow::{Context, Result};
use buildpulse_config::{BuildpulseConfig, SharedSettings};
use buildpulse_telemetry::{
    MemoryClient, MetricsClient, MonitoringClient, SecurityEventForwarder, SecurityTrigger,
    StaticClientFactory, SystemHostnameResolver,
};
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::cli::{FireArgs, OutputFormat};
use crate::output::{print_calls, print_info, print_success};

pub fn fire(config: BuildpulseConfig, args: &FireArgs, format: OutputFormat) -> Result<()> {
    let trigger = SecurityTrigger::from(args.trigger);
    let enabled = config.security.emit_security_events;
    let hostnames = Arc::new(SystemHostnameResolver::from_config(&config.host));
    let settings = Arc::new(SharedSettings::new(config));

    let calls_made = if args.dry_run {
        let client = Arc::new(MemoryClient::new());
        let forwarder = build_forwarder(settings, client.clone(), hostnames);
        trigger.fire(&forwarder, &args.username);

        let calls = client.calls();
        print_calls(&calls, format)?;
        !calls.is_empty()
    } else {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .context("failed to install metrics recorder")?;
        let forwarder = build_forwarder(settings, Arc::new(MetricsClient::new()), hostnames);
        trigger.fire(&forwarder, &args.username);

        println!("{}", handle.render());
        // Client errors are logged by the forwarder, not reported back.
        enabled && !is_alias(trigger)
    };

    if calls_made {
        print_success(&format!("Forwarded {trigger} for {}", args.username));
    } else {
        print_info(&no_calls_reason(trigger, enabled));
    }
    Ok(())
}

fn build_forwarder(
    settings: Arc<SharedSettings>,
    client: Arc<dyn MonitoringClient>,
    hostnames: Arc<SystemHostnameResolver>,
) -> SecurityEventForwarder {
    SecurityEventForwarder::new(
        settings,
        Arc::new(StaticClientFactory::new(client)),
        hostnames,
    )
}

fn is_alias(trigger: SecurityTrigger) -> bool {
    matches!(
        trigger,
        SecurityTrigger::LoggedIn | SecurityTrigger::FailedToLogIn
    )
}

fn no_calls_reason(trigger: SecurityTrigger, enabled: bool) -> String {
    if !enabled {
        "Security events are disabled (security.emit_security_events = false)".to_string()
    } else if is_alias(trigger) {
        format!("{trigger} is covered by its authentication trigger and sends nothing")
    } else {
        "No client calls were made; see the log output".to_string()
    }
}
