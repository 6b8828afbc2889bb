use std::io::{self, Write};

use anyhow::Result;
use buildpulse_config::flatten_tags;
use buildpulse_telemetry::ClientCall;
use colored::Colorize;
use serde_json::Value;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::cli::OutputFormat;

pub fn print_value(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_calls(calls: &[ClientCall], format: OutputFormat) -> Result<()> {
    write_calls(&mut io::stdout().lock(), calls, format)
}

/// Writes only the call listing; status lines go to stderr so JSON output
/// stays parseable.
pub fn write_calls(out: &mut impl Write, calls: &[ClientCall], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, calls)?;
            writeln!(out)?;
        }
        OutputFormat::Table => write_calls_table(out, calls)?,
    }
    Ok(())
}

pub fn print_success(msg: &str) {
    eprintln!("{} {}", "✓".green(), msg);
}

pub fn print_info(msg: &str) {
    eprintln!("{} {}", "•".cyan(), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

fn write_calls_table(out: &mut impl Write, calls: &[ClientCall]) -> io::Result<()> {
    if calls.is_empty() {
        return writeln!(out, "No client calls.");
    }
    let mut builder = Builder::default();
    builder.push_record(["Call", "Name", "Host", "Tags"]);
    for call in calls {
        match call {
            ClientCall::Event(payload) => {
                builder.push_record([
                    "event".to_string(),
                    payload.title.clone(),
                    "-".to_string(),
                    payload.tags.join(","),
                ]);
            }
            ClientCall::Counter(counter) => {
                builder.push_record([
                    "counter".to_string(),
                    counter.name.clone(),
                    counter.host.clone(),
                    flatten_tags(&counter.tags).join(","),
                ]);
            }
        }
    }
    let table = builder.build().with(Style::rounded()).to_string();
    writeln!(out, "{table}")
}
