//! isoparse: validate ISO 8601 text from the command line.
//!
//! Prints the parsed value as JSON on stdout, or `error: <message>` on
//! stderr with exit status 1.

mod cli;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use serde_json::{json, Value};
use tracing::debug;

use iso8601_engine::{
    parse_date, parse_date_time, parse_duration, parse_interval, parse_time, parse_zone,
};

use cli::{Cli, Command};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    debug!(command = cli.command.name(), input = cli.command.input(), "parsing");
    let value = describe(&cli.command)?;
    let out = if cli.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(out)
}

/// The JSON description of the parsed input.
fn describe(command: &Command) -> Result<Value> {
    let value = match command {
        Command::Date { input } => {
            let date = parse_date(input)?;
            json!({
                "date": date,
                "calendar": date.to_calendar_date(),
            })
        }
        Command::Time { input } => json!({ "time": parse_time(input)? }),
        Command::Zone { input } => {
            let zone = parse_zone(input)?;
            json!({
                "zone": zone,
                "offset": zone.offset(),
            })
        }
        Command::DateTime { input } => json!({ "datetime": parse_date_time(input)? }),
        Command::Duration { input } => {
            let duration = parse_duration(input)?;
            json!({
                "duration": duration,
                "text": duration.to_string(),
            })
        }
        Command::Interval { input } => {
            let interval = parse_interval(input)?;
            json!({
                "interval": interval,
                "start": interval.start_instant(),
                "end": interval.end_instant(),
            })
        }
    };
    Ok(value)
}
