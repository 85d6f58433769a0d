//! Command line definitions for isoparse.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "isoparse",
    version,
    about = "Validate ISO 8601 text and print the parsed value as JSON",
    after_help = "Examples:\n  isoparse date 2016-W01-6\n  isoparse duration PT1.5H\n  isoparse --pretty interval R5/2016-01-02T00:00:00Z/PT1H\n\nSet RUST_LOG=iso8601_engine=trace to log rejected input."
)]
pub struct Cli {
    /// Pretty-print the JSON output.
    #[arg(long, short, global = true)]
    pub pretty: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// A calendar, ordinal, week or quarter date.
    Date {
        #[arg(allow_hyphen_values = true)]
        input: String,
    },
    /// A time of day.
    Time {
        #[arg(allow_hyphen_values = true)]
        input: String,
    },
    /// A zone designator (Z or a signed offset).
    Zone {
        #[arg(allow_hyphen_values = true)]
        input: String,
    },
    /// A combined date, time and zone.
    #[command(name = "datetime")]
    DateTime {
        #[arg(allow_hyphen_values = true)]
        input: String,
    },
    /// A duration.
    Duration {
        #[arg(allow_hyphen_values = true)]
        input: String,
    },
    /// An interval, optionally repeating.
    Interval {
        #[arg(allow_hyphen_values = true)]
        input: String,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Date { .. } => "date",
            Command::Time { .. } => "time",
            Command::Zone { .. } => "zone",
            Command::DateTime { .. } => "datetime",
            Command::Duration { .. } => "duration",
            Command::Interval { .. } => "interval",
        }
    }

    pub fn input(&self) -> &str {
        match self {
            Command::Date { input }
            | Command::Time { input }
            | Command::Zone { input }
            | Command::DateTime { input }
            | Command::Duration { input }
            | Command::Interval { input } => input,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_pretty_flag() {
        let cli = Cli::try_parse_from(["isoparse", "duration", "P1D", "--pretty"]).unwrap();
        assert!(cli.pretty);
        assert_eq!(cli.command.name(), "duration");
        assert_eq!(cli.command.input(), "P1D");
    }

    #[test]
    fn test_signed_input_is_positional() {
        let cli = Cli::try_parse_from(["isoparse", "zone", "-05:00"]).unwrap();
        assert_eq!(cli.command.input(), "-05:00");
        let cli = Cli::try_parse_from(["isoparse", "-p", "duration", "-P1D"]).unwrap();
        assert!(cli.pretty);
        assert_eq!(cli.command.input(), "-P1D");
    }
}
