mod battery;
mod configure;
mod optimize;
mod status;

use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use reqwest::Url;

pub use self::{battery::BatteryArgs, configure::configure, optimize::optimize, status::status};
use crate::{api::Api, prelude::*};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[clap(flatten)]
    pub connection: ConnectionArgs,

    /// How to print the results.
    #[clap(long, value_enum, default_value = "table", env = "VOLTWISE_OUTPUT")]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: configure the battery, request the optimized schedule, and show it.
    #[clap(name = "optimize")]
    Optimize(Box<SubmitArgs>),

    /// Only push the battery configuration.
    #[clap(name = "configure")]
    Configure(Box<SubmitArgs>),

    /// Show the battery configuration the backend currently has.
    #[clap(name = "status")]
    Status,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables.
    Table,

    /// One JSON document keyed by region.
    Json,
}

#[derive(Parser)]
pub struct ConnectionArgs {
    /// VoltWise backend base URL.
    #[clap(
        long = "api-base-url",
        default_value = "http://localhost:5002",
        env = "VOLTWISE_API_BASE_URL"
    )]
    pub base_url: Url,

    /// Request timeout in seconds. Requests wait indefinitely when unset.
    #[clap(long = "timeout", env = "VOLTWISE_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

impl ConnectionArgs {
    pub fn try_new_api(&self) -> Result<Api> {
        Api::try_new(self.base_url.clone(), self.timeout_secs.map(Duration::from_secs))
    }
}

#[derive(Parser)]
pub struct SubmitArgs {
    #[clap(flatten)]
    pub battery: BatteryArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_defaults() -> Result {
        let args = Args::try_parse_from(["voltwise", "optimize"])?;
        assert_eq!(args.connection.base_url.as_str(), "http://localhost:5002/");
        assert_eq!(args.connection.timeout_secs, None);
        assert_eq!(args.output, OutputFormat::Table);
        assert!(matches!(args.command, Command::Optimize(_)));
        Ok(())
    }

    #[test]
    fn test_parse_connection() -> Result {
        let args = Args::try_parse_from([
            "voltwise",
            "--api-base-url",
            "https://voltwise.example.com/",
            "--timeout",
            "30",
            "--output",
            "json",
            "status",
        ])?;
        assert_eq!(args.connection.timeout_secs, Some(30));
        assert_eq!(args.output, OutputFormat::Json);
        assert!(matches!(args.command, Command::Status));
        Ok(())
    }
}
