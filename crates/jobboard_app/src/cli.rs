use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use jobboard_engine::ServiceSettings;

/// Command-line arguments accepted by the `jobboard` binary.
#[derive(Parser, Debug)]
#[command(
    name = "jobboard",
    version,
    about = "Drive a remote job search service and browse the results"
)]
pub(crate) struct CliArgs {
    #[arg(
        short = 's',
        long,
        value_name = "URL",
        env = "JOBBOARD_SERVICE_URL",
        default_value = "http://127.0.0.1:8000",
        help = "Base URL of the search service"
    )]
    pub(crate) service_url: String,
    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "JOBBOARD_OUTPUT",
        default_value = "jobs.html",
        help = "Where the rendered results page is written"
    )]
    pub(crate) output: PathBuf,
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = 30,
        help = "Per-request timeout in seconds"
    )]
    pub(crate) timeout_secs: u64,
    #[arg(
        long,
        value_enum,
        default_value_t = LogDestination::File,
        help = "Where log output goes"
    )]
    pub(crate) log: LogDestination,
}

impl CliArgs {
    pub(crate) fn service_settings(&self) -> ServiceSettings {
        ServiceSettings {
            base_url: self.service_url.clone(),
            request_timeout: Duration::from_secs(self.timeout_secs.max(1)),
            ..ServiceSettings::default()
        }
    }
}

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogDestination {
    /// Write to ./jobboard.log in the current directory.
    File,
    /// Write to the terminal.
    Terminal,
    /// Write to both file and terminal.
    Both,
}
