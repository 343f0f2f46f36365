//! cr-cli library
//!
//! Command implementations and status presentation for the `crh` binary.

pub mod cli;
pub mod error;
pub mod logger;
pub mod notice;
pub mod probe_command;
pub mod report;
pub mod watch_command;

#[cfg(test)]
mod tests;

pub use cli::{Cli, Commands};
pub use error::{CliError, Result as CliResult};
pub use notice::{StatusNotice, WakingTimer, indicator_label};
pub use probe_command::probe_once;
pub use report::StatusReport;

use cr_config::Config;
use cr_health::MonitorSettings;

use std::path::PathBuf;
use std::process::ExitCode;

/// Resolve configuration, initialize logging, and run the selected command.
pub async fn run(cli: Cli) -> CliResult<ExitCode> {
    let mut config = Config::load()?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    )?;
    config.log_summary();

    let settings = MonitorSettings::from(&config);

    match cli.command {
        Commands::Probe => probe_command::run(&settings, cli.json).await,
        Commands::Watch => watch_command::run(&settings, cli.json).await,
    }
}
