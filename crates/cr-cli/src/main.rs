//! crh - clinical records health CLI
//!
//! Reports whether the records backend is online, waking from a cold start,
//! restarting, or unreachable.
//!
//! # Examples
//!
//! ```bash
//! # One probe, exit code 0 when online
//! crh probe
//!
//! # Watch a deployed backend, JSON lines
//! crh watch --base-url https://records.example.com/api --json
//! ```

use cr_cli::Cli;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cr_cli::run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
