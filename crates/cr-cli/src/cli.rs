use cr_config::Config;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "crh")]
#[command(about = "Availability monitor for the clinical records backend")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides config and CR_API_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Probe timeout in milliseconds (overrides config and CR_PROBE_TIMEOUT_MS)
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Print reports as JSON, one object per line
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Probe the health endpoint once; exits 0 when online, 1 otherwise
    Probe,
    /// Monitor continuously; press Enter to retry while offline, Ctrl-C to quit
    Watch,
}

impl Cli {
    /// Apply command-line flags on top of the loaded configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.monitor.probe_timeout_ms = timeout_ms;
        }
    }
}
