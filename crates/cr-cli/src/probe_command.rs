use crate::CliResult;
use crate::report::StatusReport;

use cr_health::{AvailabilityMonitor, MonitorSettings};

use std::process::ExitCode;
use std::time::Duration;

/// Probe the backend once through a monitor that is never started.
pub async fn probe_once(settings: &MonitorSettings) -> CliResult<StatusReport> {
    let monitor = AvailabilityMonitor::from_settings(settings)?;
    let state = monitor.probe().await;

    Ok(StatusReport::new(state, Duration::ZERO))
}

pub async fn run(settings: &MonitorSettings, json: bool) -> CliResult<ExitCode> {
    let report = probe_once(settings).await?;
    println!("{}", report.render(json)?);

    Ok(if report.available {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
