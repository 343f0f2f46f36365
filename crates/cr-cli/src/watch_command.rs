use crate::CliResult;
use crate::notice::WakingTimer;
use crate::report::StatusReport;

use cr_health::{AvailabilityMonitor, MonitorSettings};

use std::future::Future;
use std::io::{BufRead, Write};
use std::process::ExitCode;
use std::time::Instant;

use log::{debug, info};
use tokio::sync::mpsc;

const INPUT_BUFFER: usize = 8;

/// Monitor until Ctrl-C, printing every state recomputation.
pub async fn run(settings: &MonitorSettings, json: bool) -> CliResult<ExitCode> {
    let monitor = AvailabilityMonitor::from_settings(settings)?;
    let input = spawn_stdin_reader()?;

    watch(
        &monitor,
        json,
        input,
        tokio::signal::ctrl_c(),
        &mut std::io::stdout(),
    )
    .await?;

    Ok(ExitCode::SUCCESS)
}

/// Drive a monitor until `shutdown` resolves.
///
/// Each line received on `input` asks for a manual retry, which the monitor
/// only honors while offline. The monitor is stopped before returning.
pub async fn watch<S, W>(
    monitor: &AvailabilityMonitor,
    json: bool,
    mut input: mpsc::Receiver<String>,
    shutdown: S,
    out: &mut W,
) -> CliResult<()>
where
    S: Future<Output = std::io::Result<()>>,
    W: Write,
{
    let mut handle = monitor.handle();
    let mut waking = WakingTimer::new();

    monitor.start()?;

    let initial = handle.current();
    let waking_for = waking.observe(initial, Instant::now());
    write_report(out, &StatusReport::new(initial, waking_for), json)?;

    let mut input_open = true;
    tokio::pin!(shutdown);

    loop {
        // Report pending recomputations before honoring shutdown
        tokio::select! {
            biased;

            changed = handle.changed() => {
                let Some(state) = changed else {
                    break;
                };
                let waking_for = waking.observe(state, Instant::now());
                write_report(out, &StatusReport::new(state, waking_for), json)?;
            }
            line = input.recv(), if input_open => {
                match line {
                    Some(_) => {
                        if monitor.retry() {
                            info!("Retrying connection");
                        } else {
                            debug!("Retry not available while {}", monitor.state());
                        }
                    }
                    None => input_open = false,
                }
            }
            signal = &mut shutdown => {
                signal?;
                info!("Interrupted, stopping monitor");
                break;
            }
        }
    }

    monitor.stop();
    Ok(())
}

/// Forward stdin lines from a detached thread.
///
/// The thread is never joined, so a pending read cannot hold up runtime
/// shutdown on Ctrl-C.
fn spawn_stdin_reader() -> CliResult<mpsc::Receiver<String>> {
    let (tx, rx) = mpsc::channel(INPUT_BUFFER);

    std::thread::Builder::new()
        .name("crh-stdin".to_string())
        .spawn(move || {
            for line in std::io::stdin().lock().lines() {
                let Ok(line) = line else {
                    break;
                };
                if tx.blocking_send(line).is_err() {
                    break;
                }
            }
        })?;

    Ok(rx)
}

fn write_report<W: Write>(out: &mut W, report: &StatusReport, json: bool) -> CliResult<()> {
    writeln!(out, "{}", report.render(json)?)?;
    out.flush()?;
    Ok(())
}
