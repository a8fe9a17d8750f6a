//! `siteboard watch` — Live dashboard, in the terminal or headless.

use std::io::{self, Write};

use clap::Args;
use siteboard_client::ApiClient;
use siteboard_common::config::DashboardConfig;
use siteboard_monitor::{Poller, RefreshController, RefreshOutcome};
use tokio::sync::mpsc;

use crate::output;

/// Arguments for the `watch` command.
#[derive(Args, Debug, Default)]
pub struct WatchArgs {
    /// Print one summary line per refresh cycle instead of opening the dashboard.
    #[arg(long)]
    pub headless: bool,

    /// Stop after this many refresh cycles (headless only).
    #[arg(long, requires = "headless")]
    pub cycles: Option<u64>,
}

/// Executes the `watch` command.
///
/// # Errors
///
/// Returns an error if the runtime, the HTTP client, or the terminal cannot
/// be set up.
pub fn execute(args: &WatchArgs, config: &DashboardConfig) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    if args.headless {
        runtime.block_on(run_headless(config, args.cycles))
    } else {
        siteboard_tui::run(config, runtime.handle())?;
        Ok(())
    }
}

async fn run_headless(config: &DashboardConfig, cycles: Option<u64>) -> anyhow::Result<()> {
    let client = ApiClient::new(config)?;
    let (tx, outcomes) = mpsc::unbounded_channel();
    let poller = Poller::new(client, config.poll_interval()).spawn(tx);

    let (stop_tx, stop_rx) = mpsc::channel::<()>(1);
    ctrlc::set_handler(move || {
        let _ = stop_tx.try_send(());
    })?;

    tracing::info!(base = config.base_endpoint(), "watching headless");
    let reported = report_outcomes(outcomes, stop_rx, cycles, &mut io::stdout()).await;
    poller.shutdown().await;
    let _ = reported?;
    Ok(())
}

/// Applies each outcome to a fresh controller and writes its summary line.
///
/// Returns once `stop` fires, the poller goes away, or `cycles` outcomes have
/// been reported.
async fn report_outcomes<W: Write>(
    mut outcomes: mpsc::UnboundedReceiver<RefreshOutcome>,
    mut stop: mpsc::Receiver<()>,
    cycles: Option<u64>,
    out: &mut W,
) -> io::Result<RefreshController> {
    let mut controller = RefreshController::new();
    let mut reported: u64 = 0;
    while cycles.is_none_or(|limit| reported < limit) {
        let outcome = tokio::select! {
            biased;
            _ = stop.recv() => break,
            outcome = outcomes.recv() => match outcome {
                Some(outcome) => outcome,
                None => break,
            },
        };
        let finished_at = outcome.finished_at;
        let _ = controller.apply(outcome);
        writeln!(out, "{}", output::summary_line(&controller, finished_at))?;
        out.flush()?;
        reported += 1;
    }
    Ok(controller)
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;
    use siteboard_client::FetchError;
    use siteboard_monitor::DisplayStatus;

    use super::*;

    fn poll_config(base: &str) -> DashboardConfig {
        let mut config = DashboardConfig::new(base).expect("valid base URL");
        config.poll_interval_secs = 1;
        config
    }

    async fn mock_site(server: &MockServer) {
        for (path, body) in [
            ("/api/hazards", json!([{"timestamp": "t1", "description": "Open trench"}])),
            ("/api/attendance", json!([])),
            ("/api/deliveries", json!([{"timestamp": "t1"}, {"timestamp": "t2"}])),
        ] {
            let _ = server
                .mock_async(|when, then| {
                    when.method(GET).path(path);
                    then.status(200).json_body(body.clone());
                })
                .await;
        }
    }

    #[tokio::test]
    async fn headless_reports_each_cycle_until_limit() {
        let server = MockServer::start_async().await;
        mock_site(&server).await;
        let config = poll_config(&server.base_url());
        let (tx, outcomes) = mpsc::unbounded_channel();
        let poller = Poller::new(ApiClient::new(&config).expect("client"), config.poll_interval())
            .spawn(tx);
        let (_stop_tx, stop_rx) = mpsc::channel(1);

        let mut out = Vec::new();
        let controller = report_outcomes(outcomes, stop_rx, Some(2), &mut out)
            .await
            .expect("report");
        poller.shutdown().await;

        let text = String::from_utf8(out).expect("utf8");
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2, "{text}");
        assert!(lines[0].contains("#1 ready hazards=1 attendance=0 deliveries=2"));
        assert!(lines[1].contains("#2 ready"));
        assert_eq!(controller.status(), DisplayStatus::Ready);
    }

    #[tokio::test]
    async fn headless_reports_failures_as_degraded() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().expect("addr").port();
        drop(listener);
        let base = format!("http://127.0.0.1:{port}");

        let config = poll_config(&base);
        let (tx, outcomes) = mpsc::unbounded_channel();
        let poller = Poller::new(ApiClient::new(&config).expect("client"), config.poll_interval())
            .spawn(tx);
        let (_stop_tx, stop_rx) = mpsc::channel(1);

        let mut out = Vec::new();
        let _ = report_outcomes(outcomes, stop_rx, Some(1), &mut out)
            .await
            .expect("report");
        poller.shutdown().await;

        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("#1 degraded (1 in a row): Network Error"), "{text}");
        assert!(text.contains(&base), "{text}");
    }

    #[tokio::test]
    async fn stop_signal_ends_the_loop() {
        let (tx, outcomes) = mpsc::unbounded_channel();
        let (stop_tx, stop_rx) = mpsc::channel(1);
        stop_tx.send(()).await.expect("send stop");
        tx.send(RefreshOutcome::now(
            1,
            Err(FetchError::Other {
                message: "unused".into(),
            }),
        ))
        .expect("send outcome");

        let mut out = Vec::new();
        let controller = report_outcomes(outcomes, stop_rx, None, &mut out)
            .await
            .expect("report");

        assert!(out.is_empty());
        assert_eq!(controller.status(), DisplayStatus::Initializing);
    }

    #[tokio::test]
    async fn closed_outcome_channel_ends_the_loop() {
        let (tx, outcomes) = mpsc::unbounded_channel::<RefreshOutcome>();
        drop(tx);
        let (_stop_tx, stop_rx) = mpsc::channel(1);

        let mut out = Vec::new();
        let _ = report_outcomes(outcomes, stop_rx, None, &mut out)
            .await
            .expect("report");
        assert!(out.is_empty());
    }
}
