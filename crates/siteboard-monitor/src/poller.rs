//! Scheduled refresh task.
//!
//! The poller runs one cycle as soon as it starts, then one per interval.
//! A cycle is awaited inside the loop, so cycles never overlap. Ticks that
//! come due while a cycle is still running are skipped rather than queued:
//! after an overrun the next cycle starts one full interval after the slow
//! one finished.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use siteboard_client::SnapshotSource;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::event::RefreshOutcome;

/// Periodic refresh task over a [`SnapshotSource`].
#[derive(Debug)]
pub struct Poller<S> {
    source: Arc<S>,
    interval: Duration,
}

impl<S: SnapshotSource> Poller<S> {
    /// Creates a poller that refreshes from `source` every `interval`.
    pub fn new(source: S, interval: Duration) -> Self {
        Self {
            source: Arc::new(source),
            interval,
        }
    }

    /// Spawns the poll loop on the current tokio runtime.
    ///
    /// Each completed cycle is sent on `events`. The loop ends when the
    /// returned handle is cancelled or the receiver is dropped.
    pub fn spawn(self, events: mpsc::UnboundedSender<RefreshOutcome>) -> PollerHandle {
        let cancel = CancellationToken::new();
        let in_flight = Arc::new(AtomicBool::new(false));
        let (trigger_tx, trigger_rx) = mpsc::channel(1);

        let task = tokio::spawn(run_loop(
            self.source,
            self.interval,
            events,
            trigger_rx,
            cancel.clone(),
            Arc::clone(&in_flight),
        ));

        PollerHandle {
            cancel,
            trigger: trigger_tx,
            in_flight,
            task,
        }
    }
}

/// Control handle for a spawned [`Poller`].
#[derive(Debug)]
pub struct PollerHandle {
    cancel: CancellationToken,
    trigger: mpsc::Sender<()>,
    in_flight: Arc<AtomicBool>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Requests an immediate cycle.
    ///
    /// Returns `false` if a cycle is already running or a request is
    /// already pending; such requests are dropped.
    pub fn refresh_now(&self) -> bool {
        if self.in_flight.load(Ordering::Acquire) {
            return false;
        }
        self.trigger.try_send(()).is_ok()
    }

    /// Whether a cycle is currently running.
    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Stops the timer. A cycle in flight is abandoned.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Cancels the loop and waits for the task to finish.
    pub async fn shutdown(self) {
        self.cancel.cancel();
        if let Err(e) = self.task.await {
            tracing::warn!(error = %e, "poller task ended abnormally");
        }
    }
}

async fn run_loop<S: SnapshotSource>(
    source: Arc<S>,
    interval: Duration,
    events: mpsc::UnboundedSender<RefreshOutcome>,
    mut trigger: mpsc::Receiver<()>,
    cancel: CancellationToken,
    in_flight: Arc<AtomicBool>,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut cycle: u64 = 0;
    tracing::info!(interval_secs = interval.as_secs(), "poller started");

    loop {
        let manual = tokio::select! {
            biased;
            () = cancel.cancelled() => break,
            _ = ticker.tick() => false,
            Some(()) = trigger.recv() => true,
        };
        if manual {
            ticker.reset();
        }

        cycle += 1;
        in_flight.store(true, Ordering::Release);
        let started = Instant::now();
        tracing::debug!(cycle, manual, "refresh started");

        let result = tokio::select! {
            biased;
            () = cancel.cancelled() => {
                in_flight.store(false, Ordering::Release);
                break;
            }
            result = source.fetch_snapshot() => result,
        };
        while trigger.try_recv().is_ok() {}
        in_flight.store(false, Ordering::Release);

        let elapsed = started.elapsed();
        match &result {
            Ok(snapshot) => tracing::info!(
                cycle,
                hazards = snapshot.hazards.len(),
                attendance = snapshot.attendance.len(),
                deliveries = snapshot.deliveries.len(),
                elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
                "refresh succeeded"
            ),
            Err(e) => tracing::warn!(cycle, kind = %e.kind(), error = %e, "refresh failed"),
        }
        if elapsed >= interval {
            ticker.reset();
            tracing::debug!(cycle, "refresh overran the poll interval; skipping missed ticks");
        }

        if events.send(RefreshOutcome::now(cycle, result)).is_err() {
            tracing::debug!("outcome receiver dropped");
            break;
        }
    }

    tracing::info!(cycles = cycle, "poller stopped");
}
