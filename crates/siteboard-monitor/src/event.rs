//! Refresh cycle outcomes delivered from the poller to the controller.

use chrono::{DateTime, Local};
use siteboard_client::FetchError;
use siteboard_common::types::SiteSnapshot;

/// Result of one completed refresh cycle.
#[derive(Debug)]
pub struct RefreshOutcome {
    /// Sequence number of the cycle, starting at 1.
    pub cycle: u64,
    /// Wall-clock time the cycle completed.
    pub finished_at: DateTime<Local>,
    /// Fresh snapshot, or the classified failure.
    pub result: Result<SiteSnapshot, FetchError>,
}

impl RefreshOutcome {
    /// Wraps a cycle result, stamping it with the current time.
    #[must_use]
    pub fn now(cycle: u64, result: Result<SiteSnapshot, FetchError>) -> Self {
        Self {
            cycle,
            finished_at: Local::now(),
            result,
        }
    }

    /// Whether the cycle succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}
