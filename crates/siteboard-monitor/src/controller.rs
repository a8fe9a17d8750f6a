//! Refresh controller state machine.
//!
//! ```text
//! Initializing --first success--> Ready <--success/failure--> Degraded
//!      \---------first failure-------------------------------^
//! ```
//!
//! Nothing ever returns to `Initializing`. Failures never clear the
//! collections: the last good snapshot stays in memory while the error is
//! displayed in its place.

use std::fmt;

use chrono::{DateTime, Local};
use siteboard_common::types::{LogKind, SiteSnapshot};

use crate::event::RefreshOutcome;

/// What the dashboard should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayStatus {
    /// No refresh has completed yet; show the loading indicator.
    Initializing,
    /// The latest refresh succeeded; show content.
    Ready,
    /// The latest refresh failed; show the error instead of content.
    Degraded,
}

impl fmt::Display for DisplayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initializing => write!(f, "initializing"),
            Self::Ready => write!(f, "ready"),
            Self::Degraded => write!(f, "degraded"),
        }
    }
}

/// Owns the displayed collections and the loading/error state.
#[derive(Debug)]
pub struct RefreshController {
    snapshot: SiteSnapshot,
    loading: bool,
    error: Option<String>,
    last_success: Option<DateTime<Local>>,
    last_cycle: u64,
    consecutive_failures: u32,
}

impl RefreshController {
    /// Creates a controller in the `Initializing` state with empty
    /// collections.
    #[must_use]
    pub fn new() -> Self {
        Self {
            snapshot: SiteSnapshot::default(),
            loading: true,
            error: None,
            last_success: None,
            last_cycle: 0,
            consecutive_failures: 0,
        }
    }

    /// Applies a completed cycle and returns the resulting status.
    ///
    /// On success all three collections are replaced and the error cleared.
    /// On failure the collections are left untouched and the classified
    /// message becomes the error.
    pub fn apply(&mut self, outcome: RefreshOutcome) -> DisplayStatus {
        let RefreshOutcome {
            cycle,
            finished_at,
            result,
        } = outcome;

        match result {
            Ok(snapshot) => {
                self.snapshot = snapshot;
                self.error = None;
                self.last_success = Some(finished_at);
                self.consecutive_failures = 0;
            }
            Err(err) => {
                self.error = Some(err.user_message());
                self.consecutive_failures = self.consecutive_failures.saturating_add(1);
            }
        }
        self.loading = false;
        self.last_cycle = cycle;
        self.status()
    }

    /// Current display status.
    #[must_use]
    pub const fn status(&self) -> DisplayStatus {
        if self.loading {
            DisplayStatus::Initializing
        } else if self.error.is_some() {
            DisplayStatus::Degraded
        } else {
            DisplayStatus::Ready
        }
    }

    /// Whether the loading indicator should be shown.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Error message of the latest failed cycle, if it has not been
    /// superseded by a success.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Collections in memory, including stale ones kept through failures.
    #[must_use]
    pub const fn snapshot(&self) -> &SiteSnapshot {
        &self.snapshot
    }

    /// Collections to display: `None` while loading or degraded.
    #[must_use]
    pub const fn visible(&self) -> Option<&SiteSnapshot> {
        match self.status() {
            DisplayStatus::Ready => Some(&self.snapshot),
            DisplayStatus::Initializing | DisplayStatus::Degraded => None,
        }
    }

    /// Count badge for one section.
    #[must_use]
    pub fn count(&self, kind: LogKind) -> usize {
        self.snapshot.count(kind)
    }

    /// When the last successful cycle completed.
    #[must_use]
    pub const fn last_success(&self) -> Option<DateTime<Local>> {
        self.last_success
    }

    /// Sequence number of the last applied cycle (0 before the first).
    #[must_use]
    pub const fn last_cycle(&self) -> u64 {
        self.last_cycle
    }

    /// Failures since the last success.
    #[must_use]
    pub const fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }
}

impl Default for RefreshController {
    fn default() -> Self {
        Self::new()
    }
}
