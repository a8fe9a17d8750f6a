//! # siteboard-monitor
//!
//! Keeps the dashboard's view of the site up to date.
//!
//! - [`Poller`](poller::Poller): scheduled task that runs one refresh cycle
//!   immediately and then one per interval, never overlapping cycles, until
//!   cancelled.
//! - [`RefreshController`](controller::RefreshController): owns the three
//!   collections plus the loading and error state, and applies each
//!   [`RefreshOutcome`](event::RefreshOutcome) the poller emits.

pub mod controller;
pub mod event;
pub mod poller;

pub use controller::{DisplayStatus, RefreshController};
pub use event::RefreshOutcome;
pub use poller::{Poller, PollerHandle};
