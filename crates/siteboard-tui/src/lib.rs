//! # siteboard-tui
//!
//! Interactive terminal dashboard for site field reports.
//!
//! Built with `ratatui` and `crossterm`, providing:
//! - One section per report category with a count badge and newest-first cards.
//! - A loading indicator until the first refresh completes.
//! - An error panel in place of content while the latest refresh has failed.
//! - A status bar with the endpoint, poll interval, and last update time.

pub mod app;
pub mod error;
pub mod event;
pub mod terminal;
pub mod ui;

pub use error::TuiError;
pub use terminal::run;
