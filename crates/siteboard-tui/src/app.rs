//! TUI application state.
//!
//! Wraps the refresh controller with the purely interactive state: which
//! section has focus and how far each section is scrolled.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use siteboard_common::config::DashboardConfig;
use siteboard_common::types::LogKind;
use siteboard_monitor::{RefreshController, RefreshOutcome};

/// Something the event loop must do in response to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Leave the dashboard.
    Quit,
    /// Start a refresh cycle now.
    Refresh,
}

/// Root application state for the TUI.
#[derive(Debug)]
pub struct App {
    /// Whether the app should continue running.
    pub running: bool,
    /// Section receiving scroll keys.
    pub focus: LogKind,
    /// Whether a refresh cycle is in flight.
    pub refreshing: bool,
    scroll: [usize; 3],
    controller: RefreshController,
    base_endpoint: String,
    poll_interval: Duration,
}

impl App {
    /// Creates a new application state for the given configuration.
    #[must_use]
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            running: true,
            focus: LogKind::Hazard,
            refreshing: false,
            scroll: [0; 3],
            controller: RefreshController::new(),
            base_endpoint: config.base_endpoint().to_owned(),
            poll_interval: config.poll_interval(),
        }
    }

    /// Signals the app to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Refresh state and collections.
    #[must_use]
    pub const fn controller(&self) -> &RefreshController {
        &self.controller
    }

    /// Base endpoint shown in the status bar.
    #[must_use]
    pub fn base_endpoint(&self) -> &str {
        &self.base_endpoint
    }

    /// Interval between refresh cycles.
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Index of the first card shown in the section for `kind`.
    #[must_use]
    pub const fn scroll(&self, kind: LogKind) -> usize {
        self.scroll[slot(kind)]
    }

    /// Applies a refresh outcome and keeps scroll offsets within the new
    /// collection sizes.
    pub fn apply(&mut self, outcome: RefreshOutcome) {
        let status = self.controller.apply(outcome);
        tracing::debug!(%status, "refresh applied");
        for kind in LogKind::ALL {
            let max = self.controller.count(kind).saturating_sub(1);
            let offset = &mut self.scroll[slot(kind)];
            *offset = (*offset).min(max);
        }
    }

    /// Maps a key press to a state change or an action for the event loop.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<AppAction> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(AppAction::Quit)
            }
            KeyCode::Char('q') | KeyCode::Esc => Some(AppAction::Quit),
            KeyCode::Char('r') => Some(AppAction::Refresh),
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
                self.focus = next_kind(self.focus);
                None
            }
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
                self.focus = prev_kind(self.focus);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_by(1);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_by(-1);
                None
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.scroll[slot(self.focus)] = 0;
                None
            }
            _ => None,
        }
    }

    fn scroll_by(&mut self, delta: isize) {
        let max = self.controller.count(self.focus).saturating_sub(1);
        let offset = &mut self.scroll[slot(self.focus)];
        *offset = offset.saturating_add_signed(delta).min(max);
    }
}

const fn slot(kind: LogKind) -> usize {
    match kind {
        LogKind::Hazard => 0,
        LogKind::Attendance => 1,
        LogKind::Delivery => 2,
    }
}

const fn next_kind(kind: LogKind) -> LogKind {
    match kind {
        LogKind::Hazard => LogKind::Attendance,
        LogKind::Attendance => LogKind::Delivery,
        LogKind::Delivery => LogKind::Hazard,
    }
}

const fn prev_kind(kind: LogKind) -> LogKind {
    match kind {
        LogKind::Hazard => LogKind::Delivery,
        LogKind::Attendance => LogKind::Hazard,
        LogKind::Delivery => LogKind::Attendance,
    }
}

#[cfg(test)]
mod tests {
    use siteboard_common::types::{HazardEntry, SiteSnapshot};
    use siteboard_monitor::DisplayStatus;

    use super::*;

    fn app() -> App {
        App::new(&DashboardConfig::new("http://localhost:5000").expect("valid"))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn with_hazards(n: usize) -> RefreshOutcome {
        RefreshOutcome::now(
            1,
            Ok(SiteSnapshot::from_server_order(
                vec![HazardEntry::default(); n],
                Vec::new(),
                Vec::new(),
            )),
        )
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Some(AppAction::Quit));
        assert_eq!(app.handle_key(key(KeyCode::Esc)), Some(AppAction::Quit));
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(AppAction::Quit)
        );
    }

    #[test]
    fn refresh_key() {
        let mut app = app();
        assert_eq!(app.handle_key(key(KeyCode::Char('r'))), Some(AppAction::Refresh));
    }

    #[test]
    fn focus_cycles_through_sections() {
        let mut app = app();
        assert_eq!(app.focus, LogKind::Hazard);
        let _ = app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus, LogKind::Attendance);
        let _ = app.handle_key(key(KeyCode::Tab));
        let _ = app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus, LogKind::Hazard);
        let _ = app.handle_key(key(KeyCode::Left));
        assert_eq!(app.focus, LogKind::Delivery);
    }

    #[test]
    fn scroll_is_clamped_to_entries() {
        let mut app = app();
        app.apply(with_hazards(3));
        for _ in 0..10 {
            let _ = app.handle_key(key(KeyCode::Down));
        }
        assert_eq!(app.scroll(LogKind::Hazard), 2);
        let _ = app.handle_key(key(KeyCode::Up));
        assert_eq!(app.scroll(LogKind::Hazard), 1);
        let _ = app.handle_key(key(KeyCode::Home));
        assert_eq!(app.scroll(LogKind::Hazard), 0);
    }

    #[test]
    fn shrinking_collection_pulls_scroll_back() {
        let mut app = app();
        app.apply(with_hazards(5));
        for _ in 0..4 {
            let _ = app.handle_key(key(KeyCode::Down));
        }
        app.apply(with_hazards(2));
        assert_eq!(app.scroll(LogKind::Hazard), 1);
        assert_eq!(app.controller().status(), DisplayStatus::Ready);
    }

    #[test]
    fn status_bar_fields_come_from_config() {
        let app = app();
        assert_eq!(app.base_endpoint(), "http://localhost:5000");
        assert_eq!(app.poll_interval(), Duration::from_secs(15));
        assert!(app.running);
    }
}
