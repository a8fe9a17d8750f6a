//! Terminal lifecycle and the main event loop.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use siteboard_client::ApiClient;
use siteboard_common::config::DashboardConfig;
use siteboard_monitor::{Poller, PollerHandle, RefreshOutcome};
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::app::{App, AppAction};
use crate::error::TuiError;
use crate::event::{self, TerminalEvent};
use crate::ui;

/// How long the loop waits for input before redrawing.
const TICK_RATE: Duration = Duration::from_millis(250);

/// Raw-mode, alternate-screen terminal that is restored on drop.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            tracing::warn!(error = %e, "failed to disable raw mode");
        }
        if let Err(e) = execute!(self.terminal.backend_mut(), LeaveAlternateScreen) {
            tracing::warn!(error = %e, "failed to leave alternate screen");
        }
        if let Err(e) = self.terminal.show_cursor() {
            tracing::warn!(error = %e, "failed to restore cursor");
        }
    }
}

/// Runs the interactive dashboard until the user quits.
///
/// The poll task is spawned on `runtime`; the event loop itself blocks the
/// calling thread. The poller is cancelled before this returns.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or the terminal
/// cannot be set up, drawn to, or read from.
pub fn run(config: &DashboardConfig, runtime: &Handle) -> Result<(), TuiError> {
    let client = ApiClient::new(config)?;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let poller = {
        let _entered = runtime.enter();
        Poller::new(client, config.poll_interval()).spawn(tx)
    };

    let mut app = App::new(config);
    let result = TerminalGuard::enter()
        .map_err(TuiError::from)
        .and_then(|mut guard| event_loop(&mut guard.terminal, &mut app, &mut rx, &poller));

    poller.cancel();
    tracing::info!("dashboard closed");
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    outcomes: &mut mpsc::UnboundedReceiver<RefreshOutcome>,
    poller: &PollerHandle,
) -> Result<(), TuiError> {
    while app.running {
        while let Ok(outcome) = outcomes.try_recv() {
            app.apply(outcome);
        }
        app.refreshing = poller.is_refreshing();

        let _ = terminal.draw(|frame| ui::render(frame, app))?;

        match event::next(TICK_RATE)? {
            TerminalEvent::Key(key) => match app.handle_key(key) {
                Some(AppAction::Quit) => app.quit(),
                Some(AppAction::Refresh) => {
                    if !poller.refresh_now() {
                        tracing::debug!("refresh already in progress");
                    }
                }
                None => {}
            },
            TerminalEvent::Resize(..) | TerminalEvent::Tick => {}
        }
    }
    Ok(())
}
