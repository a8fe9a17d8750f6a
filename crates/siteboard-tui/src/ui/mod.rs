//! Rendering.

pub mod card;
pub mod dashboard;
pub mod section;

use ratatui::Frame;

use crate::app::App;

/// Draws the whole screen for the current application state.
pub fn render(frame: &mut Frame, app: &App) {
    dashboard::render_dashboard(frame, app);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use siteboard_client::FetchError;
    use siteboard_client::error::StatusCode;
    use siteboard_common::config::DashboardConfig;
    use siteboard_common::types::{DeliveryEntry, HazardEntry, SiteSnapshot};
    use siteboard_monitor::RefreshOutcome;

    use super::*;

    fn app() -> App {
        App::new(&DashboardConfig::new("http://site.local:5000").expect("valid"))
    }

    fn screen(app: &App, width: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, 40)).expect("terminal");
        let _ = terminal.draw(|frame| render(frame, app)).expect("draw");
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn hazard(description: &str) -> HazardEntry {
        HazardEntry {
            timestamp: Some("2024-05-01".into()),
            description: Some(description.into()),
            ..HazardEntry::default()
        }
    }

    fn loaded(app: &mut App) {
        let snapshot = SiteSnapshot::from_server_order(
            vec![hazard("oldest"), hazard("middle"), hazard("newest")],
            Vec::new(),
            vec![DeliveryEntry::default()],
        );
        app.apply(RefreshOutcome::now(1, Ok(snapshot)));
    }

    fn failed(app: &mut App, cycle: u64) {
        app.apply(RefreshOutcome::now(
            cycle,
            Err(FetchError::Status {
                endpoint: "http://site.local:5000/api/hazards".into(),
                status: StatusCode::INTERNAL_SERVER_ERROR,
            }),
        ));
    }

    #[test]
    fn shows_loading_before_first_refresh() {
        let text = screen(&app(), 150);
        assert!(text.contains("ConstructAgent Dashboard"));
        assert!(text.contains("Loading initial data"));
        assert!(!text.contains("Hazard Reports"));
    }

    #[test]
    fn shows_sections_with_count_badges() {
        let mut app = app();
        loaded(&mut app);
        let text = screen(&app, 150);

        assert!(!text.contains("Loading initial data"));
        assert!(text.contains(" Hazard Reports  3 "));
        assert!(text.contains(" Attendance Log  0 "));
        assert!(text.contains(" Delivery Confirmations  1 "));
        assert!(text.contains("No attendance logs yet."));
        assert!(text.contains("Order/Material: N/A"));
    }

    #[test]
    fn cards_are_newest_first() {
        let mut app = app();
        loaded(&mut app);
        let text = screen(&app, 150);

        let newest = text.find("newest").expect("newest shown");
        let middle = text.find("middle").expect("middle shown");
        let oldest = text.find("oldest").expect("oldest shown");
        assert!(newest < middle && middle < oldest);
    }

    #[test]
    fn error_replaces_content_and_loading_never_returns() {
        let mut app = app();
        loaded(&mut app);
        failed(&mut app, 2);
        let text = screen(&app, 150);

        assert!(text.contains("Backend error: 500 Internal Server Error"));
        assert!(!text.contains("Hazard Reports"));
        assert!(!text.contains("Loading initial data"));
    }

    #[test]
    fn recovery_restores_content() {
        let mut app = app();
        failed(&mut app, 1);
        loaded(&mut app);
        let text = screen(&app, 150);

        assert!(!text.contains("Backend error"));
        assert!(text.contains(" Hazard Reports  3 "));
    }

    #[test]
    fn narrow_terminal_stacks_sections() {
        let mut app = app();
        loaded(&mut app);
        let text = screen(&app, 60);

        let hazards = text.find("Hazard Reports").expect("hazards");
        let deliveries = text.find("Delivery Confirmations").expect("deliveries");
        assert!(hazards < deliveries);
    }

    #[test]
    fn status_bar_shows_endpoint_and_interval() {
        let text = screen(&app(), 150);
        assert!(text.contains("http://site.local:5000"));
        assert!(text.contains("every 15s"));
        assert!(text.contains("updated never"));
    }
}
