//! Plain-text output helpers for CLI commands.
//!
//! Cards use the same text as the terminal dashboard, so `snapshot` output
//! and the live view never disagree on placeholders or titles.

use std::fmt::Write;

use chrono::{DateTime, Local};
use siteboard_common::types::{LogKind, SiteSnapshot};
use siteboard_monitor::{DisplayStatus, RefreshController};
use siteboard_tui::ui::card::CardView;

/// Renders all three sections of a snapshot as indented text cards.
#[must_use]
pub fn render_snapshot(snapshot: &SiteSnapshot) -> String {
    let mut out = String::new();
    for kind in LogKind::ALL {
        let entries = snapshot.section(kind);
        let _ = writeln!(out, "== {} ({}) ==", kind.section_title(), entries.len());
        if entries.is_empty() {
            let _ = writeln!(out, "  {}", kind.empty_message());
        }
        for entry in entries {
            let card = CardView::from_entry(entry);
            let _ = writeln!(out, "  {} {}", card.tone.icon(), card.title);
            for line in &card.lines {
                let _ = writeln!(out, "    {line}");
            }
        }
        out.push('\n');
    }
    out
}

/// One line describing the controller after a cycle finished at `at`.
#[must_use]
pub fn summary_line(controller: &RefreshController, at: DateTime<Local>) -> String {
    let time = at.format("%H:%M:%S");
    let cycle = controller.last_cycle();
    match controller.status() {
        DisplayStatus::Degraded => format!(
            "[{time}] #{cycle} degraded ({} in a row): {}",
            controller.consecutive_failures(),
            controller.error().unwrap_or_default()
        ),
        status => format!(
            "[{time}] #{cycle} {status} hazards={} attendance={} deliveries={}",
            controller.count(LogKind::Hazard),
            controller.count(LogKind::Attendance),
            controller.count(LogKind::Delivery),
        ),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use siteboard_client::FetchError;
    use siteboard_common::types::{AttendanceEntry, HazardEntry};
    use siteboard_monitor::RefreshOutcome;

    use super::*;

    fn at() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 5, 1, 9, 30, 5)
            .single()
            .expect("unambiguous time")
    }

    fn snapshot() -> SiteSnapshot {
        SiteSnapshot::from_server_order(
            vec![
                HazardEntry {
                    description: Some("first".into()),
                    ..HazardEntry::default()
                },
                HazardEntry {
                    description: Some("second".into()),
                    ..HazardEntry::default()
                },
            ],
            vec![AttendanceEntry::default()],
            Vec::new(),
        )
    }

    #[test]
    fn render_snapshot_lists_sections_newest_first() {
        let text = render_snapshot(&snapshot());
        assert!(text.contains("== Hazard Reports (2) =="));
        assert!(text.contains("== Attendance Log (1) =="));
        assert!(text.contains("== Delivery Confirmations (0) =="));
        assert!(text.contains("No delivery logs yet."));
        assert!(text.find("second") < text.find("first"));
    }

    #[test]
    fn render_snapshot_uses_card_placeholders() {
        let text = render_snapshot(&snapshot());
        assert!(text.contains("Worker Check-Out"));
        assert!(text.contains("Timestamp missing"));
    }

    #[test]
    fn summary_line_reports_counts_when_ready() {
        let mut controller = RefreshController::new();
        let _ = controller.apply(RefreshOutcome::now(3, Ok(snapshot())));
        assert_eq!(
            summary_line(&controller, at()),
            "[09:30:05] #3 ready hazards=2 attendance=1 deliveries=0"
        );
    }

    #[test]
    fn summary_line_reports_error_when_degraded() {
        let mut controller = RefreshController::new();
        let _ = controller.apply(RefreshOutcome::now(
            1,
            Err(FetchError::Other {
                message: "bad body".into(),
            }),
        ));
        assert_eq!(
            summary_line(&controller, at()),
            "[09:30:05] #1 degraded (1 in a row): Failed to fetch data: bad body"
        );
    }
}
