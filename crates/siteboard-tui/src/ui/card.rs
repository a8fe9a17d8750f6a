//! Card content for a single report entry.
//!
//! [`CardView`] is a pure function of the entry's fields, so the same card
//! text is used by the terminal dashboard and by plain-text output.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use siteboard_common::constants::{DESCRIPTION_FALLBACK, FIELD_FALLBACK, TIMESTAMP_FALLBACK};
use siteboard_common::types::{AttendanceEntry, DeliveryEntry, HazardEntry, LogEntry};

/// Visual tone of a card; selects its icon and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Hazard report.
    Hazard,
    /// Worker check-in.
    CheckIn,
    /// Worker check-out, or any non check-in action.
    CheckOut,
    /// Delivery confirmation.
    Delivery,
}

impl Tone {
    /// Accent color.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Hazard => Color::Red,
            Self::CheckIn => Color::Green,
            Self::CheckOut => Color::Yellow,
            Self::Delivery => Color::Magenta,
        }
    }

    /// Single-glyph icon.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Hazard => "⚠",
            Self::CheckIn => "▶",
            Self::CheckOut => "◀",
            Self::Delivery => "▣",
        }
    }
}

/// Display content of one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Card heading.
    pub title: &'static str,
    /// Icon and color selection.
    pub tone: Tone,
    /// Body lines, most prominent first.
    pub lines: Vec<String>,
}

impl CardView {
    /// Builds the card for an entry. Absent fields render as placeholders.
    #[must_use]
    pub fn from_entry(entry: &LogEntry) -> Self {
        let timestamp = entry.timestamp().unwrap_or(TIMESTAMP_FALLBACK);
        match entry {
            LogEntry::Hazard(hazard) => hazard_card(hazard, timestamp),
            LogEntry::Attendance(attendance) => attendance_card(attendance, timestamp),
            LogEntry::Delivery(delivery) => delivery_card(delivery, timestamp),
        }
    }

    /// Styled lines for the terminal: heading, indented body, blank spacer.
    #[must_use]
    pub fn to_lines(&self) -> Vec<Line<'static>> {
        let accent = Style::default().fg(self.tone.color());
        let mut lines = Vec::with_capacity(self.lines.len() + 2);
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", self.tone.icon()), accent),
            Span::styled(self.title, accent.add_modifier(Modifier::BOLD)),
        ]));
        for (i, text) in self.lines.iter().enumerate() {
            let style = if i == 0 {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            lines.push(Line::from(vec![
                Span::styled("│ ", accent),
                Span::styled(text.clone(), style),
            ]));
        }
        lines.push(Line::default());
        lines
    }
}

fn or_fallback(value: Option<&str>) -> &str {
    value.unwrap_or(FIELD_FALLBACK)
}

fn hazard_card(hazard: &HazardEntry, timestamp: &str) -> CardView {
    CardView {
        title: "Hazard Report",
        tone: Tone::Hazard,
        lines: vec![
            hazard
                .description
                .clone()
                .unwrap_or_else(|| DESCRIPTION_FALLBACK.to_owned()),
            format!("Location: {}", or_fallback(hazard.location.as_deref())),
            format!(
                "Reported by: {} - {timestamp}",
                or_fallback(hazard.reporter.as_deref())
            ),
        ],
    }
}

fn attendance_card(attendance: &AttendanceEntry, timestamp: &str) -> CardView {
    let (title, tone) = if attendance.is_check_in() {
        ("Worker Check-In", Tone::CheckIn)
    } else {
        ("Worker Check-Out", Tone::CheckOut)
    };
    let worker = attendance
        .worker_id
        .as_ref()
        .map_or_else(|| FIELD_FALLBACK.to_owned(), ToString::to_string);
    let action = attendance
        .action
        .as_ref()
        .map_or(FIELD_FALLBACK, |a| a.as_str());
    CardView {
        title,
        tone,
        lines: vec![
            format!("Worker: {worker}"),
            format!("Phone: {}", or_fallback(attendance.phone.as_deref())),
            format!("Action: {action} - {timestamp}"),
        ],
    }
}

fn delivery_card(delivery: &DeliveryEntry, timestamp: &str) -> CardView {
    CardView {
        title: "Delivery Confirmation",
        tone: Tone::Delivery,
        lines: vec![
            format!("Order/Material: {}", or_fallback(delivery.order_id.as_deref())),
            format!("Location: {}", or_fallback(delivery.location.as_deref())),
            format!("Details: {}", or_fallback(delivery.details.as_deref())),
            timestamp.to_owned(),
        ],
    }
}
