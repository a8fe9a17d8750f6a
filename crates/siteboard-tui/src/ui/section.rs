//! One report category: bordered block, count badge, and its cards.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use siteboard_common::types::{LogEntry, LogKind};

use super::card::CardView;

/// Renders the section for `kind`, starting at card `scroll`.
pub fn render_section(
    frame: &mut Frame,
    area: Rect,
    kind: LogKind,
    entries: &[LogEntry],
    scroll: usize,
    focused: bool,
) {
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let mut block = Block::bordered()
        .title(section_title(kind, entries.len()))
        .border_style(border);

    if entries.is_empty() {
        let empty = Line::styled(
            kind.empty_message(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
        .centered();
        frame.render_widget(Paragraph::new(vec![Line::default(), empty]).block(block), area);
        return;
    }

    if scroll > 0 {
        block = block.title_bottom(Line::styled(
            format!(" ↑ {scroll} newer "),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let lines: Vec<Line<'static>> = entries
        .iter()
        .skip(scroll)
        .flat_map(|entry| CardView::from_entry(entry).to_lines())
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

/// Block title: category name followed by the count badge.
fn section_title(kind: LogKind, count: usize) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {} ", kind.section_title()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {count} "),
            Style::default().fg(Color::Black).bg(Color::Gray),
        ),
    ])
}
