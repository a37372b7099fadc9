//! Footer widget with keybinding hints

use crate::constants;
use crate::theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const HINTS: [(&str, &str); 2] = [("c", "Dismiss toast"), ("q", "Quit")];

/// Render the footer hint bar with branding on the right.
pub fn render(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Hints (left)
            Constraint::Length(18), // Branding (right)
        ])
        .split(area);

    let mut hint_spans = vec![Span::raw(" ")];
    for (i, (key, action)) in HINTS.iter().enumerate() {
        if i > 0 {
            hint_spans.push(Span::styled(
                " │ ",
                Style::default().fg(theme::BORDER_DEFAULT),
            ));
        }
        hint_spans.push(Span::styled(
            *key,
            Style::default()
                .fg(theme::ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ));
        hint_spans.push(Span::raw(" "));
        hint_spans.push(Span::styled(
            *action,
            Style::default().fg(theme::TEXT_SECONDARY),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(hint_spans)), chunks[0]);

    let branding = Line::from(vec![Span::styled(
        format!("{} v{} ", constants::APP_NAME, constants::APP_VERSION),
        Style::default().fg(theme::TEXT_SECONDARY),
    )]);
    frame.render_widget(
        Paragraph::new(branding).alignment(Alignment::Right),
        chunks[1],
    );
}
