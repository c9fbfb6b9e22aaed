//! Action overlay
//!
//! The Send / Receive / Top Up explanatory overlay opened from the home
//! screen buttons.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Render the action overlay
pub fn render(frame: &mut Frame, app: &mut App) {
    // Only called while open; bail quietly otherwise
    let Some(kind) = app.action_modal.kind() else {
        return;
    };
    let palette = app.palette();

    let area = centered_rect_fixed(52, 9, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} Money ", kind.title()))
        .title_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.card_bg));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            kind.description(),
            Style::default().fg(palette.fg),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Esc]", Style::default().fg(palette.accent)),
            Span::styled(" Close", Style::default().fg(palette.muted)),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
