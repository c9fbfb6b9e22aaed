//! About screen
//!
//! Static centered text, reachable only through the drawer.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the about screen
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let palette = app.palette();

    // Center the text block vertically
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(area);

    let lines = vec![
        Line::from(Span::styled(
            format!("Wallet TUI v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Made with ♥ by Nelson Chege",
            Style::default().fg(palette.muted),
        )),
        Line::from(Span::styled("© 2025", Style::default().fg(palette.muted))),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, chunks[1]);
}
