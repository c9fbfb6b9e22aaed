//! Drawer overlay
//!
//! Account-holder header plus the four destinations. Rendered over the
//! content area when open; Enter navigates, Esc closes.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::ledger::seed;
use crate::tui::app::{App, Destination};
use crate::tui::layout::drawer_rect;

/// Render the drawer
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let palette = app.palette();
    let area = drawer_rect(area);

    // Clear whatever the screen drew underneath
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.chrome_bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Profile header
            Constraint::Min(4),    // Destinations
        ])
        .split(inner);

    render_header(frame, app, chunks[0]);
    render_destinations(frame, app, chunks[1]);
}

/// Account-holder name and email
fn render_header(frame: &mut Frame, app: &mut App, area: Rect) {
    let palette = app.palette();

    let lines = vec![
        Line::from(Span::styled(
            seed::PROFILE.name,
            Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            seed::PROFILE.email,
            Style::default().fg(palette.muted),
        )),
    ];

    let header = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(palette.border)),
    );
    frame.render_widget(header, area);
}

/// The four destinations, active one tinted
fn render_destinations(frame: &mut Frame, app: &mut App, area: Rect) {
    let palette = app.palette();

    let items: Vec<ListItem> = Destination::ALL
        .iter()
        .map(|destination| {
            let is_active = app.active_screen == *destination;
            let style = if is_active {
                Style::default()
                    .fg(palette.chrome_active)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.chrome_inactive)
            };
            let indicator = if is_active { "▶" } else { " " };

            let line = Line::from(vec![
                Span::styled(format!("{} ", indicator), style),
                Span::styled(destination.title(), style),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(palette.bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.drawer_index));

    frame.render_stateful_widget(list, area, &mut state);
}
