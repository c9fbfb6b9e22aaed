//! Settings screen
//!
//! Three rows: the notifications switch (screen-local), the dark mode
//! switch (the global theme flag), and the static currency display.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::tui::app::{App, SettingsRow};

/// Render the settings screen
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let palette = app.palette();

    let block = Block::default()
        .title(" Settings ")
        .title_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));

    let items: Vec<ListItem> = SettingsRow::ALL
        .iter()
        .map(|row| {
            let value = match row {
                SettingsRow::Notifications => switch_span(app, app.notifications_enabled),
                SettingsRow::DarkMode => switch_span(app, app.theme.is_dark()),
                SettingsRow::Currency => Span::styled(
                    format!("{} USD", app.settings.currency_symbol),
                    Style::default().fg(palette.muted),
                ),
            };

            let line = Line::from(vec![
                Span::styled(
                    format!("{:<24}", row.label()),
                    Style::default().fg(palette.fg),
                ),
                value,
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(palette.card_bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.selected_settings_index));

    frame.render_stateful_widget(list, area, &mut state);
}

/// Render an on/off switch value
fn switch_span(app: &App, on: bool) -> Span<'static> {
    let palette = app.palette();
    if on {
        Span::styled(
            "[■ on ]",
            Style::default().fg(palette.accent),
        )
    } else {
        Span::styled("[□ off]", Style::default().fg(palette.muted))
    }
}
