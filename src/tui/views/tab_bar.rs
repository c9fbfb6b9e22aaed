//! Tab bar chrome
//!
//! Home / Transactions / Settings tabs. About is reachable through the
//! drawer only, so when it is active no tab is highlighted.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::Tabs,
    Frame,
};

use crate::tui::app::{App, Destination};

/// Render the tab bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let palette = app.palette();

    let titles: Vec<Line> = Destination::TABS
        .iter()
        .map(|d| Line::from(format!(" {} ", d.title())))
        .collect();

    let base_style = Style::default()
        .fg(palette.chrome_inactive)
        .bg(palette.chrome_bg);

    let highlight_style = match app.active_screen.tab_index() {
        Some(_) => Style::default()
            .fg(palette.chrome_active)
            .bg(palette.chrome_bg)
            .add_modifier(Modifier::BOLD),
        // About active: nothing highlighted
        None => base_style,
    };

    let tabs = Tabs::new(titles)
        .style(base_style)
        .highlight_style(highlight_style)
        .select(app.active_screen.tab_index().unwrap_or(0))
        .divider("│");

    frame.render_widget(tabs, area);
}
