//! Status bar view
//!
//! Shows the transient status message (if any) and key hints for the
//! current context.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, Destination};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let palette = app.palette();

    let mut spans = vec![];

    if let Some(ref message) = app.status_message {
        spans.push(Span::styled(
            format!(" {}", message),
            Style::default().fg(palette.accent),
        ));
        spans.push(Span::raw(" │ "));
    } else {
        spans.push(Span::raw(" "));
    }

    // Context hints
    let hints = if app.action_modal.is_open() {
        "Esc:Close  s/r/u:Switch action"
    } else if app.drawer_open {
        "j/k:Move  Enter:Go  Esc:Close"
    } else {
        match app.active_screen {
            Destination::Home => "s:Send  r:Receive  u:Top Up  m:Menu  t:Theme  q:Quit",
            Destination::Transactions => "j/k:Move  m:Menu  t:Theme  q:Quit",
            Destination::Settings => "j/k:Move  Enter:Toggle  m:Menu  q:Quit",
            Destination::About => "m:Menu  1/2/3:Tabs  t:Theme  q:Quit",
        }
    };
    spans.push(Span::styled(hints, Style::default().fg(palette.muted)));

    // Theme indicator, right-aligned
    let theme_label = if app.theme.is_dark() { " dark " } else { " light " };
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(theme_label.len())
        .max(1);
    spans.push(Span::raw(" ".repeat(padding_len)));
    spans.push(Span::styled(
        theme_label,
        Style::default().fg(palette.bg).bg(palette.chrome_inactive),
    ));

    let paragraph = Paragraph::new(Line::from(spans));
    frame.render_widget(paragraph, area);
}
