//! Home screen
//!
//! Greeting, balance card, income/expense summary, and the three action
//! buttons. The summary totals are recomputed from the ledger on every
//! render.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ledger::seed;
use crate::tui::app::App;
use crate::tui::layout::HomeLayout;

/// Render the home screen
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = HomeLayout::new(area);

    render_greeting(frame, app, layout.greeting);
    render_balance_card(frame, app, layout.balance);
    render_summary_row(frame, app, layout.summary);
    render_actions(frame, app, layout.actions);
}

/// Greeting and subtitle
fn render_greeting(frame: &mut Frame, app: &mut App, area: Rect) {
    let palette = app.palette();

    let lines = vec![
        Line::from(Span::styled(
            format!(" Hi {} 👋", app.settings.greeting_name),
            Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " Here's your current balance",
            Style::default().fg(palette.muted),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

/// Balance card with the hard-coded display balance
fn render_balance_card(frame: &mut Frame, app: &mut App, area: Rect) {
    let palette = app.palette();

    let block = Block::default()
        .title(" Balance ")
        .title_style(Style::default().fg(palette.muted))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.card_bg));

    let balance = Paragraph::new(Line::from(Span::styled(
        seed::BALANCE.format_grouped(&app.settings.currency_symbol),
        Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
    )))
    .block(block);

    frame.render_widget(balance, area);
}

/// Income and expenses summary boxes, side by side
fn render_summary_row(frame: &mut Frame, app: &mut App, area: Rect) {
    let palette = app.palette();
    let summary = app.summary();
    let symbol = &app.settings.currency_symbol;

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let income_block = Block::default()
        .title(" Income ")
        .title_style(Style::default().fg(palette.income))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.income));
    let income = Paragraph::new(Line::from(Span::styled(
        summary.income_total.format_with_symbol(symbol),
        Style::default()
            .fg(palette.income)
            .add_modifier(Modifier::BOLD),
    )))
    .block(income_block);
    frame.render_widget(income, halves[0]);

    let expense_block = Block::default()
        .title(" Expenses ")
        .title_style(Style::default().fg(palette.expense))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.expense));
    let expenses = Paragraph::new(Line::from(Span::styled(
        summary.expense_total.format_with_symbol(symbol),
        Style::default()
            .fg(palette.expense)
            .add_modifier(Modifier::BOLD),
    )))
    .block(expense_block);
    frame.render_widget(expenses, halves[1]);
}

/// The Send / Receive / Top Up button row
fn render_actions(frame: &mut Frame, app: &mut App, area: Rect) {
    let palette = app.palette();

    let button = |key: &'static str, label: &'static str| {
        Span::styled(
            format!(" [{}] {} ", key, label),
            Style::default()
                .fg(ratatui::style::Color::White)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
    };

    let line = Line::from(vec![
        Span::raw(" "),
        button("s", "Send"),
        Span::raw("  "),
        button("r", "Receive"),
        Span::raw("  "),
        button("u", "Top Up"),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
