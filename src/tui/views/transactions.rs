//! Transactions screen
//!
//! Shows the full seed ledger as a selectable table: title, date, and the
//! signed amount colored by direction.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::tui::app::App;

/// Render the transactions screen
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let palette = app.palette();

    let block = Block::default()
        .title(" Recent Transactions ")
        .title_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));

    if app.ledger.is_empty() {
        let text = Paragraph::new("No transactions.")
            .block(block)
            .style(Style::default().fg(palette.muted));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Min(16),    // Title
        Constraint::Length(12), // Date
        Constraint::Length(12), // Amount
    ];

    let header = Row::new(vec![
        Cell::from("Title").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Date").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(palette.muted))
    .height(1);

    let symbol = &app.settings.currency_symbol;
    let rows: Vec<Row> = app
        .ledger
        .iter()
        .map(|txn| {
            let amount_color = if txn.is_expense() {
                palette.expense
            } else {
                palette.income
            };

            Row::new(vec![
                Cell::from(txn.title.clone()).style(Style::default().fg(palette.fg)),
                Cell::from(txn.date.format("%Y-%m-%d").to_string())
                    .style(Style::default().fg(palette.muted)),
                Cell::from(txn.amount.format_signed(symbol))
                    .style(Style::default().fg(amount_color)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(palette.card_bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_transaction_index));

    frame.render_stateful_widget(table, area, &mut state);
}
