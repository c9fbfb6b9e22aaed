//! TUI Views module
//!
//! Contains the four screens (home, transactions, settings, about), the tab
//! bar chrome, the drawer, and the status bar. Every renderer reads the
//! palette from the app's theme controller each frame, so a theme change is
//! visible on the next draw.

pub mod about;
pub mod drawer;
pub mod home;
pub mod settings;
pub mod status_bar;
pub mod tab_bar;
pub mod transactions;

use ratatui::{
    style::Style,
    widgets::Block,
    Frame,
};

use super::app::{App, Destination};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let palette = app.palette();

    // Paint the themed background before anything else
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg)),
        frame.area(),
    );

    let layout = AppLayout::new(frame.area());

    // Chrome
    tab_bar::render(frame, app, layout.tab_bar);

    // Active screen
    match app.active_screen {
        Destination::Home => home::render(frame, app, layout.content),
        Destination::Transactions => transactions::render(frame, app, layout.content),
        Destination::Settings => settings::render(frame, app, layout.content),
        Destination::About => about::render(frame, app, layout.content),
    }

    // Status bar
    status_bar::render(frame, app, layout.status_bar);

    // Overlays, drawer below the modal
    if app.drawer_open {
        drawer::render(frame, app, layout.content);
    }
    if app.action_modal.is_open() {
        dialogs::action::render(frame, app);
    }
}
