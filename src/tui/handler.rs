//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state. Overlay state wins: an open action modal sees keys
//! first, then an open drawer, then the active screen.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::app::{ActionKind, App, Destination};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(_mouse) => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Transient messages live until the next key press
    app.clear_status();

    if app.action_modal.is_open() {
        return handle_modal_key(app, key);
    }
    if app.drawer_open {
        return handle_drawer_key(app, key);
    }
    handle_screen_key(app, key)
}

/// Handle keys while the action overlay is up
fn handle_modal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.action_modal.close(),
        // Switching actions while open replaces the kind (last-write-wins)
        KeyCode::Char('s') => app.action_modal.open(ActionKind::Send),
        KeyCode::Char('r') => app.action_modal.open(ActionKind::Receive),
        KeyCode::Char('u') => app.action_modal.open(ActionKind::TopUp),
        _ => {}
    }
    Ok(())
}

/// Handle keys while the drawer is open
fn handle_drawer_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.drawer_move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.drawer_move_up(),
        KeyCode::Enter => app.drawer_activate(),
        KeyCode::Esc | KeyCode::Char('m') => app.close_drawer(),
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
    Ok(())
}

/// Handle keys in the normal (no overlay) state
fn handle_screen_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Global keys
    match key.code {
        KeyCode::Char('q') => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('m') => {
            app.open_drawer();
            return Ok(());
        }
        // Quick theme toggle, usable from any screen
        KeyCode::Char('t') => {
            app.theme.toggle();
            let label = if app.theme.is_dark() { "dark" } else { "light" };
            app.set_status(format!("Theme: {}", label));
            return Ok(());
        }
        KeyCode::Tab => {
            app.next_tab();
            return Ok(());
        }
        KeyCode::Char('1') => {
            app.navigate(Destination::Home);
            return Ok(());
        }
        KeyCode::Char('2') => {
            app.navigate(Destination::Transactions);
            return Ok(());
        }
        KeyCode::Char('3') => {
            app.navigate(Destination::Settings);
            return Ok(());
        }
        _ => {}
    }

    // Screen-specific keys
    match app.active_screen {
        Destination::Home => handle_home_key(app, key),
        Destination::Transactions => handle_transactions_key(app, key),
        Destination::Settings => handle_settings_key(app, key),
        Destination::About => Ok(()),
    }
}

/// Home screen: the three action buttons
fn handle_home_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('s') => app.action_modal.open(ActionKind::Send),
        KeyCode::Char('r') => app.action_modal.open(ActionKind::Receive),
        KeyCode::Char('u') => app.action_modal.open(ActionKind::TopUp),
        _ => {}
    }
    Ok(())
}

/// Transactions screen: list navigation
fn handle_transactions_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.transactions_move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.transactions_move_up(),
        _ => {}
    }
    Ok(())
}

/// Settings screen: row navigation and switch activation
fn handle_settings_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.settings_move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.settings_move_up(),
        KeyCode::Enter | KeyCode::Char(' ') => app.settings_activate(),
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::ledger::seed;
    use crate::theme::ThemeController;
    use crate::tui::app::ActionModal;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn test_app(settings: &Settings) -> App<'_> {
        App::new(seed::transactions(), settings, ThemeController::default())
    }

    #[test]
    fn test_quit_key() {
        let settings = Settings::default();
        let mut app = test_app(&settings);
        handle_event(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_action_keys_open_modal_from_home() {
        let settings = Settings::default();
        let mut app = test_app(&settings);

        handle_event(&mut app, key(KeyCode::Char('u'))).unwrap();
        assert_eq!(app.action_modal, ActionModal::Open(ActionKind::TopUp));

        handle_event(&mut app, key(KeyCode::Esc)).unwrap();
        assert_eq!(app.action_modal, ActionModal::Closed);
    }

    #[test]
    fn test_action_keys_do_nothing_off_home() {
        let settings = Settings::default();
        let mut app = test_app(&settings);

        app.navigate(Destination::Transactions);
        handle_event(&mut app, key(KeyCode::Char('s'))).unwrap();
        assert_eq!(app.action_modal, ActionModal::Closed);
    }

    #[test]
    fn test_modal_swallows_navigation_keys() {
        let settings = Settings::default();
        let mut app = test_app(&settings);

        handle_event(&mut app, key(KeyCode::Char('s'))).unwrap();
        handle_event(&mut app, key(KeyCode::Char('2'))).unwrap();
        // Still on home, still open
        assert_eq!(app.active_screen, Destination::Home);
        assert!(app.action_modal.is_open());
    }

    #[test]
    fn test_modal_last_write_wins_via_keys() {
        let settings = Settings::default();
        let mut app = test_app(&settings);

        handle_event(&mut app, key(KeyCode::Char('s'))).unwrap();
        handle_event(&mut app, key(KeyCode::Char('r'))).unwrap();
        assert_eq!(app.action_modal, ActionModal::Open(ActionKind::Receive));
    }

    #[test]
    fn test_number_keys_switch_tabs() {
        let settings = Settings::default();
        let mut app = test_app(&settings);

        handle_event(&mut app, key(KeyCode::Char('3'))).unwrap();
        assert_eq!(app.active_screen, Destination::Settings);
        handle_event(&mut app, key(KeyCode::Char('1'))).unwrap();
        assert_eq!(app.active_screen, Destination::Home);
    }

    #[test]
    fn test_drawer_flow() {
        let settings = Settings::default();
        let mut app = test_app(&settings);

        handle_event(&mut app, key(KeyCode::Char('m'))).unwrap();
        assert!(app.drawer_open);

        // Navigate to About (last drawer entry)
        for _ in 0..3 {
            handle_event(&mut app, key(KeyCode::Char('j'))).unwrap();
        }
        handle_event(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.active_screen, Destination::About);
        assert!(!app.drawer_open);
    }

    #[test]
    fn test_theme_toggle_key_works_everywhere() {
        let settings = Settings::default();
        let mut app = test_app(&settings);

        handle_event(&mut app, key(KeyCode::Char('t'))).unwrap();
        assert!(app.theme.is_dark());

        app.navigate(Destination::About);
        handle_event(&mut app, key(KeyCode::Char('t'))).unwrap();
        assert!(!app.theme.is_dark());
    }

    #[test]
    fn test_settings_space_toggles_dark_mode_row() {
        let settings = Settings::default();
        let mut app = test_app(&settings);

        handle_event(&mut app, key(KeyCode::Char('3'))).unwrap();
        handle_event(&mut app, key(KeyCode::Char('j'))).unwrap();
        handle_event(&mut app, key(KeyCode::Char(' '))).unwrap();
        assert!(app.theme.is_dark());
    }
}
