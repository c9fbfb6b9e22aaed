//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events:
//! the theme controller, the active destination, the drawer, the home
//! screen's action modal, and per-screen selections. Screens never mutate
//! each other's state; the only cross-screen value is the theme flag.

use tracing::debug;

use crate::config::Settings;
use crate::ledger::{summarize, LedgerSummary};
use crate::models::Transaction;
use crate::theme::{Palette, ThemeController};

/// A named, navigable screen
///
/// The set of destinations is closed: navigation to an undefined name is
/// unrepresentable rather than a runtime error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Destination {
    #[default]
    Home,
    Transactions,
    Settings,
    About,
}

impl Destination {
    /// The three destinations shown in the tab bar (About is drawer-only)
    pub const TABS: [Destination; 3] = [
        Destination::Home,
        Destination::Transactions,
        Destination::Settings,
    ];

    /// Every destination, in drawer order
    pub const ALL: [Destination; 4] = [
        Destination::Home,
        Destination::Transactions,
        Destination::Settings,
        Destination::About,
    ];

    /// Display title
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Transactions => "Transactions",
            Self::Settings => "Settings",
            Self::About => "About",
        }
    }

    /// Position in the tab bar, if this destination is a tab
    pub fn tab_index(&self) -> Option<usize> {
        Self::TABS.iter().position(|d| d == self)
    }
}

/// The action behind each home screen button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Send,
    Receive,
    TopUp,
}

impl ActionKind {
    /// Display title
    pub fn title(&self) -> &'static str {
        match self {
            Self::Send => "Send",
            Self::Receive => "Receive",
            Self::TopUp => "Top Up",
        }
    }

    /// Explanatory text shown in the overlay
    pub fn description(&self) -> &'static str {
        match self {
            Self::Send => "Send money securely to your contacts or bank accounts instantly.",
            Self::Receive => "Receive money from anyone using your unique account ID or QR code.",
            Self::TopUp => {
                "Add funds to your account using debit card, credit card or bank transfer."
            }
        }
    }
}

/// State machine for the home screen's action overlay
///
/// The transition methods are the only mutation entry points. Opening while
/// already open is last-write-wins: the new kind replaces the old and the
/// overlay stays up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionModal {
    #[default]
    Closed,
    Open(ActionKind),
}

impl ActionModal {
    /// `Closed -> Open(kind)`; `Open(_) -> Open(kind)`
    pub fn open(&mut self, kind: ActionKind) {
        debug!(kind = kind.title(), "action modal opened");
        *self = Self::Open(kind);
    }

    /// `Open(_) -> Closed`; closing an already-closed modal is a no-op
    pub fn close(&mut self) {
        debug!("action modal closed");
        *self = Self::Closed;
    }

    /// Whether the overlay is showing
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// The open action, if any
    pub fn kind(&self) -> Option<ActionKind> {
        match self {
            Self::Open(kind) => Some(*kind),
            Self::Closed => None,
        }
    }
}

/// Rows on the settings screen, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    Notifications,
    DarkMode,
    Currency,
}

impl SettingsRow {
    pub const ALL: [SettingsRow; 3] = [
        SettingsRow::Notifications,
        SettingsRow::DarkMode,
        SettingsRow::Currency,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Notifications => "Enable Notifications",
            Self::DarkMode => "Dark Mode",
            Self::Currency => "Currency",
        }
    }
}

/// Main application state
pub struct App<'a> {
    /// The read-only seed ledger
    pub ledger: &'a [Transaction],

    /// Application settings
    pub settings: &'a Settings,

    /// The single authoritative theme flag
    pub theme: ThemeController,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active destination
    pub active_screen: Destination,

    /// Whether the drawer overlay is open
    pub drawer_open: bool,

    /// Highlighted entry in the drawer
    pub drawer_index: usize,

    /// Home screen action overlay state
    pub action_modal: ActionModal,

    /// Selected row in the transactions list (preserved across tab switches)
    pub selected_transaction_index: usize,

    /// Selected row on the settings screen
    pub selected_settings_index: usize,

    /// Settings-screen local switch, not persisted anywhere
    pub notifications_enabled: bool,

    /// Transient status message for the status bar
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(ledger: &'a [Transaction], settings: &'a Settings, theme: ThemeController) -> Self {
        Self {
            ledger,
            settings,
            theme,
            should_quit: false,
            active_screen: Destination::default(),
            drawer_open: false,
            drawer_index: 0,
            action_modal: ActionModal::default(),
            selected_transaction_index: 0,
            selected_settings_index: 0,
            notifications_enabled: true,
            status_message: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a transient status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Recompute the ledger summary; pure and uncached, runs per render
    pub fn summary(&self) -> LedgerSummary {
        summarize(self.ledger)
    }

    /// Palette for the current theme flag
    pub fn palette(&self) -> &'static Palette {
        self.theme.palette()
    }

    /// Navigate to a destination
    ///
    /// Per-screen state (list selections, the action modal) is preserved so
    /// a destination looks the same when switched away from and back.
    pub fn navigate(&mut self, destination: Destination) {
        debug!(to = destination.title(), "navigate");
        self.active_screen = destination;
        self.drawer_open = false;
    }

    /// Cycle to the next tab (Home -> Transactions -> Settings -> Home)
    pub fn next_tab(&mut self) {
        let next = match self.active_screen.tab_index() {
            Some(i) => Destination::TABS[(i + 1) % Destination::TABS.len()],
            // From About, Tab returns to the first tab
            None => Destination::Home,
        };
        self.navigate(next);
    }

    /// Open the drawer, highlighting the active destination
    pub fn open_drawer(&mut self) {
        self.drawer_open = true;
        self.drawer_index = Destination::ALL
            .iter()
            .position(|d| *d == self.active_screen)
            .unwrap_or(0);
    }

    /// Close the drawer without navigating
    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    /// Move the drawer highlight up
    pub fn drawer_move_up(&mut self) {
        if self.drawer_index > 0 {
            self.drawer_index -= 1;
        }
    }

    /// Move the drawer highlight down
    pub fn drawer_move_down(&mut self) {
        if self.drawer_index < Destination::ALL.len() - 1 {
            self.drawer_index += 1;
        }
    }

    /// Navigate to the highlighted drawer entry
    pub fn drawer_activate(&mut self) {
        self.navigate(Destination::ALL[self.drawer_index]);
    }

    /// Move the transactions selection up
    pub fn transactions_move_up(&mut self) {
        if self.selected_transaction_index > 0 {
            self.selected_transaction_index -= 1;
        }
    }

    /// Move the transactions selection down
    pub fn transactions_move_down(&mut self) {
        if self.selected_transaction_index < self.ledger.len().saturating_sub(1) {
            self.selected_transaction_index += 1;
        }
    }

    /// Move the settings selection up
    pub fn settings_move_up(&mut self) {
        if self.selected_settings_index > 0 {
            self.selected_settings_index -= 1;
        }
    }

    /// Move the settings selection down
    pub fn settings_move_down(&mut self) {
        if self.selected_settings_index < SettingsRow::ALL.len() - 1 {
            self.selected_settings_index += 1;
        }
    }

    /// Activate the selected settings row
    pub fn settings_activate(&mut self) {
        match SettingsRow::ALL[self.selected_settings_index] {
            SettingsRow::Notifications => {
                self.notifications_enabled = !self.notifications_enabled;
            }
            SettingsRow::DarkMode => self.theme.toggle(),
            // Currency is display-only
            SettingsRow::Currency => {}
        }
    }
}
