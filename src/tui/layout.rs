//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: tab bar chrome, content area,
//! status bar, plus the drawer and modal overlay rects.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Tab bar chrome at the top
    pub tab_bar: Rect,
    /// Main content area
    pub content: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Tab bar
                Constraint::Min(3),    // Content
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            tab_bar: vertical[0],
            content: vertical[1],
            status_bar: vertical[2],
        }
    }
}

/// Layout for the home screen
pub struct HomeLayout {
    /// Greeting and subtitle
    pub greeting: Rect,
    /// Balance card
    pub balance: Rect,
    /// Income/expense summary row
    pub summary: Rect,
    /// Action buttons row
    pub actions: Rect,
}

impl HomeLayout {
    /// Calculate home screen layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Greeting
                Constraint::Length(4), // Balance card
                Constraint::Length(4), // Summary row
                Constraint::Length(3), // Actions
            ])
            .split(area);

        Self {
            greeting: chunks[0],
            balance: chunks[1],
            summary: chunks[2],
            actions: chunks[3],
        }
    }
}

/// The drawer overlay rect: a fixed-width panel on the left edge
pub fn drawer_rect(area: Rect) -> Rect {
    Rect::new(area.x, area.y, 30.min(area.width), area.height)
}

/// Create a fixed-size centered rect for overlays
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout_partitions_area() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = AppLayout::new(area);

        assert_eq!(layout.tab_bar.height, 1);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(
            layout.tab_bar.height + layout.content.height + layout.status_bar.height,
            area.height
        );
    }

    #[test]
    fn test_drawer_rect_clamps_width() {
        let narrow = Rect::new(0, 0, 20, 24);
        assert_eq!(drawer_rect(narrow).width, 20);

        let wide = Rect::new(0, 0, 120, 24);
        assert_eq!(drawer_rect(wide).width, 30);
    }

    #[test]
    fn test_centered_rect_fixed() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect_fixed(50, 10, area);
        assert_eq!(rect.width, 50);
        assert_eq!(rect.height, 10);
        assert_eq!(rect.x, 25);
        assert_eq!(rect.y, 15);
    }
}
