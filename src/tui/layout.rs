//! Layout definitions for the TUI
//!
//! Header, summary cards, budget warning, ledger list beside the chart, and
//! the status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the main screen
pub struct AppLayout {
    /// Title line
    pub header: Rect,
    /// Balance, income and expense cards
    pub cards: Rect,
    /// Budget warning banner (zero height when hidden)
    pub warning: Rect,
    /// Transaction list
    pub ledger: Rect,
    /// Income versus expense chart
    pub chart: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect, show_warning: bool) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Length(4), // Cards
                Constraint::Length(if show_warning { 3 } else { 0 }),
                Constraint::Min(5),    // Ledger and chart
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(vertical[3]);

        Self {
            header: vertical[0],
            cards: vertical[1],
            warning: vertical[2],
            ledger: body[0],
            chart: body[1],
            status_bar: vertical[4],
        }
    }
}

/// Split the cards row into balance, income and expense
pub fn card_areas(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// Area for a toast in the top-right corner
pub fn toast_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    let y = r.y + (r.height - height).min(1);
    Rect::new(r.x + r.width - width, y, width, height)
}
