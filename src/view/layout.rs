//! Frame layout for the listing screen.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    /// Filter form with its border.
    pub form: Rect,
    /// Vehicle table, loader, or error banner.
    pub main: Rect,
    /// Pagination bar.
    pub pagination: Rect,
    /// Key hints.
    pub footer: Rect,
}

/// Split the frame into the four fixed regions.
///
/// The form needs four rows plus its border; the table gets whatever is
/// left above the two single-line bars.
pub fn compute(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Filter form (4 rows + border)
            Constraint::Min(3),    // Table / loader / error banner
            Constraint::Length(1), // Pagination bar
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    AppLayout {
        form: chunks[0],
        main: chunks[1],
        pagination: chunks[2],
        footer: chunks[3],
    }
}
