//! Loading indicator shown while the search is in flight.

use crate::view::styles::ListingStyles;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner widget rendered in place of the vehicle table.
///
/// Pure and stateless: the animation is driven by the event-loop tick count
/// passed in, following the principle of separating state management from
/// rendering.
#[derive(Debug, Clone, Copy)]
pub struct LoadingIndicator {
    tick: u64,
    styles: ListingStyles,
}

impl LoadingIndicator {
    /// Create the indicator for the given tick.
    pub fn new(tick: u64, styles: ListingStyles) -> Self {
        Self { tick, styles }
    }

    /// The spinner glyph for this tick.
    pub fn frame_glyph(&self) -> &'static str {
        SPINNER_FRAMES[(self.tick % SPINNER_FRAMES.len() as u64) as usize]
    }

    /// Render into `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(Span::styled(
            format!("{} Fetching vehicles…", self.frame_glyph()),
            self.styles.dim(),
        ))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Vehicles"));
        frame.render_widget(paragraph, area);
    }
}
