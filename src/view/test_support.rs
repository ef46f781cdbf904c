//! Shared helpers for widget tests.

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::{Frame, Terminal};

/// Render a closure into an off-screen terminal and return the buffer.
pub(crate) fn render_to_buffer<F>(width: u16, height: u16, render: F) -> Buffer
where
    F: FnOnce(&mut Frame),
{
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal.draw(render).expect("test draw");
    terminal.backend().buffer().clone()
}

/// Convert a ratatui buffer to a string, preserving layout.
///
/// Trailing blanks are trimmed per line; empty lines are dropped.
pub(crate) fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}
