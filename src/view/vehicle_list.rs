//! Vehicle table for the current page.

use crate::model::Vehicle;
use crate::view::styles::ListingStyles;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Widest a model name may render before truncation.
const MODEL_COLUMN_WIDTH: usize = 18;

/// Render-only table of the page slice.
pub struct VehicleTable<'a> {
    vehicles: &'a [Vehicle],
    styles: ListingStyles,
}

impl<'a> VehicleTable<'a> {
    /// Create the table for the given page slice.
    pub fn new(vehicles: &'a [Vehicle], styles: ListingStyles) -> Self {
        Self { vehicles, styles }
    }

    /// Render into `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled("Vehicles", self.styles.header()));

        if self.vehicles.is_empty() {
            let empty = Paragraph::new(Span::styled(
                "No vehicles on this page.",
                self.styles.dim(),
            ))
            .alignment(Alignment::Center)
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let header = Row::new(["Model", "Plate", "Fuel", "Equipment", "Status"])
            .style(self.styles.header());

        let rows: Vec<Row> = self.vehicles.iter().map(|v| self.row(v)).collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(MODEL_COLUMN_WIDTH as u16),
                Constraint::Length(10),
                Constraint::Length(10),
                Constraint::Length(22),
                Constraint::Min(9),
            ],
        )
        .header(header)
        .block(block);

        frame.render_widget(table, area);
    }

    fn row(&self, vehicle: &Vehicle) -> Row<'static> {
        let status = if vehicle.available {
            Cell::from("available").style(self.styles.available())
        } else {
            Cell::from("rented out").style(self.styles.unavailable())
        };

        Row::new(vec![
            Cell::from(truncate_to_width(&vehicle.model, MODEL_COLUMN_WIDTH)),
            Cell::from(vehicle.license_plate.clone()),
            Cell::from(if vehicle.fuel_type.is_empty() {
                "-".to_string()
            } else {
                vehicle.fuel_type.clone()
            }),
            Cell::from(equipment_summary(vehicle)),
            status,
        ])
    }
}

fn equipment_summary(vehicle: &Vehicle) -> String {
    match (vehicle.towbar, vehicle.winter_tires) {
        (true, true) => "towbar, winter tires".to_string(),
        (true, false) => "towbar".to_string(),
        (false, true) => "winter tires".to_string(),
        (false, false) => "-".to_string(),
    }
}

/// Cut `text` down to `max` terminal columns, ending in an ellipsis when
/// something was dropped. Width is measured in display columns, not bytes,
/// so wide characters stay intact.
fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    let limit = max.saturating_sub(1);
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > limit {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
