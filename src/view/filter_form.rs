//! Filter form widget.
//!
//! Renders one row per criterion: three checkboxes and the fuel-type
//! selector. The form is render-only; toggling happens through the key
//! handler, which routes edits into the controller.

use crate::model::FilterCriteria;
use crate::state::FormField;
use crate::view::styles::ListingStyles;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Render-only filter form.
pub struct FilterForm<'a> {
    criteria: &'a FilterCriteria,
    selected: FormField,
    styles: ListingStyles,
}

impl<'a> FilterForm<'a> {
    /// Create the form for the current criteria and selection.
    pub fn new(criteria: &'a FilterCriteria, selected: FormField, styles: ListingStyles) -> Self {
        Self {
            criteria,
            selected,
            styles,
        }
    }

    /// Render into `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let rows = vec![
            self.checkbox_row(
                FormField::Available,
                "Only available",
                self.criteria.only_available,
            ),
            self.fuel_row(),
            self.checkbox_row(FormField::Towbar, "Towbar", self.criteria.towbar),
            self.checkbox_row(
                FormField::WinterTires,
                "Winter tires",
                self.criteria.winter_tires,
            ),
        ];

        let paragraph = Paragraph::new(rows).block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled("Filters", self.styles.header())),
        );
        frame.render_widget(paragraph, area);
    }

    fn row_style(&self, field: FormField) -> ratatui::style::Style {
        if self.selected == field {
            self.styles.selected()
        } else {
            ratatui::style::Style::default()
        }
    }

    fn checkbox_row(&self, field: FormField, label: &str, checked: bool) -> Line<'static> {
        let mark = if checked { "[x]" } else { "[ ]" };
        Line::from(Span::styled(
            format!("{mark} {label}"),
            self.row_style(field),
        ))
    }

    fn fuel_row(&self) -> Line<'static> {
        let shown = if self.criteria.fuel_type.is_empty() {
            "any"
        } else {
            self.criteria.fuel_type.as_str()
        };
        Line::from(Span::styled(
            format!("    Fuel type: ‹{shown}›"),
            self.row_style(FormField::FuelType),
        ))
    }
}
