//! Pagination bar.
//!
//! Shows the page numbers around the current page with ellipses for the
//! elided ranges, plus the item total. The bar is also where page bounds are
//! enforced: its key handling only ever emits pages within
//! `1..=total_pages`, which is what lets the paginator itself stay
//! validation-free.

use crate::view::styles::ListingStyles;
use crate::view_state::PageMetadata;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Pages always shown at each end of the bar.
const EDGE_PAGES: usize = 1;
/// Pages shown on each side of the current page.
const SURROUNDING_PAGES: usize = 2;

/// Render-only pagination bar.
pub struct PaginationBar {
    current_page: usize,
    metadata: PageMetadata,
    styles: ListingStyles,
}

impl PaginationBar {
    /// Create the bar for the current page and totals.
    pub fn new(current_page: usize, metadata: PageMetadata, styles: ListingStyles) -> Self {
        Self {
            current_page,
            metadata,
            styles,
        }
    }

    /// Render into `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let mut spans: Vec<Span> = Vec::new();

        for entry in page_window(self.metadata.total_pages, self.current_page) {
            if !spans.is_empty() {
                spans.push(Span::raw(" "));
            }
            match entry {
                Some(page) if page == self.current_page => {
                    spans.push(Span::styled(
                        format!("[{page}]"),
                        self.styles.current_page(),
                    ));
                }
                Some(page) => spans.push(Span::raw(page.to_string())),
                None => spans.push(Span::styled("…", self.styles.dim())),
            }
        }

        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        let noun = if self.metadata.total_items == 1 {
            "vehicle"
        } else {
            "vehicles"
        };
        spans.push(Span::styled(
            format!("{} {noun}", self.metadata.total_items),
            self.styles.dim(),
        ));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

/// The page numbers to display: leading edge, a window around the current
/// page, and the trailing edge, with `None` marking an elided range.
///
/// An empty set has no pages at all.
fn page_window(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    if total_pages == 0 {
        return vec![];
    }
    let current_page = current_page.clamp(1, total_pages);

    let mut pages = Vec::new();

    let left_end = (1 + EDGE_PAGES).min(total_pages + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(SURROUNDING_PAGES));
    let mid_end = (current_page + SURROUNDING_PAGES + 1).min(total_pages + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(total_pages.saturating_sub(EDGE_PAGES) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=total_pages).map(Some));

    pages
}
