//! Memo layer over the filter → paginate pipeline.

use crate::model::{FilterCriteria, Vehicle};
use crate::view_state::filter::filter_vehicles;
use crate::view_state::paginate::{page_metadata, paginate, PageMetadata};
use tracing::debug;

/// Inputs that produced the cached filtered list.
type FilterKey = (u64, FilterCriteria);
/// Inputs that produced the cached page slice.
type PageKey = (u64, FilterCriteria, usize, usize);

/// Last-value memo for the derivation pipeline.
///
/// Each derivation keeps the most recent (key, value) pair and recomputes
/// only when its key changes: the filtered list is keyed on the raw-list
/// revision plus the criteria, the page slice additionally on the page number
/// and page size. The raw revision is bumped by the controller whenever a
/// fetch completes, standing in for the (immutable) list contents.
///
/// This is purely a performance layer. Every accessor returns exactly what
/// the pure functions in [`filter`](crate::view_state::filter) and
/// [`paginate`](crate::view_state::paginate) would, and dropping the memo
/// between calls must never change what is rendered.
#[derive(Debug, Default)]
pub struct DerivedViews {
    filtered_key: Option<FilterKey>,
    filtered: Vec<Vehicle>,
    paged_key: Option<PageKey>,
    paged: Vec<Vehicle>,
    filter_recomputes: u64,
    page_recomputes: u64,
}

impl DerivedViews {
    /// The filtered list for `criteria` over `raw`, recomputed only when the
    /// raw revision or the criteria changed.
    pub fn filtered(
        &mut self,
        raw: &[Vehicle],
        raw_revision: u64,
        criteria: &FilterCriteria,
    ) -> &[Vehicle] {
        let key = (raw_revision, criteria.clone());
        if self.filtered_key.as_ref() != Some(&key) {
            self.filtered = filter_vehicles(raw, criteria);
            self.filtered_key = Some(key);
            self.filter_recomputes += 1;
            debug!(
                recomputes = self.filter_recomputes,
                survivors = self.filtered.len(),
                "recomputed filtered vehicle list"
            );
        }
        &self.filtered
    }

    /// The page slice for the current page, recomputed only when the filtered
    /// list, the page number, or the page size changed.
    pub fn page(
        &mut self,
        raw: &[Vehicle],
        raw_revision: u64,
        criteria: &FilterCriteria,
        current_page: usize,
        items_per_page: usize,
    ) -> &[Vehicle] {
        let key = (
            raw_revision,
            criteria.clone(),
            current_page,
            items_per_page,
        );
        if self.paged_key.as_ref() != Some(&key) {
            self.filtered(raw, raw_revision, criteria);
            self.paged = paginate(&self.filtered, current_page, items_per_page).to_vec();
            self.paged_key = Some(key);
            self.page_recomputes += 1;
            debug!(
                recomputes = self.page_recomputes,
                page = current_page,
                len = self.paged.len(),
                "recomputed page slice"
            );
        }
        &self.paged
    }

    /// Page totals for the filtered list at the given page size.
    pub fn metadata(
        &mut self,
        raw: &[Vehicle],
        raw_revision: u64,
        criteria: &FilterCriteria,
        items_per_page: usize,
    ) -> PageMetadata {
        let total_items = self.filtered(raw, raw_revision, criteria).len();
        page_metadata(total_items, items_per_page)
    }

    /// How many times the filtered list has been recomputed.
    pub fn filter_recompute_count(&self) -> u64 {
        self.filter_recomputes
    }

    /// How many times the page slice has been recomputed.
    pub fn page_recompute_count(&self) -> u64 {
        self.page_recomputes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fleet(n: usize) -> Vec<Vehicle> {
        (0..n)
            .map(|i| Vehicle {
                id: format!("veh-{i}"),
                available: i % 2 == 0,
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn repeated_reads_with_unchanged_inputs_hit_the_memo() {
        let raw = fleet(7);
        let criteria = FilterCriteria::default();
        let mut views = DerivedViews::default();

        for _ in 0..5 {
            views.filtered(&raw, 1, &criteria);
            views.page(&raw, 1, &criteria, 1, 5);
        }

        assert_eq!(views.filter_recompute_count(), 1);
        assert_eq!(views.page_recompute_count(), 1);
    }

    #[test]
    fn criteria_change_invalidates_both_derivations() {
        let raw = fleet(7);
        let mut views = DerivedViews::default();

        views.page(&raw, 1, &FilterCriteria::default(), 1, 5);
        let narrowed = FilterCriteria {
            only_available: true,
            ..Default::default()
        };
        views.page(&raw, 1, &narrowed, 1, 5);

        assert_eq!(views.filter_recompute_count(), 2);
        assert_eq!(views.page_recompute_count(), 2);
    }

    #[test]
    fn page_change_leaves_the_filtered_list_cached() {
        let raw = fleet(12);
        let criteria = FilterCriteria::default();
        let mut views = DerivedViews::default();

        views.page(&raw, 1, &criteria, 1, 5);
        views.page(&raw, 1, &criteria, 2, 5);
        views.page(&raw, 1, &criteria, 3, 5);

        assert_eq!(views.filter_recompute_count(), 1);
        assert_eq!(views.page_recompute_count(), 3);
    }

    #[test]
    fn raw_revision_bump_invalidates_the_memo() {
        let before = fleet(3);
        let after = fleet(9);
        let criteria = FilterCriteria::default();
        let mut views = DerivedViews::default();

        assert_eq!(views.filtered(&before, 1, &criteria).len(), 3);
        assert_eq!(views.filtered(&after, 2, &criteria).len(), 9);
        assert_eq!(views.filter_recompute_count(), 2);
    }

    #[test]
    fn memoized_results_match_the_pure_pipeline() {
        let raw = fleet(12);
        let criteria = FilterCriteria {
            only_available: true,
            ..Default::default()
        };
        let mut views = DerivedViews::default();

        let direct = filter_vehicles(&raw, &criteria);
        assert_eq!(views.filtered(&raw, 1, &criteria), direct.as_slice());
        assert_eq!(
            views.page(&raw, 1, &criteria, 2, 5),
            paginate(&direct, 2, 5)
        );
        assert_eq!(
            views.metadata(&raw, 1, &criteria, 5),
            page_metadata(direct.len(), 5)
        );
    }
}
