//! Application state and transitions.
//!
//! `AppState` is the single owner of everything mutable: the fetch lifecycle
//! with the raw vehicle list, the filter criteria, the current page, and the
//! form selection. The filtered list and the page slice are never stored as
//! independent state — they are derived through the memoized pipeline in
//! `view_state`, so they cannot drift out of sync with their inputs.

use crate::model::{CriteriaEdit, FetchError, FilterCriteria, Vehicle};
use crate::state::FormState;
use crate::view_state::{DerivedViews, PageMetadata};
use tracing::{debug, info, warn};

/// Progress of the one search request issued per session.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    /// Request in flight; the raw list reads as empty.
    Loading,
    /// Request resolved with the raw vehicle list.
    Loaded(Vec<Vehicle>),
    /// Request failed; the message is shown in place of the list.
    Failed(String),
}

/// Root state type, mutated only through the methods below.
///
/// All mutation happens on the event loop's thread; derived views are
/// recomputed synchronously inside the accessors, so the presentation layer
/// never observes a half-updated pipeline.
#[derive(Debug)]
pub struct AppState {
    fetch: FetchState,
    criteria: FilterCriteria,
    current_page: usize,
    items_per_page: usize,
    /// Bumped on every fetch completion; keys the derivation memo.
    raw_revision: u64,
    derived: DerivedViews,
    /// Filter form selection.
    pub form: FormState,
}

impl AppState {
    /// State at session start: the fetch is already in flight, the first
    /// page is current, and the (possibly CLI-preset) criteria are active.
    pub fn new(criteria: FilterCriteria, items_per_page: usize) -> Self {
        Self {
            fetch: FetchState::Loading,
            criteria,
            current_page: 1,
            items_per_page: items_per_page.max(1),
            raw_revision: 0,
            derived: DerivedViews::default(),
            form: FormState::default(),
        }
    }

    /// Whether the fetch is still in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self.fetch, FetchState::Loading)
    }

    /// Current fetch lifecycle state.
    pub fn fetch_state(&self) -> &FetchState {
        &self.fetch
    }

    /// Record the fetch outcome.
    ///
    /// Clears the loading state on both success and failure; a failure
    /// becomes explicit display state instead of a stuck loader.
    pub fn finish_fetch(&mut self, outcome: Result<Vec<Vehicle>, FetchError>) {
        self.raw_revision += 1;
        match outcome {
            Ok(vehicles) => {
                info!(results = vehicles.len(), "search completed");
                self.fetch = FetchState::Loaded(vehicles);
            }
            Err(error) => {
                warn!(%error, "search failed");
                self.fetch = FetchState::Failed(error.to_string());
            }
        }
    }

    /// Active filter criteria.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Apply a single-field edit from the form, replacing the criteria
    /// wholesale.
    ///
    /// The current page is deliberately left untouched: narrowing the set
    /// can leave the view on a now-empty page until the user pages back,
    /// matching the behavior this client replaces.
    pub fn apply_edit(&mut self, edit: CriteriaEdit) {
        debug!(?edit, "criteria edit");
        self.criteria = self.criteria.with_edit(edit);
    }

    /// Current 1-based page number.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Page size the view renders with.
    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Jump to the requested page.
    ///
    /// No bound validation happens here; the pagination control only emits
    /// pages within `1..=total_pages`.
    pub fn set_page(&mut self, page: usize) {
        debug!(page, "page change");
        self.current_page = page;
    }

    /// The raw list as fetched; empty while loading or after a failure.
    pub fn raw_vehicles(&self) -> &[Vehicle] {
        match &self.fetch {
            FetchState::Loaded(vehicles) => vehicles,
            FetchState::Loading | FetchState::Failed(_) => &[],
        }
    }

    /// The filtered list for the active criteria (memoized).
    pub fn filtered_vehicles(&mut self) -> &[Vehicle] {
        let raw = match &self.fetch {
            FetchState::Loaded(vehicles) => vehicles.as_slice(),
            FetchState::Loading | FetchState::Failed(_) => &[],
        };
        self.derived.filtered(raw, self.raw_revision, &self.criteria)
    }

    /// The slice of the filtered list belonging to the current page
    /// (memoized).
    pub fn page_vehicles(&mut self) -> &[Vehicle] {
        let raw = match &self.fetch {
            FetchState::Loaded(vehicles) => vehicles.as_slice(),
            FetchState::Loading | FetchState::Failed(_) => &[],
        };
        self.derived.page(
            raw,
            self.raw_revision,
            &self.criteria,
            self.current_page,
            self.items_per_page,
        )
    }

    /// Page totals for the filtered list.
    pub fn page_metadata(&mut self) -> PageMetadata {
        let raw = match &self.fetch {
            FetchState::Loaded(vehicles) => vehicles.as_slice(),
            FetchState::Loading | FetchState::Failed(_) => &[],
        };
        self.derived
            .metadata(raw, self.raw_revision, &self.criteria, self.items_per_page)
    }

    /// Derivation memo, for inspection in tests.
    pub fn derived(&self) -> &DerivedViews {
        &self.derived
    }
}
