//! Selection state of the filter form.

use crate::model::{CriteriaEdit, FilterCriteria, FUEL_TYPE_OPTIONS};

/// Which filter-form row currently holds the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Available,
    FuelType,
    Towbar,
    WinterTires,
}

impl FormField {
    /// The row below, wrapping from the last back to the first.
    pub fn next(self) -> Self {
        match self {
            FormField::Available => FormField::FuelType,
            FormField::FuelType => FormField::Towbar,
            FormField::Towbar => FormField::WinterTires,
            FormField::WinterTires => FormField::Available,
        }
    }

    /// The row above, wrapping from the first back to the last.
    pub fn prev(self) -> Self {
        match self {
            FormField::Available => FormField::WinterTires,
            FormField::FuelType => FormField::Available,
            FormField::Towbar => FormField::FuelType,
            FormField::WinterTires => FormField::Towbar,
        }
    }
}

/// Filter form selection, owned by the controller alongside the criteria.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormState {
    /// Currently selected row.
    pub selected: FormField,
}

impl FormState {
    /// Move the selection one row down.
    pub fn select_next(&mut self) {
        self.selected = self.selected.next();
    }

    /// Move the selection one row up.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.prev();
    }

    /// The edit produced by activating the selected row against the current
    /// criteria: checkboxes toggle, the fuel selector cycles its options.
    pub fn activate(&self, criteria: &FilterCriteria) -> CriteriaEdit {
        match self.selected {
            FormField::Available => CriteriaEdit::OnlyAvailable(!criteria.only_available),
            FormField::FuelType => {
                CriteriaEdit::FuelType(next_fuel_option(&criteria.fuel_type).to_string())
            }
            FormField::Towbar => CriteriaEdit::Towbar(!criteria.towbar),
            FormField::WinterTires => CriteriaEdit::WinterTires(!criteria.winter_tires),
        }
    }
}

/// The option after `current` in the selector, wrapping past the end.
///
/// An unknown value (e.g. a CLI preset outside the option list) restarts the
/// cycle at the first option.
fn next_fuel_option(current: &str) -> &'static str {
    let index = FUEL_TYPE_OPTIONS
        .iter()
        .position(|option| *option == current);
    match index {
        Some(i) => FUEL_TYPE_OPTIONS[(i + 1) % FUEL_TYPE_OPTIONS.len()],
        None => FUEL_TYPE_OPTIONS[0],
    }
}
