//! Filter criteria narrowing the fetched vehicle set.

/// Fuel type options offered by the filter form's selector.
///
/// The empty string is the "any" option: no fuel constraint.
pub const FUEL_TYPE_OPTIONS: [&str; 5] = ["", "petrol", "diesel", "electric", "hybrid"];

/// User-selected constraints on the vehicle set.
///
/// The semantics are asymmetric: a `false` boolean places no constraint on
/// its attribute (it never means "must be false"), and an empty `fuel_type`
/// places no fuel constraint. Criteria values are replaced wholesale on each
/// edit, never mutated in place, so derivations can key caches on the whole
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Keep only vehicles that can currently be rented.
    pub only_available: bool,

    /// Exact, case-sensitive fuel type match. Empty means any.
    pub fuel_type: String,

    /// Require a towbar.
    pub towbar: bool,

    /// Require winter tires.
    pub winter_tires: bool,
}

impl FilterCriteria {
    /// True when no constraint is active: filtering is the identity.
    pub fn is_unconstrained(&self) -> bool {
        !self.only_available && self.fuel_type.is_empty() && !self.towbar && !self.winter_tires
    }

    /// The criteria with a single field replaced.
    #[must_use]
    pub fn with_edit(&self, edit: CriteriaEdit) -> Self {
        let mut next = self.clone();
        match edit {
            CriteriaEdit::OnlyAvailable(value) => next.only_available = value,
            CriteriaEdit::FuelType(value) => next.fuel_type = value,
            CriteriaEdit::Towbar(value) => next.towbar = value,
            CriteriaEdit::WinterTires(value) => next.winter_tires = value,
        }
        next
    }
}

/// A single-field edit emitted by the filter form.
///
/// Applying an edit through [`FilterCriteria::with_edit`] produces a fresh
/// criteria value; the controller swaps it in wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriteriaEdit {
    OnlyAvailable(bool),
    FuelType(String),
    Towbar(bool),
    WinterTires(bool),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_criteria_is_unconstrained() {
        assert!(FilterCriteria::default().is_unconstrained());
    }

    #[test]
    fn any_active_field_makes_criteria_constrained() {
        let available = FilterCriteria {
            only_available: true,
            ..Default::default()
        };
        let fuel = FilterCriteria {
            fuel_type: "diesel".to_string(),
            ..Default::default()
        };
        let towbar = FilterCriteria {
            towbar: true,
            ..Default::default()
        };
        let winter = FilterCriteria {
            winter_tires: true,
            ..Default::default()
        };

        assert!(!available.is_unconstrained());
        assert!(!fuel.is_unconstrained());
        assert!(!towbar.is_unconstrained());
        assert!(!winter.is_unconstrained());
    }

    #[test]
    fn with_edit_replaces_only_the_edited_field() {
        let base = FilterCriteria {
            only_available: true,
            fuel_type: "petrol".to_string(),
            towbar: false,
            winter_tires: false,
        };

        let edited = base.with_edit(CriteriaEdit::FuelType("diesel".to_string()));

        assert!(edited.only_available, "untouched fields must survive");
        assert_eq!(edited.fuel_type, "diesel");
        assert_eq!(base.fuel_type, "petrol", "the original value is not mutated");
    }

    #[test]
    fn with_edit_can_clear_a_constraint() {
        let base = FilterCriteria {
            towbar: true,
            ..Default::default()
        };

        let edited = base.with_edit(CriteriaEdit::Towbar(false));
        assert!(edited.is_unconstrained());
    }

    #[test]
    fn fuel_options_start_with_the_any_option() {
        assert_eq!(FUEL_TYPE_OPTIONS[0], "");
        assert!(FUEL_TYPE_OPTIONS.iter().skip(1).all(|o| !o.is_empty()));
    }
}
