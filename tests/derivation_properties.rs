//! Property-based tests for the derivation pipeline.
//!
//! Tests validate:
//! 1. Filtering preserves order and only ever narrows
//! 2. Filtering is idempotent and sound w.r.t. the active constraints
//! 3. Pagination tiles the list without overlap or loss
//! 4. The memoized controller accessors equal the pure pipeline

use fleetview::model::{FilterCriteria, Vehicle};
use fleetview::state::AppState;
use fleetview::view_state::{filter_vehicles, page_metadata, paginate};
use proptest::prelude::*;

fn vehicle_strategy() -> impl Strategy<Value = Vehicle> {
    (
        "[a-z]{1,8}",
        any::<bool>(),
        prop_oneof![
            Just(""),
            Just("petrol"),
            Just("diesel"),
            Just("electric"),
        ],
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(model, available, fuel, towbar, winter_tires)| Vehicle {
            model,
            available,
            fuel_type: fuel.to_string(),
            towbar,
            winter_tires,
            ..Default::default()
        })
}

fn criteria_strategy() -> impl Strategy<Value = FilterCriteria> {
    (
        any::<bool>(),
        prop_oneof![Just(""), Just("petrol"), Just("diesel"), Just("Diesel")],
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(only_available, fuel, towbar, winter_tires)| FilterCriteria {
            only_available,
            fuel_type: fuel.to_string(),
            towbar,
            winter_tires,
        })
}

fn satisfies(vehicle: &Vehicle, criteria: &FilterCriteria) -> bool {
    (!criteria.only_available || vehicle.available)
        && (criteria.fuel_type.is_empty() || vehicle.fuel_type == criteria.fuel_type)
        && (!criteria.towbar || vehicle.towbar)
        && (!criteria.winter_tires || vehicle.winter_tires)
}

proptest! {
    #[test]
    fn unconstrained_filter_is_identity(fleet in prop::collection::vec(vehicle_strategy(), 0..30)) {
        let filtered = filter_vehicles(&fleet, &FilterCriteria::default());
        prop_assert_eq!(filtered, fleet);
    }

    #[test]
    fn filter_output_is_an_ordered_subsequence(
        fleet in prop::collection::vec(vehicle_strategy(), 0..30),
        criteria in criteria_strategy(),
    ) {
        let filtered = filter_vehicles(&fleet, &criteria);

        // Every survivor appears in the input, in the same relative order.
        let mut remaining = fleet.iter();
        for survivor in &filtered {
            prop_assert!(
                remaining.any(|candidate| candidate == survivor),
                "survivor missing or out of order"
            );
        }
    }

    #[test]
    fn filter_keeps_exactly_the_satisfying_vehicles(
        fleet in prop::collection::vec(vehicle_strategy(), 0..30),
        criteria in criteria_strategy(),
    ) {
        let filtered = filter_vehicles(&fleet, &criteria);

        prop_assert!(filtered.iter().all(|v| satisfies(v, &criteria)));
        let expected = fleet.iter().filter(|v| satisfies(v, &criteria)).count();
        prop_assert_eq!(filtered.len(), expected);
    }

    #[test]
    fn filter_is_idempotent(
        fleet in prop::collection::vec(vehicle_strategy(), 0..30),
        criteria in criteria_strategy(),
    ) {
        let once = filter_vehicles(&fleet, &criteria);
        let twice = filter_vehicles(&once, &criteria);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn pages_tile_the_list(
        fleet in prop::collection::vec(vehicle_strategy(), 0..40),
        per_page in 1usize..10,
    ) {
        let metadata = page_metadata(fleet.len(), per_page);

        let mut reassembled = Vec::new();
        for page in 1..=metadata.total_pages {
            let slice = paginate(&fleet, page, per_page);
            prop_assert!(!slice.is_empty(), "no page within range is empty");
            prop_assert!(slice.len() <= per_page);
            reassembled.extend_from_slice(slice);
        }

        prop_assert_eq!(reassembled, fleet.clone());
        prop_assert!(paginate(&fleet, metadata.total_pages + 1, per_page).is_empty());
    }

    #[test]
    fn first_page_is_a_prefix(
        fleet in prop::collection::vec(vehicle_strategy(), 0..40),
        per_page in 1usize..10,
    ) {
        let first = paginate(&fleet, 1, per_page);
        let expected_len = per_page.min(fleet.len());
        prop_assert_eq!(first, &fleet[..expected_len]);
    }

    #[test]
    fn memoized_accessors_match_the_pure_pipeline(
        fleet in prop::collection::vec(vehicle_strategy(), 0..40),
        criteria in criteria_strategy(),
        page in 1usize..12,
        per_page in 1usize..10,
    ) {
        let mut state = AppState::new(criteria.clone(), per_page);
        state.finish_fetch(Ok(fleet.clone()));
        state.set_page(page);

        let filtered = filter_vehicles(&fleet, &criteria);

        prop_assert_eq!(state.filtered_vehicles(), filtered.as_slice());
        prop_assert_eq!(state.page_vehicles(), paginate(&filtered, page, per_page));
        prop_assert_eq!(state.page_metadata(), page_metadata(filtered.len(), per_page));
    }
}
