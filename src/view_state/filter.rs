//! Narrowing the fetched vehicle list by the active criteria.

use crate::model::{FilterCriteria, Vehicle};

/// Keep the vehicles satisfying every active constraint.
///
/// Pure and order-preserving: survivors appear in their input order. With no
/// active constraint this is the identity. Constraints only ever restrict —
/// an inactive boolean or an empty fuel type matches everything, and a
/// vehicle whose attribute was absent from the payload (decoded to `false`
/// or empty) fails any active constraint on that attribute.
pub fn filter_vehicles(vehicles: &[Vehicle], criteria: &FilterCriteria) -> Vec<Vehicle> {
    vehicles
        .iter()
        .filter(|vehicle| matches_criteria(vehicle, criteria))
        .cloned()
        .collect()
}

fn matches_criteria(vehicle: &Vehicle, criteria: &FilterCriteria) -> bool {
    if criteria.only_available && !vehicle.available {
        return false;
    }
    if !criteria.fuel_type.is_empty() && vehicle.fuel_type != criteria.fuel_type {
        return false;
    }
    if criteria.towbar && !vehicle.towbar {
        return false;
    }
    if criteria.winter_tires && !vehicle.winter_tires {
        return false;
    }
    true
}
