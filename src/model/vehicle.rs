//! Vehicle records decoded from the search response.

use serde::Deserialize;

/// A single rentable vehicle as returned by the search endpoint.
///
/// Decoding is lenient: attributes missing from the payload fall back to
/// their defaults (`false` / empty string), so a vehicle lacking an attribute
/// is simply non-matching under an active constraint on it rather than a
/// decode error. Records are immutable once fetched; the controller owns the
/// full list for the lifetime of one fetch cycle.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Vehicle {
    /// Endpoint-assigned identifier.
    pub id: String,

    /// Model name, e.g. "Corsa". Displayed only; reserved for filtering.
    pub model: String,

    /// Registration plate shown in the listing.
    pub license_plate: String,

    /// Fuel type, e.g. "diesel". Empty when the endpoint omits it.
    pub fuel_type: String,

    /// Whether the vehicle can currently be rented.
    pub available: bool,

    #[serde(rename = "hasTowbar")]
    pub towbar: bool,

    #[serde(rename = "hasWinterTires")]
    pub winter_tires: bool,

    /// Position of the vehicle inside the searched area, when reported.
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
