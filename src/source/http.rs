//! HTTP gateway for the remote search endpoint.
//!
//! The endpoint speaks a single POSTed call, `search.map`, taking the filter
//! and a geographic box and answering with `{"results": [...]}`.

use crate::config::SearchArea;
use crate::model::{FetchError, FilterCriteria, Vehicle};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Body of the `search.map` call.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    /// Endpoint operation name; always `search.map`.
    pub method: &'static str,
    pub params: SearchParams,
}

/// Parameters of the `search.map` call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub filter: WireFilter,
    pub location_point: LocationPoint,
}

/// Filter section of the request.
///
/// Mirrors [`FilterCriteria`], except that "no fuel constraint" goes over
/// the wire as an explicit `null` rather than an empty string.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireFilter {
    pub only_available: bool,
    pub fuel_type: Option<String>,
    pub towbar: bool,
    pub winter_tires: bool,
}

/// Geographic box the search is scoped to.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationPoint {
    pub latitude_max: f64,
    pub latitude_min: f64,
    pub longitude_max: f64,
    pub longitude_min: f64,
}

impl SearchRequest {
    /// Build the request for the given criteria and search area.
    pub fn new(criteria: &FilterCriteria, area: &SearchArea) -> Self {
        Self {
            method: "search.map",
            params: SearchParams {
                filter: WireFilter {
                    only_available: criteria.only_available,
                    fuel_type: (!criteria.fuel_type.is_empty())
                        .then(|| criteria.fuel_type.clone()),
                    towbar: criteria.towbar,
                    winter_tires: criteria.winter_tires,
                },
                location_point: LocationPoint {
                    latitude_max: area.latitude_max,
                    latitude_min: area.latitude_min,
                    longitude_max: area.longitude_max,
                    longitude_min: area.longitude_min,
                },
            },
        }
    }
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self::new(&FilterCriteria::default(), &SearchArea::default())
    }
}

/// Successful `search.map` response body.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<Vehicle>,
}

/// Gateway issuing the search call over HTTP.
#[derive(Debug)]
pub struct HttpGateway {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpGateway {
    /// Create a gateway for the given endpoint URL.
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: reqwest::blocking::Client::new(),
        }
    }

    /// The endpoint this gateway talks to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST the request and decode the vehicle list.
    ///
    /// # Errors
    ///
    /// `Transport` when the request cannot be sent, `Status` on a
    /// non-success response, `Decode` when the body is not a search
    /// response.
    pub fn search(&self, request: &SearchRequest) -> Result<Vec<Vehicle>, FetchError> {
        debug!(endpoint = %self.endpoint, "sending search.map request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .map_err(|e| FetchError::Transport {
                endpoint: self.endpoint.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body: SearchResponse = response.json().map_err(|e| FetchError::Decode {
            reason: e.to_string(),
        })?;

        debug!(results = body.results.len(), "search.map response decoded");
        Ok(body.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_to_the_endpoint_wire_shape() {
        let criteria = FilterCriteria {
            only_available: true,
            fuel_type: "diesel".to_string(),
            towbar: false,
            winter_tires: true,
        };
        let request = SearchRequest::new(&criteria, &SearchArea::default());

        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({
                "method": "search.map",
                "params": {
                    "filter": {
                        "onlyAvailable": true,
                        "fuelType": "diesel",
                        "towbar": false,
                        "winterTires": true
                    },
                    "locationPoint": {
                        "latitudeMax": 56.0,
                        "latitudeMin": 48.0,
                        "longitudeMax": 9.0,
                        "longitudeMin": 1.0
                    }
                }
            })
        );
    }

    #[test]
    fn empty_fuel_type_goes_over_the_wire_as_null() {
        let request = SearchRequest::new(&FilterCriteria::default(), &SearchArea::default());

        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["params"]["filter"]["fuelType"], serde_json::Value::Null);
    }

    #[test]
    fn response_body_decodes_results() {
        let body = r#"{
            "results": [
                {"id": "a", "model": "Corsa", "available": true},
                {"id": "b", "model": "Astra", "fuelType": "diesel"}
            ]
        }"#;

        let response: SearchResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[1].fuel_type, "diesel");
    }
}
