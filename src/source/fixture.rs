//! Fixture gateway reading the vehicle list from a local JSON file.

use crate::model::{FetchError, Vehicle};
use crate::source::SearchRequest;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::debug;

/// Accepted fixture shapes: the full endpoint payload or a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FixturePayload {
    Wrapped { results: Vec<Vehicle> },
    Bare(Vec<Vehicle>),
}

/// Gateway that decodes the search response from a file instead of the
/// network. The request is accepted for interface parity and ignored; the
/// file content plays the endpoint's role.
#[derive(Debug)]
pub struct FixtureGateway {
    path: PathBuf,
}

impl FixtureGateway {
    /// Create a gateway reading from `path`.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The fixture file this gateway reads.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Read and decode the vehicle list.
    ///
    /// # Errors
    ///
    /// `FixtureRead` when the file cannot be read, `FixtureParse` when it is
    /// not a vehicle list in either accepted shape.
    pub fn search(&self, _request: &SearchRequest) -> Result<Vec<Vehicle>, FetchError> {
        let contents =
            std::fs::read_to_string(&self.path).map_err(|e| FetchError::FixtureRead {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        let payload: FixturePayload =
            serde_json::from_str(&contents).map_err(|e| FetchError::FixtureParse {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        let vehicles = match payload {
            FixturePayload::Wrapped { results } => results,
            FixturePayload::Bare(vehicles) => vehicles,
        };

        debug!(path = ?self.path, results = vehicles.len(), "fixture decoded");
        Ok(vehicles)
    }
}
