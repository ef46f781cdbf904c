//! Search request execution.
//!
//! This module provides the two gateways the vehicle list can come from:
//! - HTTP search endpoint (the normal mode)
//! - Local JSON fixture file (offline use and demos)
//!
//! One search is issued per session, at startup. It runs on a background
//! thread so the event loop never blocks; the loop polls a [`FetchHandle`]
//! each tick for the outcome.

use crate::model::{FetchError, Vehicle};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use tracing::info;

pub mod fixture;
pub mod http;

pub use fixture::FixtureGateway;
pub use http::{HttpGateway, SearchRequest};

/// Where the vehicle list comes from.
///
/// Sum type enforces exactly one gateway per session.
#[derive(Debug)]
pub enum SearchSource {
    /// Remote search endpoint.
    Http(HttpGateway),
    /// Local JSON file standing in for the endpoint.
    Fixture(FixtureGateway),
}

impl SearchSource {
    /// Execute the search. Blocking; run off the UI thread via
    /// [`FetchHandle::spawn`].
    ///
    /// # Errors
    ///
    /// Returns `FetchError` when the request or the decode fails.
    pub fn search(&self, request: &SearchRequest) -> Result<Vec<Vehicle>, FetchError> {
        match self {
            SearchSource::Http(gateway) => gateway.search(request),
            SearchSource::Fixture(gateway) => gateway.search(request),
        }
    }
}

/// Pick the gateway for this session.
///
/// A fixture path wins over the endpoint; a missing fixture file is reported
/// immediately rather than after the TUI has taken over the terminal.
///
/// # Errors
///
/// Returns `FetchError::FixtureRead` if the fixture file does not exist.
pub fn detect_search_source(
    fixture: Option<PathBuf>,
    endpoint: &str,
) -> Result<SearchSource, FetchError> {
    match fixture {
        Some(path) => {
            if !path.exists() {
                return Err(FetchError::FixtureRead {
                    path,
                    reason: "no such file".to_string(),
                });
            }
            Ok(SearchSource::Fixture(FixtureGateway::new(path)))
        }
        None => Ok(SearchSource::Http(HttpGateway::new(endpoint.to_string()))),
    }
}

/// Handle to the in-flight background search.
///
/// `spawn` moves the source to a worker thread; the event loop calls
/// [`poll`](FetchHandle::poll) each tick until the single outcome arrives,
/// then drops the handle.
#[derive(Debug)]
pub struct FetchHandle {
    rx: mpsc::Receiver<Result<Vec<Vehicle>, FetchError>>,
}

impl FetchHandle {
    /// Start the search on a background thread.
    pub fn spawn(source: SearchSource, request: SearchRequest) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            info!("search worker started");
            let outcome = source.search(&request);
            // A closed receiver means the UI quit first; nothing to do.
            let _ = tx.send(outcome);
        });
        Self { rx }
    }

    /// Non-blocking check for the outcome.
    ///
    /// `None` while the request is still in flight. A worker that died
    /// without reporting becomes an explicit error so the loading state is
    /// always cleared.
    pub fn poll(&self) -> Option<Result<Vec<Vehicle>, FetchError>> {
        match self.rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(mpsc::TryRecvError::Empty) => None,
            Err(mpsc::TryRecvError::Disconnected) => Some(Err(FetchError::WorkerExited)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::{Duration, Instant};

    fn wait_for_outcome(handle: &FetchHandle) -> Result<Vec<Vehicle>, FetchError> {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(outcome) = handle.poll() {
                return outcome;
            }
            assert!(Instant::now() < deadline, "fetch outcome never arrived");
            thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn detect_prefers_fixture_over_endpoint() {
        let temp_dir = std::env::temp_dir();
        let fixture = temp_dir.join("fleetview_detect_fixture.json");
        fs::write(&fixture, r#"{"results": []}"#).unwrap();

        let source = detect_search_source(Some(fixture.clone()), "http://ignored.example");

        let _ = fs::remove_file(&fixture);

        assert!(matches!(source, Ok(SearchSource::Fixture(_))));
    }

    #[test]
    fn detect_reports_missing_fixture_up_front() {
        let missing = std::env::temp_dir().join("fleetview_detect_missing_12345.json");

        let result = detect_search_source(Some(missing.clone()), "http://ignored.example");

        assert!(
            matches!(result, Err(FetchError::FixtureRead { path, .. }) if path == missing),
            "missing fixture should fail fast"
        );
    }

    #[test]
    fn detect_falls_back_to_http_without_fixture() {
        let source = detect_search_source(None, "http://localhost:8000/search").unwrap();
        assert!(matches!(source, SearchSource::Http(_)));
    }

    #[test]
    fn spawned_fetch_delivers_exactly_one_outcome() {
        let temp_dir = std::env::temp_dir();
        let fixture = temp_dir.join("fleetview_spawn_fixture.json");
        fs::write(
            &fixture,
            r#"{"results": [{"id": "veh-1", "model": "Corsa", "available": true}]}"#,
        )
        .unwrap();

        let source = detect_search_source(Some(fixture.clone()), "http://ignored.example").unwrap();
        let handle = FetchHandle::spawn(source, SearchRequest::default());

        let vehicles = wait_for_outcome(&handle).expect("fixture fetch should succeed");

        let _ = fs::remove_file(&fixture);

        assert_eq!(vehicles.len(), 1);
        assert_eq!(vehicles[0].model, "Corsa");
    }

    #[test]
    fn fetch_failure_still_delivers_an_outcome() {
        let temp_dir = std::env::temp_dir();
        let fixture = temp_dir.join("fleetview_spawn_bad_fixture.json");
        fs::write(&fixture, "not json").unwrap();

        let source = detect_search_source(Some(fixture.clone()), "http://ignored.example").unwrap();
        let handle = FetchHandle::spawn(source, SearchRequest::default());

        let outcome = wait_for_outcome(&handle);

        let _ = fs::remove_file(&fixture);

        assert!(matches!(outcome, Err(FetchError::FixtureParse { .. })));
    }
}
