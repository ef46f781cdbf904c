//! Error types for the fleetview application.
//!
//! A small `thiserror` hierarchy: [`AppError`] wraps the domain-specific
//! failures so that the binary's main path composes with `?`. The pure
//! derivation functions in `view_state` have no error paths at all; a fetch
//! that fails becomes explicit state rendered by the view, never a stuck
//! loading indicator.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// The search request could not be completed.
    #[error("Search request failed: {0}")]
    Fetch(#[from] FetchError),

    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Terminal or TUI rendering error from the crossterm/ratatui layer.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Failures while fetching the vehicle list.
///
/// Variants carry owned strings rather than source errors so an outcome can
/// cross the fetch worker's channel and live on as display state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never reached the endpoint or the transport failed.
    #[error("Request to {endpoint} failed: {reason}")]
    Transport {
        /// Endpoint the request was sent to.
        endpoint: String,
        /// Transport-level failure description.
        reason: String,
    },

    /// The endpoint answered with a non-success status code.
    #[error("Endpoint {endpoint} returned status {status}")]
    Status {
        /// Endpoint the request was sent to.
        endpoint: String,
        /// HTTP status code of the response.
        status: u16,
    },

    /// The response body was not a valid search response.
    #[error("Could not decode search response: {reason}")]
    Decode {
        /// Decode failure description.
        reason: String,
    },

    /// A fixture file could not be read.
    #[error("Failed to read fixture {path:?}: {reason}")]
    FixtureRead {
        /// Path of the fixture file.
        path: PathBuf,
        /// Underlying I/O failure description.
        reason: String,
    },

    /// A fixture file did not contain a vehicle list.
    #[error("Invalid fixture {path:?}: {reason}")]
    FixtureParse {
        /// Path of the fixture file.
        path: PathBuf,
        /// Parse failure description.
        reason: String,
    },

    /// The fetch worker exited without delivering an outcome.
    #[error("Search worker exited before delivering a result")]
    WorkerExited,
}
