//! fleetview
//!
//! TUI client for browsing rentable vehicles from a remote search endpoint.
//!
//! The crate follows a pure core / impure shell split: `model` holds pure
//! domain data, `view_state` the pure derivation pipeline (filter → paginate),
//! `state` the controller owning all mutable application state, while
//! `source` (network/fixture) and `view` (terminal) form the shell.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
pub mod view_state;
