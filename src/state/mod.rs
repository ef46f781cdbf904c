//! Mutable application state and its transitions.

pub mod app_state;
pub mod form;

pub use app_state::{AppState, FetchState};
pub use form::{FormField, FormState};
