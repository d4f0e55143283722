//! Configuration errors.

use thiserror::Error;

/// Errors that can occur when building, loading, or validating a configuration.
///
/// Identifiers are carried in their `Debug` rendering so the error stays
/// independent of the state and event types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Initial state {initial} is not a declared state")]
    UnknownInitialState { initial: String },

    #[error("State {state} is declared more than once")]
    DuplicateState { state: String },

    #[error("State {state} declares event {event} more than once")]
    DuplicateTransition { state: String, event: String },

    #[error("Transition {state} --{event}--> {target} points at an undeclared state")]
    UnknownTarget {
        state: String,
        event: String,
        target: String,
    },

    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}
