//! Errors raised by state-changing operations.

use thiserror::Error;

/// Errors that can occur when changing state.
///
/// A failed operation never mutates the machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    #[error("State {state} is not declared in the configuration")]
    InvalidState { state: String },

    #[error("No transition for event {event} from state {state}")]
    InvalidEvent { state: String, event: String },
}
