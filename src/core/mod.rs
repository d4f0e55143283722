//! Core state machine types and logic.
//!
//! This module contains the machine itself:
//! - Identifier bounds for states and events
//! - Undo/redo history
//! - The `Fsm` engine and its errors

mod error;
mod history;
mod machine;
mod state;

pub use error::FsmError;
pub use history::History;
pub use machine::Fsm;
pub use state::Identifier;
