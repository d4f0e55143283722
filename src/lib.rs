//! Retrace: a finite-state machine with undo/redo
//!
//! Retrace keeps one active state, moves between states according to a
//! configuration-supplied transition table, and remembers where it has been
//! so changes can be undone and redone.
//!
//! # Core Concepts
//!
//! - **Configuration**: the initial state plus an ordered table of states,
//!   each with its own event → destination transitions
//! - **Machine**: `Fsm` validates every change against the configuration
//! - **History**: a linear undo stack and a redo stack; a new change
//!   discards redo
//!
//! # Example
//!
//! ```rust
//! use retrace::{fsm_config, Fsm, FsmError};
//!
//! let config = fsm_config! {
//!     initial: "hungry",
//!     states: {
//!         "hungry" => { "eat" => "full" },
//!         "full" => {},
//!     }
//! }
//! .unwrap();
//!
//! let mut fsm = Fsm::new(config).unwrap();
//! assert_eq!(fsm.states(), vec!["hungry", "full"]);
//! assert_eq!(fsm.states_with_event(&"eat".to_string()), vec!["hungry"]);
//!
//! fsm.trigger(&"eat".to_string()).unwrap();
//! assert_eq!(fsm.state(), "full");
//!
//! let err = fsm.trigger(&"eat".to_string()).unwrap_err();
//! assert!(matches!(err, FsmError::InvalidEvent { .. }));
//!
//! assert!(fsm.undo());
//! assert_eq!(fsm.state(), "hungry");
//! ```

pub mod config;
pub mod core;

// Re-export commonly used types
pub use config::{Config, ConfigBuilder, ConfigError, Options, ResetPolicy};
pub use core::{Fsm, FsmError, History, Identifier};
