//! Behaviour switches for an `Fsm`.

use serde::{Deserialize, Serialize};

/// What `Fsm::reset` does with the redo stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetPolicy {
    /// Reset records an undo entry but leaves redo untouched.
    #[default]
    KeepRedo,

    /// Reset behaves like any other state change and discards redo.
    ClearRedo,
}

/// Options applied to an `Fsm` at construction.
///
/// Every field has a default, so a partial JSON object is accepted.
///
/// # Example
///
/// ```rust
/// use retrace::config::{Options, ResetPolicy};
///
/// let options: Options = serde_json::from_str(r#"{"reset": "clear_redo"}"#).unwrap();
/// assert_eq!(options.reset, ResetPolicy::ClearRedo);
/// assert_eq!(options.history_limit, None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Reset behaviour with respect to redo.
    pub reset: ResetPolicy,

    /// Maximum number of undo entries kept. Oldest entries are dropped first.
    pub history_limit: Option<usize>,
}

impl Options {
    /// Set how `reset` treats redo.
    pub fn reset_policy(mut self, policy: ResetPolicy) -> Self {
        self.reset = policy;
        self
    }

    /// Bound the undo stack to `limit` entries.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }
}
