//! Undo/redo history.
//!
//! History is two stacks of previously active states. The machine owns the
//! current state; the stacks only ever hold states it has left.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Undo and redo stacks for a state machine.
///
/// Both stacks are most-recent-last. [`undo`](Self::undo) and
/// [`redo`](Self::redo) swap the popped state into the caller's current
/// state and push the previous current state onto the opposite stack.
///
/// # Example
///
/// ```rust
/// use retrace::core::History;
///
/// let mut current = "b";
/// let mut history = History::new();
/// history.record("a");
///
/// assert!(history.undo(&mut current));
/// assert_eq!(current, "a");
///
/// assert!(history.redo(&mut current));
/// assert_eq!(current, "b");
///
/// assert!(!history.redo(&mut current));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredHistory<S>")]
#[serde(bound(serialize = "S: Serialize", deserialize = "S: Deserialize<'de>"))]
pub struct History<S> {
    undo: VecDeque<S>,
    redo: Vec<S>,
    limit: Option<usize>,
}

/// Wire form of [`History`]; converted so the limit holds after loading.
#[derive(Deserialize)]
struct StoredHistory<S> {
    undo: VecDeque<S>,
    redo: Vec<S>,
    limit: Option<usize>,
}

impl<S> From<StoredHistory<S>> for History<S> {
    fn from(stored: StoredHistory<S>) -> Self {
        let mut history = Self {
            undo: stored.undo,
            redo: stored.redo,
            limit: stored.limit,
        };
        history.trim();
        history
    }
}

impl<S> Default for History<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> History<S> {
    /// Create a new empty, unbounded history.
    pub fn new() -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            limit: None,
        }
    }

    /// Create a history that keeps at most `limit` undo entries.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::new()
        }
    }

    /// Maximum number of undo entries kept, if bounded.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Record the state being left by a new change and discard redo.
    pub fn record(&mut self, previous: S) {
        self.redo.clear();
        self.push_undo(previous);
    }

    /// Record the state being left without touching redo.
    pub fn record_keeping_redo(&mut self, previous: S) {
        self.push_undo(previous);
    }

    /// Step back one entry.
    ///
    /// Returns `false` and leaves everything untouched when there is nothing
    /// to undo.
    pub fn undo(&mut self, current: &mut S) -> bool {
        let Some(previous) = self.undo.pop_back() else {
            return false;
        };
        let undone = std::mem::replace(current, previous);
        self.redo.push(undone);
        true
    }

    /// Step forward one entry.
    ///
    /// Returns `false` and leaves everything untouched when there is nothing
    /// to redo.
    pub fn redo(&mut self, current: &mut S) -> bool {
        let Some(next) = self.redo.pop() else {
            return false;
        };
        let previous = std::mem::replace(current, next);
        self.push_undo(previous);
        true
    }

    /// Empty both stacks.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    /// Whether there is an entry to undo.
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Whether there is an entry to redo.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of entries on the undo stack.
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// Number of entries on the redo stack.
    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// States reachable by undo, oldest first.
    pub fn undo_states(&self) -> impl Iterator<Item = &S> {
        self.undo.iter()
    }

    /// States reachable by redo, oldest first.
    pub fn redo_states(&self) -> impl Iterator<Item = &S> {
        self.redo.iter()
    }

    fn push_undo(&mut self, state: S) {
        self.undo.push_back(state);
        self.trim();
    }

    fn trim(&mut self) {
        if let Some(limit) = self.limit {
            while self.undo.len() > limit {
                self.undo.pop_front();
            }
        }
    }
}
