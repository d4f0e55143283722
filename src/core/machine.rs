//! The state machine engine.

use crate::config::{Config, ConfigError, Options, ResetPolicy};
use crate::core::error::FsmError;
use crate::core::history::History;
use crate::core::state::Identifier;
use std::sync::Arc;

/// Finite-state machine driven by a [`Config`] transition table.
///
/// The machine tracks one active state and an undo/redo history of the
/// states it has left. Every mutation validates first and only then commits,
/// so a failed call leaves the machine exactly as it was.
///
/// # Example
///
/// ```rust
/// use retrace::{fsm_config, Fsm};
///
/// let config = fsm_config! {
///     initial: "hungry",
///     states: {
///         "hungry" => { "eat" => "full" },
///         "full" => { "play" => "hungry" },
///     }
/// }
/// .unwrap();
///
/// let mut fsm = Fsm::new(config).unwrap();
/// fsm.trigger(&"eat".to_string()).unwrap();
/// assert_eq!(fsm.state(), "full");
///
/// assert!(fsm.undo());
/// assert_eq!(fsm.state(), "hungry");
/// assert!(fsm.redo());
/// assert_eq!(fsm.state(), "full");
/// ```
#[derive(Clone, Debug)]
pub struct Fsm<S = String, E = String> {
    config: Arc<Config<S, E>>,
    active: S,
    history: History<S>,
    options: Options,
}

impl<S: Identifier, E: Identifier> Fsm<S, E> {
    /// Create a machine in the configured initial state with default options.
    ///
    /// The configuration is validated; an undeclared initial state or a
    /// transition into an undeclared state is rejected here.
    pub fn new(config: Config<S, E>) -> Result<Self, ConfigError> {
        Self::shared(Arc::new(config), Options::default())
    }

    /// Create a machine with explicit options.
    pub fn with_options(config: Config<S, E>, options: Options) -> Result<Self, ConfigError> {
        Self::shared(Arc::new(config), options)
    }

    /// Create a machine over a configuration shared with other machines.
    pub fn shared(config: Arc<Config<S, E>>, options: Options) -> Result<Self, ConfigError> {
        config.validate()?;

        let active = config.initial().clone();
        tracing::debug!(initial = ?active, states = config.states().count(), "fsm created");

        let history = match options.history_limit {
            Some(limit) => History::with_limit(limit),
            None => History::new(),
        };

        Ok(Self {
            history,
            config,
            active,
            options,
        })
    }

    /// Current active state.
    pub fn state(&self) -> &S {
        &self.active
    }

    /// Configuration this machine runs against.
    pub fn config(&self) -> &Config<S, E> {
        &self.config
    }

    /// Options given at construction.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Undo and redo stacks.
    pub fn history(&self) -> &History<S> {
        &self.history
    }

    /// Move directly to `state`.
    ///
    /// Records the current state for undo and discards redo. Fails with
    /// [`FsmError::InvalidState`] if `state` is not declared.
    pub fn change_state(&mut self, state: S) -> Result<(), FsmError> {
        if !self.config.contains_state(&state) {
            tracing::debug!(state = ?state, "rejected change to undeclared state");
            return Err(FsmError::InvalidState {
                state: format!("{state:?}"),
            });
        }

        let previous = std::mem::replace(&mut self.active, state);
        tracing::debug!(from = ?previous, to = ?self.active, "state changed");
        self.history.record(previous);
        Ok(())
    }

    /// Take the transition named `event` from the current state.
    ///
    /// Records the current state for undo and discards redo. Fails with
    /// [`FsmError::InvalidEvent`] if the current state has no such transition.
    pub fn trigger(&mut self, event: &E) -> Result<(), FsmError> {
        let Some(target) = self.config.target(&self.active, event) else {
            tracing::debug!(state = ?self.active, event = ?event, "rejected event");
            return Err(FsmError::InvalidEvent {
                state: format!("{:?}", self.active),
                event: format!("{event:?}"),
            });
        };

        let previous = std::mem::replace(&mut self.active, target.clone());
        tracing::debug!(from = ?previous, to = ?self.active, event = ?event, "transition taken");
        self.history.record(previous);
        Ok(())
    }

    /// Return to the initial state.
    ///
    /// Always records an undo entry, even when already at the initial state.
    /// Redo is kept or discarded according to [`Options::reset`].
    pub fn reset(&mut self) {
        let previous = std::mem::replace(&mut self.active, self.config.initial().clone());
        tracing::debug!(from = ?previous, to = ?self.active, policy = ?self.options.reset, "reset");
        match self.options.reset {
            ResetPolicy::KeepRedo => self.history.record_keeping_redo(previous),
            ResetPolicy::ClearRedo => self.history.record(previous),
        }
    }

    /// Every declared state, in declaration order.
    pub fn states(&self) -> Vec<&S> {
        self.config.states().collect()
    }

    /// Declared states that have a transition named `event`, in declaration
    /// order. Unknown events yield an empty list.
    pub fn states_with_event(&self, event: &E) -> Vec<&S> {
        self.config
            .entries()
            .filter(|(_, state)| state.has_event(event))
            .map(|(id, _)| id)
            .collect()
    }

    /// Events available from the current state, in declaration order.
    pub fn events(&self) -> Vec<&E> {
        self.config
            .state(&self.active)
            .map(|state| state.events().collect())
            .unwrap_or_default()
    }

    /// Whether `event` is available from the current state.
    pub fn can_trigger(&self, event: &E) -> bool {
        self.config.target(&self.active, event).is_some()
    }

    /// Go back to the previously active state.
    /// Returns `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo(&mut self.active);
        if undone {
            tracing::debug!(to = ?self.active, "undo");
        } else {
            tracing::trace!("nothing to undo");
        }
        undone
    }

    /// Re-apply the most recently undone state.
    /// Returns `false` if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo(&mut self.active);
        if redone {
            tracing::debug!(to = ?self.active, "redo");
        } else {
            tracing::trace!("nothing to redo");
        }
        redone
    }

    /// Whether `undo` would succeed.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether `redo` would succeed.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Forget all undo and redo entries. The active state is unchanged.
    pub fn clear_history(&mut self) {
        tracing::debug!(
            undo = self.history.undo_depth(),
            redo = self.history.redo_depth(),
            "history cleared"
        );
        self.history.clear();
    }
}
