//! Builder for constructing configurations in code.

use crate::config::error::ConfigError;
use crate::config::table::Table;
use crate::config::{Config, StateConfig};
use crate::core::Identifier;

/// Builder for constructing configurations with a fluent API.
///
/// States are enumerated in the order they are first declared, either with
/// [`state`](Self::state) or as the source of a [`transition`](Self::transition).
///
/// # Example
///
/// ```rust
/// use retrace::config::{Config, ConfigBuilder};
///
/// let config: Config<&str, &str> = ConfigBuilder::new()
///     .initial("hungry")
///     .transition("hungry", "eat", "full")
///     .state("full")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.states().collect::<Vec<_>>(), vec![&"hungry", &"full"]);
/// ```
pub struct ConfigBuilder<S, E> {
    initial: Option<S>,
    states: Table<S, StateConfig<S, E>>,
    errors: Vec<ConfigError>,
}

impl<S: Identifier, E: Identifier> ConfigBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: Table::new(),
            errors: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<S>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state. Declaring the same state twice fails the build.
    pub fn state(mut self, state: impl Into<S>) -> Self {
        let state = state.into();
        if self.states.contains_key(&state) {
            self.errors.push(ConfigError::DuplicateState {
                state: format!("{state:?}"),
            });
        } else {
            self.states.insert(state, StateConfig::default());
        }
        self
    }

    /// Add a transition, declaring `from` if it is not declared yet.
    ///
    /// The target is not declared implicitly; it must be declared somewhere
    /// in the builder before `build` is called.
    pub fn transition(
        mut self,
        from: impl Into<S>,
        event: impl Into<E>,
        to: impl Into<S>,
    ) -> Self {
        let from = from.into();
        let event = event.into();

        if !self.states.contains_key(&from) {
            self.states.insert(from.clone(), StateConfig::default());
        }
        if let Some(config) = self.states.get_mut(&from) {
            if config.transitions.contains_key(&event) {
                self.errors.push(ConfigError::DuplicateTransition {
                    state: format!("{from:?}"),
                    event: format!("{event:?}"),
                });
            } else {
                config.transitions.insert(event, to.into());
            }
        }
        self
    }

    /// Build and validate the configuration.
    /// Returns the first error encountered while declaring, if any.
    pub fn build(self) -> Result<Config<S, E>, ConfigError> {
        if let Some(error) = self.errors.into_iter().next() {
            return Err(error);
        }
        let initial = self.initial.ok_or(ConfigError::MissingInitialState)?;

        let config = Config {
            initial,
            states: self.states,
        };
        config.validate()?;

        Ok(config)
    }
}

impl<S: Identifier, E: Identifier> Default for ConfigBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum Light {
        Red,
        Green,
        Yellow,
    }

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum Tick {
        Next,
    }

    #[test]
    fn builder_validates_required_fields() {
        let result = ConfigBuilder::<Light, Tick>::new().state(Light::Red).build();

        assert!(matches!(result, Err(ConfigError::MissingInitialState)));
    }

    #[test]
    fn fluent_api_builds_config() {
        let config = ConfigBuilder::<Light, Tick>::new()
            .initial(Light::Red)
            .transition(Light::Red, Tick::Next, Light::Green)
            .transition(Light::Green, Tick::Next, Light::Yellow)
            .transition(Light::Yellow, Tick::Next, Light::Red)
            .build()
            .unwrap();

        assert_eq!(config.initial(), &Light::Red);
        assert_eq!(
            config.states().collect::<Vec<_>>(),
            vec![&Light::Red, &Light::Green, &Light::Yellow]
        );
        assert_eq!(
            config.target(&Light::Yellow, &Tick::Next),
            Some(&Light::Red)
        );
    }

    #[test]
    fn initial_must_be_declared() {
        let result = ConfigBuilder::<Light, Tick>::new()
            .initial(Light::Yellow)
            .state(Light::Red)
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::UnknownInitialState { .. })
        ));
    }

    #[test]
    fn targets_must_be_declared() {
        let result = ConfigBuilder::<Light, Tick>::new()
            .initial(Light::Red)
            .transition(Light::Red, Tick::Next, Light::Green)
            .build();

        assert!(matches!(result, Err(ConfigError::UnknownTarget { .. })));
    }

    #[test]
    fn duplicate_state_fails_build() {
        let result = ConfigBuilder::<Light, Tick>::new()
            .initial(Light::Red)
            .state(Light::Red)
            .state(Light::Red)
            .build();

        assert!(matches!(result, Err(ConfigError::DuplicateState { .. })));
    }

    #[test]
    fn duplicate_transition_fails_build() {
        let result = ConfigBuilder::<Light, Tick>::new()
            .initial(Light::Red)
            .state(Light::Green)
            .transition(Light::Red, Tick::Next, Light::Green)
            .transition(Light::Red, Tick::Next, Light::Red)
            .build();

        match result {
            Err(ConfigError::DuplicateTransition { state, event }) => {
                assert_eq!(state, "Red");
                assert_eq!(event, "Next");
            }
            other => panic!("Expected DuplicateTransition, got {other:?}"),
        }
    }

    #[test]
    fn transition_after_state_keeps_declaration_order() {
        let config = ConfigBuilder::<Light, Tick>::new()
            .initial(Light::Green)
            .state(Light::Green)
            .state(Light::Red)
            .transition(Light::Red, Tick::Next, Light::Green)
            .build()
            .unwrap();

        assert_eq!(
            config.states().collect::<Vec<_>>(),
            vec![&Light::Green, &Light::Red]
        );
    }

    #[test]
    fn string_identifiers_accept_str_literals() {
        let config: Config = Config::builder()
            .initial("idle")
            .transition("idle", "start", "running")
            .state("running")
            .build()
            .unwrap();

        assert_eq!(config.initial(), "idle");
    }
}
